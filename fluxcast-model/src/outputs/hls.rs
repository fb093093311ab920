//! HLS output group configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::OutputLocationRef;
use crate::error::ModelError;

/// Live playlist or a growing VOD asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HlsMode {
    Live,
    Vod,
}

impl HlsMode {
    pub fn values() -> &'static [Self] {
        &[Self::Live, Self::Vod]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::Vod => "VOD",
        }
    }
}

impl fmt::Display for HlsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HlsMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIVE" => Ok(Self::Live),
            "VOD" => Ok(Self::Vod),
            _ => Err(ModelError::invalid_value("HlsMode", s)),
        }
    }
}

/// Where segment boundaries come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HlsSegmentationMode {
    UseInputSegmentation,
    UseSegmentDuration,
}

impl HlsSegmentationMode {
    pub fn values() -> &'static [Self] {
        &[Self::UseInputSegmentation, Self::UseSegmentDuration]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UseInputSegmentation => "USE_INPUT_SEGMENTATION",
            Self::UseSegmentDuration => "USE_SEGMENT_DURATION",
        }
    }
}

impl fmt::Display for HlsSegmentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HlsSegmentationMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USE_INPUT_SEGMENTATION" => Ok(Self::UseInputSegmentation),
            "USE_SEGMENT_DURATION" => Ok(Self::UseSegmentDuration),
            _ => Err(ModelError::invalid_value("HlsSegmentationMode", s)),
        }
    }
}

/// Segment placement on the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HlsDirectoryStructure {
    SingleDirectory,
    SubdirectoryPerStream,
}

impl HlsDirectoryStructure {
    pub fn values() -> &'static [Self] {
        &[Self::SingleDirectory, Self::SubdirectoryPerStream]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleDirectory => "SINGLE_DIRECTORY",
            Self::SubdirectoryPerStream => "SUBDIRECTORY_PER_STREAM",
        }
    }
}

impl fmt::Display for HlsDirectoryStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HlsDirectoryStructure {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SINGLE_DIRECTORY" => Ok(Self::SingleDirectory),
            "SUBDIRECTORY_PER_STREAM" => Ok(Self::SubdirectoryPerStream),
            _ => Err(ModelError::invalid_value("HlsDirectoryStructure", s)),
        }
    }
}

/// Manifest compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HlsManifestCompression {
    Gzip,
    None,
}

impl HlsManifestCompression {
    pub fn values() -> &'static [Self] {
        &[Self::Gzip, Self::None]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gzip => "GZIP",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for HlsManifestCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HlsManifestCompression {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GZIP" => Ok(Self::Gzip),
            "NONE" => Ok(Self::None),
            _ => Err(ModelError::invalid_value("HlsManifestCompression", s)),
        }
    }
}

/// RFC used for codec strings in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HlsCodecSpecification {
    #[serde(rename = "RFC_4281")]
    Rfc4281,
    #[serde(rename = "RFC_6381")]
    Rfc6381,
}

impl HlsCodecSpecification {
    pub fn values() -> &'static [Self] {
        &[Self::Rfc4281, Self::Rfc6381]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rfc4281 => "RFC_4281",
            Self::Rfc6381 => "RFC_6381",
        }
    }
}

impl fmt::Display for HlsCodecSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HlsCodecSpecification {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RFC_4281" => Ok(Self::Rfc4281),
            "RFC_6381" => Ok(Self::Rfc6381),
            _ => Err(ModelError::invalid_value("HlsCodecSpecification", s)),
        }
    }
}

/// Whether RESOLUTION appears in EXT-X-STREAM-INF tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HlsStreamInfResolution {
    Exclude,
    Include,
}

impl HlsStreamInfResolution {
    pub fn values() -> &'static [Self] {
        &[Self::Exclude, Self::Include]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exclude => "EXCLUDE",
            Self::Include => "INCLUDE",
        }
    }
}

impl fmt::Display for HlsStreamInfResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HlsStreamInfResolution {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EXCLUDE" => Ok(Self::Exclude),
            "INCLUDE" => Ok(Self::Include),
            _ => Err(ModelError::invalid_value("HlsStreamInfResolution", s)),
        }
    }
}

/// Group-level HLS packaging configuration.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HlsGroupSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec_specification: Option<HlsCodecSpecification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<OutputLocationRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_structure: Option<HlsDirectoryStructure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hls_cdn_settings: Option<HlsCdnSettings>,
    /// Number of segments kept in the live manifest. Minimum 3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_n_segments: Option<i32>,
    /// Number of segments retained on disk. Minimum 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_segments: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_compression: Option<HlsManifestCompression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<HlsMode>,
    /// Target segment length in seconds. Minimum 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_length: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segmentation_mode: Option<HlsSegmentationMode>,
    /// Segments written per subdirectory before rolling to a new one.
    /// Minimum 1. Only honored with `SUBDIRECTORY_PER_STREAM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments_per_subdirectory: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_inf_resolution: Option<HlsStreamInfResolution>,
}

impl fmt::Debug for HlsGroupSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("HlsGroupSettings");
        if let Some(v) = &self.codec_specification {
            s.field("codec_specification", v);
        }
        if let Some(v) = &self.destination {
            s.field("destination", v);
        }
        if let Some(v) = &self.directory_structure {
            s.field("directory_structure", v);
        }
        if let Some(v) = &self.hls_cdn_settings {
            s.field("hls_cdn_settings", v);
        }
        if let Some(v) = &self.index_n_segments {
            s.field("index_n_segments", v);
        }
        if let Some(v) = &self.keep_segments {
            s.field("keep_segments", v);
        }
        if let Some(v) = &self.manifest_compression {
            s.field("manifest_compression", v);
        }
        if let Some(v) = &self.mode {
            s.field("mode", v);
        }
        if let Some(v) = &self.segment_length {
            s.field("segment_length", v);
        }
        if let Some(v) = &self.segmentation_mode {
            s.field("segmentation_mode", v);
        }
        if let Some(v) = &self.segments_per_subdirectory {
            s.field("segments_per_subdirectory", v);
        }
        if let Some(v) = &self.stream_inf_resolution {
            s.field("stream_inf_resolution", v);
        }
        s.finish()
    }
}

/// CDN connection settings; exactly one transport should be populated.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HlsCdnSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hls_basic_put_settings: Option<HlsBasicPutSettings>,
}

impl fmt::Debug for HlsCdnSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("HlsCdnSettings");
        if let Some(v) = &self.hls_basic_put_settings {
            s.field("hls_basic_put_settings", v);
        }
        s.finish()
    }
}

/// Plain HTTP PUT delivery to the CDN.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HlsBasicPutSettings {
    /// Seconds between connection retries. Minimum 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_retry_interval: Option<i32>,
    /// Seconds of content buffered on disk. Range 0 to 600.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filecache_duration: Option<i32>,
    /// Retries before the output is failed. Minimum 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_retries: Option<i32>,
    /// Seconds before a restart is attempted. Minimum 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_delay: Option<i32>,
}

impl fmt::Debug for HlsBasicPutSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("HlsBasicPutSettings");
        if let Some(v) = &self.connection_retry_interval {
            s.field("connection_retry_interval", v);
        }
        if let Some(v) = &self.filecache_duration {
            s.field("filecache_duration", v);
        }
        if let Some(v) = &self.num_retries {
            s.field("num_retries", v);
        }
        if let Some(v) = &self.restart_delay {
            s.field("restart_delay", v);
        }
        s.finish()
    }
}

/// Per-output HLS settings.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HlsOutputSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m3u8_settings: Option<M3u8Settings>,
    /// Appended to the stream name to form segment file names. Length 1
    /// or more.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_modifier: Option<String>,
    /// Appended to segment file names only, after `name_modifier`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_modifier: Option<String>,
}

impl fmt::Debug for HlsOutputSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("HlsOutputSettings");
        if let Some(v) = &self.m3u8_settings {
            s.field("m3u8_settings", v);
        }
        if let Some(v) = &self.name_modifier {
            s.field("name_modifier", v);
        }
        if let Some(v) = &self.segment_modifier {
            s.field("segment_modifier", v);
        }
        s.finish()
    }
}

/// Transport stream parameters for HLS segments.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct M3u8Settings {
    /// Audio frames per PES packet. Minimum 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_frames_per_pes: Option<i32>,
    /// Comma-separated PID list or ranges for audio streams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_pids: Option<String>,
    /// PAT repetition interval in milliseconds. Range 0 to 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pat_interval: Option<i32>,
    /// PMT repetition interval in milliseconds. Range 0 to 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmt_interval: Option<i32>,
    /// Program number in the PAT. Range 0 to 65535.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_num: Option<i32>,
    /// PID for SCTE-35 messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scte35_pid: Option<String>,
    /// PID for the video stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_pid: Option<String>,
}

impl fmt::Debug for M3u8Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("M3u8Settings");
        if let Some(v) = &self.audio_frames_per_pes {
            s.field("audio_frames_per_pes", v);
        }
        if let Some(v) = &self.audio_pids {
            s.field("audio_pids", v);
        }
        if let Some(v) = &self.pat_interval {
            s.field("pat_interval", v);
        }
        if let Some(v) = &self.pmt_interval {
            s.field("pmt_interval", v);
        }
        if let Some(v) = &self.program_num {
            s.field("program_num", v);
        }
        if let Some(v) = &self.scte35_pid {
            s.field("scte35_pid", v);
        }
        if let Some(v) = &self.video_pid {
            s.field("video_pid", v);
        }
        s.finish()
    }
}
