//! Video encode configuration.
//!
//! Token sets shared by both codecs (scan type, GOP units, adaptive
//! quantization) are defined once here rather than per codec; the wire
//! tokens are identical either way.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Adaptive quantization strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdaptiveQuantization {
    Auto,
    High,
    Higher,
    Low,
    Max,
    Medium,
    Off,
}

impl AdaptiveQuantization {
    pub fn values() -> &'static [Self] {
        &[
            Self::Auto,
            Self::High,
            Self::Higher,
            Self::Low,
            Self::Max,
            Self::Medium,
            Self::Off,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::High => "HIGH",
            Self::Higher => "HIGHER",
            Self::Low => "LOW",
            Self::Max => "MAX",
            Self::Medium => "MEDIUM",
            Self::Off => "OFF",
        }
    }
}

impl fmt::Display for AdaptiveQuantization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdaptiveQuantization {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AUTO" => Ok(Self::Auto),
            "HIGH" => Ok(Self::High),
            "HIGHER" => Ok(Self::Higher),
            "LOW" => Ok(Self::Low),
            "MAX" => Ok(Self::Max),
            "MEDIUM" => Ok(Self::Medium),
            "OFF" => Ok(Self::Off),
            _ => Err(ModelError::invalid_value("AdaptiveQuantization", s)),
        }
    }
}

/// Whether color metadata is carried through to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorMetadata {
    Ignore,
    Insert,
}

impl ColorMetadata {
    pub fn values() -> &'static [Self] {
        &[Self::Ignore, Self::Insert]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "IGNORE",
            Self::Insert => "INSERT",
        }
    }
}

impl fmt::Display for ColorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColorMetadata {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IGNORE" => Ok(Self::Ignore),
            "INSERT" => Ok(Self::Insert),
            _ => Err(ModelError::invalid_value("ColorMetadata", s)),
        }
    }
}

/// Whether the output framerate comes from the source or the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FramerateControl {
    InitializeFromSource,
    Specified,
}

impl FramerateControl {
    pub fn values() -> &'static [Self] {
        &[Self::InitializeFromSource, Self::Specified]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InitializeFromSource => "INITIALIZE_FROM_SOURCE",
            Self::Specified => "SPECIFIED",
        }
    }
}

impl fmt::Display for FramerateControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FramerateControl {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INITIALIZE_FROM_SOURCE" => Ok(Self::InitializeFromSource),
            "SPECIFIED" => Ok(Self::Specified),
            _ => Err(ModelError::invalid_value("FramerateControl", s)),
        }
    }
}

/// Whether the pixel aspect ratio comes from the source or the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParControl {
    InitializeFromSource,
    Specified,
}

impl ParControl {
    pub fn values() -> &'static [Self] {
        &[Self::InitializeFromSource, Self::Specified]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InitializeFromSource => "INITIALIZE_FROM_SOURCE",
            Self::Specified => "SPECIFIED",
        }
    }
}

impl fmt::Display for ParControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParControl {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INITIALIZE_FROM_SOURCE" => Ok(Self::InitializeFromSource),
            "SPECIFIED" => Ok(Self::Specified),
            _ => Err(ModelError::invalid_value("ParControl", s)),
        }
    }
}

/// Units for the GOP size field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GopSizeUnits {
    Frames,
    Seconds,
}

impl GopSizeUnits {
    pub fn values() -> &'static [Self] {
        &[Self::Frames, Self::Seconds]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frames => "FRAMES",
            Self::Seconds => "SECONDS",
        }
    }
}

impl fmt::Display for GopSizeUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GopSizeUnits {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FRAMES" => Ok(Self::Frames),
            "SECONDS" => Ok(Self::Seconds),
            _ => Err(ModelError::invalid_value("GopSizeUnits", s)),
        }
    }
}

/// Interlaced or progressive output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanType {
    Interlaced,
    Progressive,
}

impl ScanType {
    pub fn values() -> &'static [Self] {
        &[Self::Interlaced, Self::Progressive]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interlaced => "INTERLACED",
            Self::Progressive => "PROGRESSIVE",
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScanType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INTERLACED" => Ok(Self::Interlaced),
            "PROGRESSIVE" => Ok(Self::Progressive),
            _ => Err(ModelError::invalid_value("ScanType", s)),
        }
    }
}

/// Scene change detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SceneChangeDetect {
    Disabled,
    Enabled,
}

impl SceneChangeDetect {
    pub fn values() -> &'static [Self] {
        &[Self::Disabled, Self::Enabled]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "DISABLED",
            Self::Enabled => "ENABLED",
        }
    }
}

impl fmt::Display for SceneChangeDetect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SceneChangeDetect {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DISABLED" => Ok(Self::Disabled),
            "ENABLED" => Ok(Self::Enabled),
            _ => Err(ModelError::invalid_value("SceneChangeDetect", s)),
        }
    }
}

/// Where the encoder sources output timecodes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimecodeInsertionBehavior {
    #[serde(rename = "DISABLED")]
    Disabled,
    #[serde(rename = "PIC_TIMING_SEI")]
    PicTimingSei,
}

impl TimecodeInsertionBehavior {
    pub fn values() -> &'static [Self] {
        &[Self::Disabled, Self::PicTimingSei]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "DISABLED",
            Self::PicTimingSei => "PIC_TIMING_SEI",
        }
    }
}

impl fmt::Display for TimecodeInsertionBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimecodeInsertionBehavior {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DISABLED" => Ok(Self::Disabled),
            "PIC_TIMING_SEI" => Ok(Self::PicTimingSei),
            _ => {
                Err(ModelError::invalid_value("TimecodeInsertionBehavior", s))
            }
        }
    }
}

/// H.264 profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum H264Profile {
    #[serde(rename = "BASELINE")]
    Baseline,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "HIGH_10BIT")]
    High10Bit,
    #[serde(rename = "HIGH_422")]
    High422,
    #[serde(rename = "HIGH_422_10BIT")]
    High42210Bit,
    #[serde(rename = "MAIN")]
    Main,
}

impl H264Profile {
    pub fn values() -> &'static [Self] {
        &[
            Self::Baseline,
            Self::High,
            Self::High10Bit,
            Self::High422,
            Self::High42210Bit,
            Self::Main,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Baseline => "BASELINE",
            Self::High => "HIGH",
            Self::High10Bit => "HIGH_10BIT",
            Self::High422 => "HIGH_422",
            Self::High42210Bit => "HIGH_422_10BIT",
            Self::Main => "MAIN",
        }
    }
}

impl fmt::Display for H264Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for H264Profile {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BASELINE" => Ok(Self::Baseline),
            "HIGH" => Ok(Self::High),
            "HIGH_10BIT" => Ok(Self::High10Bit),
            "HIGH_422" => Ok(Self::High422),
            "HIGH_422_10BIT" => Ok(Self::High42210Bit),
            "MAIN" => Ok(Self::Main),
            _ => Err(ModelError::invalid_value("H264Profile", s)),
        }
    }
}

/// H.264 rate control mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum H264RateControlMode {
    Cbr,
    Multiplex,
    Qvbr,
    Vbr,
}

impl H264RateControlMode {
    pub fn values() -> &'static [Self] {
        &[Self::Cbr, Self::Multiplex, Self::Qvbr, Self::Vbr]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cbr => "CBR",
            Self::Multiplex => "MULTIPLEX",
            Self::Qvbr => "QVBR",
            Self::Vbr => "VBR",
        }
    }
}

impl fmt::Display for H264RateControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for H264RateControlMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CBR" => Ok(Self::Cbr),
            "MULTIPLEX" => Ok(Self::Multiplex),
            "QVBR" => Ok(Self::Qvbr),
            "VBR" => Ok(Self::Vbr),
            _ => Err(ModelError::invalid_value("H264RateControlMode", s)),
        }
    }
}

/// H.265 profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum H265Profile {
    #[serde(rename = "MAIN")]
    Main,
    #[serde(rename = "MAIN_10BIT")]
    Main10Bit,
}

impl H265Profile {
    pub fn values() -> &'static [Self] {
        &[Self::Main, Self::Main10Bit]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "MAIN",
            Self::Main10Bit => "MAIN_10BIT",
        }
    }
}

impl fmt::Display for H265Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for H265Profile {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAIN" => Ok(Self::Main),
            "MAIN_10BIT" => Ok(Self::Main10Bit),
            _ => Err(ModelError::invalid_value("H265Profile", s)),
        }
    }
}

/// H.265 rate control mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum H265RateControlMode {
    Cbr,
    Multiplex,
    Qvbr,
}

impl H265RateControlMode {
    pub fn values() -> &'static [Self] {
        &[Self::Cbr, Self::Multiplex, Self::Qvbr]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cbr => "CBR",
            Self::Multiplex => "MULTIPLEX",
            Self::Qvbr => "QVBR",
        }
    }
}

impl fmt::Display for H265RateControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for H265RateControlMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CBR" => Ok(Self::Cbr),
            "MULTIPLEX" => Ok(Self::Multiplex),
            "QVBR" => Ok(Self::Qvbr),
            _ => Err(ModelError::invalid_value("H265RateControlMode", s)),
        }
    }
}

/// H.265 tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum H265Tier {
    High,
    Main,
}

impl H265Tier {
    pub fn values() -> &'static [Self] {
        &[Self::High, Self::Main]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Main => "MAIN",
        }
    }
}

impl fmt::Display for H265Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for H265Tier {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH" => Ok(Self::High),
            "MAIN" => Ok(Self::Main),
            _ => Err(ModelError::invalid_value("H265Tier", s)),
        }
    }
}

/// How video is fitted when output dimensions differ from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScalingBehavior {
    Default,
    StretchToOutput,
}

impl ScalingBehavior {
    pub fn values() -> &'static [Self] {
        &[Self::Default, Self::StretchToOutput]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::StretchToOutput => "STRETCH_TO_OUTPUT",
        }
    }
}

impl fmt::Display for ScalingBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScalingBehavior {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEFAULT" => Ok(Self::Default),
            "STRETCH_TO_OUTPUT" => Ok(Self::StretchToOutput),
            _ => Err(ModelError::invalid_value("ScalingBehavior", s)),
        }
    }
}

/// Response to AFD (active format description) codes in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RespondToAfd {
    None,
    Passthrough,
    Respond,
}

impl RespondToAfd {
    pub fn values() -> &'static [Self] {
        &[Self::None, Self::Passthrough, Self::Respond]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Passthrough => "PASSTHROUGH",
            Self::Respond => "RESPOND",
        }
    }
}

impl fmt::Display for RespondToAfd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RespondToAfd {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Self::None),
            "PASSTHROUGH" => Ok(Self::Passthrough),
            "RESPOND" => Ok(Self::Respond),
            _ => Err(ModelError::invalid_value("RespondToAfd", s)),
        }
    }
}

/// One encoded video rendition inside
/// [`EncoderSettings`](crate::encoder::EncoderSettings).
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec_settings: Option<VideoCodecSettings>,
    /// Output height in pixels. Leave absent to follow the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    /// Name of this description, unique within the channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respond_to_afd: Option<RespondToAfd>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_behavior: Option<ScalingBehavior>,
    /// Sharpening strength. Range 0 to 100; 50 is a safe default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<i32>,
    /// Output width in pixels. Leave absent to follow the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
}

impl fmt::Debug for VideoDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("VideoDescription");
        if let Some(v) = &self.codec_settings {
            s.field("codec_settings", v);
        }
        if let Some(v) = &self.height {
            s.field("height", v);
        }
        if let Some(v) = &self.name {
            s.field("name", v);
        }
        if let Some(v) = &self.respond_to_afd {
            s.field("respond_to_afd", v);
        }
        if let Some(v) = &self.scaling_behavior {
            s.field("scaling_behavior", v);
        }
        if let Some(v) = &self.sharpness {
            s.field("sharpness", v);
        }
        if let Some(v) = &self.width {
            s.field("width", v);
        }
        s.finish()
    }
}

/// Selects exactly one video codec; the service rejects settings with
/// more than one populated.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoCodecSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h264_settings: Option<H264Settings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h265_settings: Option<H265Settings>,
}

impl fmt::Debug for VideoCodecSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("VideoCodecSettings");
        if let Some(v) = &self.h264_settings {
            s.field("h264_settings", v);
        }
        if let Some(v) = &self.h265_settings {
            s.field("h265_settings", v);
        }
        s.finish()
    }
}

/// H.264 encode parameters.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct H264Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive_quantization: Option<AdaptiveQuantization>,
    /// Average bitrate in bits/second. Minimum 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    /// Decoder buffer size in bits. Minimum 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buf_size: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_metadata: Option<ColorMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framerate_control: Option<FramerateControl>,
    /// Framerate denominator. Minimum 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framerate_denominator: Option<i32>,
    /// Framerate numerator. Minimum 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framerate_numerator: Option<i32>,
    /// Frequency of closed GOPs. Range 0 to 2147483647.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gop_closed_cadence: Option<i32>,
    /// Number of B-frames between reference frames. Range 0 to 7.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gop_num_b_frames: Option<i32>,
    /// GOP size in the units given by `gop_size_units`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gop_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gop_size_units: Option<GopSizeUnits>,
    /// Maximum bitrate in bits/second for QVBR. Minimum 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bitrate: Option<i32>,
    /// Minimum interval between I-frames in seconds. Range 0 to 30.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_i_interval: Option<i32>,
    /// Number of reference frames. Range 1 to 6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_ref_frames: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par_control: Option<ParControl>,
    /// Pixel aspect ratio denominator. Minimum 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par_denominator: Option<i32>,
    /// Pixel aspect ratio numerator. Minimum 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par_numerator: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<H264Profile>,
    /// Quality level for QVBR. Range 1 to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qvbr_quality_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_control_mode: Option<H264RateControlMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_type: Option<ScanType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_change_detect: Option<SceneChangeDetect>,
    /// Number of slices per picture. Range 1 to 32.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slices: Option<i32>,
    /// Softening strength. Range 0 (none) to 128.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub softness: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timecode_insertion: Option<TimecodeInsertionBehavior>,
}

impl fmt::Debug for H264Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("H264Settings");
        if let Some(v) = &self.adaptive_quantization {
            s.field("adaptive_quantization", v);
        }
        if let Some(v) = &self.bitrate {
            s.field("bitrate", v);
        }
        if let Some(v) = &self.buf_size {
            s.field("buf_size", v);
        }
        if let Some(v) = &self.color_metadata {
            s.field("color_metadata", v);
        }
        if let Some(v) = &self.framerate_control {
            s.field("framerate_control", v);
        }
        if let Some(v) = &self.framerate_denominator {
            s.field("framerate_denominator", v);
        }
        if let Some(v) = &self.framerate_numerator {
            s.field("framerate_numerator", v);
        }
        if let Some(v) = &self.gop_closed_cadence {
            s.field("gop_closed_cadence", v);
        }
        if let Some(v) = &self.gop_num_b_frames {
            s.field("gop_num_b_frames", v);
        }
        if let Some(v) = &self.gop_size {
            s.field("gop_size", v);
        }
        if let Some(v) = &self.gop_size_units {
            s.field("gop_size_units", v);
        }
        if let Some(v) = &self.max_bitrate {
            s.field("max_bitrate", v);
        }
        if let Some(v) = &self.min_i_interval {
            s.field("min_i_interval", v);
        }
        if let Some(v) = &self.num_ref_frames {
            s.field("num_ref_frames", v);
        }
        if let Some(v) = &self.par_control {
            s.field("par_control", v);
        }
        if let Some(v) = &self.par_denominator {
            s.field("par_denominator", v);
        }
        if let Some(v) = &self.par_numerator {
            s.field("par_numerator", v);
        }
        if let Some(v) = &self.profile {
            s.field("profile", v);
        }
        if let Some(v) = &self.qvbr_quality_level {
            s.field("qvbr_quality_level", v);
        }
        if let Some(v) = &self.rate_control_mode {
            s.field("rate_control_mode", v);
        }
        if let Some(v) = &self.scan_type {
            s.field("scan_type", v);
        }
        if let Some(v) = &self.scene_change_detect {
            s.field("scene_change_detect", v);
        }
        if let Some(v) = &self.slices {
            s.field("slices", v);
        }
        if let Some(v) = &self.softness {
            s.field("softness", v);
        }
        if let Some(v) = &self.timecode_insertion {
            s.field("timecode_insertion", v);
        }
        s.finish()
    }
}

/// H.265 encode parameters.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct H265Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive_quantization: Option<AdaptiveQuantization>,
    /// Average bitrate in bits/second. Minimum 100000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    /// Decoder buffer size in bits. Minimum 100000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buf_size: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_metadata: Option<ColorMetadata>,
    /// Framerate denominator. Minimum 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framerate_denominator: Option<i32>,
    /// Framerate numerator. Minimum 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framerate_numerator: Option<i32>,
    /// Frequency of closed GOPs. Range 0 to 2147483647.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gop_closed_cadence: Option<i32>,
    /// GOP size in the units given by `gop_size_units`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gop_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gop_size_units: Option<GopSizeUnits>,
    /// Maximum bitrate in bits/second for QVBR. Minimum 100000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bitrate: Option<i32>,
    /// Minimum interval between I-frames in seconds. Range 0 to 30.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_i_interval: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<H265Profile>,
    /// Quality level for QVBR. Range 1 to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qvbr_quality_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_control_mode: Option<H265RateControlMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_type: Option<ScanType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_change_detect: Option<SceneChangeDetect>,
    /// Number of slices per picture. Range 1 to 16.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slices: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<H265Tier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timecode_insertion: Option<TimecodeInsertionBehavior>,
}

impl fmt::Debug for H265Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("H265Settings");
        if let Some(v) = &self.adaptive_quantization {
            s.field("adaptive_quantization", v);
        }
        if let Some(v) = &self.bitrate {
            s.field("bitrate", v);
        }
        if let Some(v) = &self.buf_size {
            s.field("buf_size", v);
        }
        if let Some(v) = &self.color_metadata {
            s.field("color_metadata", v);
        }
        if let Some(v) = &self.framerate_denominator {
            s.field("framerate_denominator", v);
        }
        if let Some(v) = &self.framerate_numerator {
            s.field("framerate_numerator", v);
        }
        if let Some(v) = &self.gop_closed_cadence {
            s.field("gop_closed_cadence", v);
        }
        if let Some(v) = &self.gop_size {
            s.field("gop_size", v);
        }
        if let Some(v) = &self.gop_size_units {
            s.field("gop_size_units", v);
        }
        if let Some(v) = &self.max_bitrate {
            s.field("max_bitrate", v);
        }
        if let Some(v) = &self.min_i_interval {
            s.field("min_i_interval", v);
        }
        if let Some(v) = &self.profile {
            s.field("profile", v);
        }
        if let Some(v) = &self.qvbr_quality_level {
            s.field("qvbr_quality_level", v);
        }
        if let Some(v) = &self.rate_control_mode {
            s.field("rate_control_mode", v);
        }
        if let Some(v) = &self.scan_type {
            s.field("scan_type", v);
        }
        if let Some(v) = &self.scene_change_detect {
            s.field("scene_change_detect", v);
        }
        if let Some(v) = &self.slices {
            s.field("slices", v);
        }
        if let Some(v) = &self.tier {
            s.field("tier", v);
        }
        if let Some(v) = &self.timecode_insertion {
            s.field("timecode_insertion", v);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_h264_settings_has_every_field_absent() {
        let settings = H264Settings::default();
        assert_eq!(settings, H264Settings::default());
        assert!(settings.bitrate.is_none());
        assert!(settings.rate_control_mode.is_none());
        assert_eq!(format!("{settings:?}"), "H264Settings");
    }

    #[test]
    fn profile_tokens_are_exact() {
        assert_eq!(
            "HIGH_422_10BIT".parse::<H264Profile>().unwrap(),
            H264Profile::High42210Bit
        );
        assert!("HIGH_422_10bit".parse::<H264Profile>().is_err());
    }
}
