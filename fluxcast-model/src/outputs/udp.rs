//! UDP/TS output group configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::OutputLocationRef;
use crate::error::ModelError;

/// What the UDP output emits while its input is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputLossActionForUdpOut {
    DropProgram,
    DropTs,
    EmitProgram,
}

impl InputLossActionForUdpOut {
    pub fn values() -> &'static [Self] {
        &[Self::DropProgram, Self::DropTs, Self::EmitProgram]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DropProgram => "DROP_PROGRAM",
            Self::DropTs => "DROP_TS",
            Self::EmitProgram => "EMIT_PROGRAM",
        }
    }
}

impl fmt::Display for InputLossActionForUdpOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputLossActionForUdpOut {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DROP_PROGRAM" => Ok(Self::DropProgram),
            "DROP_TS" => Ok(Self::DropTs),
            "EMIT_PROGRAM" => Ok(Self::EmitProgram),
            _ => {
                Err(ModelError::invalid_value("InputLossActionForUdpOut", s))
            }
        }
    }
}

/// ID3 frame emitted at the timed-metadata cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UdpTimedMetadataId3Frame {
    None,
    Priv,
    Tdrl,
}

impl UdpTimedMetadataId3Frame {
    pub fn values() -> &'static [Self] {
        &[Self::None, Self::Priv, Self::Tdrl]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Priv => "PRIV",
            Self::Tdrl => "TDRL",
        }
    }
}

impl fmt::Display for UdpTimedMetadataId3Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UdpTimedMetadataId3Frame {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Self::None),
            "PRIV" => Ok(Self::Priv),
            "TDRL" => Ok(Self::Tdrl),
            _ => {
                Err(ModelError::invalid_value("UdpTimedMetadataId3Frame", s))
            }
        }
    }
}

/// Transport stream buffer model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum M2tsBufferModel {
    Multiplex,
    None,
}

impl M2tsBufferModel {
    pub fn values() -> &'static [Self] {
        &[Self::Multiplex, Self::None]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Multiplex => "MULTIPLEX",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for M2tsBufferModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for M2tsBufferModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MULTIPLEX" => Ok(Self::Multiplex),
            "NONE" => Ok(Self::None),
            _ => Err(ModelError::invalid_value("M2tsBufferModel", s)),
        }
    }
}

/// Closed-caption descriptor injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum M2tsCcDescriptor {
    Disabled,
    Enabled,
}

impl M2tsCcDescriptor {
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

impl fmt::Display for M2tsCcDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for M2tsCcDescriptor {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DISABLED" => Ok(Self::Disabled),
            "ENABLED" => Ok(Self::Enabled),
            _ => Err(ModelError::invalid_value("M2tsCcDescriptor", s)),
        }
    }
}

/// Group-level UDP configuration.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UdpGroupSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_loss_action: Option<InputLossActionForUdpOut>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timed_metadata_id3_frame: Option<UdpTimedMetadataId3Frame>,
    /// Seconds between ID3 frames. Range 0 to 10000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timed_metadata_id3_period: Option<i32>,
}

impl fmt::Debug for UdpGroupSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("UdpGroupSettings");
        if let Some(v) = &self.input_loss_action {
            s.field("input_loss_action", v);
        }
        if let Some(v) = &self.timed_metadata_id3_frame {
            s.field("timed_metadata_id3_frame", v);
        }
        if let Some(v) = &self.timed_metadata_id3_period {
            s.field("timed_metadata_id3_period", v);
        }
        s.finish()
    }
}

/// Per-output UDP settings.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UdpOutputSettings {
    /// Jitter buffer in milliseconds. Range 0 to 10000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_msec: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_settings: Option<UdpContainerSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<OutputLocationRef>,
}

impl fmt::Debug for UdpOutputSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("UdpOutputSettings");
        if let Some(v) = &self.buffer_msec {
            s.field("buffer_msec", v);
        }
        if let Some(v) = &self.container_settings {
            s.field("container_settings", v);
        }
        if let Some(v) = &self.destination {
            s.field("destination", v);
        }
        s.finish()
    }
}

/// Container wrapper for UDP outputs.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UdpContainerSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m2ts_settings: Option<M2tsSettings>,
}

impl fmt::Debug for UdpContainerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("UdpContainerSettings");
        if let Some(v) = &self.m2ts_settings {
            s.field("m2ts_settings", v);
        }
        s.finish()
    }
}

/// MPEG-2 transport stream parameters.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct M2tsSettings {
    /// Audio frames per PES packet. Minimum 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_frames_per_pes: Option<i32>,
    /// Comma-separated PID list or ranges for audio streams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_pids: Option<String>,
    /// Fixed mux rate in bits/second; 0 selects variable. Range 0 to
    /// 100000000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_model: Option<M2tsBufferModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_descriptor: Option<M2tsCcDescriptor>,
    /// PAT repetition interval in milliseconds. Range 0 to 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pat_interval: Option<i32>,
    /// PCR period in milliseconds. Range 0 to 500.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pcr_period: Option<i32>,
    /// PMT repetition interval in milliseconds. Range 0 to 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmt_interval: Option<i32>,
    /// Program number in the PAT. Range 0 to 65535.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_num: Option<i32>,
    /// PID for SCTE-35 messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scte35_pid: Option<String>,
    /// Transport stream ID. Range 0 to 65535.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_stream_id: Option<i32>,
    /// PID for the video stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_pid: Option<String>,
}

impl fmt::Debug for M2tsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("M2tsSettings");
        if let Some(v) = &self.audio_frames_per_pes {
            s.field("audio_frames_per_pes", v);
        }
        if let Some(v) = &self.audio_pids {
            s.field("audio_pids", v);
        }
        if let Some(v) = &self.bitrate {
            s.field("bitrate", v);
        }
        if let Some(v) = &self.buffer_model {
            s.field("buffer_model", v);
        }
        if let Some(v) = &self.cc_descriptor {
            s.field("cc_descriptor", v);
        }
        if let Some(v) = &self.pat_interval {
            s.field("pat_interval", v);
        }
        if let Some(v) = &self.pcr_period {
            s.field("pcr_period", v);
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
        if let Some(v) = &self.transport_stream_id {
            s.field("transport_stream_id", v);
        }
        if let Some(v) = &self.video_pid {
            s.field("video_pid", v);
        }
        s.finish()
    }
}
