//! Top-level encoder configuration: the tree that ties audio and video
//! descriptions to output groups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::audio::AudioDescription;
use crate::error::ModelError;
use crate::outputs::OutputGroup;
use crate::video::VideoDescription;

/// Where output timecodes are sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimecodeSource {
    Embedded,
    Systemclock,
    Zerobased,
}

impl TimecodeSource {
    pub fn values() -> &'static [Self] {
        &[Self::Embedded, Self::Systemclock, Self::Zerobased]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Embedded => "EMBEDDED",
            Self::Systemclock => "SYSTEMCLOCK",
            Self::Zerobased => "ZEROBASED",
        }
    }
}

impl fmt::Display for TimecodeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimecodeSource {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMBEDDED" => Ok(Self::Embedded),
            "SYSTEMCLOCK" => Ok(Self::Systemclock),
            "ZEROBASED" => Ok(Self::Zerobased),
            _ => Err(ModelError::invalid_value("TimecodeSource", s)),
        }
    }
}

/// What the channel does when the last attached input ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputEndAction {
    None,
    SwitchAndLoopInputs,
}

impl InputEndAction {
    pub fn values() -> &'static [Self] {
        &[Self::None, Self::SwitchAndLoopInputs]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::SwitchAndLoopInputs => "SWITCH_AND_LOOP_INPUTS",
        }
    }
}

impl fmt::Display for InputEndAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputEndAction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Self::None),
            "SWITCH_AND_LOOP_INPUTS" => Ok(Self::SwitchAndLoopInputs),
            _ => Err(ModelError::invalid_value("InputEndAction", s)),
        }
    }
}

/// Clock driving output timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputTimingSource {
    InputClock,
    SystemClock,
}

impl OutputTimingSource {
    pub fn values() -> &'static [Self] {
        &[Self::InputClock, Self::SystemClock]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InputClock => "INPUT_CLOCK",
            Self::SystemClock => "SYSTEM_CLOCK",
        }
    }
}

impl fmt::Display for OutputTimingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputTimingSource {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INPUT_CLOCK" => Ok(Self::InputClock),
            "SYSTEM_CLOCK" => Ok(Self::SystemClock),
            _ => Err(ModelError::invalid_value("OutputTimingSource", s)),
        }
    }
}

/// How the two pipelines of a standard channel stay aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputLockingMode {
    EpochLocking,
    PipelineLocking,
}

impl OutputLockingMode {
    pub fn values() -> &'static [Self] {
        &[Self::EpochLocking, Self::PipelineLocking]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EpochLocking => "EPOCH_LOCKING",
            Self::PipelineLocking => "PIPELINE_LOCKING",
        }
    }
}

impl fmt::Display for OutputLockingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputLockingMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EPOCH_LOCKING" => Ok(Self::EpochLocking),
            "PIPELINE_LOCKING" => Ok(Self::PipelineLocking),
            _ => Err(ModelError::invalid_value("OutputLockingMode", s)),
        }
    }
}

/// Fill strategy while the input signal is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputLossImageType {
    Color,
    Slate,
}

impl InputLossImageType {
    pub fn values() -> &'static [Self] {
        &[Self::Color, Self::Slate]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "COLOR",
            Self::Slate => "SLATE",
        }
    }
}

impl fmt::Display for InputLossImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputLossImageType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COLOR" => Ok(Self::Color),
            "SLATE" => Ok(Self::Slate),
            _ => Err(ModelError::invalid_value("InputLossImageType", s)),
        }
    }
}

/// Root of the encode configuration tree for a channel.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EncoderSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_descriptions: Option<Vec<AudioDescription>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_configuration: Option<GlobalConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_groups: Option<Vec<OutputGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timecode_config: Option<TimecodeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_descriptions: Option<Vec<VideoDescription>>,
}

impl EncoderSettings {
    /// Append one audio description, creating the backing list on first
    /// use.
    pub fn add_audio_description(
        &mut self,
        description: AudioDescription,
    ) -> &mut Self {
        self.audio_descriptions
            .get_or_insert_with(Vec::new)
            .push(description);
        self
    }

    /// Append one output group, creating the backing list on first use.
    pub fn add_output_group(&mut self, group: OutputGroup) -> &mut Self {
        self.output_groups.get_or_insert_with(Vec::new).push(group);
        self
    }

    /// Append one video description, creating the backing list on first
    /// use.
    pub fn add_video_description(
        &mut self,
        description: VideoDescription,
    ) -> &mut Self {
        self.video_descriptions
            .get_or_insert_with(Vec::new)
            .push(description);
        self
    }
}

impl fmt::Debug for EncoderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("EncoderSettings");
        if let Some(v) = &self.audio_descriptions {
            s.field("audio_descriptions", v);
        }
        if let Some(v) = &self.global_configuration {
            s.field("global_configuration", v);
        }
        if let Some(v) = &self.output_groups {
            s.field("output_groups", v);
        }
        if let Some(v) = &self.timecode_config {
            s.field("timecode_config", v);
        }
        if let Some(v) = &self.video_descriptions {
            s.field("video_descriptions", v);
        }
        s.finish()
    }
}

/// Timecode handling for the channel.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimecodeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<TimecodeSource>,
    /// Maximum drift in frames before the pipeline resynchronizes.
    /// Range 1 to 1000000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_threshold: Option<i32>,
}

impl fmt::Debug for TimecodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("TimecodeConfig");
        if let Some(v) = &self.source {
            s.field("source", v);
        }
        if let Some(v) = &self.sync_threshold {
            s.field("sync_threshold", v);
        }
        s.finish()
    }
}

/// Channel-wide encoder behavior.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalConfiguration {
    /// Initial audio gain in dB. Range -60 to 60.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_audio_gain: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_end_action: Option<InputEndAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_loss_behavior: Option<InputLossBehavior>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_locking_mode: Option<OutputLockingMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_timing_source: Option<OutputTimingSource>,
}

impl fmt::Debug for GlobalConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("GlobalConfiguration");
        if let Some(v) = &self.initial_audio_gain {
            s.field("initial_audio_gain", v);
        }
        if let Some(v) = &self.input_end_action {
            s.field("input_end_action", v);
        }
        if let Some(v) = &self.input_loss_behavior {
            s.field("input_loss_behavior", v);
        }
        if let Some(v) = &self.output_locking_mode {
            s.field("output_locking_mode", v);
        }
        if let Some(v) = &self.output_timing_source {
            s.field("output_timing_source", v);
        }
        s.finish()
    }
}

/// What the encoder emits while the input signal is lost.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputLossBehavior {
    /// Milliseconds of black to emit before the loss image. Range 0 to
    /// 1000000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub black_frame_msec: Option<i32>,
    /// Fill color as a six-character hex string, e.g. `303030`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_loss_image_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_loss_image_slate: Option<InputLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_loss_image_type: Option<InputLossImageType>,
    /// Milliseconds to repeat the last good frame before switching to
    /// the loss image. Range 0 to 1000000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_frame_msec: Option<i32>,
}

impl fmt::Debug for InputLossBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputLossBehavior");
        if let Some(v) = &self.black_frame_msec {
            s.field("black_frame_msec", v);
        }
        if let Some(v) = &self.input_loss_image_color {
            s.field("input_loss_image_color", v);
        }
        if let Some(v) = &self.input_loss_image_slate {
            s.field("input_loss_image_slate", v);
        }
        if let Some(v) = &self.input_loss_image_type {
            s.field("input_loss_image_type", v);
        }
        if let Some(v) = &self.repeat_frame_msec {
            s.field("repeat_frame_msec", v);
        }
        s.finish()
    }
}

/// Reference to a file the service fetches, with optional credentials.
///
/// The password field names a parameter in the service's secret store;
/// no secret material ever travels through this record.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputLocation {
    /// Name of the stored password parameter, not the password itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_param: Option<String>,
    /// URI of the file. Length 1 to 2048.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl fmt::Debug for InputLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputLocation");
        if let Some(v) = &self.password_param {
            s.field("password_param", v);
        }
        if let Some(v) = &self.uri {
            s.field("uri", v);
        }
        if let Some(v) = &self.username {
            s.field("username", v);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_output_group_is_lazy_and_chains() {
        let mut settings = EncoderSettings::default();
        assert!(settings.output_groups.is_none());

        settings
            .add_output_group(OutputGroup::default())
            .add_output_group(OutputGroup::default());
        assert_eq!(settings.output_groups.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn timecode_source_round_trips() {
        for source in TimecodeSource::values() {
            assert_eq!(
                source.as_str().parse::<TimecodeSource>().unwrap(),
                *source
            );
        }
    }
}
