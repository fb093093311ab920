//! Audio encode configuration: descriptions, codec settings, and the
//! closed token sets governing them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// AAC profile selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AacProfile {
    #[serde(rename = "HEV1")]
    Hev1,
    #[serde(rename = "HEV2")]
    Hev2,
    #[serde(rename = "LC")]
    Lc,
}

impl AacProfile {
    /// Every permitted value, in wire order.
    pub fn values() -> &'static [Self] {
        &[Self::Hev1, Self::Hev2, Self::Lc]
    }

    /// The exact wire token for this member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hev1 => "HEV1",
            Self::Hev2 => "HEV2",
            Self::Lc => "LC",
        }
    }
}

impl fmt::Display for AacProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AacProfile {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HEV1" => Ok(Self::Hev1),
            "HEV2" => Ok(Self::Hev2),
            "LC" => Ok(Self::Lc),
            _ => Err(ModelError::invalid_value("AacProfile", s)),
        }
    }
}

/// AAC channel coding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AacCodingMode {
    #[serde(rename = "AD_RECEIVER_MIX")]
    AdReceiverMix,
    #[serde(rename = "CODING_MODE_1_0")]
    CodingMode10,
    #[serde(rename = "CODING_MODE_1_1")]
    CodingMode11,
    #[serde(rename = "CODING_MODE_2_0")]
    CodingMode20,
    #[serde(rename = "CODING_MODE_5_1")]
    CodingMode51,
}

impl AacCodingMode {
    pub fn values() -> &'static [Self] {
        &[
            Self::AdReceiverMix,
            Self::CodingMode10,
            Self::CodingMode11,
            Self::CodingMode20,
            Self::CodingMode51,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdReceiverMix => "AD_RECEIVER_MIX",
            Self::CodingMode10 => "CODING_MODE_1_0",
            Self::CodingMode11 => "CODING_MODE_1_1",
            Self::CodingMode20 => "CODING_MODE_2_0",
            Self::CodingMode51 => "CODING_MODE_5_1",
        }
    }
}

impl fmt::Display for AacCodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AacCodingMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AD_RECEIVER_MIX" => Ok(Self::AdReceiverMix),
            "CODING_MODE_1_0" => Ok(Self::CodingMode10),
            "CODING_MODE_1_1" => Ok(Self::CodingMode11),
            "CODING_MODE_2_0" => Ok(Self::CodingMode20),
            "CODING_MODE_5_1" => Ok(Self::CodingMode51),
            _ => Err(ModelError::invalid_value("AacCodingMode", s)),
        }
    }
}

/// Whether the source audio arrives premixed with audio description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AacInputType {
    BroadcasterMixedAd,
    Normal,
}

impl AacInputType {
    pub fn values() -> &'static [Self] {
        &[Self::BroadcasterMixedAd, Self::Normal]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BroadcasterMixedAd => "BROADCASTER_MIXED_AD",
            Self::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for AacInputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AacInputType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BROADCASTER_MIXED_AD" => Ok(Self::BroadcasterMixedAd),
            "NORMAL" => Ok(Self::Normal),
            _ => Err(ModelError::invalid_value("AacInputType", s)),
        }
    }
}

/// AAC rate control mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AacRateControlMode {
    Cbr,
    Vbr,
}

impl AacRateControlMode {
    pub fn values() -> &'static [Self] {
        &[Self::Cbr, Self::Vbr]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cbr => "CBR",
            Self::Vbr => "VBR",
        }
    }
}

impl fmt::Display for AacRateControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AacRateControlMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CBR" => Ok(Self::Cbr),
            "VBR" => Ok(Self::Vbr),
            _ => Err(ModelError::invalid_value("AacRateControlMode", s)),
        }
    }
}

/// Raw AAC container framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AacRawFormat {
    LatmLoas,
    None,
}

impl AacRawFormat {
    pub fn values() -> &'static [Self] {
        &[Self::LatmLoas, Self::None]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LatmLoas => "LATM_LOAS",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for AacRawFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AacRawFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LATM_LOAS" => Ok(Self::LatmLoas),
            "NONE" => Ok(Self::None),
            _ => Err(ModelError::invalid_value("AacRawFormat", s)),
        }
    }
}

/// MPEG container standard for the AAC stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AacSpec {
    Mpeg2,
    Mpeg4,
}

impl AacSpec {
    pub fn values() -> &'static [Self] {
        &[Self::Mpeg2, Self::Mpeg4]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mpeg2 => "MPEG2",
            Self::Mpeg4 => "MPEG4",
        }
    }
}

impl fmt::Display for AacSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AacSpec {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MPEG2" => Ok(Self::Mpeg2),
            "MPEG4" => Ok(Self::Mpeg4),
            _ => Err(ModelError::invalid_value("AacSpec", s)),
        }
    }
}

/// VBR quality level when rate control is VBR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AacVbrQuality {
    High,
    Low,
    MediumHigh,
    MediumLow,
}

impl AacVbrQuality {
    pub fn values() -> &'static [Self] {
        &[Self::High, Self::Low, Self::MediumHigh, Self::MediumLow]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Low => "LOW",
            Self::MediumHigh => "MEDIUM_HIGH",
            Self::MediumLow => "MEDIUM_LOW",
        }
    }
}

impl fmt::Display for AacVbrQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AacVbrQuality {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH" => Ok(Self::High),
            "LOW" => Ok(Self::Low),
            "MEDIUM_HIGH" => Ok(Self::MediumHigh),
            "MEDIUM_LOW" => Ok(Self::MediumLow),
            _ => Err(ModelError::invalid_value("AacVbrQuality", s)),
        }
    }
}

/// ISO 13818-1 audio type signalled downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioType {
    CleanEffects,
    HearingImpaired,
    Undefined,
    VisualImpairedCommentary,
}

impl AudioType {
    pub fn values() -> &'static [Self] {
        &[
            Self::CleanEffects,
            Self::HearingImpaired,
            Self::Undefined,
            Self::VisualImpairedCommentary,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CleanEffects => "CLEAN_EFFECTS",
            Self::HearingImpaired => "HEARING_IMPAIRED",
            Self::Undefined => "UNDEFINED",
            Self::VisualImpairedCommentary => "VISUAL_IMPAIRED_COMMENTARY",
        }
    }
}

impl fmt::Display for AudioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AudioType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CLEAN_EFFECTS" => Ok(Self::CleanEffects),
            "HEARING_IMPAIRED" => Ok(Self::HearingImpaired),
            "UNDEFINED" => Ok(Self::Undefined),
            "VISUAL_IMPAIRED_COMMENTARY" => {
                Ok(Self::VisualImpairedCommentary)
            }
            _ => Err(ModelError::invalid_value("AudioType", s)),
        }
    }
}

/// Whether the audio type follows the input or uses the configured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioTypeControl {
    FollowInput,
    UseConfigured,
}

impl AudioTypeControl {
    pub fn values() -> &'static [Self] {
        &[Self::FollowInput, Self::UseConfigured]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FollowInput => "FOLLOW_INPUT",
            Self::UseConfigured => "USE_CONFIGURED",
        }
    }
}

impl fmt::Display for AudioTypeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AudioTypeControl {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FOLLOW_INPUT" => Ok(Self::FollowInput),
            "USE_CONFIGURED" => Ok(Self::UseConfigured),
            _ => Err(ModelError::invalid_value("AudioTypeControl", s)),
        }
    }
}

/// Whether the language code follows the input or uses the configured
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioLanguageCodeControl {
    FollowInput,
    UseConfigured,
}

impl AudioLanguageCodeControl {
    pub fn values() -> &'static [Self] {
        &[Self::FollowInput, Self::UseConfigured]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FollowInput => "FOLLOW_INPUT",
            Self::UseConfigured => "USE_CONFIGURED",
        }
    }
}

impl fmt::Display for AudioLanguageCodeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AudioLanguageCodeControl {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FOLLOW_INPUT" => Ok(Self::FollowInput),
            "USE_CONFIGURED" => Ok(Self::UseConfigured),
            _ => Err(ModelError::invalid_value("AudioLanguageCodeControl", s)),
        }
    }
}

/// Loudness measurement algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioNormalizationAlgorithm {
    #[serde(rename = "ITU_1770_1")]
    Itu17701,
    #[serde(rename = "ITU_1770_2")]
    Itu17702,
}

impl AudioNormalizationAlgorithm {
    pub fn values() -> &'static [Self] {
        &[Self::Itu17701, Self::Itu17702]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Itu17701 => "ITU_1770_1",
            Self::Itu17702 => "ITU_1770_2",
        }
    }
}

impl fmt::Display for AudioNormalizationAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AudioNormalizationAlgorithm {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ITU_1770_1" => Ok(Self::Itu17701),
            "ITU_1770_2" => Ok(Self::Itu17702),
            _ => {
                Err(ModelError::invalid_value(
                    "AudioNormalizationAlgorithm",
                    s,
                ))
            }
        }
    }
}

/// What the encoder does with the measured loudness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioNormalizationAlgorithmControl {
    CorrectAudio,
}

impl AudioNormalizationAlgorithmControl {
    pub fn values() -> &'static [Self] {
        &[Self::CorrectAudio]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CorrectAudio => "CORRECT_AUDIO",
        }
    }
}

impl fmt::Display for AudioNormalizationAlgorithmControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AudioNormalizationAlgorithmControl {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CORRECT_AUDIO" => Ok(Self::CorrectAudio),
            _ => {
                Err(ModelError::invalid_value(
                    "AudioNormalizationAlgorithmControl",
                    s,
                ))
            }
        }
    }
}

/// One encoded audio rendition inside
/// [`EncoderSettings`](crate::encoder::EncoderSettings).
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_normalization_settings: Option<AudioNormalizationSettings>,
    /// Name of the input audio selector this description encodes from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_selector_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_type: Option<AudioType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_type_control: Option<AudioTypeControl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec_settings: Option<AudioCodecSettings>,
    /// RFC 5646 language code. Length 1 to 35.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code_control: Option<AudioLanguageCodeControl>,
    /// Name of this description, unique within the channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remix_settings: Option<RemixSettings>,
    /// Stream name metadata passed to the output (RTMP only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
}

impl fmt::Debug for AudioDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("AudioDescription");
        if let Some(v) = &self.audio_normalization_settings {
            s.field("audio_normalization_settings", v);
        }
        if let Some(v) = &self.audio_selector_name {
            s.field("audio_selector_name", v);
        }
        if let Some(v) = &self.audio_type {
            s.field("audio_type", v);
        }
        if let Some(v) = &self.audio_type_control {
            s.field("audio_type_control", v);
        }
        if let Some(v) = &self.codec_settings {
            s.field("codec_settings", v);
        }
        if let Some(v) = &self.language_code {
            s.field("language_code", v);
        }
        if let Some(v) = &self.language_code_control {
            s.field("language_code_control", v);
        }
        if let Some(v) = &self.name {
            s.field("name", v);
        }
        if let Some(v) = &self.remix_settings {
            s.field("remix_settings", v);
        }
        if let Some(v) = &self.stream_name {
            s.field("stream_name", v);
        }
        s.finish()
    }
}

/// Selects exactly one audio codec; the service rejects settings with
/// more than one populated.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioCodecSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aac_settings: Option<AacSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_through_settings: Option<PassThroughSettings>,
}

impl fmt::Debug for AudioCodecSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("AudioCodecSettings");
        if let Some(v) = &self.aac_settings {
            s.field("aac_settings", v);
        }
        if let Some(v) = &self.pass_through_settings {
            s.field("pass_through_settings", v);
        }
        s.finish()
    }
}

/// AAC encode parameters.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AacSettings {
    /// Average bitrate in bits/second. Valid values depend on rate
    /// control mode and profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coding_mode: Option<AacCodingMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<AacInputType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<AacProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_control_mode: Option<AacRateControlMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_format: Option<AacRawFormat>,
    /// Sample rate in Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<AacSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vbr_quality: Option<AacVbrQuality>,
}

impl fmt::Debug for AacSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("AacSettings");
        if let Some(v) = &self.bitrate {
            s.field("bitrate", v);
        }
        if let Some(v) = &self.coding_mode {
            s.field("coding_mode", v);
        }
        if let Some(v) = &self.input_type {
            s.field("input_type", v);
        }
        if let Some(v) = &self.profile {
            s.field("profile", v);
        }
        if let Some(v) = &self.rate_control_mode {
            s.field("rate_control_mode", v);
        }
        if let Some(v) = &self.raw_format {
            s.field("raw_format", v);
        }
        if let Some(v) = &self.sample_rate {
            s.field("sample_rate", v);
        }
        if let Some(v) = &self.spec {
            s.field("spec", v);
        }
        if let Some(v) = &self.vbr_quality {
            s.field("vbr_quality", v);
        }
        s.finish()
    }
}

/// Pass the source audio through untouched. Carries no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PassThroughSettings {}

/// Loudness normalization applied to an [`AudioDescription`].
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioNormalizationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<AudioNormalizationAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_control: Option<AudioNormalizationAlgorithmControl>,
    /// Target loudness in LKFS. Range -59 to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lkfs: Option<f64>,
}

impl fmt::Debug for AudioNormalizationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("AudioNormalizationSettings");
        if let Some(v) = &self.algorithm {
            s.field("algorithm", v);
        }
        if let Some(v) = &self.algorithm_control {
            s.field("algorithm_control", v);
        }
        if let Some(v) = &self.target_lkfs {
            s.field("target_lkfs", v);
        }
        s.finish()
    }
}

/// Channel remix applied before the encode.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemixSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_mappings: Option<Vec<AudioChannelMapping>>,
    /// Number of input channels. Range 1 to 16.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels_in: Option<i32>,
    /// Number of output channels. Must be 1, 2, 4, 6, or 8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels_out: Option<i32>,
}

impl RemixSettings {
    /// Append one mapping, creating the backing list on first use.
    pub fn add_channel_mapping(
        &mut self,
        mapping: AudioChannelMapping,
    ) -> &mut Self {
        self.channel_mappings
            .get_or_insert_with(Vec::new)
            .push(mapping);
        self
    }
}

impl fmt::Debug for RemixSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("RemixSettings");
        if let Some(v) = &self.channel_mappings {
            s.field("channel_mappings", v);
        }
        if let Some(v) = &self.channels_in {
            s.field("channels_in", v);
        }
        if let Some(v) = &self.channels_out {
            s.field("channels_out", v);
        }
        s.finish()
    }
}

/// Gain contributions from input channels into one output channel.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioChannelMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_channel_levels: Option<Vec<InputChannelLevel>>,
    /// Index of the output channel being produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_channel: Option<i32>,
}

impl AudioChannelMapping {
    /// Append one level, creating the backing list on first use.
    pub fn add_input_channel_level(
        &mut self,
        level: InputChannelLevel,
    ) -> &mut Self {
        self.input_channel_levels
            .get_or_insert_with(Vec::new)
            .push(level);
        self
    }
}

impl fmt::Debug for AudioChannelMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("AudioChannelMapping");
        if let Some(v) = &self.input_channel_levels {
            s.field("input_channel_levels", v);
        }
        if let Some(v) = &self.output_channel {
            s.field("output_channel", v);
        }
        s.finish()
    }
}

/// Gain applied to one input channel.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputChannelLevel {
    /// Remix gain in dB. Range -60 to 6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain: Option<i32>,
    /// Index of the input channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_channel: Option<i32>,
}

impl fmt::Debug for InputChannelLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputChannelLevel");
        if let Some(v) = &self.gain {
            s.field("gain", v);
        }
        if let Some(v) = &self.input_channel {
            s.field("input_channel", v);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_channel_mapping_creates_backing_list_lazily() {
        let mut remix = RemixSettings::default();
        assert!(remix.channel_mappings.is_none());

        remix.add_channel_mapping(AudioChannelMapping {
            output_channel: Some(0),
            ..Default::default()
        });
        assert_eq!(remix.channel_mappings.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn aac_coding_mode_rejects_lowercase() {
        let err = "coding_mode_5_1".parse::<AacCodingMode>().unwrap_err();
        assert!(matches!(err, ModelError::InvalidValue { .. }));
    }
}
