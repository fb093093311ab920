//! Inputs: the sources a channel ingests, and the security groups that
//! gate push endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ModelError, Result};
use crate::ids::{ChannelId, InputId, InputSecurityGroupId};
use crate::tags::Tags;

/// Transport the input arrives over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputType {
    #[serde(rename = "UDP_PUSH")]
    UdpPush,
    #[serde(rename = "RTP_PUSH")]
    RtpPush,
    #[serde(rename = "RTMP_PUSH")]
    RtmpPush,
    #[serde(rename = "RTMP_PULL")]
    RtmpPull,
    #[serde(rename = "URL_PULL")]
    UrlPull,
    #[serde(rename = "MP4_FILE")]
    Mp4File,
}

impl InputType {
    pub fn values() -> &'static [Self] {
        &[
            Self::UdpPush,
            Self::RtpPush,
            Self::RtmpPush,
            Self::RtmpPull,
            Self::UrlPull,
            Self::Mp4File,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UdpPush => "UDP_PUSH",
            Self::RtpPush => "RTP_PUSH",
            Self::RtmpPush => "RTMP_PUSH",
            Self::RtmpPull => "RTMP_PULL",
            Self::UrlPull => "URL_PULL",
            Self::Mp4File => "MP4_FILE",
        }
    }

    /// Push inputs listen on service-side endpoints; pull inputs fetch
    /// from the caller's URLs.
    pub fn is_push(&self) -> bool {
        matches!(self, Self::UdpPush | Self::RtpPush | Self::RtmpPush)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "UDP_PUSH" => Ok(Self::UdpPush),
            "RTP_PUSH" => Ok(Self::RtpPush),
            "RTMP_PUSH" => Ok(Self::RtmpPush),
            "RTMP_PULL" => Ok(Self::RtmpPull),
            "URL_PULL" => Ok(Self::UrlPull),
            "MP4_FILE" => Ok(Self::Mp4File),
            _ => Err(ModelError::invalid_value("InputType", s)),
        }
    }
}

/// Lifecycle state of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputState {
    Creating,
    Detached,
    Attached,
    Deleting,
    Deleted,
}

impl InputState {
    pub fn values() -> &'static [Self] {
        &[
            Self::Creating,
            Self::Detached,
            Self::Attached,
            Self::Deleting,
            Self::Deleted,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creating => "CREATING",
            Self::Detached => "DETACHED",
            Self::Attached => "ATTACHED",
            Self::Deleting => "DELETING",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputState {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CREATING" => Ok(Self::Creating),
            "DETACHED" => Ok(Self::Detached),
            "ATTACHED" => Ok(Self::Attached),
            "DELETING" => Ok(Self::Deleting),
            "DELETED" => Ok(Self::Deleted),
            _ => Err(ModelError::invalid_value("InputState", s)),
        }
    }
}

/// Whether the input feeds one pipeline or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputClass {
    Standard,
    SinglePipeline,
}

impl InputClass {
    pub fn values() -> &'static [Self] {
        &[Self::Standard, Self::SinglePipeline]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::SinglePipeline => "SINGLE_PIPELINE",
        }
    }
}

impl fmt::Display for InputClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputClass {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "STANDARD" => Ok(Self::Standard),
            "SINGLE_PIPELINE" => Ok(Self::SinglePipeline),
            _ => Err(ModelError::invalid_value("InputClass", s)),
        }
    }
}

/// What happens when a file source reaches its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputSourceEndBehavior {
    Continue,
    Loop,
}

impl InputSourceEndBehavior {
    pub fn values() -> &'static [Self] {
        &[Self::Continue, Self::Loop]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "CONTINUE",
            Self::Loop => "LOOP",
        }
    }
}

impl fmt::Display for InputSourceEndBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputSourceEndBehavior {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CONTINUE" => Ok(Self::Continue),
            "LOOP" => Ok(Self::Loop),
            _ => Err(ModelError::invalid_value("InputSourceEndBehavior", s)),
        }
    }
}

/// Temporal filtering applied before the encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputFilter {
    Auto,
    Disabled,
    Forced,
}

impl InputFilter {
    pub fn values() -> &'static [Self] {
        &[Self::Auto, Self::Disabled, Self::Forced]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Disabled => "DISABLED",
            Self::Forced => "FORCED",
        }
    }
}

impl fmt::Display for InputFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "AUTO" => Ok(Self::Auto),
            "DISABLED" => Ok(Self::Disabled),
            "FORCED" => Ok(Self::Forced),
            _ => Err(ModelError::invalid_value("InputFilter", s)),
        }
    }
}

/// Deblocking filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputDeblockFilter {
    Disabled,
    Enabled,
}

impl InputDeblockFilter {
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

impl fmt::Display for InputDeblockFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputDeblockFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DISABLED" => Ok(Self::Disabled),
            "ENABLED" => Ok(Self::Enabled),
            _ => Err(ModelError::invalid_value("InputDeblockFilter", s)),
        }
    }
}

/// Denoising filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputDenoiseFilter {
    Disabled,
    Enabled,
}

impl InputDenoiseFilter {
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

impl fmt::Display for InputDenoiseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputDenoiseFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DISABLED" => Ok(Self::Disabled),
            "ENABLED" => Ok(Self::Enabled),
            _ => Err(ModelError::invalid_value("InputDenoiseFilter", s)),
        }
    }
}

/// Declared ceiling for the input bitrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputMaximumBitrate {
    #[serde(rename = "MAX_10_MBPS")]
    Max10Mbps,
    #[serde(rename = "MAX_20_MBPS")]
    Max20Mbps,
    #[serde(rename = "MAX_50_MBPS")]
    Max50Mbps,
}

impl InputMaximumBitrate {
    pub fn values() -> &'static [Self] {
        &[Self::Max10Mbps, Self::Max20Mbps, Self::Max50Mbps]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Max10Mbps => "MAX_10_MBPS",
            Self::Max20Mbps => "MAX_20_MBPS",
            Self::Max50Mbps => "MAX_50_MBPS",
        }
    }
}

impl fmt::Display for InputMaximumBitrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputMaximumBitrate {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MAX_10_MBPS" => Ok(Self::Max10Mbps),
            "MAX_20_MBPS" => Ok(Self::Max20Mbps),
            "MAX_50_MBPS" => Ok(Self::Max50Mbps),
            _ => Err(ModelError::invalid_value("InputMaximumBitrate", s)),
        }
    }
}

/// Declared resolution tier of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputResolution {
    Sd,
    Hd,
    Uhd,
}

impl InputResolution {
    pub fn values() -> &'static [Self] {
        &[Self::Sd, Self::Hd, Self::Uhd]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sd => "SD",
            Self::Hd => "HD",
            Self::Uhd => "UHD",
        }
    }
}

impl fmt::Display for InputResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputResolution {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SD" => Ok(Self::Sd),
            "HD" => Ok(Self::Hd),
            "UHD" => Ok(Self::Uhd),
            _ => Err(ModelError::invalid_value("InputResolution", s)),
        }
    }
}

/// How strictly the audio language selection is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LanguageSelectionPolicy {
    Loose,
    Strict,
}

impl LanguageSelectionPolicy {
    pub fn values() -> &'static [Self] {
        &[Self::Loose, Self::Strict]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loose => "LOOSE",
            Self::Strict => "STRICT",
        }
    }
}

impl fmt::Display for LanguageSelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LanguageSelectionPolicy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LOOSE" => Ok(Self::Loose),
            "STRICT" => Ok(Self::Strict),
            _ => {
                Err(ModelError::invalid_value("LanguageSelectionPolicy", s))
            }
        }
    }
}

/// Color space declared for the input video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoSelectorColorSpace {
    #[serde(rename = "FOLLOW")]
    Follow,
    #[serde(rename = "REC_601")]
    Rec601,
    #[serde(rename = "REC_709")]
    Rec709,
}

impl VideoSelectorColorSpace {
    pub fn values() -> &'static [Self] {
        &[Self::Follow, Self::Rec601, Self::Rec709]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Follow => "FOLLOW",
            Self::Rec601 => "REC_601",
            Self::Rec709 => "REC_709",
        }
    }
}

impl fmt::Display for VideoSelectorColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VideoSelectorColorSpace {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FOLLOW" => Ok(Self::Follow),
            "REC_601" => Ok(Self::Rec601),
            "REC_709" => Ok(Self::Rec709),
            _ => {
                Err(ModelError::invalid_value("VideoSelectorColorSpace", s))
            }
        }
    }
}

/// Whether the declared color space overrides embedded signalling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoSelectorColorSpaceUsage {
    Fallback,
    Force,
}

impl VideoSelectorColorSpaceUsage {
    pub fn values() -> &'static [Self] {
        &[Self::Fallback, Self::Force]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fallback => "FALLBACK",
            Self::Force => "FORCE",
        }
    }
}

impl fmt::Display for VideoSelectorColorSpaceUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VideoSelectorColorSpaceUsage {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FALLBACK" => Ok(Self::Fallback),
            "FORCE" => Ok(Self::Force),
            _ => {
                Err(ModelError::invalid_value(
                    "VideoSelectorColorSpaceUsage",
                    s,
                ))
            }
        }
    }
}

/// Lifecycle state of an input security group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputSecurityGroupState {
    Idle,
    InUse,
    Updating,
    Deleted,
}

impl InputSecurityGroupState {
    pub fn values() -> &'static [Self] {
        &[Self::Idle, Self::InUse, Self::Updating, Self::Deleted]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::InUse => "IN_USE",
            Self::Updating => "UPDATING",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for InputSecurityGroupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputSecurityGroupState {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "IDLE" => Ok(Self::Idle),
            "IN_USE" => Ok(Self::InUse),
            "UPDATING" => Ok(Self::Updating),
            "DELETED" => Ok(Self::Deleted),
            _ => {
                Err(ModelError::invalid_value("InputSecurityGroupState", s))
            }
        }
    }
}

/// An ingest source as the service reports it.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Input {
    /// IDs of channels currently attached to this input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_channels: Option<Vec<ChannelId>>,
    /// Endpoints the caller pushes to (push inputs only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<InputDestination>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<InputId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_class: Option<InputClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<InputSecurityGroupId>>,
    /// URLs the service pulls from (pull inputs only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<InputSource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<InputState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Input");
        if let Some(v) = &self.attached_channels {
            s.field("attached_channels", v);
        }
        if let Some(v) = &self.destinations {
            s.field("destinations", v);
        }
        if let Some(v) = &self.id {
            s.field("id", v);
        }
        if let Some(v) = &self.input_class {
            s.field("input_class", v);
        }
        if let Some(v) = &self.input_type {
            s.field("input_type", v);
        }
        if let Some(v) = &self.name {
            s.field("name", v);
        }
        if let Some(v) = &self.security_groups {
            s.field("security_groups", v);
        }
        if let Some(v) = &self.sources {
            s.field("sources", v);
        }
        if let Some(v) = &self.state {
            s.field("state", v);
        }
        if let Some(v) = &self.tags {
            s.field("tags", v);
        }
        s.finish()
    }
}

/// Service-assigned push endpoint.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputDestination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Full endpoint URL including scheme and stream name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl fmt::Debug for InputDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputDestination");
        if let Some(v) = &self.ip {
            s.field("ip", v);
        }
        if let Some(v) = &self.port {
            s.field("port", v);
        }
        if let Some(v) = &self.url {
            s.field("url", v);
        }
        s.finish()
    }
}

/// Caller-chosen naming for a push endpoint being created.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputDestinationRequest {
    /// Stream name component of the endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
}

impl fmt::Debug for InputDestinationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputDestinationRequest");
        if let Some(v) = &self.stream_name {
            s.field("stream_name", v);
        }
        s.finish()
    }
}

/// A pull source as the service reports it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputSource {
    /// Name of the stored password parameter, not the password itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl fmt::Debug for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputSource");
        if let Some(v) = &self.password_param {
            s.field("password_param", v);
        }
        if let Some(v) = &self.url {
            s.field("url", v);
        }
        if let Some(v) = &self.username {
            s.field("username", v);
        }
        s.finish()
    }
}

/// A pull source being created or updated.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputSourceRequest {
    /// Name of the stored password parameter, not the password itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl fmt::Debug for InputSourceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputSourceRequest");
        if let Some(v) = &self.password_param {
            s.field("password_param", v);
        }
        if let Some(v) = &self.url {
            s.field("url", v);
        }
        if let Some(v) = &self.username {
            s.field("username", v);
        }
        s.finish()
    }
}

/// Binds an input to a channel, with per-attachment settings.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputAttachment {
    /// Name unique within the channel. Length 1 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_attachment_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_id: Option<InputId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_settings: Option<InputSettings>,
}

impl fmt::Debug for InputAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputAttachment");
        if let Some(v) = &self.input_attachment_name {
            s.field("input_attachment_name", v);
        }
        if let Some(v) = &self.input_id {
            s.field("input_id", v);
        }
        if let Some(v) = &self.input_settings {
            s.field("input_settings", v);
        }
        s.finish()
    }
}

/// How the channel interprets one attached input.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_selectors: Option<Vec<AudioSelector>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deblock_filter: Option<InputDeblockFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denoise_filter: Option<InputDenoiseFilter>,
    /// Filter strength. Range 1 to 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_strength: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_filter: Option<InputFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_end_behavior: Option<InputSourceEndBehavior>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_selector: Option<VideoSelector>,
}

impl InputSettings {
    /// Append one audio selector, creating the backing list on first
    /// use.
    pub fn add_audio_selector(
        &mut self,
        selector: AudioSelector,
    ) -> &mut Self {
        self.audio_selectors
            .get_or_insert_with(Vec::new)
            .push(selector);
        self
    }
}

impl fmt::Debug for InputSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputSettings");
        if let Some(v) = &self.audio_selectors {
            s.field("audio_selectors", v);
        }
        if let Some(v) = &self.deblock_filter {
            s.field("deblock_filter", v);
        }
        if let Some(v) = &self.denoise_filter {
            s.field("denoise_filter", v);
        }
        if let Some(v) = &self.filter_strength {
            s.field("filter_strength", v);
        }
        if let Some(v) = &self.input_filter {
            s.field("input_filter", v);
        }
        if let Some(v) = &self.source_end_behavior {
            s.field("source_end_behavior", v);
        }
        if let Some(v) = &self.video_selector {
            s.field("video_selector", v);
        }
        s.finish()
    }
}

/// Picks one audio stream out of the input.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioSelector {
    /// Name referenced by
    /// [`AudioDescription::audio_selector_name`](crate::audio::AudioDescription).
    /// Length 1 to 32.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector_settings: Option<AudioSelectorSettings>,
}

impl fmt::Debug for AudioSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("AudioSelector");
        if let Some(v) = &self.name {
            s.field("name", v);
        }
        if let Some(v) = &self.selector_settings {
            s.field("selector_settings", v);
        }
        s.finish()
    }
}

/// Selection strategy; exactly one should be populated.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioSelectorSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_language_selection: Option<AudioLanguageSelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_pid_selection: Option<AudioPidSelection>,
}

impl fmt::Debug for AudioSelectorSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("AudioSelectorSettings");
        if let Some(v) = &self.audio_language_selection {
            s.field("audio_language_selection", v);
        }
        if let Some(v) = &self.audio_pid_selection {
            s.field("audio_pid_selection", v);
        }
        s.finish()
    }
}

/// Select audio by language.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioLanguageSelection {
    /// RFC 5646 language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_selection_policy: Option<LanguageSelectionPolicy>,
}

impl fmt::Debug for AudioLanguageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("AudioLanguageSelection");
        if let Some(v) = &self.language_code {
            s.field("language_code", v);
        }
        if let Some(v) = &self.language_selection_policy {
            s.field("language_selection_policy", v);
        }
        s.finish()
    }
}

/// Select audio by transport stream PID.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioPidSelection {
    /// PID to select. Range 0 to 8191.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<i32>,
}

impl fmt::Debug for AudioPidSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("AudioPidSelection");
        if let Some(v) = &self.pid {
            s.field("pid", v);
        }
        s.finish()
    }
}

/// Declares properties of the input video stream.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_space: Option<VideoSelectorColorSpace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_space_usage: Option<VideoSelectorColorSpaceUsage>,
}

impl fmt::Debug for VideoSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("VideoSelector");
        if let Some(v) = &self.color_space {
            s.field("color_space", v);
        }
        if let Some(v) = &self.color_space_usage {
            s.field("color_space_usage", v);
        }
        s.finish()
    }
}

/// One allowed CIDR block, as the service reports it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputWhitelistRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
}

impl fmt::Debug for InputWhitelistRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputWhitelistRule");
        if let Some(v) = &self.cidr {
            s.field("cidr", v);
        }
        s.finish()
    }
}

/// One allowed CIDR block being submitted.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputWhitelistRuleCidr {
    /// IPv4 CIDR, e.g. `203.0.113.0/24`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
}

impl fmt::Debug for InputWhitelistRuleCidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputWhitelistRuleCidr");
        if let Some(v) = &self.cidr {
            s.field("cidr", v);
        }
        s.finish()
    }
}

/// CIDR allowlist gating push endpoints.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputSecurityGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<InputSecurityGroupId>,
    /// IDs of inputs currently using this group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<InputId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<InputSecurityGroupState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelist_rules: Option<Vec<InputWhitelistRule>>,
}

impl fmt::Debug for InputSecurityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputSecurityGroup");
        if let Some(v) = &self.id {
            s.field("id", v);
        }
        if let Some(v) = &self.inputs {
            s.field("inputs", v);
        }
        if let Some(v) = &self.state {
            s.field("state", v);
        }
        if let Some(v) = &self.tags {
            s.field("tags", v);
        }
        if let Some(v) = &self.whitelist_rules {
            s.field("whitelist_rules", v);
        }
        s.finish()
    }
}

/// Request to create an input.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInputRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<InputDestinationRequest>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_security_groups: Option<Vec<InputSecurityGroupId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    /// Name of the input. Length 1 to 255.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Idempotency token; retries with the same token are deduplicated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<InputSourceRequest>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl CreateInputRequest {
    /// Fill `request_id` with a fresh idempotency token.
    pub fn with_fresh_request_id(mut self) -> Self {
        self.request_id = Some(Uuid::new_v4().to_string());
        self
    }

    /// Append one destination request, creating the backing list on
    /// first use.
    pub fn add_destination(
        &mut self,
        destination: InputDestinationRequest,
    ) -> &mut Self {
        self.destinations
            .get_or_insert_with(Vec::new)
            .push(destination);
        self
    }

    /// Append one source request, creating the backing list on first
    /// use.
    pub fn add_source(&mut self, source: InputSourceRequest) -> &mut Self {
        self.sources.get_or_insert_with(Vec::new).push(source);
        self
    }

    /// Add one tag; fails if the key is already present.
    pub fn add_tag(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        self.tags.get_or_insert_with(Tags::new).insert(key, value)?;
        Ok(self)
    }

    /// Reset the tag map to absent.
    pub fn clear_tags(&mut self) {
        self.tags = None;
    }
}

impl fmt::Debug for CreateInputRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("CreateInputRequest");
        if let Some(v) = &self.destinations {
            s.field("destinations", v);
        }
        if let Some(v) = &self.input_security_groups {
            s.field("input_security_groups", v);
        }
        if let Some(v) = &self.input_type {
            s.field("input_type", v);
        }
        if let Some(v) = &self.name {
            s.field("name", v);
        }
        if let Some(v) = &self.request_id {
            s.field("request_id", v);
        }
        if let Some(v) = &self.sources {
            s.field("sources", v);
        }
        if let Some(v) = &self.tags {
            s.field("tags", v);
        }
        s.finish()
    }
}

/// Request to update an input. Only detached inputs can change type.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateInputRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<InputDestinationRequest>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_id: Option<InputId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_security_groups: Option<Vec<InputSecurityGroupId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<InputSourceRequest>>,
}

impl fmt::Debug for UpdateInputRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("UpdateInputRequest");
        if let Some(v) = &self.destinations {
            s.field("destinations", v);
        }
        if let Some(v) = &self.input_id {
            s.field("input_id", v);
        }
        if let Some(v) = &self.input_security_groups {
            s.field("input_security_groups", v);
        }
        if let Some(v) = &self.name {
            s.field("name", v);
        }
        if let Some(v) = &self.sources {
            s.field("sources", v);
        }
        s.finish()
    }
}

/// Request to delete an input.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteInputRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_id: Option<InputId>,
}

impl fmt::Debug for DeleteInputRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DeleteInputRequest");
        if let Some(v) = &self.input_id {
            s.field("input_id", v);
        }
        s.finish()
    }
}

/// Request to describe an input.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInputRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_id: Option<InputId>,
}

impl fmt::Debug for DescribeInputRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DescribeInputRequest");
        if let Some(v) = &self.input_id {
            s.field("input_id", v);
        }
        s.finish()
    }
}

/// Request one page of inputs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListInputsRequest {
    /// Page size. Range 1 to 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Opaque continuation token from the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Debug for ListInputsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ListInputsRequest");
        if let Some(v) = &self.max_results {
            s.field("max_results", v);
        }
        if let Some(v) = &self.next_token {
            s.field("next_token", v);
        }
        s.finish()
    }
}

/// One page of inputs.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListInputsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<Input>>,
    /// Token for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Debug for ListInputsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ListInputsResponse");
        if let Some(v) = &self.inputs {
            s.field("inputs", v);
        }
        if let Some(v) = &self.next_token {
            s.field("next_token", v);
        }
        s.finish()
    }
}

/// Request to create an input security group.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInputSecurityGroupRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelist_rules: Option<Vec<InputWhitelistRuleCidr>>,
}

impl CreateInputSecurityGroupRequest {
    /// Append one CIDR rule, creating the backing list on first use.
    pub fn add_whitelist_rule(
        &mut self,
        rule: InputWhitelistRuleCidr,
    ) -> &mut Self {
        self.whitelist_rules.get_or_insert_with(Vec::new).push(rule);
        self
    }

    /// Add one tag; fails if the key is already present.
    pub fn add_tag(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        self.tags.get_or_insert_with(Tags::new).insert(key, value)?;
        Ok(self)
    }

    /// Reset the tag map to absent.
    pub fn clear_tags(&mut self) {
        self.tags = None;
    }
}

impl fmt::Debug for CreateInputSecurityGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("CreateInputSecurityGroupRequest");
        if let Some(v) = &self.tags {
            s.field("tags", v);
        }
        if let Some(v) = &self.whitelist_rules {
            s.field("whitelist_rules", v);
        }
        s.finish()
    }
}

/// Request one page of input security groups.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListInputSecurityGroupsRequest {
    /// Page size. Range 1 to 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Opaque continuation token from the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Debug for ListInputSecurityGroupsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ListInputSecurityGroupsRequest");
        if let Some(v) = &self.max_results {
            s.field("max_results", v);
        }
        if let Some(v) = &self.next_token {
            s.field("next_token", v);
        }
        s.finish()
    }
}

/// One page of input security groups.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListInputSecurityGroupsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_security_groups: Option<Vec<InputSecurityGroup>>,
    /// Token for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Debug for ListInputSecurityGroupsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ListInputSecurityGroupsResponse");
        if let Some(v) = &self.input_security_groups {
            s.field("input_security_groups", v);
        }
        if let Some(v) = &self.next_token {
            s.field("next_token", v);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pull_types_are_classified() {
        assert!(InputType::RtmpPush.is_push());
        assert!(!InputType::UrlPull.is_push());
        assert!(!InputType::Mp4File.is_push());
    }

    #[test]
    fn create_request_tag_conveniences() {
        let mut req = CreateInputRequest::default();
        assert!(req.tags.is_none());

        req.add_tag("team", "ingest").unwrap();
        let err = req.add_tag("team", "playout").unwrap_err();
        assert!(matches!(err, ModelError::DuplicateKey { .. }));

        req.clear_tags();
        assert!(req.tags.is_none());
    }

    #[test]
    fn with_fresh_request_id_populates_a_token() {
        let req = CreateInputRequest::default().with_fresh_request_id();
        let token = req.request_id.expect("token should be set");
        assert!(!token.is_empty());
    }
}
