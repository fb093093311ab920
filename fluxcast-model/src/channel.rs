//! Channels: the running encode pipelines and their lifecycle requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::encoder::EncoderSettings;
use crate::error::{ModelError, Result};
use crate::ids::ChannelId;
use crate::input::InputAttachment;
use crate::tags::Tags;

/// Lifecycle state of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelState {
    Creating,
    CreateFailed,
    Idle,
    Starting,
    Running,
    Recovering,
    Stopping,
    Deleting,
    Deleted,
    Updating,
    UpdateFailed,
}

impl ChannelState {
    pub fn values() -> &'static [Self] {
        &[
            Self::Creating,
            Self::CreateFailed,
            Self::Idle,
            Self::Starting,
            Self::Running,
            Self::Recovering,
            Self::Stopping,
            Self::Deleting,
            Self::Deleted,
            Self::Updating,
            Self::UpdateFailed,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creating => "CREATING",
            Self::CreateFailed => "CREATE_FAILED",
            Self::Idle => "IDLE",
            Self::Starting => "STARTING",
            Self::Running => "RUNNING",
            Self::Recovering => "RECOVERING",
            Self::Stopping => "STOPPING",
            Self::Deleting => "DELETING",
            Self::Deleted => "DELETED",
            Self::Updating => "UPDATING",
            Self::UpdateFailed => "UPDATE_FAILED",
        }
    }

    /// Whether a start request is accepted in this state.
    pub fn can_be_started(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether the channel is producing output.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running | Self::Recovering)
    }
}

impl fmt::Display for ChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChannelState {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CREATING" => Ok(Self::Creating),
            "CREATE_FAILED" => Ok(Self::CreateFailed),
            "IDLE" => Ok(Self::Idle),
            "STARTING" => Ok(Self::Starting),
            "RUNNING" => Ok(Self::Running),
            "RECOVERING" => Ok(Self::Recovering),
            "STOPPING" => Ok(Self::Stopping),
            "DELETING" => Ok(Self::Deleting),
            "DELETED" => Ok(Self::Deleted),
            "UPDATING" => Ok(Self::Updating),
            "UPDATE_FAILED" => Ok(Self::UpdateFailed),
            _ => Err(ModelError::invalid_value("ChannelState", s)),
        }
    }
}

/// Redundant dual-pipeline channel or a single pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelClass {
    Standard,
    SinglePipeline,
}

impl ChannelClass {
    pub fn values() -> &'static [Self] {
        &[Self::Standard, Self::SinglePipeline]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::SinglePipeline => "SINGLE_PIPELINE",
        }
    }

    /// Number of pipelines this class runs.
    pub fn pipeline_count(&self) -> i32 {
        match self {
            Self::Standard => 2,
            Self::SinglePipeline => 1,
        }
    }
}

impl fmt::Display for ChannelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChannelClass {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "STANDARD" => Ok(Self::Standard),
            "SINGLE_PIPELINE" => Ok(Self::SinglePipeline),
            _ => Err(ModelError::invalid_value("ChannelClass", s)),
        }
    }
}

/// Verbosity of the channel's service-side activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
    Disabled,
}

impl LogLevel {
    pub fn values() -> &'static [Self] {
        &[
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
            Self::Disabled,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Disabled => "DISABLED",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ERROR" => Ok(Self::Error),
            "WARNING" => Ok(Self::Warning),
            "INFO" => Ok(Self::Info),
            "DEBUG" => Ok(Self::Debug),
            "DISABLED" => Ok(Self::Disabled),
            _ => Err(ModelError::invalid_value("LogLevel", s)),
        }
    }
}

/// Identifies one of the two pipelines of a standard channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipelineId {
    #[serde(rename = "PIPELINE_0")]
    Pipeline0,
    #[serde(rename = "PIPELINE_1")]
    Pipeline1,
}

impl PipelineId {
    pub fn values() -> &'static [Self] {
        &[Self::Pipeline0, Self::Pipeline1]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pipeline0 => "PIPELINE_0",
            Self::Pipeline1 => "PIPELINE_1",
        }
    }
}

impl fmt::Display for PipelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PipelineId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PIPELINE_0" => Ok(Self::Pipeline0),
            "PIPELINE_1" => Ok(Self::Pipeline1),
            _ => Err(ModelError::invalid_value("PipelineId", s)),
        }
    }
}

/// A channel as the service reports it.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Channel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_class: Option<ChannelClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<OutputDestination>>,
    /// Endpoints the channel emits from; one per pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egress_endpoints: Option<Vec<ChannelEgressEndpoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoder_settings: Option<EncoderSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ChannelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_attachments: Option<Vec<InputAttachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_details: Option<Vec<PipelineDetail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipelines_running_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ChannelState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Channel");
        if let Some(v) = &self.channel_class {
            s.field("channel_class", v);
        }
        if let Some(v) = &self.destinations {
            s.field("destinations", v);
        }
        if let Some(v) = &self.egress_endpoints {
            s.field("egress_endpoints", v);
        }
        if let Some(v) = &self.encoder_settings {
            s.field("encoder_settings", v);
        }
        if let Some(v) = &self.id {
            s.field("id", v);
        }
        if let Some(v) = &self.input_attachments {
            s.field("input_attachments", v);
        }
        if let Some(v) = &self.log_level {
            s.field("log_level", v);
        }
        if let Some(v) = &self.name {
            s.field("name", v);
        }
        if let Some(v) = &self.pipeline_details {
            s.field("pipeline_details", v);
        }
        if let Some(v) = &self.pipelines_running_count {
            s.field("pipelines_running_count", v);
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

/// Channel shape returned by list operations; omits the encoder tree.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_class: Option<ChannelClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<OutputDestination>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egress_endpoints: Option<Vec<ChannelEgressEndpoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ChannelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_attachments: Option<Vec<InputAttachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipelines_running_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ChannelState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl fmt::Debug for ChannelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ChannelSummary");
        if let Some(v) = &self.channel_class {
            s.field("channel_class", v);
        }
        if let Some(v) = &self.destinations {
            s.field("destinations", v);
        }
        if let Some(v) = &self.egress_endpoints {
            s.field("egress_endpoints", v);
        }
        if let Some(v) = &self.id {
            s.field("id", v);
        }
        if let Some(v) = &self.input_attachments {
            s.field("input_attachments", v);
        }
        if let Some(v) = &self.log_level {
            s.field("log_level", v);
        }
        if let Some(v) = &self.name {
            s.field("name", v);
        }
        if let Some(v) = &self.pipelines_running_count {
            s.field("pipelines_running_count", v);
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

/// A named destination referenced by output groups through
/// [`OutputLocationRef`](crate::outputs::OutputLocationRef).
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputDestination {
    /// Ref ID matched against `destination_ref_id`. Unique within the
    /// channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// One settings entry per pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<OutputDestinationSettings>>,
}

impl OutputDestination {
    /// Append one settings entry, creating the backing list on first
    /// use.
    pub fn add_setting(
        &mut self,
        setting: OutputDestinationSettings,
    ) -> &mut Self {
        self.settings.get_or_insert_with(Vec::new).push(setting);
        self
    }
}

impl fmt::Debug for OutputDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("OutputDestination");
        if let Some(v) = &self.id {
            s.field("id", v);
        }
        if let Some(v) = &self.settings {
            s.field("settings", v);
        }
        s.finish()
    }
}

/// Connection details for one pipeline's copy of a destination.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputDestinationSettings {
    /// Name of the stored password parameter, not the password itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_param: Option<String>,
    /// Stream name or key appended to the URL by the protocol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl fmt::Debug for OutputDestinationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("OutputDestinationSettings");
        if let Some(v) = &self.password_param {
            s.field("password_param", v);
        }
        if let Some(v) = &self.stream_name {
            s.field("stream_name", v);
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

/// Source address one pipeline emits from.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelEgressEndpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
}

impl fmt::Debug for ChannelEgressEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ChannelEgressEndpoint");
        if let Some(v) = &self.source_ip {
            s.field("source_ip", v);
        }
        s.finish()
    }
}

/// Runtime detail for one pipeline of a running channel.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PipelineDetail {
    /// Name of the input attachment currently feeding this pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_input_attachment_name: Option<String>,
    /// Name of the schedule action that selected the active input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_input_switch_action_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<PipelineId>,
}

impl fmt::Debug for PipelineDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("PipelineDetail");
        if let Some(v) = &self.active_input_attachment_name {
            s.field("active_input_attachment_name", v);
        }
        if let Some(v) = &self.active_input_switch_action_name {
            s.field("active_input_switch_action_name", v);
        }
        if let Some(v) = &self.pipeline_id {
            s.field("pipeline_id", v);
        }
        s.finish()
    }
}

/// Request to create a channel.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateChannelRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_class: Option<ChannelClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<OutputDestination>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoder_settings: Option<EncoderSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_attachments: Option<Vec<InputAttachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    /// Name of the channel. Length 1 to 255.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Idempotency token; retries with the same token are deduplicated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl CreateChannelRequest {
    /// Fill `request_id` with a fresh idempotency token.
    pub fn with_fresh_request_id(mut self) -> Self {
        self.request_id = Some(Uuid::new_v4().to_string());
        self
    }

    /// Append one destination, creating the backing list on first use.
    pub fn add_destination(
        &mut self,
        destination: OutputDestination,
    ) -> &mut Self {
        self.destinations
            .get_or_insert_with(Vec::new)
            .push(destination);
        self
    }

    /// Append one input attachment, creating the backing list on first
    /// use.
    pub fn add_input_attachment(
        &mut self,
        attachment: InputAttachment,
    ) -> &mut Self {
        self.input_attachments
            .get_or_insert_with(Vec::new)
            .push(attachment);
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

impl fmt::Debug for CreateChannelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("CreateChannelRequest");
        if let Some(v) = &self.channel_class {
            s.field("channel_class", v);
        }
        if let Some(v) = &self.destinations {
            s.field("destinations", v);
        }
        if let Some(v) = &self.encoder_settings {
            s.field("encoder_settings", v);
        }
        if let Some(v) = &self.input_attachments {
            s.field("input_attachments", v);
        }
        if let Some(v) = &self.log_level {
            s.field("log_level", v);
        }
        if let Some(v) = &self.name {
            s.field("name", v);
        }
        if let Some(v) = &self.request_id {
            s.field("request_id", v);
        }
        if let Some(v) = &self.tags {
            s.field("tags", v);
        }
        s.finish()
    }
}

/// Request to update a channel. Only idle channels accept updates.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateChannelRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<OutputDestination>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoder_settings: Option<EncoderSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_attachments: Option<Vec<InputAttachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl fmt::Debug for UpdateChannelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("UpdateChannelRequest");
        if let Some(v) = &self.channel_id {
            s.field("channel_id", v);
        }
        if let Some(v) = &self.destinations {
            s.field("destinations", v);
        }
        if let Some(v) = &self.encoder_settings {
            s.field("encoder_settings", v);
        }
        if let Some(v) = &self.input_attachments {
            s.field("input_attachments", v);
        }
        if let Some(v) = &self.log_level {
            s.field("log_level", v);
        }
        if let Some(v) = &self.name {
            s.field("name", v);
        }
        s.finish()
    }
}

/// Request to delete a channel.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteChannelRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
}

impl fmt::Debug for DeleteChannelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DeleteChannelRequest");
        if let Some(v) = &self.channel_id {
            s.field("channel_id", v);
        }
        s.finish()
    }
}

/// Request to describe a channel.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChannelRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
}

impl fmt::Debug for DescribeChannelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DescribeChannelRequest");
        if let Some(v) = &self.channel_id {
            s.field("channel_id", v);
        }
        s.finish()
    }
}

/// Request to start a channel.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartChannelRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
}

impl fmt::Debug for StartChannelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("StartChannelRequest");
        if let Some(v) = &self.channel_id {
            s.field("channel_id", v);
        }
        s.finish()
    }
}

/// Request to stop a channel.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopChannelRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
}

impl fmt::Debug for StopChannelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("StopChannelRequest");
        if let Some(v) = &self.channel_id {
            s.field("channel_id", v);
        }
        s.finish()
    }
}

/// Request one page of channels.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChannelsRequest {
    /// Page size. Range 1 to 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Opaque continuation token from the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Debug for ListChannelsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ListChannelsRequest");
        if let Some(v) = &self.max_results {
            s.field("max_results", v);
        }
        if let Some(v) = &self.next_token {
            s.field("next_token", v);
        }
        s.finish()
    }
}

/// One page of channels.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChannelsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ChannelSummary>>,
    /// Token for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Debug for ListChannelsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ListChannelsResponse");
        if let Some(v) = &self.channels {
            s.field("channels", v);
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
    fn only_idle_channels_can_be_started() {
        for state in ChannelState::values() {
            assert_eq!(
                state.can_be_started(),
                *state == ChannelState::Idle,
                "{state}"
            );
        }
    }

    #[test]
    fn channel_class_pipeline_counts() {
        assert_eq!(ChannelClass::Standard.pipeline_count(), 2);
        assert_eq!(ChannelClass::SinglePipeline.pipeline_count(), 1);
    }
}
