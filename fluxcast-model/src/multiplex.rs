//! Multiplexes: fixed-bitrate transport streams that carry several
//! channel programs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ModelError, Result};
use crate::ids::{ChannelId, MultiplexId};
use crate::tags::Tags;

/// Lifecycle state of a multiplex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MultiplexState {
    Creating,
    CreateFailed,
    Idle,
    Starting,
    Running,
    Recovering,
    Stopping,
    Deleting,
    Deleted,
}

impl MultiplexState {
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
        }
    }
}

impl fmt::Display for MultiplexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MultiplexState {
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
            _ => Err(ModelError::invalid_value("MultiplexState", s)),
        }
    }
}

/// Which channel pipeline a program prefers to source from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreferredChannelPipeline {
    #[serde(rename = "CURRENTLY_ACTIVE")]
    CurrentlyActive,
    #[serde(rename = "PIPELINE_0")]
    Pipeline0,
    #[serde(rename = "PIPELINE_1")]
    Pipeline1,
}

impl PreferredChannelPipeline {
    pub fn values() -> &'static [Self] {
        &[Self::CurrentlyActive, Self::Pipeline0, Self::Pipeline1]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentlyActive => "CURRENTLY_ACTIVE",
            Self::Pipeline0 => "PIPELINE_0",
            Self::Pipeline1 => "PIPELINE_1",
        }
    }
}

impl fmt::Display for PreferredChannelPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PreferredChannelPipeline {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CURRENTLY_ACTIVE" => Ok(Self::CurrentlyActive),
            "PIPELINE_0" => Ok(Self::Pipeline0),
            "PIPELINE_1" => Ok(Self::Pipeline1),
            _ => {
                Err(ModelError::invalid_value("PreferredChannelPipeline", s))
            }
        }
    }
}

/// A multiplex as the service reports it.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Multiplex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<MultiplexOutputDestination>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MultiplexId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplex_settings: Option<MultiplexSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipelines_running_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<MultiplexState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl fmt::Debug for Multiplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Multiplex");
        if let Some(v) = &self.destinations {
            s.field("destinations", v);
        }
        if let Some(v) = &self.id {
            s.field("id", v);
        }
        if let Some(v) = &self.multiplex_settings {
            s.field("multiplex_settings", v);
        }
        if let Some(v) = &self.name {
            s.field("name", v);
        }
        if let Some(v) = &self.pipelines_running_count {
            s.field("pipelines_running_count", v);
        }
        if let Some(v) = &self.program_count {
            s.field("program_count", v);
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

/// Transport stream parameters shared by all programs of a multiplex.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiplexSettings {
    /// Maximum video buffer delay in milliseconds. Range 800 to 3000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_video_buffer_delay_milliseconds: Option<i32>,
    /// Total transport stream bitrate in bits/second. Range 1000000 to
    /// 100000000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_stream_bitrate: Option<i32>,
    /// Transport stream ID. Range 0 to 65535.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_stream_id: Option<i32>,
    /// Bitrate reserved for overhead. Range 0 to 100000000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_stream_reserved_bitrate: Option<i32>,
}

impl fmt::Debug for MultiplexSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MultiplexSettings");
        if let Some(v) = &self.maximum_video_buffer_delay_milliseconds {
            s.field("maximum_video_buffer_delay_milliseconds", v);
        }
        if let Some(v) = &self.transport_stream_bitrate {
            s.field("transport_stream_bitrate", v);
        }
        if let Some(v) = &self.transport_stream_id {
            s.field("transport_stream_id", v);
        }
        if let Some(v) = &self.transport_stream_reserved_bitrate {
            s.field("transport_stream_reserved_bitrate", v);
        }
        s.finish()
    }
}

/// Multiplex shape returned by list operations.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiplexSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MultiplexId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplex_settings: Option<MultiplexSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipelines_running_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<MultiplexState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl fmt::Debug for MultiplexSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MultiplexSummary");
        if let Some(v) = &self.id {
            s.field("id", v);
        }
        if let Some(v) = &self.multiplex_settings {
            s.field("multiplex_settings", v);
        }
        if let Some(v) = &self.name {
            s.field("name", v);
        }
        if let Some(v) = &self.pipelines_running_count {
            s.field("pipelines_running_count", v);
        }
        if let Some(v) = &self.program_count {
            s.field("program_count", v);
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

/// Where one pipeline of the multiplex emits its transport stream.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiplexOutputDestination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relay_settings: Option<MultiplexRelayOutputDestinationSettings>,
}

impl fmt::Debug for MultiplexOutputDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MultiplexOutputDestination");
        if let Some(v) = &self.relay_settings {
            s.field("relay_settings", v);
        }
        s.finish()
    }
}

/// Delivery into the relay service by entitlement.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiplexRelayOutputDestinationSettings {
    /// ID of the relay entitlement granted to the receiving account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entitlement_id: Option<String>,
}

impl fmt::Debug for MultiplexRelayOutputDestinationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s =
            f.debug_struct("MultiplexRelayOutputDestinationSettings");
        if let Some(v) = &self.entitlement_id {
            s.field("entitlement_id", v);
        }
        s.finish()
    }
}

/// One program slot of a multiplex.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiplexProgram {
    /// ID of the channel feeding this program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplex_program_settings: Option<MultiplexProgramSettings>,
    /// Name unique within the multiplex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
}

impl fmt::Debug for MultiplexProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MultiplexProgram");
        if let Some(v) = &self.channel_id {
            s.field("channel_id", v);
        }
        if let Some(v) = &self.multiplex_program_settings {
            s.field("multiplex_program_settings", v);
        }
        if let Some(v) = &self.program_name {
            s.field("program_name", v);
        }
        s.finish()
    }
}

/// Program-level transport stream parameters.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiplexProgramSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_channel_pipeline: Option<PreferredChannelPipeline>,
    /// Program number in the PAT. Range 0 to 65535.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_descriptor: Option<MultiplexProgramServiceDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_settings: Option<MultiplexVideoSettings>,
}

impl fmt::Debug for MultiplexProgramSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MultiplexProgramSettings");
        if let Some(v) = &self.preferred_channel_pipeline {
            s.field("preferred_channel_pipeline", v);
        }
        if let Some(v) = &self.program_number {
            s.field("program_number", v);
        }
        if let Some(v) = &self.service_descriptor {
            s.field("service_descriptor", v);
        }
        if let Some(v) = &self.video_settings {
            s.field("video_settings", v);
        }
        s.finish()
    }
}

/// DVB service descriptor inserted for this program.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiplexProgramServiceDescriptor {
    /// Provider name. Maximum length 256.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    /// Service name. Maximum length 256.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

impl fmt::Debug for MultiplexProgramServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MultiplexProgramServiceDescriptor");
        if let Some(v) = &self.provider_name {
            s.field("provider_name", v);
        }
        if let Some(v) = &self.service_name {
            s.field("service_name", v);
        }
        s.finish()
    }
}

/// Constant- or statistically-multiplexed video bandwidth for a program.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiplexVideoSettings {
    /// Constant bitrate in bits/second. Range 100000 to 100000000.
    /// Mutually exclusive with `statmux_settings`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant_bitrate: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statmux_settings: Option<MultiplexStatmuxVideoSettings>,
}

impl fmt::Debug for MultiplexVideoSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MultiplexVideoSettings");
        if let Some(v) = &self.constant_bitrate {
            s.field("constant_bitrate", v);
        }
        if let Some(v) = &self.statmux_settings {
            s.field("statmux_settings", v);
        }
        s.finish()
    }
}

/// Statistical multiplexing bounds for a program's video.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiplexStatmuxVideoSettings {
    /// Maximum statmux bitrate in bits/second. Range 100000 to
    /// 100000000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_bitrate: Option<i32>,
    /// Minimum statmux bitrate in bits/second. Range 100000 to
    /// 100000000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_bitrate: Option<i32>,
    /// Bit allocation priority relative to other programs. Range -5 to
    /// 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl fmt::Debug for MultiplexStatmuxVideoSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MultiplexStatmuxVideoSettings");
        if let Some(v) = &self.maximum_bitrate {
            s.field("maximum_bitrate", v);
        }
        if let Some(v) = &self.minimum_bitrate {
            s.field("minimum_bitrate", v);
        }
        if let Some(v) = &self.priority {
            s.field("priority", v);
        }
        s.finish()
    }
}

/// Program shape returned by list operations.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiplexProgramSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
}

impl fmt::Debug for MultiplexProgramSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MultiplexProgramSummary");
        if let Some(v) = &self.channel_id {
            s.field("channel_id", v);
        }
        if let Some(v) = &self.program_name {
            s.field("program_name", v);
        }
        s.finish()
    }
}

/// Request to create a multiplex.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMultiplexRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplex_settings: Option<MultiplexSettings>,
    /// Name of the multiplex. Length 1 to 255.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Idempotency token; retries with the same token are deduplicated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl CreateMultiplexRequest {
    /// Fill `request_id` with a fresh idempotency token.
    pub fn with_fresh_request_id(mut self) -> Self {
        self.request_id = Some(Uuid::new_v4().to_string());
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

impl fmt::Debug for CreateMultiplexRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("CreateMultiplexRequest");
        if let Some(v) = &self.multiplex_settings {
            s.field("multiplex_settings", v);
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

/// Request to add a program to a multiplex.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMultiplexProgramRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplex_id: Option<MultiplexId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplex_program_settings: Option<MultiplexProgramSettings>,
    /// Name unique within the multiplex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    /// Idempotency token; retries with the same token are deduplicated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl CreateMultiplexProgramRequest {
    /// Fill `request_id` with a fresh idempotency token.
    pub fn with_fresh_request_id(mut self) -> Self {
        self.request_id = Some(Uuid::new_v4().to_string());
        self
    }
}

impl fmt::Debug for CreateMultiplexProgramRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("CreateMultiplexProgramRequest");
        if let Some(v) = &self.multiplex_id {
            s.field("multiplex_id", v);
        }
        if let Some(v) = &self.multiplex_program_settings {
            s.field("multiplex_program_settings", v);
        }
        if let Some(v) = &self.program_name {
            s.field("program_name", v);
        }
        if let Some(v) = &self.request_id {
            s.field("request_id", v);
        }
        s.finish()
    }
}

/// Request to delete a multiplex. All programs must be removed first.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteMultiplexRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplex_id: Option<MultiplexId>,
}

impl fmt::Debug for DeleteMultiplexRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DeleteMultiplexRequest");
        if let Some(v) = &self.multiplex_id {
            s.field("multiplex_id", v);
        }
        s.finish()
    }
}

/// Request one page of multiplexes.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMultiplexesRequest {
    /// Page size. Range 1 to 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Opaque continuation token from the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Debug for ListMultiplexesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ListMultiplexesRequest");
        if let Some(v) = &self.max_results {
            s.field("max_results", v);
        }
        if let Some(v) = &self.next_token {
            s.field("next_token", v);
        }
        s.finish()
    }
}

/// One page of multiplexes.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMultiplexesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplexes: Option<Vec<MultiplexSummary>>,
    /// Token for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Debug for ListMultiplexesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ListMultiplexesResponse");
        if let Some(v) = &self.multiplexes {
            s.field("multiplexes", v);
        }
        if let Some(v) = &self.next_token {
            s.field("next_token", v);
        }
        s.finish()
    }
}

/// Request one page of a multiplex's programs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMultiplexProgramsRequest {
    /// Page size. Range 1 to 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplex_id: Option<MultiplexId>,
    /// Opaque continuation token from the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Debug for ListMultiplexProgramsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ListMultiplexProgramsRequest");
        if let Some(v) = &self.max_results {
            s.field("max_results", v);
        }
        if let Some(v) = &self.multiplex_id {
            s.field("multiplex_id", v);
        }
        if let Some(v) = &self.next_token {
            s.field("next_token", v);
        }
        s.finish()
    }
}

/// One page of a multiplex's programs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMultiplexProgramsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplex_programs: Option<Vec<MultiplexProgramSummary>>,
    /// Token for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Debug for ListMultiplexProgramsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ListMultiplexProgramsResponse");
        if let Some(v) = &self.multiplex_programs {
            s.field("multiplex_programs", v);
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
    fn multiplex_state_round_trips() {
        for state in MultiplexState::values() {
            assert_eq!(
                state.as_str().parse::<MultiplexState>().unwrap(),
                *state
            );
        }
    }

    #[test]
    fn statmux_and_cbr_are_separate_fields() {
        let mut video = MultiplexVideoSettings::default();
        video.constant_bitrate = Some(4_000_000);
        assert!(video.statmux_settings.is_none());
    }
}
