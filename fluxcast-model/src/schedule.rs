//! Channel schedules: actions applied to a running channel at a fixed
//! time, immediately, or relative to another action.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::channel::PipelineId;
use crate::encoder::InputLocation;
use crate::error::{ModelError, Result};
use crate::ids::ChannelId;

/// Where a follow-mode action anchors on its reference action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FollowPoint {
    End,
    Start,
}

impl FollowPoint {
    pub fn values() -> &'static [Self] {
        &[Self::End, Self::Start]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::End => "END",
            Self::Start => "START",
        }
    }
}

impl fmt::Display for FollowPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FollowPoint {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "END" => Ok(Self::End),
            "START" => Ok(Self::Start),
            _ => Err(ModelError::invalid_value("FollowPoint", s)),
        }
    }
}

/// One named schedule entry. The same shape is used in create requests
/// and in create/delete results.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleAction {
    /// Name unique within the channel's schedule. Length 1 to 256.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_action_settings: Option<ScheduleActionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_action_start_settings: Option<ScheduleActionStartSettings>,
}

impl fmt::Debug for ScheduleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ScheduleAction");
        if let Some(v) = &self.action_name {
            s.field("action_name", v);
        }
        if let Some(v) = &self.schedule_action_settings {
            s.field("schedule_action_settings", v);
        }
        if let Some(v) = &self.schedule_action_start_settings {
            s.field("schedule_action_start_settings", v);
        }
        s.finish()
    }
}

/// What the action does; exactly one should be populated.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleActionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_switch_settings: Option<InputSwitchScheduleActionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_state_settings: Option<PauseStateScheduleActionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_image_activate_settings:
        Option<StaticImageActivateScheduleActionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_image_deactivate_settings:
        Option<StaticImageDeactivateScheduleActionSettings>,
}

impl fmt::Debug for ScheduleActionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ScheduleActionSettings");
        if let Some(v) = &self.input_switch_settings {
            s.field("input_switch_settings", v);
        }
        if let Some(v) = &self.pause_state_settings {
            s.field("pause_state_settings", v);
        }
        if let Some(v) = &self.static_image_activate_settings {
            s.field("static_image_activate_settings", v);
        }
        if let Some(v) = &self.static_image_deactivate_settings {
            s.field("static_image_deactivate_settings", v);
        }
        s.finish()
    }
}

/// When the action runs; exactly one should be populated.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleActionStartSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_mode_schedule_action_start_settings:
        Option<FixedModeScheduleActionStartSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_mode_schedule_action_start_settings:
        Option<FollowModeScheduleActionStartSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immediate_mode_schedule_action_start_settings:
        Option<ImmediateModeScheduleActionStartSettings>,
}

impl fmt::Debug for ScheduleActionStartSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ScheduleActionStartSettings");
        if let Some(v) = &self.fixed_mode_schedule_action_start_settings {
            s.field("fixed_mode_schedule_action_start_settings", v);
        }
        if let Some(v) = &self.follow_mode_schedule_action_start_settings {
            s.field("follow_mode_schedule_action_start_settings", v);
        }
        if let Some(v) = &self.immediate_mode_schedule_action_start_settings
        {
            s.field("immediate_mode_schedule_action_start_settings", v);
        }
        s.finish()
    }
}

/// Run at a wall-clock time. The time must be at least 15 seconds in
/// the future when the request is submitted.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FixedModeScheduleActionStartSettings {
    /// UTC start time, serialized as RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

impl fmt::Debug for FixedModeScheduleActionStartSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("FixedModeScheduleActionStartSettings");
        if let Some(v) = &self.time {
            s.field("time", v);
        }
        s.finish()
    }
}

/// Run relative to another action in the same schedule.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FollowModeScheduleActionStartSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_point: Option<FollowPoint>,
    /// Name of the action being followed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_action_name: Option<String>,
}

impl fmt::Debug for FollowModeScheduleActionStartSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("FollowModeScheduleActionStartSettings");
        if let Some(v) = &self.follow_point {
            s.field("follow_point", v);
        }
        if let Some(v) = &self.reference_action_name {
            s.field("reference_action_name", v);
        }
        s.finish()
    }
}

/// Run as soon as the request is processed. Carries no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImmediateModeScheduleActionStartSettings {}

/// Switch the channel to a different input attachment.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputSwitchScheduleActionSettings {
    /// Name of the input attachment to switch to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_attachment_name_reference: Option<String>,
    /// Path overrides for dynamic pull inputs, one per pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_path: Option<Vec<String>>,
}

impl InputSwitchScheduleActionSettings {
    /// Append one path override, creating the backing list on first
    /// use.
    pub fn add_url_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.url_path.get_or_insert_with(Vec::new).push(path.into());
        self
    }
}

impl fmt::Debug for InputSwitchScheduleActionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputSwitchScheduleActionSettings");
        if let Some(v) = &self.input_attachment_name_reference {
            s.field("input_attachment_name_reference", v);
        }
        if let Some(v) = &self.url_path {
            s.field("url_path", v);
        }
        s.finish()
    }
}

/// Pause or resume pipelines; pipelines listed are paused, the rest
/// resume.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PauseStateScheduleActionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipelines: Option<Vec<PipelinePauseStateSettings>>,
}

impl PauseStateScheduleActionSettings {
    /// Append one pipeline entry, creating the backing list on first
    /// use.
    pub fn add_pipeline(
        &mut self,
        pipeline: PipelinePauseStateSettings,
    ) -> &mut Self {
        self.pipelines.get_or_insert_with(Vec::new).push(pipeline);
        self
    }
}

impl fmt::Debug for PauseStateScheduleActionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("PauseStateScheduleActionSettings");
        if let Some(v) = &self.pipelines {
            s.field("pipelines", v);
        }
        s.finish()
    }
}

/// Marks one pipeline as paused.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PipelinePauseStateSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<PipelineId>,
}

impl fmt::Debug for PipelinePauseStateSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("PipelinePauseStateSettings");
        if let Some(v) = &self.pipeline_id {
            s.field("pipeline_id", v);
        }
        s.finish()
    }
}

/// Overlay a static image on the video.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StaticImageActivateScheduleActionSettings {
    /// How long the image stays up in milliseconds; absent means until
    /// deactivated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    /// Fade-in time in milliseconds. Minimum 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_in: Option<i32>,
    /// Fade-out time in milliseconds. Minimum 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_out: Option<i32>,
    /// Rendered height in pixels; absent keeps the source height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    /// The image to overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<InputLocation>,
    /// Left edge placement in pixels from the frame's left edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_x: Option<i32>,
    /// Top edge placement in pixels from the frame's top edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_y: Option<i32>,
    /// Stacking layer. Range 0 to 7; higher layers draw on top.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<i32>,
    /// Opacity percent. Range 0 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<i32>,
    /// Rendered width in pixels; absent keeps the source width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
}

impl fmt::Debug for StaticImageActivateScheduleActionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s =
            f.debug_struct("StaticImageActivateScheduleActionSettings");
        if let Some(v) = &self.duration {
            s.field("duration", v);
        }
        if let Some(v) = &self.fade_in {
            s.field("fade_in", v);
        }
        if let Some(v) = &self.fade_out {
            s.field("fade_out", v);
        }
        if let Some(v) = &self.height {
            s.field("height", v);
        }
        if let Some(v) = &self.image {
            s.field("image", v);
        }
        if let Some(v) = &self.image_x {
            s.field("image_x", v);
        }
        if let Some(v) = &self.image_y {
            s.field("image_y", v);
        }
        if let Some(v) = &self.layer {
            s.field("layer", v);
        }
        if let Some(v) = &self.opacity {
            s.field("opacity", v);
        }
        if let Some(v) = &self.width {
            s.field("width", v);
        }
        s.finish()
    }
}

/// Remove a static image overlay.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StaticImageDeactivateScheduleActionSettings {
    /// Fade-out time in milliseconds. Minimum 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_out: Option<i32>,
    /// Layer to clear. Range 0 to 7.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<i32>,
}

impl fmt::Debug for StaticImageDeactivateScheduleActionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s =
            f.debug_struct("StaticImageDeactivateScheduleActionSettings");
        if let Some(v) = &self.fade_out {
            s.field("fade_out", v);
        }
        if let Some(v) = &self.layer {
            s.field("layer", v);
        }
        s.finish()
    }
}

/// Actions to add in a batch schedule update.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchScheduleActionCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_actions: Option<Vec<ScheduleAction>>,
}

impl BatchScheduleActionCreateRequest {
    /// Append one action, creating the backing list on first use.
    pub fn add_schedule_action(
        &mut self,
        action: ScheduleAction,
    ) -> &mut Self {
        self.schedule_actions
            .get_or_insert_with(Vec::new)
            .push(action);
        self
    }
}

impl fmt::Debug for BatchScheduleActionCreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("BatchScheduleActionCreateRequest");
        if let Some(v) = &self.schedule_actions {
            s.field("schedule_actions", v);
        }
        s.finish()
    }
}

/// Actions added by a batch schedule update, as the service recorded
/// them.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchScheduleActionCreateResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_actions: Option<Vec<ScheduleAction>>,
}

impl fmt::Debug for BatchScheduleActionCreateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("BatchScheduleActionCreateResult");
        if let Some(v) = &self.schedule_actions {
            s.field("schedule_actions", v);
        }
        s.finish()
    }
}

/// Action names to remove in a batch schedule update.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchScheduleActionDeleteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_names: Option<Vec<String>>,
}

impl BatchScheduleActionDeleteRequest {
    /// Append one action name, creating the backing list on first use.
    pub fn add_action_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.action_names
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }
}

impl fmt::Debug for BatchScheduleActionDeleteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("BatchScheduleActionDeleteRequest");
        if let Some(v) = &self.action_names {
            s.field("action_names", v);
        }
        s.finish()
    }
}

/// Actions removed by a batch schedule update, as they stood when
/// removed.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchScheduleActionDeleteResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_actions: Option<Vec<ScheduleAction>>,
}

impl fmt::Debug for BatchScheduleActionDeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("BatchScheduleActionDeleteResult");
        if let Some(v) = &self.schedule_actions {
            s.field("schedule_actions", v);
        }
        s.finish()
    }
}

/// Atomic create-and-delete update of a channel's schedule.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchUpdateScheduleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creates: Option<BatchScheduleActionCreateRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletes: Option<BatchScheduleActionDeleteRequest>,
}

impl fmt::Debug for BatchUpdateScheduleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("BatchUpdateScheduleRequest");
        if let Some(v) = &self.channel_id {
            s.field("channel_id", v);
        }
        if let Some(v) = &self.creates {
            s.field("creates", v);
        }
        if let Some(v) = &self.deletes {
            s.field("deletes", v);
        }
        s.finish()
    }
}

/// Outcome of a batch schedule update.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchUpdateScheduleResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creates: Option<BatchScheduleActionCreateResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletes: Option<BatchScheduleActionDeleteResult>,
}

impl fmt::Debug for BatchUpdateScheduleResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("BatchUpdateScheduleResponse");
        if let Some(v) = &self.creates {
            s.field("creates", v);
        }
        if let Some(v) = &self.deletes {
            s.field("deletes", v);
        }
        s.finish()
    }
}

/// Request one page of a channel's schedule.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeScheduleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
    /// Page size. Range 1 to 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Opaque continuation token from the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Debug for DescribeScheduleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DescribeScheduleRequest");
        if let Some(v) = &self.channel_id {
            s.field("channel_id", v);
        }
        if let Some(v) = &self.max_results {
            s.field("max_results", v);
        }
        if let Some(v) = &self.next_token {
            s.field("next_token", v);
        }
        s.finish()
    }
}

/// One page of a channel's schedule.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeScheduleResponse {
    /// Token for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_actions: Option<Vec<ScheduleAction>>,
}

impl fmt::Debug for DescribeScheduleResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DescribeScheduleResponse");
        if let Some(v) = &self.next_token {
            s.field("next_token", v);
        }
        if let Some(v) = &self.schedule_actions {
            s.field("schedule_actions", v);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_schedule_action_is_lazy() {
        let mut creates = BatchScheduleActionCreateRequest::default();
        assert!(creates.schedule_actions.is_none());

        creates.add_schedule_action(ScheduleAction {
            action_name: Some("switch-to-backup".to_string()),
            ..Default::default()
        });
        assert_eq!(
            creates.schedule_actions.as_ref().map(Vec::len),
            Some(1)
        );
    }

    #[test]
    fn follow_point_rejects_unknown_tokens() {
        assert!("MIDDLE".parse::<FollowPoint>().is_err());
        assert!("".parse::<FollowPoint>().is_err());
    }
}
