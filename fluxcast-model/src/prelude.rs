//! Consumer-facing snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes
//! when assembling requests in client or tooling code.

pub use super::audio::{
    AacCodingMode, AacInputType, AacProfile, AacRateControlMode,
    AacRawFormat, AacSettings, AacSpec, AacVbrQuality, AudioChannelMapping,
    AudioCodecSettings, AudioDescription, AudioNormalizationSettings,
    AudioType, AudioTypeControl, InputChannelLevel, RemixSettings,
};
pub use super::channel::{
    Channel, ChannelClass, ChannelEgressEndpoint, ChannelState,
    ChannelSummary, CreateChannelRequest, DeleteChannelRequest,
    DescribeChannelRequest, ListChannelsRequest, ListChannelsResponse,
    LogLevel, OutputDestination, OutputDestinationSettings, PipelineDetail,
    PipelineId, StartChannelRequest, StopChannelRequest,
    UpdateChannelRequest,
};
pub use super::encoder::{
    EncoderSettings, GlobalConfiguration, InputEndAction, InputLocation,
    InputLossBehavior, OutputLockingMode, OutputTimingSource,
    TimecodeConfig, TimecodeSource,
};
pub use super::error::{ModelError, Result as ModelResult};
pub use super::ids::{ChannelId, InputId, InputSecurityGroupId, MultiplexId};
pub use super::input::{
    AudioLanguageSelection, AudioPidSelection, AudioSelector,
    AudioSelectorSettings, CreateInputRequest,
    CreateInputSecurityGroupRequest, DeleteInputRequest,
    DescribeInputRequest, Input, InputAttachment, InputClass,
    InputDestination, InputDestinationRequest, InputSecurityGroup,
    InputSettings, InputSource, InputSourceRequest, InputState, InputType,
    InputWhitelistRule, InputWhitelistRuleCidr,
    ListInputSecurityGroupsRequest, ListInputSecurityGroupsResponse,
    ListInputsRequest, ListInputsResponse, UpdateInputRequest,
    VideoSelector,
};
pub use super::multiplex::{
    CreateMultiplexProgramRequest, CreateMultiplexRequest,
    DeleteMultiplexRequest, ListMultiplexProgramsRequest,
    ListMultiplexProgramsResponse, ListMultiplexesRequest,
    ListMultiplexesResponse, Multiplex, MultiplexProgram,
    MultiplexProgramServiceDescriptor, MultiplexProgramSettings,
    MultiplexSettings, MultiplexState, MultiplexSummary,
    MultiplexVideoSettings, PreferredChannelPipeline,
};
pub use super::outputs::{
    ArchiveContainerSettings, ArchiveGroupSettings, ArchiveOutputSettings,
    HlsGroupSettings, HlsMode, HlsOutputSettings, M2tsSettings,
    M3u8Settings, Output, OutputGroup, OutputGroupSettings,
    OutputLocationRef, OutputSettings, RtmpGroupSettings,
    RtmpOutputSettings, UdpContainerSettings, UdpGroupSettings,
    UdpOutputSettings,
};
pub use super::schedule::{
    BatchScheduleActionCreateRequest, BatchScheduleActionCreateResult,
    BatchScheduleActionDeleteRequest, BatchScheduleActionDeleteResult,
    BatchUpdateScheduleRequest, BatchUpdateScheduleResponse,
    DescribeScheduleRequest, DescribeScheduleResponse,
    FixedModeScheduleActionStartSettings, FollowModeScheduleActionStartSettings,
    FollowPoint, ImmediateModeScheduleActionStartSettings,
    InputSwitchScheduleActionSettings, PauseStateScheduleActionSettings,
    ScheduleAction, ScheduleActionSettings, ScheduleActionStartSettings,
    StaticImageActivateScheduleActionSettings,
    StaticImageDeactivateScheduleActionSettings,
};
pub use super::tags::Tags;
pub use super::video::{
    AdaptiveQuantization, GopSizeUnits, H264Profile, H264RateControlMode,
    H264Settings, H265Profile, H265RateControlMode, H265Settings,
    RespondToAfd, ScalingBehavior, ScanType, VideoCodecSettings,
    VideoDescription,
};
