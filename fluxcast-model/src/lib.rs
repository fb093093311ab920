//! Core control-plane data model shared across Fluxcast crates.
//!
//! Everything here is a plain value: configuration records with optional
//! fields, closed string-token enumerations, and the two error cases the
//! model layer can produce. Transport, signing, retries, and pagination
//! traversal live in the consuming client, not here.
#![allow(missing_docs)]

pub mod audio;
pub mod channel;
pub mod encoder;
pub mod error;
pub mod ids;
pub mod input;
pub mod multiplex;
pub mod outputs;
pub mod prelude;
pub mod schedule;
pub mod tags;
pub mod video;

// Intentionally curated re-exports for downstream consumers.
pub use audio::{
    AacCodingMode, AacProfile, AacRateControlMode, AacSettings,
    AudioCodecSettings, AudioDescription, AudioNormalizationSettings,
    RemixSettings,
};
pub use channel::{
    Channel, ChannelClass, ChannelEgressEndpoint, ChannelState,
    ChannelSummary, CreateChannelRequest, DeleteChannelRequest,
    DescribeChannelRequest, ListChannelsRequest, ListChannelsResponse,
    LogLevel, OutputDestination, OutputDestinationSettings, PipelineDetail,
    PipelineId, StartChannelRequest, StopChannelRequest,
    UpdateChannelRequest,
};
pub use encoder::{
    EncoderSettings, GlobalConfiguration, InputLocation, InputLossBehavior,
    TimecodeConfig, TimecodeSource,
};
pub use error::{ModelError, Result as ModelResult};
pub use ids::{ChannelId, InputId, InputSecurityGroupId, MultiplexId};
pub use input::{
    AudioSelector, CreateInputRequest, CreateInputSecurityGroupRequest,
    DeleteInputRequest, DescribeInputRequest, Input, InputAttachment,
    InputClass, InputDestination, InputDestinationRequest,
    InputSecurityGroup, InputSettings, InputSource, InputSourceRequest,
    InputState, InputType, ListInputSecurityGroupsRequest,
    ListInputSecurityGroupsResponse, ListInputsRequest, ListInputsResponse,
    UpdateInputRequest, VideoSelector,
};
pub use multiplex::{
    CreateMultiplexProgramRequest, CreateMultiplexRequest,
    DeleteMultiplexRequest, ListMultiplexProgramsRequest,
    ListMultiplexProgramsResponse, ListMultiplexesRequest,
    ListMultiplexesResponse, Multiplex, MultiplexProgram,
    MultiplexProgramSettings, MultiplexSettings, MultiplexState,
    MultiplexSummary,
};
pub use outputs::{
    ArchiveGroupSettings, HlsGroupSettings, Output, OutputGroup,
    OutputGroupSettings, OutputLocationRef, OutputSettings,
    RtmpGroupSettings, UdpGroupSettings,
};
pub use schedule::{
    BatchScheduleActionCreateRequest, BatchScheduleActionCreateResult,
    BatchScheduleActionDeleteRequest, BatchScheduleActionDeleteResult,
    BatchUpdateScheduleRequest, BatchUpdateScheduleResponse,
    DescribeScheduleRequest, DescribeScheduleResponse, ScheduleAction,
    ScheduleActionSettings, ScheduleActionStartSettings,
};
pub use tags::Tags;
pub use video::{
    H264Settings, H265Settings, VideoCodecSettings, VideoDescription,
};
