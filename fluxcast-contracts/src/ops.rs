//! Operation surfaces the transport client implements.
//!
//! Each trait maps one resource family's control-plane calls onto the
//! model's request/response records. The associated `Error` covers
//! everything the remote side can fail with (validation, throttling,
//! authorization); the model layer's own two error cases never pass
//! through here.

use fluxcast_model::channel::{
    Channel, CreateChannelRequest, DeleteChannelRequest,
    DescribeChannelRequest, ListChannelsRequest, ListChannelsResponse,
    StartChannelRequest, StopChannelRequest, UpdateChannelRequest,
};
use fluxcast_model::input::{
    CreateInputRequest, CreateInputSecurityGroupRequest,
    DeleteInputRequest, DescribeInputRequest, Input, InputSecurityGroup,
    ListInputSecurityGroupsRequest, ListInputSecurityGroupsResponse,
    ListInputsRequest, ListInputsResponse, UpdateInputRequest,
};
use fluxcast_model::multiplex::{
    CreateMultiplexProgramRequest, CreateMultiplexRequest,
    DeleteMultiplexRequest, ListMultiplexProgramsRequest,
    ListMultiplexProgramsResponse, ListMultiplexesRequest,
    ListMultiplexesResponse, Multiplex, MultiplexProgram,
};
use fluxcast_model::schedule::{
    BatchUpdateScheduleRequest, BatchUpdateScheduleResponse,
    DescribeScheduleRequest, DescribeScheduleResponse,
};

/// Channel lifecycle operations.
pub trait ChannelOps {
    type Error;

    fn create_channel(
        &self,
        request: CreateChannelRequest,
    ) -> Result<Channel, Self::Error>;

    fn describe_channel(
        &self,
        request: DescribeChannelRequest,
    ) -> Result<Channel, Self::Error>;

    fn update_channel(
        &self,
        request: UpdateChannelRequest,
    ) -> Result<Channel, Self::Error>;

    /// Returns the channel as it stood at deletion.
    fn delete_channel(
        &self,
        request: DeleteChannelRequest,
    ) -> Result<Channel, Self::Error>;

    fn start_channel(
        &self,
        request: StartChannelRequest,
    ) -> Result<Channel, Self::Error>;

    fn stop_channel(
        &self,
        request: StopChannelRequest,
    ) -> Result<Channel, Self::Error>;

    fn list_channels(
        &self,
        request: ListChannelsRequest,
    ) -> Result<ListChannelsResponse, Self::Error>;
}

/// Input and input security group operations.
pub trait InputOps {
    type Error;

    fn create_input(
        &self,
        request: CreateInputRequest,
    ) -> Result<Input, Self::Error>;

    fn describe_input(
        &self,
        request: DescribeInputRequest,
    ) -> Result<Input, Self::Error>;

    fn update_input(
        &self,
        request: UpdateInputRequest,
    ) -> Result<Input, Self::Error>;

    fn delete_input(
        &self,
        request: DeleteInputRequest,
    ) -> Result<(), Self::Error>;

    fn list_inputs(
        &self,
        request: ListInputsRequest,
    ) -> Result<ListInputsResponse, Self::Error>;

    fn create_input_security_group(
        &self,
        request: CreateInputSecurityGroupRequest,
    ) -> Result<InputSecurityGroup, Self::Error>;

    fn list_input_security_groups(
        &self,
        request: ListInputSecurityGroupsRequest,
    ) -> Result<ListInputSecurityGroupsResponse, Self::Error>;
}

/// Multiplex and program operations.
pub trait MultiplexOps {
    type Error;

    fn create_multiplex(
        &self,
        request: CreateMultiplexRequest,
    ) -> Result<Multiplex, Self::Error>;

    fn delete_multiplex(
        &self,
        request: DeleteMultiplexRequest,
    ) -> Result<Multiplex, Self::Error>;

    fn list_multiplexes(
        &self,
        request: ListMultiplexesRequest,
    ) -> Result<ListMultiplexesResponse, Self::Error>;

    fn create_multiplex_program(
        &self,
        request: CreateMultiplexProgramRequest,
    ) -> Result<MultiplexProgram, Self::Error>;

    fn list_multiplex_programs(
        &self,
        request: ListMultiplexProgramsRequest,
    ) -> Result<ListMultiplexProgramsResponse, Self::Error>;
}

/// Channel schedule operations.
pub trait ScheduleOps {
    type Error;

    fn batch_update_schedule(
        &self,
        request: BatchUpdateScheduleRequest,
    ) -> Result<BatchUpdateScheduleResponse, Self::Error>;

    fn describe_schedule(
        &self,
        request: DescribeScheduleRequest,
    ) -> Result<DescribeScheduleResponse, Self::Error>;
}
