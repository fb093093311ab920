//! The operation traits are the transport seam; exercise them against a
//! mock the way a client crate would.

use mockall::mock;
use mockall::predicate::function;

use fluxcast_contracts::ops::ChannelOps;
use fluxcast_contracts::paging::advance;
use fluxcast_contracts::resource::ResourceSummary;
use fluxcast_model::channel::{
    Channel, ChannelState, ChannelSummary, CreateChannelRequest,
    DeleteChannelRequest, DescribeChannelRequest, ListChannelsRequest,
    ListChannelsResponse, StartChannelRequest, StopChannelRequest,
    UpdateChannelRequest,
};
use fluxcast_model::ids::ChannelId;

mock! {
    pub Transport {}

    impl ChannelOps for Transport {
        type Error = String;

        fn create_channel(
            &self,
            request: CreateChannelRequest,
        ) -> Result<Channel, String>;

        fn describe_channel(
            &self,
            request: DescribeChannelRequest,
        ) -> Result<Channel, String>;

        fn update_channel(
            &self,
            request: UpdateChannelRequest,
        ) -> Result<Channel, String>;

        fn delete_channel(
            &self,
            request: DeleteChannelRequest,
        ) -> Result<Channel, String>;

        fn start_channel(
            &self,
            request: StartChannelRequest,
        ) -> Result<Channel, String>;

        fn stop_channel(
            &self,
            request: StopChannelRequest,
        ) -> Result<Channel, String>;

        fn list_channels(
            &self,
            request: ListChannelsRequest,
        ) -> Result<ListChannelsResponse, String>;
    }
}

/// Collect every channel summary by following pagination to the end,
/// the way a transport-backed helper would.
fn collect_all_channels<T: ChannelOps>(
    client: &T,
) -> Result<Vec<ChannelSummary>, T::Error> {
    let mut request = ListChannelsRequest::default();
    let mut collected = Vec::new();
    loop {
        let response = client.list_channels(request.clone())?;
        collected.extend(response.channels.clone().unwrap_or_default());
        if !advance(&mut request, &response) {
            return Ok(collected);
        }
    }
}

fn summary(id: &str, state: ChannelState) -> ChannelSummary {
    ChannelSummary {
        id: Some(ChannelId::new(id)),
        state: Some(state),
        ..Default::default()
    }
}

#[test]
fn create_passes_the_request_through_unchanged() {
    let mut transport = MockTransport::new();
    transport
        .expect_create_channel()
        .with(function(|request: &CreateChannelRequest| {
            request.name.as_deref() == Some("evening-news")
        }))
        .times(1)
        .returning(|request| {
            Ok(Channel {
                id: Some(ChannelId::new("1001")),
                name: request.name,
                state: Some(ChannelState::Creating),
                ..Default::default()
            })
        });

    let created = transport
        .create_channel(CreateChannelRequest {
            name: Some("evening-news".to_string()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(created.id_str(), Some("1001"));
    assert_eq!(created.state_token(), Some("CREATING"));
}

#[test]
fn pagination_walks_every_page_exactly_once() {
    let mut transport = MockTransport::new();

    transport
        .expect_list_channels()
        .with(function(|request: &ListChannelsRequest| {
            request.next_token.is_none()
        }))
        .times(1)
        .returning(|_| {
            Ok(ListChannelsResponse {
                channels: Some(vec![
                    summary("1001", ChannelState::Running),
                    summary("1002", ChannelState::Idle),
                ]),
                next_token: Some("page-2".to_string()),
            })
        });
    transport
        .expect_list_channels()
        .with(function(|request: &ListChannelsRequest| {
            request.next_token.as_deref() == Some("page-2")
        }))
        .times(1)
        .returning(|_| {
            Ok(ListChannelsResponse {
                channels: Some(vec![summary("1003", ChannelState::Idle)]),
                next_token: None,
            })
        });

    let all = collect_all_channels(&transport).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id_str(), Some("1001"));
    assert_eq!(all[2].id_str(), Some("1003"));
}

#[test]
fn remote_errors_pass_through_untouched() {
    let mut transport = MockTransport::new();
    transport
        .expect_start_channel()
        .returning(|_| Err("ConflictException: channel not idle".to_string()));

    let err = transport
        .start_channel(StartChannelRequest {
            channel_id: Some(ChannelId::new("1001")),
        })
        .unwrap_err();
    assert!(err.starts_with("ConflictException"));
}
