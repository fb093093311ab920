//! Pagination tokens thread opaquely from response to request.

use fluxcast_contracts::paging::{PagedRequest, PagedResponse, advance};
use fluxcast_model::channel::{
    ChannelSummary, ListChannelsRequest, ListChannelsResponse,
};
use fluxcast_model::schedule::{
    DescribeScheduleRequest, DescribeScheduleResponse,
};

#[test]
fn advance_copies_the_token_verbatim() {
    let mut request = ListChannelsRequest {
        max_results: Some(50),
        ..Default::default()
    };
    let response = ListChannelsResponse {
        channels: Some(vec![ChannelSummary::default()]),
        next_token: Some("opaque/token==".to_string()),
    };

    assert!(response.has_more());
    assert!(advance(&mut request, &response));
    assert_eq!(request.next_token(), Some("opaque/token=="));
    // Page size is left untouched.
    assert_eq!(request.page_size(), Some(50));
}

#[test]
fn advance_clears_the_token_on_the_last_page() {
    let mut request = ListChannelsRequest {
        next_token: Some("left-over".to_string()),
        ..Default::default()
    };
    let last_page = ListChannelsResponse::default();

    assert!(!last_page.has_more());
    assert!(!advance(&mut request, &last_page));
    assert_eq!(request.next_token(), None);
}

#[test]
fn schedule_pages_thread_like_list_pages() {
    let mut request = DescribeScheduleRequest::default();
    let response = DescribeScheduleResponse {
        next_token: Some("page-2".to_string()),
        ..Default::default()
    };

    assert!(advance(&mut request, &response));
    assert_eq!(request.next_token(), Some("page-2"));
}
