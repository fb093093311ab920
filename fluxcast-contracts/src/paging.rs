//! Pagination threading for list operations.
//!
//! Continuation tokens are opaque: they are copied from response to
//! request verbatim and never inspected.

use fluxcast_model::channel::{ListChannelsRequest, ListChannelsResponse};
use fluxcast_model::input::{
    ListInputSecurityGroupsRequest, ListInputSecurityGroupsResponse,
    ListInputsRequest, ListInputsResponse,
};
use fluxcast_model::multiplex::{
    ListMultiplexProgramsRequest, ListMultiplexProgramsResponse,
    ListMultiplexesRequest, ListMultiplexesResponse,
};
use fluxcast_model::schedule::{
    DescribeScheduleRequest, DescribeScheduleResponse,
};

/// A request that can carry a continuation token.
pub trait PagedRequest {
    /// Requested page size, if the caller set one.
    fn page_size(&self) -> Option<i32>;

    fn next_token(&self) -> Option<&str>;

    fn set_next_token(&mut self, token: Option<String>);
}

/// A response that may point at a further page.
pub trait PagedResponse {
    fn next_token(&self) -> Option<&str>;

    /// Whether another page exists.
    fn has_more(&self) -> bool {
        self.next_token().is_some()
    }
}

/// Copy the response's continuation token into the request, returning
/// `true` when another page remains to be fetched.
pub fn advance<Req, Resp>(request: &mut Req, response: &Resp) -> bool
where
    Req: PagedRequest,
    Resp: PagedResponse,
{
    let token = response.next_token().map(str::to_string);
    let more = token.is_some();
    if more {
        log::trace!("following pagination token to the next page");
    }
    request.set_next_token(token);
    more
}

// ===== List request/response pairs =====

impl PagedRequest for ListChannelsRequest {
    fn page_size(&self) -> Option<i32> {
        self.max_results
    }

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl PagedResponse for ListChannelsResponse {
    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

impl PagedRequest for ListInputsRequest {
    fn page_size(&self) -> Option<i32> {
        self.max_results
    }

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl PagedResponse for ListInputsResponse {
    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

impl PagedRequest for ListInputSecurityGroupsRequest {
    fn page_size(&self) -> Option<i32> {
        self.max_results
    }

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl PagedResponse for ListInputSecurityGroupsResponse {
    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

impl PagedRequest for ListMultiplexesRequest {
    fn page_size(&self) -> Option<i32> {
        self.max_results
    }

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl PagedResponse for ListMultiplexesResponse {
    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

impl PagedRequest for ListMultiplexProgramsRequest {
    fn page_size(&self) -> Option<i32> {
        self.max_results
    }

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl PagedResponse for ListMultiplexProgramsResponse {
    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

impl PagedRequest for DescribeScheduleRequest {
    fn page_size(&self) -> Option<i32> {
        self.max_results
    }

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn set_next_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl PagedResponse for DescribeScheduleResponse {
    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}
