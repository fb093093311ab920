//! Trait surfaces that describe interactions with Fluxcast data models.
//!
//! Nothing here talks to the network. These traits are the seam between
//! the value types in `fluxcast-model` and the transport client that
//! signs, sends, retries, and pages the actual control-plane calls.

pub mod ops;
pub mod paging;
pub mod resource;

/// Frequently used trait combinators for client and tooling crates.
pub mod prelude {
    pub use super::ops::{ChannelOps, InputOps, MultiplexOps, ScheduleOps};
    pub use super::paging::{PagedRequest, PagedResponse, advance};
    pub use super::resource::ResourceSummary;
}
