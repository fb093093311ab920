//! Uniform read access to the summary fields every control-plane
//! resource carries.

use fluxcast_model::channel::{Channel, ChannelSummary};
use fluxcast_model::input::{Input, InputSecurityGroup};
use fluxcast_model::multiplex::{Multiplex, MultiplexSummary};
use fluxcast_model::tags::Tags;

/// Common interface for resources and their list summaries.
///
/// Everything is optional at the model level, so every accessor is too;
/// `state_token` is the resource state's wire token, usable across
/// resource kinds without knowing the concrete state enumeration.
pub trait ResourceSummary {
    fn id_str(&self) -> Option<&str>;

    fn name(&self) -> Option<&str>;

    fn state_token(&self) -> Option<&'static str>;

    fn tags(&self) -> Option<&Tags>;

    /// Whether the resource is in a steady state (not mid-transition).
    /// Resources without a reported state count as unsettled.
    fn is_settled(&self) -> bool {
        matches!(
            self.state_token(),
            Some("IDLE") | Some("RUNNING") | Some("DETACHED")
                | Some("ATTACHED") | Some("IN_USE") | Some("DELETED")
        )
    }
}

// ===== Channels =====

impl ResourceSummary for Channel {
    fn id_str(&self) -> Option<&str> {
        self.id.as_ref().map(|id| id.as_str())
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn state_token(&self) -> Option<&'static str> {
        self.state.map(|s| s.as_str())
    }

    fn tags(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }
}

impl ResourceSummary for ChannelSummary {
    fn id_str(&self) -> Option<&str> {
        self.id.as_ref().map(|id| id.as_str())
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn state_token(&self) -> Option<&'static str> {
        if self.state.is_none() {
            log::warn!("channel summary is missing its state field");
        }
        self.state.map(|s| s.as_str())
    }

    fn tags(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }
}

// ===== Inputs =====

impl ResourceSummary for Input {
    fn id_str(&self) -> Option<&str> {
        self.id.as_ref().map(|id| id.as_str())
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn state_token(&self) -> Option<&'static str> {
        self.state.map(|s| s.as_str())
    }

    fn tags(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }
}

impl ResourceSummary for InputSecurityGroup {
    fn id_str(&self) -> Option<&str> {
        self.id.as_ref().map(|id| id.as_str())
    }

    fn name(&self) -> Option<&str> {
        // Security groups are identified by ID only.
        None
    }

    fn state_token(&self) -> Option<&'static str> {
        self.state.map(|s| s.as_str())
    }

    fn tags(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }
}

// ===== Multiplexes =====

impl ResourceSummary for Multiplex {
    fn id_str(&self) -> Option<&str> {
        self.id.as_ref().map(|id| id.as_str())
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn state_token(&self) -> Option<&'static str> {
        self.state.map(|s| s.as_str())
    }

    fn tags(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }
}

impl ResourceSummary for MultiplexSummary {
    fn id_str(&self) -> Option<&str> {
        self.id.as_ref().map(|id| id.as_str())
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn state_token(&self) -> Option<&'static str> {
        self.state.map(|s| s.as_str())
    }

    fn tags(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }
}
