use serde::{Deserialize, Serialize};

/// Strongly typed ID for channels.
///
/// The control plane mints channel IDs; clients only thread them through
/// requests, so the backing representation stays an owned string.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChannelId(pub String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        ChannelId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ChannelId {
    fn from(id: String) -> Self {
        ChannelId(id)
    }
}

impl From<&str> for ChannelId {
    fn from(id: &str) -> Self {
        ChannelId(id.to_string())
    }
}

impl AsRef<str> for ChannelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strongly typed ID for inputs.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct InputId(pub String);

impl InputId {
    pub fn new(id: impl Into<String>) -> Self {
        InputId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for InputId {
    fn from(id: String) -> Self {
        InputId(id)
    }
}

impl From<&str> for InputId {
    fn from(id: &str) -> Self {
        InputId(id.to_string())
    }
}

impl AsRef<str> for InputId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strongly typed ID for multiplexes.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MultiplexId(pub String);

impl MultiplexId {
    pub fn new(id: impl Into<String>) -> Self {
        MultiplexId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for MultiplexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MultiplexId {
    fn from(id: String) -> Self {
        MultiplexId(id)
    }
}

impl From<&str> for MultiplexId {
    fn from(id: &str) -> Self {
        MultiplexId(id.to_string())
    }
}

impl AsRef<str> for MultiplexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strongly typed ID for input security groups.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct InputSecurityGroupId(pub String);

impl InputSecurityGroupId {
    pub fn new(id: impl Into<String>) -> Self {
        InputSecurityGroupId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for InputSecurityGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for InputSecurityGroupId {
    fn from(id: String) -> Self {
        InputSecurityGroupId(id)
    }
}

impl From<&str> for InputSecurityGroupId {
    fn from(id: &str) -> Self {
        InputSecurityGroupId(id.to_string())
    }
}

impl AsRef<str> for InputSecurityGroupId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_id_round_trips_through_display() {
        let id = ChannelId::new("8675309");
        assert_eq!(id.as_str(), "8675309");
        assert_eq!(id.to_string(), "8675309");
        assert_eq!(ChannelId::from("8675309"), id);
    }

    #[test]
    fn into_inner_returns_the_raw_string() {
        let id = MultiplexId::new("mx-44");
        assert_eq!(id.into_inner(), "mx-44");
    }
}
