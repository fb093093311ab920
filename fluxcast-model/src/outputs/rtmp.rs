//! RTMP output group configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::OutputLocationRef;
use crate::error::ModelError;

/// Authentication scheme expected by the RTMP endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RtmpAuthenticationScheme {
    Akamai,
    Common,
}

impl RtmpAuthenticationScheme {
    pub fn values() -> &'static [Self] {
        &[Self::Akamai, Self::Common]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Akamai => "AKAMAI",
            Self::Common => "COMMON",
        }
    }
}

impl fmt::Display for RtmpAuthenticationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RtmpAuthenticationScheme {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AKAMAI" => Ok(Self::Akamai),
            "COMMON" => Ok(Self::Common),
            _ => {
                Err(ModelError::invalid_value("RtmpAuthenticationScheme", s))
            }
        }
    }
}

/// What to do when the write cache fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RtmpCacheFullBehavior {
    DisconnectImmediately,
    WaitForServer,
}

impl RtmpCacheFullBehavior {
    pub fn values() -> &'static [Self] {
        &[Self::DisconnectImmediately, Self::WaitForServer]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DisconnectImmediately => "DISCONNECT_IMMEDIATELY",
            Self::WaitForServer => "WAIT_FOR_SERVER",
        }
    }
}

impl fmt::Display for RtmpCacheFullBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RtmpCacheFullBehavior {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DISCONNECT_IMMEDIATELY" => Ok(Self::DisconnectImmediately),
            "WAIT_FOR_SERVER" => Ok(Self::WaitForServer),
            _ => Err(ModelError::invalid_value("RtmpCacheFullBehavior", s)),
        }
    }
}

/// TLS certificate verification for rtmps destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RtmpOutputCertificateMode {
    SelfSigned,
    VerifyAuthenticity,
}

impl RtmpOutputCertificateMode {
    pub fn values() -> &'static [Self] {
        &[Self::SelfSigned, Self::VerifyAuthenticity]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfSigned => "SELF_SIGNED",
            Self::VerifyAuthenticity => "VERIFY_AUTHENTICITY",
        }
    }
}

impl fmt::Display for RtmpOutputCertificateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RtmpOutputCertificateMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SELF_SIGNED" => Ok(Self::SelfSigned),
            "VERIFY_AUTHENTICITY" => Ok(Self::VerifyAuthenticity),
            _ => {
                Err(ModelError::invalid_value(
                    "RtmpOutputCertificateMode",
                    s,
                ))
            }
        }
    }
}

/// Group-level RTMP configuration.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RtmpGroupSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_scheme: Option<RtmpAuthenticationScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_full_behavior: Option<RtmpCacheFullBehavior>,
    /// Cache length in seconds before the full-cache behavior applies.
    /// Minimum 30.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_length: Option<i32>,
    /// Seconds before a restart is attempted. Minimum 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_delay: Option<i32>,
}

impl fmt::Debug for RtmpGroupSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("RtmpGroupSettings");
        if let Some(v) = &self.authentication_scheme {
            s.field("authentication_scheme", v);
        }
        if let Some(v) = &self.cache_full_behavior {
            s.field("cache_full_behavior", v);
        }
        if let Some(v) = &self.cache_length {
            s.field("cache_length", v);
        }
        if let Some(v) = &self.restart_delay {
            s.field("restart_delay", v);
        }
        s.finish()
    }
}

/// Per-output RTMP settings.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RtmpOutputSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_mode: Option<RtmpOutputCertificateMode>,
    /// Seconds between connection retries. Minimum 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_retry_interval: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<OutputLocationRef>,
    /// Retries before the output is failed. Minimum 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_retries: Option<i32>,
}

impl fmt::Debug for RtmpOutputSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("RtmpOutputSettings");
        if let Some(v) = &self.certificate_mode {
            s.field("certificate_mode", v);
        }
        if let Some(v) = &self.connection_retry_interval {
            s.field("connection_retry_interval", v);
        }
        if let Some(v) = &self.destination {
            s.field("destination", v);
        }
        if let Some(v) = &self.num_retries {
            s.field("num_retries", v);
        }
        s.finish()
    }
}
