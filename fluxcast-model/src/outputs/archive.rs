//! Archive (file capture) output group configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::OutputLocationRef;
use super::udp::M2tsSettings;

/// Group-level archive configuration.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArchiveGroupSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<OutputLocationRef>,
    /// Seconds of content per archive file. Minimum 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollover_interval: Option<i32>,
}

impl fmt::Debug for ArchiveGroupSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ArchiveGroupSettings");
        if let Some(v) = &self.destination {
            s.field("destination", v);
        }
        if let Some(v) = &self.rollover_interval {
            s.field("rollover_interval", v);
        }
        s.finish()
    }
}

/// Per-output archive settings.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArchiveOutputSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_settings: Option<ArchiveContainerSettings>,
    /// File extension; defaults to the container's conventional one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Appended to the file name base, before the extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_modifier: Option<String>,
}

impl fmt::Debug for ArchiveOutputSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ArchiveOutputSettings");
        if let Some(v) = &self.container_settings {
            s.field("container_settings", v);
        }
        if let Some(v) = &self.extension {
            s.field("extension", v);
        }
        if let Some(v) = &self.name_modifier {
            s.field("name_modifier", v);
        }
        s.finish()
    }
}

/// Container wrapper for archive outputs.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArchiveContainerSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m2ts_settings: Option<M2tsSettings>,
}

impl fmt::Debug for ArchiveContainerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ArchiveContainerSettings");
        if let Some(v) = &self.m2ts_settings {
            s.field("m2ts_settings", v);
        }
        s.finish()
    }
}
