//! Output groups: where encoded renditions leave the channel.

pub mod archive;
pub mod hls;
pub mod rtmp;
pub mod udp;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use archive::{
    ArchiveContainerSettings, ArchiveGroupSettings, ArchiveOutputSettings,
};
pub use hls::{
    HlsBasicPutSettings, HlsCdnSettings, HlsCodecSpecification,
    HlsDirectoryStructure, HlsGroupSettings, HlsManifestCompression, HlsMode,
    HlsOutputSettings, HlsSegmentationMode, HlsStreamInfResolution,
    M3u8Settings,
};
pub use rtmp::{
    RtmpAuthenticationScheme, RtmpCacheFullBehavior, RtmpGroupSettings,
    RtmpOutputCertificateMode, RtmpOutputSettings,
};
pub use udp::{
    InputLossActionForUdpOut, M2tsBufferModel, M2tsCcDescriptor,
    M2tsSettings, UdpContainerSettings, UdpGroupSettings, UdpOutputSettings,
    UdpTimedMetadataId3Frame,
};

/// One destination family (HLS, RTMP, UDP, archive) and the outputs
/// feeding it.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputGroup {
    /// Custom group name. Maximum length 32.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_group_settings: Option<OutputGroupSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Output>>,
}

impl OutputGroup {
    /// Append one output, creating the backing list on first use.
    pub fn add_output(&mut self, output: Output) -> &mut Self {
        self.outputs.get_or_insert_with(Vec::new).push(output);
        self
    }
}

impl fmt::Debug for OutputGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("OutputGroup");
        if let Some(v) = &self.name {
            s.field("name", v);
        }
        if let Some(v) = &self.output_group_settings {
            s.field("output_group_settings", v);
        }
        if let Some(v) = &self.outputs {
            s.field("outputs", v);
        }
        s.finish()
    }
}

/// One rendition bundle routed into an output group.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    /// Names of the audio descriptions carried by this output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_description_names: Option<Vec<String>>,
    /// Name unique within the output group. Length 1 to 255.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_settings: Option<OutputSettings>,
    /// Name of the video description carried by this output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_description_name: Option<String>,
}

impl Output {
    /// Append one audio description name, creating the backing list on
    /// first use.
    pub fn add_audio_description_name(
        &mut self,
        name: impl Into<String>,
    ) -> &mut Self {
        self.audio_description_names
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Output");
        if let Some(v) = &self.audio_description_names {
            s.field("audio_description_names", v);
        }
        if let Some(v) = &self.output_name {
            s.field("output_name", v);
        }
        if let Some(v) = &self.output_settings {
            s.field("output_settings", v);
        }
        if let Some(v) = &self.video_description_name {
            s.field("video_description_name", v);
        }
        s.finish()
    }
}

/// Settings for the group's destination family; exactly one should be
/// populated.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputGroupSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_group_settings: Option<ArchiveGroupSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hls_group_settings: Option<HlsGroupSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtmp_group_settings: Option<RtmpGroupSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_group_settings: Option<UdpGroupSettings>,
}

impl fmt::Debug for OutputGroupSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("OutputGroupSettings");
        if let Some(v) = &self.archive_group_settings {
            s.field("archive_group_settings", v);
        }
        if let Some(v) = &self.hls_group_settings {
            s.field("hls_group_settings", v);
        }
        if let Some(v) = &self.rtmp_group_settings {
            s.field("rtmp_group_settings", v);
        }
        if let Some(v) = &self.udp_group_settings {
            s.field("udp_group_settings", v);
        }
        s.finish()
    }
}

/// Per-output settings matching the group's destination family.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_output_settings: Option<ArchiveOutputSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hls_output_settings: Option<HlsOutputSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtmp_output_settings: Option<RtmpOutputSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_output_settings: Option<UdpOutputSettings>,
}

impl fmt::Debug for OutputSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("OutputSettings");
        if let Some(v) = &self.archive_output_settings {
            s.field("archive_output_settings", v);
        }
        if let Some(v) = &self.hls_output_settings {
            s.field("hls_output_settings", v);
        }
        if let Some(v) = &self.rtmp_output_settings {
            s.field("rtmp_output_settings", v);
        }
        if let Some(v) = &self.udp_output_settings {
            s.field("udp_output_settings", v);
        }
        s.finish()
    }
}

/// Reference into the channel's destination list
/// ([`OutputDestination`](crate::channel::OutputDestination)) by ref ID.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputLocationRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_ref_id: Option<String>,
}

impl fmt::Debug for OutputLocationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("OutputLocationRef");
        if let Some(v) = &self.destination_ref_id {
            s.field("destination_ref_id", v);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_output_creates_backing_list_lazily() {
        let mut group = OutputGroup::default();
        assert!(group.outputs.is_none());
        group.add_output(Output::default());
        assert_eq!(group.outputs.as_ref().map(Vec::len), Some(1));
    }
}
