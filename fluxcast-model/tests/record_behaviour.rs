//! Field-level contracts for configuration records: absent-by-default,
//! set/clear semantics, lazy list creation, strict tag inserts, and
//! structural equality.

use fluxcast_model::audio::{
    AacProfile, AacSettings, AudioCodecSettings, AudioDescription,
};
use fluxcast_model::channel::{
    Channel, ChannelState, CreateChannelRequest,
};
use fluxcast_model::encoder::EncoderSettings;
use fluxcast_model::error::ModelError;
use fluxcast_model::input::{CreateInputRequest, InputSourceRequest};
use fluxcast_model::outputs::{Output, OutputGroup};
use fluxcast_model::video::{H264Settings, VideoDescription};

#[test]
fn fresh_records_have_every_field_absent() {
    let channel = Channel::default();
    assert!(channel.channel_class.is_none());
    assert!(channel.destinations.is_none());
    assert!(channel.egress_endpoints.is_none());
    assert!(channel.encoder_settings.is_none());
    assert!(channel.id.is_none());
    assert!(channel.input_attachments.is_none());
    assert!(channel.log_level.is_none());
    assert!(channel.name.is_none());
    assert!(channel.pipeline_details.is_none());
    assert!(channel.pipelines_running_count.is_none());
    assert!(channel.state.is_none());
    assert!(channel.tags.is_none());
}

#[test]
fn set_then_get_then_clear() {
    let mut description = VideoDescription::default();

    description.width = Some(1920);
    description.height = Some(1080);
    assert_eq!(description.width, Some(1920));
    assert_eq!(description.height, Some(1080));

    description.width = None;
    assert!(description.width.is_none());
    // Clearing one field leaves siblings alone.
    assert_eq!(description.height, Some(1080));
}

#[test]
fn owned_list_setters_cannot_alias_the_caller() {
    let sources = vec![InputSourceRequest {
        url: Some("rtmp://origin.example.com/live".to_string()),
        ..Default::default()
    }];

    let mut request = CreateInputRequest::default();
    // The vector moves into the record; there is no handle left through
    // which the caller could mutate the stored value.
    request.sources = Some(sources);

    let stored = request.sources.as_ref().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(
        stored[0].url.as_deref(),
        Some("rtmp://origin.example.com/live")
    );
}

#[test]
fn append_conveniences_create_lists_lazily() {
    let mut group = OutputGroup::default();
    assert!(group.outputs.is_none());

    group.add_output(Output {
        output_name: Some("hd".to_string()),
        ..Default::default()
    });
    group.add_output(Output {
        output_name: Some("sd".to_string()),
        ..Default::default()
    });

    let outputs = group.outputs.as_ref().unwrap();
    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs[0].output_name.as_deref(), Some("hd"));
    assert_eq!(outputs[1].output_name.as_deref(), Some("sd"));
}

#[test]
fn duplicate_tag_insert_fails_and_clear_resets_to_absent() {
    let mut request = CreateChannelRequest::default();
    request.add_tag("cost-center", "sports").unwrap();

    let err = request.add_tag("cost-center", "news").unwrap_err();
    assert_eq!(
        err,
        ModelError::DuplicateKey {
            key: "cost-center".to_string()
        }
    );
    // The original entry survives the failed insert.
    assert_eq!(
        request.tags.as_ref().unwrap().get("cost-center"),
        Some("sports")
    );

    request.clear_tags();
    assert!(request.tags.is_none());
}

fn sample_audio_description() -> AudioDescription {
    AudioDescription {
        audio_selector_name: Some("default".to_string()),
        codec_settings: Some(AudioCodecSettings {
            aac_settings: Some(AacSettings {
                bitrate: Some(192_000.0),
                profile: Some(AacProfile::Lc),
                ..Default::default()
            }),
            ..Default::default()
        }),
        name: Some("stereo".to_string()),
        ..Default::default()
    }
}

#[test]
fn structural_equality_is_recursive() {
    let a = sample_audio_description();
    let b = sample_audio_description();

    // Reflexive and symmetric.
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);

    // Transitive through a third identical value.
    let c = sample_audio_description();
    assert_eq!(b, c);
    assert_eq!(a, c);

    // One nested field difference breaks equality.
    let mut deep_change = sample_audio_description();
    deep_change
        .codec_settings
        .as_mut()
        .unwrap()
        .aac_settings
        .as_mut()
        .unwrap()
        .profile = Some(AacProfile::Hev1);
    assert_ne!(a, deep_change);

    // Absent differs from any present value.
    let mut cleared = sample_audio_description();
    cleared.name = None;
    assert_ne!(a, cleared);
}

#[test]
fn list_equality_is_order_sensitive() {
    let first = Output {
        output_name: Some("hd".to_string()),
        ..Default::default()
    };
    let second = Output {
        output_name: Some("sd".to_string()),
        ..Default::default()
    };

    let mut forward = OutputGroup::default();
    forward.add_output(first.clone());
    forward.add_output(second.clone());

    let mut reversed = OutputGroup::default();
    reversed.add_output(second);
    reversed.add_output(first);

    assert_ne!(forward, reversed);
}

#[test]
fn enum_field_from_parse_equals_direct_assignment() {
    let mut via_enum = Channel::default();
    via_enum.state = Some(ChannelState::Running);

    let mut via_parse = Channel::default();
    via_parse.state = Some("RUNNING".parse().unwrap());

    assert_eq!(via_enum, via_parse);
    assert_eq!(
        via_enum.state.map(|s| s.as_str()),
        via_parse.state.map(|s| s.as_str())
    );
}

#[test]
fn encoder_tree_composes_without_cross_links() {
    let mut settings = EncoderSettings::default();
    settings.add_video_description(VideoDescription {
        codec_settings: None,
        name: Some("camera-high".to_string()),
        width: Some(1280),
        height: Some(720),
        ..Default::default()
    });
    settings.add_audio_description(sample_audio_description());

    // Each child sits in exactly one position of the tree.
    assert_eq!(
        settings.video_descriptions.as_ref().map(Vec::len),
        Some(1)
    );
    assert_eq!(
        settings.audio_descriptions.as_ref().map(Vec::len),
        Some(1)
    );

    let h264 = H264Settings::default();
    assert!(h264.rate_control_mode.is_none());
}
