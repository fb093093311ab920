//! Wire-shape guarantees: PascalCase keys, absent fields omitted, enum
//! tokens verbatim, and the deterministic debug rendering.

use chrono::TimeZone;
use chrono::Utc;
use serde_json::json;

use fluxcast_model::audio::{
    AacCodingMode, AacProfile, AacSettings, AudioCodecSettings,
    AudioDescription,
};
use fluxcast_model::channel::{
    ChannelClass, CreateChannelRequest, OutputDestination,
    OutputDestinationSettings,
};
use fluxcast_model::encoder::EncoderSettings;
use fluxcast_model::outputs::{
    HlsGroupSettings, HlsMode, Output, OutputGroup, OutputGroupSettings,
    OutputLocationRef, OutputSettings,
};
use fluxcast_model::schedule::{
    FixedModeScheduleActionStartSettings, ScheduleAction,
    ScheduleActionStartSettings,
};
use fluxcast_model::video::{
    H264RateControlMode, H264Settings, VideoCodecSettings,
    VideoDescription,
};

fn named_output(name: &str) -> Output {
    Output {
        output_name: Some(name.to_string()),
        output_settings: Some(OutputSettings::default()),
        video_description_name: Some("camera-high".to_string()),
        ..Default::default()
    }
}

fn sample_request() -> CreateChannelRequest {
    let mut hls_group = OutputGroup {
        name: Some("primary-hls".to_string()),
        output_group_settings: Some(OutputGroupSettings {
            hls_group_settings: Some(HlsGroupSettings {
                destination: Some(OutputLocationRef {
                    destination_ref_id: Some("cdn".to_string()),
                }),
                mode: Some(HlsMode::Live),
                segment_length: Some(6),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    };
    hls_group.add_output(named_output("hd"));
    hls_group.add_output(named_output("sd"));
    hls_group.add_output(named_output("audio-only"));

    let mut encoder = EncoderSettings::default();
    encoder.add_video_description(VideoDescription {
        codec_settings: Some(VideoCodecSettings {
            h264_settings: Some(H264Settings {
                bitrate: Some(5_000_000),
                rate_control_mode: Some(H264RateControlMode::Cbr),
                ..Default::default()
            }),
            ..Default::default()
        }),
        name: Some("camera-high".to_string()),
        width: Some(1920),
        height: Some(1080),
        ..Default::default()
    });
    encoder.add_audio_description(AudioDescription {
        audio_selector_name: Some("default".to_string()),
        codec_settings: Some(AudioCodecSettings {
            aac_settings: Some(AacSettings {
                bitrate: Some(128_000.0),
                coding_mode: Some(AacCodingMode::CodingMode20),
                profile: Some(AacProfile::Lc),
                ..Default::default()
            }),
            ..Default::default()
        }),
        name: Some("stereo".to_string()),
        ..Default::default()
    });
    encoder.add_output_group(hls_group);

    let mut destination = OutputDestination {
        id: Some("cdn".to_string()),
        ..Default::default()
    };
    destination.add_setting(OutputDestinationSettings {
        url: Some("https://cdn.example.com/live/main".to_string()),
        ..Default::default()
    });

    let mut request = CreateChannelRequest {
        channel_class: Some(ChannelClass::Standard),
        encoder_settings: Some(encoder),
        name: Some("evening-news".to_string()),
        ..Default::default()
    };
    request.add_destination(destination);
    request.add_tag("cost-center", "news").unwrap();
    request
}

#[test]
fn keys_are_pascal_case_and_absent_fields_are_omitted() {
    let value = serde_json::to_value(sample_request()).unwrap();
    let object = value.as_object().unwrap();

    assert!(object.contains_key("ChannelClass"));
    assert!(object.contains_key("EncoderSettings"));
    assert!(object.contains_key("Name"));
    assert!(object.contains_key("Destinations"));
    assert!(object.contains_key("Tags"));

    // Unset fields are dropped entirely, not serialized as null.
    assert!(!object.contains_key("LogLevel"));
    assert!(!object.contains_key("RequestId"));
    assert!(!object.contains_key("InputAttachments"));
}

#[test]
fn enum_fields_serialize_as_their_wire_tokens() {
    let value = serde_json::to_value(sample_request()).unwrap();

    assert_eq!(value["ChannelClass"], json!("STANDARD"));

    let aac = &value["EncoderSettings"]["AudioDescriptions"][0]
        ["CodecSettings"]["AacSettings"];
    assert_eq!(aac["CodingMode"], json!("CODING_MODE_2_0"));
    assert_eq!(aac["Profile"], json!("LC"));

    let hls = &value["EncoderSettings"]["OutputGroups"][0]
        ["OutputGroupSettings"]["HlsGroupSettings"];
    assert_eq!(hls["Mode"], json!("LIVE"));
    assert_eq!(hls["Destination"]["DestinationRefId"], json!("cdn"));
}

#[test]
fn nested_trees_and_tag_maps_round_trip() {
    let request = sample_request();
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["Tags"], json!({"cost-center": "news"}));
    assert_eq!(
        value["EncoderSettings"]["OutputGroups"][0]["Outputs"]
            .as_array()
            .map(Vec::len),
        Some(3)
    );

    let back: CreateChannelRequest =
        serde_json::from_value(value).unwrap();
    assert_eq!(back, request);
}

#[test]
fn fixed_mode_start_time_serializes_as_rfc3339() {
    let action = ScheduleAction {
        action_name: Some("kickoff".to_string()),
        schedule_action_start_settings: Some(ScheduleActionStartSettings {
            fixed_mode_schedule_action_start_settings: Some(
                FixedModeScheduleActionStartSettings {
                    time: Some(
                        Utc.with_ymd_and_hms(2026, 8, 7, 19, 30, 0)
                            .unwrap(),
                    ),
                },
            ),
            ..Default::default()
        }),
        ..Default::default()
    };

    let value = serde_json::to_value(&action).unwrap();
    assert_eq!(
        value["ScheduleActionStartSettings"]
            ["FixedModeScheduleActionStartSettings"]["Time"],
        json!("2026-08-07T19:30:00Z")
    );

    let back: ScheduleAction = serde_json::from_value(value).unwrap();
    assert_eq!(back, action);
}

#[test]
fn debug_rendering_lists_present_fields_in_declaration_order() {
    let mut group = OutputGroup {
        name: Some("primary-hls".to_string()),
        ..Default::default()
    };
    group.add_output(named_output("hd"));
    group.add_output(named_output("sd"));
    group.add_output(named_output("audio-only"));

    let rendered = format!("{group:?}");

    // Present fields only, in declaration order.
    let name_at = rendered.find("name:").unwrap();
    let outputs_at = rendered.find("outputs:").unwrap();
    assert!(name_at < outputs_at);
    assert!(!rendered.contains("output_group_settings"));

    // The three children appear, and their own absent siblings do not.
    assert!(rendered.contains("\"hd\""));
    assert!(rendered.contains("\"sd\""));
    assert!(rendered.contains("\"audio-only\""));
    assert!(!rendered.contains("audio_description_names"));
}

#[test]
fn empty_records_render_as_bare_type_names() {
    assert_eq!(
        format!("{:?}", CreateChannelRequest::default()),
        "CreateChannelRequest"
    );
    assert_eq!(format!("{:?}", OutputGroup::default()), "OutputGroup");
}
