//! Round-trip and rejection properties for every closed token set.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;

use fluxcast_model::audio::{
    AacCodingMode, AacInputType, AacProfile, AacRateControlMode,
    AacRawFormat, AacSpec, AacVbrQuality, AudioLanguageCodeControl,
    AudioNormalizationAlgorithm, AudioNormalizationAlgorithmControl,
    AudioType, AudioTypeControl,
};
use fluxcast_model::channel::{
    ChannelClass, ChannelState, LogLevel, PipelineId,
};
use fluxcast_model::encoder::{
    InputEndAction, InputLossImageType, OutputLockingMode,
    OutputTimingSource, TimecodeSource,
};
use fluxcast_model::error::ModelError;
use fluxcast_model::input::{
    InputClass, InputDeblockFilter, InputDenoiseFilter, InputFilter,
    InputMaximumBitrate, InputResolution, InputSecurityGroupState,
    InputSourceEndBehavior, InputState, InputType,
    LanguageSelectionPolicy, VideoSelectorColorSpace,
    VideoSelectorColorSpaceUsage,
};
use fluxcast_model::multiplex::{MultiplexState, PreferredChannelPipeline};
use fluxcast_model::outputs::{
    HlsCodecSpecification, HlsDirectoryStructure, HlsManifestCompression,
    HlsMode, HlsSegmentationMode, HlsStreamInfResolution,
    InputLossActionForUdpOut, M2tsBufferModel, M2tsCcDescriptor,
    RtmpAuthenticationScheme, RtmpCacheFullBehavior,
    RtmpOutputCertificateMode, UdpTimedMetadataId3Frame,
};
use fluxcast_model::schedule::FollowPoint;
use fluxcast_model::video::{
    AdaptiveQuantization, ColorMetadata, FramerateControl, GopSizeUnits,
    H264Profile, H264RateControlMode, H265Profile, H265RateControlMode,
    H265Tier, ParControl, RespondToAfd, ScalingBehavior, ScanType,
    SceneChangeDetect, TimecodeInsertionBehavior,
};

/// Every member must round-trip through its wire token, the serde wire
/// form must equal the display token byte for byte, and empty,
/// unknown, and wrongly-cased tokens must be rejected.
fn assert_closed_set<E>(values: &'static [E])
where
    E: Copy
        + PartialEq
        + fmt::Debug
        + fmt::Display
        + FromStr<Err = ModelError>
        + Serialize
        + DeserializeOwned,
{
    assert!(!values.is_empty());

    for member in values {
        let token = member.to_string();
        assert_eq!(
            token.parse::<E>().unwrap(),
            *member,
            "token {token} must parse back to the same member"
        );

        let wire = serde_json::to_value(member).unwrap();
        assert_eq!(
            wire,
            serde_json::Value::String(token.clone()),
            "serde wire form must match the display token"
        );
        let back: E =
            serde_json::from_value(serde_json::Value::String(token.clone()))
                .unwrap();
        assert_eq!(back, *member);

        let lower = token.to_lowercase();
        if lower != token {
            assert!(
                lower.parse::<E>().is_err(),
                "parse must be case-sensitive, accepted {lower}"
            );
        }
    }

    assert!(matches!(
        "".parse::<E>(),
        Err(ModelError::InvalidValue { .. })
    ));
    assert!(matches!(
        "NOT_A_REAL_TOKEN".parse::<E>(),
        Err(ModelError::InvalidValue { .. })
    ));
}

#[test]
fn audio_token_sets() {
    assert_closed_set(AacProfile::values());
    assert_closed_set(AacCodingMode::values());
    assert_closed_set(AacInputType::values());
    assert_closed_set(AacRateControlMode::values());
    assert_closed_set(AacRawFormat::values());
    assert_closed_set(AacSpec::values());
    assert_closed_set(AacVbrQuality::values());
    assert_closed_set(AudioType::values());
    assert_closed_set(AudioTypeControl::values());
    assert_closed_set(AudioLanguageCodeControl::values());
    assert_closed_set(AudioNormalizationAlgorithm::values());
    assert_closed_set(AudioNormalizationAlgorithmControl::values());
}

#[test]
fn video_token_sets() {
    assert_closed_set(AdaptiveQuantization::values());
    assert_closed_set(ColorMetadata::values());
    assert_closed_set(FramerateControl::values());
    assert_closed_set(ParControl::values());
    assert_closed_set(GopSizeUnits::values());
    assert_closed_set(ScanType::values());
    assert_closed_set(SceneChangeDetect::values());
    assert_closed_set(TimecodeInsertionBehavior::values());
    assert_closed_set(H264Profile::values());
    assert_closed_set(H264RateControlMode::values());
    assert_closed_set(H265Profile::values());
    assert_closed_set(H265RateControlMode::values());
    assert_closed_set(H265Tier::values());
    assert_closed_set(ScalingBehavior::values());
    assert_closed_set(RespondToAfd::values());
}

#[test]
fn encoder_token_sets() {
    assert_closed_set(TimecodeSource::values());
    assert_closed_set(InputEndAction::values());
    assert_closed_set(OutputTimingSource::values());
    assert_closed_set(OutputLockingMode::values());
    assert_closed_set(InputLossImageType::values());
}

#[test]
fn output_token_sets() {
    assert_closed_set(HlsMode::values());
    assert_closed_set(HlsSegmentationMode::values());
    assert_closed_set(HlsDirectoryStructure::values());
    assert_closed_set(HlsManifestCompression::values());
    assert_closed_set(HlsCodecSpecification::values());
    assert_closed_set(HlsStreamInfResolution::values());
    assert_closed_set(RtmpAuthenticationScheme::values());
    assert_closed_set(RtmpCacheFullBehavior::values());
    assert_closed_set(RtmpOutputCertificateMode::values());
    assert_closed_set(InputLossActionForUdpOut::values());
    assert_closed_set(UdpTimedMetadataId3Frame::values());
    assert_closed_set(M2tsBufferModel::values());
    assert_closed_set(M2tsCcDescriptor::values());
}

#[test]
fn input_token_sets() {
    assert_closed_set(InputType::values());
    assert_closed_set(InputState::values());
    assert_closed_set(InputClass::values());
    assert_closed_set(InputSourceEndBehavior::values());
    assert_closed_set(InputFilter::values());
    assert_closed_set(InputDeblockFilter::values());
    assert_closed_set(InputDenoiseFilter::values());
    assert_closed_set(InputMaximumBitrate::values());
    assert_closed_set(InputResolution::values());
    assert_closed_set(LanguageSelectionPolicy::values());
    assert_closed_set(VideoSelectorColorSpace::values());
    assert_closed_set(VideoSelectorColorSpaceUsage::values());
    assert_closed_set(InputSecurityGroupState::values());
}

#[test]
fn channel_multiplex_schedule_token_sets() {
    assert_closed_set(ChannelState::values());
    assert_closed_set(ChannelClass::values());
    assert_closed_set(LogLevel::values());
    assert_closed_set(PipelineId::values());
    assert_closed_set(MultiplexState::values());
    assert_closed_set(PreferredChannelPipeline::values());
    assert_closed_set(FollowPoint::values());
}

#[test]
fn invalid_value_error_names_the_offending_input() {
    let err = "HEV3".parse::<AacProfile>().unwrap_err();
    assert_eq!(
        err,
        ModelError::InvalidValue {
            kind: "AacProfile",
            value: "HEV3".to_string(),
        }
    );
    assert_eq!(err.to_string(), "invalid value for AacProfile: \"HEV3\"");
}

#[test]
fn compound_tokens_keep_their_exact_spelling() {
    assert_eq!(AacCodingMode::CodingMode51.to_string(), "CODING_MODE_5_1");
    assert_eq!(H264Profile::High42210Bit.to_string(), "HIGH_422_10BIT");
    assert_eq!(
        AudioNormalizationAlgorithm::Itu17702.to_string(),
        "ITU_1770_2"
    );
    assert_eq!(HlsCodecSpecification::Rfc6381.to_string(), "RFC_6381");
    assert_eq!(InputMaximumBitrate::Max20Mbps.to_string(), "MAX_20_MBPS");
}
