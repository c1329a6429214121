//! Tests for the AA1 and TMP compound field decoders

use crate::app::services::series_builder::decoders::{decode_aa1_depth_mm, decode_tmp_celsius};
use crate::config::{PrecipDecoderConfig, TempDecoderConfig};

fn precip_config() -> PrecipDecoderConfig {
    PrecipDecoderConfig::default()
}

fn temp_config() -> TempDecoderConfig {
    TempDecoderConfig::default()
}

// -----------------------------------------------------------------------------
// decode_aa1_depth_mm
// -----------------------------------------------------------------------------

#[test]
fn test_aa1_normal_depth() {
    // depth = 50 tenths = 5.0 mm
    assert_eq!(decode_aa1_depth_mm("0001,0050,C,5", &precip_config()), Some(5.0));
}

#[test]
fn test_aa1_zero_is_valid_not_missing() {
    assert_eq!(decode_aa1_depth_mm("0001,0000,C,5", &precip_config()), Some(0.0));
}

#[test]
fn test_aa1_missing_sentinel() {
    assert_eq!(decode_aa1_depth_mm("0001,9999,C,5", &precip_config()), None);
    assert_eq!(decode_aa1_depth_mm("0001,+9999,C,5", &precip_config()), None);
}

#[test]
fn test_aa1_too_few_subfields() {
    assert_eq!(decode_aa1_depth_mm("0001", &precip_config()), None);
    assert_eq!(decode_aa1_depth_mm("", &precip_config()), None);
}

#[test]
fn test_aa1_unparseable_depth() {
    assert_eq!(decode_aa1_depth_mm("0001,abc,C,5", &precip_config()), None);
    assert_eq!(decode_aa1_depth_mm("0001,,C,5", &precip_config()), None);
}

#[test]
fn test_aa1_signed_depth() {
    // Explicit sign characters parse as plain signed integers.
    assert_eq!(decode_aa1_depth_mm("0001,+0050,C,5", &precip_config()), Some(5.0));
}

#[test]
fn test_aa1_leading_zeros() {
    assert_eq!(decode_aa1_depth_mm("0001,0005,C,5", &precip_config()), Some(0.5));
    assert_eq!(decode_aa1_depth_mm("0001,0100,C,5", &precip_config()), Some(10.0));
}

#[test]
fn test_aa1_two_subfields_suffice() {
    assert_eq!(decode_aa1_depth_mm("01,0025", &precip_config()), Some(2.5));
}

// -----------------------------------------------------------------------------
// decode_tmp_celsius
// -----------------------------------------------------------------------------

#[test]
fn test_tmp_positive() {
    assert_eq!(decode_tmp_celsius("+0215,1", &temp_config()), Some(21.5));
}

#[test]
fn test_tmp_negative() {
    assert_eq!(decode_tmp_celsius("-0056,1", &temp_config()), Some(-5.6));
}

#[test]
fn test_tmp_zero() {
    assert_eq!(decode_tmp_celsius("+0000,1", &temp_config()), Some(0.0));
}

#[test]
fn test_tmp_missing_sentinel() {
    assert_eq!(decode_tmp_celsius("+9999,9", &temp_config()), None);
    assert_eq!(decode_tmp_celsius("9999,9", &temp_config()), None);
}

#[test]
fn test_tmp_rejected_quality_flags() {
    // The value parses, but the quality flag marks it suspect/erroneous.
    for flag in ["2", "3", "6", "7", "9"] {
        assert_eq!(
            decode_tmp_celsius(&format!("+0100,{}", flag), &temp_config()),
            None,
            "flag {} should reject the observation",
            flag
        );
    }
}

#[test]
fn test_tmp_accepted_quality_flags() {
    assert_eq!(decode_tmp_celsius("+0100,1", &temp_config()), Some(10.0));
    assert_eq!(decode_tmp_celsius("+0100,0", &temp_config()), Some(10.0));
    assert_eq!(decode_tmp_celsius("+0100,5", &temp_config()), Some(10.0));
}

#[test]
fn test_tmp_quality_rejection_disabled() {
    let config = TempDecoderConfig {
        reject_flagged_quality: false,
        ..TempDecoderConfig::default()
    };
    // With rejection disabled, the flagged value survives.
    assert_eq!(decode_tmp_celsius("+0100,9", &config), Some(10.0));
    // The sentinel check still applies.
    assert_eq!(decode_tmp_celsius("+9999,1", &config), None);
}

#[test]
fn test_tmp_without_quality_subfield() {
    assert_eq!(decode_tmp_celsius("+0150", &temp_config()), Some(15.0));
}

#[test]
fn test_tmp_unparseable() {
    assert_eq!(decode_tmp_celsius("abc,1", &temp_config()), None);
    assert_eq!(decode_tmp_celsius("", &temp_config()), None);
}
