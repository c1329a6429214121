//! Compound ISD field decoders
//!
//! ISD packs each physical quantity into a comma-separated compound
//! string. The AA1 liquid-precipitation field has the form:
//!
//! ```text
//! period_hours,depth_tenths_mm,condition_code,quality_code
//! ```
//!
//! so `"01,0005,C,5"` means 0.5 mm accumulated over 1 hour. The TMP
//! air-temperature field has the form `signed_tenths,quality`, so
//! `"+0215,1"` means 21.5 degC with quality flag 1.
//!
//! Both decoders return `None` for sentinel-valued, malformed, or (for
//! temperature) quality-rejected sub-fields. They never panic and never
//! return an error: a bad value in one row must not halt a multi-year
//! batch run.

use crate::config::{PrecipDecoderConfig, TempDecoderConfig};

/// Decode the AA1 compound field into a precipitation depth in mm.
///
/// Returns `None` when the string has fewer than two comma-separated
/// sub-fields, the depth sub-field matches a missing-value sentinel
/// (exact string match, not numeric comparison), or the depth does not
/// parse as a signed integer. A depth of `0` is a valid 0.0 mm, distinct
/// from missing.
pub fn decode_aa1_depth_mm(raw: &str, config: &PrecipDecoderConfig) -> Option<f64> {
    let mut parts = raw.split(',');
    let _period = parts.next()?;
    let depth = parts.next()?.trim();
    if config.missing_sentinels.iter().any(|s| s == depth) {
        return None;
    }
    // Tenths of mm as a plain signed integer; leading zeros and an
    // explicit sign are accepted.
    depth.parse::<i64>().ok().map(|tenths| tenths as f64 / 10.0)
}

/// Decode the TMP compound field into degrees Celsius.
///
/// Returns `None` when the temperature sub-field matches a sentinel, the
/// quality flag is in the rejected set (while
/// `config.reject_flagged_quality` is enabled - the observation is then
/// discarded even though the numeric value parses), or the numeric parse
/// fails.
pub fn decode_tmp_celsius(raw: &str, config: &TempDecoderConfig) -> Option<f64> {
    let mut parts = raw.split(',');
    let temp = parts.next()?.trim();
    if config.missing_sentinels.iter().any(|s| s == temp) {
        return None;
    }
    if config.reject_flagged_quality {
        if let Some(flag) = parts.next() {
            let flag = flag.trim();
            if config.rejected_quality_flags.iter().any(|s| s == flag) {
                return None;
            }
        }
    }
    temp.parse::<i64>().ok().map(|tenths| tenths as f64 / 10.0)
}
