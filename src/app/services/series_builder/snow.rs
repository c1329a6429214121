//! Frozen-precipitation flag extraction
//!
//! The automated present-weather fields AW1..AW3 each encode one weather
//! phenomenon as `condition_code,quality_code`. An observation is flagged
//! frozen when any available field's leading condition code belongs to the
//! configured frozen-precipitation set. The flag alone does not make a
//! snow hour: it is later combined with the measurable-precipitation
//! predicate (`depth > threshold`).

use crate::app::models::RawObservation;
use crate::config::SnowFlagConfig;

/// True iff at least one present AWn field carries a frozen-precipitation
/// condition code. Absent fields contribute false, never an error.
pub fn is_frozen_precipitation(row: &RawObservation, config: &SnowFlagConfig) -> bool {
    row.present_weather.iter().flatten().any(|value| {
        value.split(',').next().is_some_and(|code| {
            let code = code.trim();
            config.frozen_condition_codes.iter().any(|c| c == code)
        })
    })
}
