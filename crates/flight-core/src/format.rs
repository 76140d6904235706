use crate::constants::{DISPLAY_MAX_FRACTION_DIGITS, DISPLAY_WIDTH};
use crate::coords::CameraCoordinates;
use serde::Serialize;

/// Render a widget value right-aligned to `DISPLAY_WIDTH` characters.
///
/// Integral values print without decimals; anything else prints with at
/// most `DISPLAY_MAX_FRACTION_DIGITS` fractional digits, trailing zeros
/// trimmed.
pub fn format_value(value: f64) -> String {
    // -0.0 would otherwise print as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    let text = if !value.is_finite() || value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let fixed = format!("{:.*}", DISPLAY_MAX_FRACTION_DIGITS, value);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        match trimmed {
            "-0" => "0".to_string(),
            t => t.to_string(),
        }
    };
    format!("{:>width$}", text, width = DISPLAY_WIDTH)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Readout<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    longitude_deg: String,
    latitude_deg: String,
    height_meters: String,
    heading_deg: String,
    pitch_deg: String,
    roll_deg: String,
}

/// One-line JSON readout of a camera position: six decimals for the
/// geographic position, whole numbers for height and orientation.
pub fn format_place_summary(coords: &CameraCoordinates) -> String {
    let readout = Readout {
        name: coords.name.as_deref(),
        longitude_deg: format!("{:.6}", coords.longitude_deg),
        latitude_deg: format!("{:.6}", coords.latitude_deg),
        height_meters: format!("{:.0}", coords.height_meters),
        heading_deg: format!("{:.0}", coords.heading_deg),
        pitch_deg: format!("{:.0}", coords.pitch_deg),
        roll_deg: format!("{:.0}", coords.roll_deg),
    };
    serde_json::to_string(&readout).unwrap_or_default()
}
