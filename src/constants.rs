// DOM ids and attribute names shared by the markup, panel and event wiring.

pub const DASHBOARD_ID: &str = "flight-dashboard"; // delegated click/change root
pub const VIEWER_CONTAINER_ID: &str = "cesium-container";
pub const PLACES_ID: &str = "flight-places";
pub const WIDGETS_ID: &str = "flight-widgets";
pub const READOUT_ID: &str = "flight-readout";
pub const QUERY_BUTTON_ID: &str = "camera-query";

pub const PLACE_RADIO_NAME: &str = "flight-place";

// JSON object with viewer options, e.g. {"homeButton":true,"ionToken":"..."}
pub const VIEWER_OPTIONS_ATTR: &str = "data-viewer-options";
pub const FIELD_ATTR: &str = "data-field";
pub const BUTTON_ATTR: &str = "data-button";

#[inline]
pub fn widget_value_id(field_key: &str) -> String {
    format!("cvar-{}-value", field_key)
}
