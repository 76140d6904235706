// HTML fragments for the dashboard panel. Pure string building, so the
// host-side tests include this file directly.

use super::constants::{
    widget_value_id, BUTTON_ATTR, FIELD_ATTR, PLACE_RADIO_NAME, QUERY_BUTTON_ID,
};
use flight_core::{
    format_place_summary, Button, CameraCoordinates, CameraField, CvarBank, IncDecWidget,
    PlaceBook,
};

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[inline]
pub fn button_key(button: Button) -> &'static str {
    match button {
        Button::Decrement => "dec",
        Button::Increment => "inc",
    }
}

#[inline]
pub fn parse_button(key: &str) -> Option<Button> {
    match key {
        "dec" => Some(Button::Decrement),
        "inc" => Some(Button::Increment),
        _ => None,
    }
}

/// Radio list of places; `selected` is checked if present.
pub fn places_html(places: &PlaceBook, selected: Option<&str>) -> String {
    let mut html = String::from("<fieldset><legend>Fly and see</legend><form>");
    for place in places.iter() {
        let name = escape_html(&place.name);
        let checked = if selected == Some(place.name.as_str()) {
            " checked"
        } else {
            ""
        };
        html.push_str(&format!(
            "<label><input type=\"radio\" name=\"{}\" value=\"{}\"{}> {}</label><br>",
            PLACE_RADIO_NAME, name, checked, name
        ));
    }
    html.push_str("</form></fieldset>");
    html
}

fn widget_button_html(key: &str, button: Button) -> String {
    format!(
        "<button type=\"button\" {}=\"{}\" {}=\"{}\">{}</button>",
        FIELD_ATTR,
        key,
        BUTTON_ATTR,
        button_key(button),
        button.symbol()
    )
}

pub fn widget_row_html(field: CameraField, widget: &IncDecWidget) -> String {
    let key = field.key();
    format!(
        "<div class=\"widget\"><span class=\"label\">{}</span>&nbsp;{}&nbsp;<span class=\"value\" id=\"{}\" style=\"white-space:pre;font-family:monospace\">{}</span>&nbsp;{}</div>",
        escape_html(widget.label()),
        widget_button_html(key, Button::Decrement),
        widget_value_id(key),
        escape_html(&widget.display()),
        widget_button_html(key, Button::Increment),
    )
}

pub fn widgets_html(bank: &CvarBank) -> String {
    bank.iter()
        .map(|(field, widget)| widget_row_html(field, widget))
        .collect::<Vec<_>>()
        .join("")
}

/// Camera readout line with the on-demand query button.
pub fn readout_html(coords: &CameraCoordinates) -> String {
    format!(
        "<button type=\"button\" id=\"{}\">?</button>&nbsp;<span>{}</span>",
        QUERY_BUTTON_ID,
        escape_html(&format_place_summary(coords))
    )
}
