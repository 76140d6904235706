use crate::constants::{widget_value_id, PLACES_ID, READOUT_ID, WIDGETS_ID};
use crate::dom;
use crate::markup;
use flight_core::{Dashboard, GlobeViewer};
use web_sys as web;

/// Rebuild the whole panel: places, widget rows and readout.
pub fn render<V: GlobeViewer>(document: &web::Document, dashboard: &Dashboard<V>) {
    let current = dashboard.current();
    dom::set_inner_html(
        document,
        PLACES_ID,
        &markup::places_html(dashboard.places(), current.name.as_deref()),
    );
    dom::set_inner_html(document, WIDGETS_ID, &markup::widgets_html(dashboard.bank()));
    dom::set_inner_html(document, READOUT_ID, &markup::readout_html(current));
}

/// Update widget values and the readout in place, leaving the place list
/// (and its focus) alone.
pub fn refresh<V: GlobeViewer>(document: &web::Document, dashboard: &Dashboard<V>) {
    for (field, widget) in dashboard.bank().iter() {
        if let Some(el) = document.get_element_by_id(&widget_value_id(field.key())) {
            el.set_text_content(Some(&widget.display()));
        }
    }
    dom::set_inner_html(
        document,
        READOUT_ID,
        &markup::readout_html(dashboard.current()),
    );
}
