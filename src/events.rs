//! Wiring from DOM and viewer events into the shared dashboard.
//!
//! Handlers hold the dashboard behind `Rc<RefCell<..>>`; each one borrows it
//! only for the duration of a single operation and the re-render after it.

use crate::cesium::CesiumGlobe;
use crate::constants::{BUTTON_ATTR, FIELD_ATTR, PLACE_RADIO_NAME, QUERY_BUTTON_ID};
use crate::dom;
use crate::markup;
use crate::panel;
use flight_core::{CameraField, Dashboard};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type SharedDashboard = Rc<RefCell<Dashboard<CesiumGlobe>>>;

enum PanelUpdate {
    Full,
    Values,
}

fn apply(
    dashboard: &SharedDashboard,
    update: PanelUpdate,
    op: impl FnOnce(&mut Dashboard<CesiumGlobe>),
) {
    let Ok(mut dash) = dashboard.try_borrow_mut() else {
        log::warn!("[dashboard] busy; dropping re-entrant event");
        return;
    };
    op(&mut *dash);
    if let Some(document) = dom::window_document() {
        match update {
            PanelUpdate::Full => panel::render(&document, &*dash),
            PanelUpdate::Values => panel::refresh(&document, &*dash),
        }
    }
}

fn handle_click(ev: &web::Event, dashboard: &SharedDashboard) {
    let Some(target) = dom::event_target_element(ev) else {
        return;
    };
    if let Some((button_el, button_key)) = dom::closest_with_attr(&target, BUTTON_ATTR) {
        let field = button_el
            .get_attribute(FIELD_ATTR)
            .and_then(|key| CameraField::from_key(&key));
        let button = markup::parse_button(&button_key);
        if let (Some(field), Some(button)) = (field, button) {
            apply(dashboard, PanelUpdate::Values, |dash| {
                dash.press(field, button);
            });
        }
        return;
    }
    if target.id() == QUERY_BUTTON_ID {
        log::info!("[dashboard] camera query");
        apply(dashboard, PanelUpdate::Values, |dash| dash.query_camera());
    }
}

fn handle_change(ev: &web::Event, dashboard: &SharedDashboard) {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    if input.name() != PLACE_RADIO_NAME {
        return;
    }
    let name = input.value();
    apply(dashboard, PanelUpdate::Full, |dash| {
        if let Err(e) = dash.select_place(&name) {
            log::warn!("[dashboard] {}", e);
        }
    });
}

/// Delegated click and change handlers on the dashboard root element.
pub fn wire_panel(root: &web::Element, dashboard: &SharedDashboard) {
    let on_click = dashboard.clone();
    dom::add_listener(root, "click", move |ev| handle_click(&ev, &on_click));
    let on_change = dashboard.clone();
    dom::add_listener(root, "change", move |ev| handle_change(&ev, &on_change));
}

/// Forward the camera's motion-ended event. The dashboard is touched on a
/// later microtask so a signal raised from inside a fly-to call cannot
/// collide with the borrow that issued it.
pub fn wire_move_end(globe: &CesiumGlobe, dashboard: &SharedDashboard) {
    let dashboard = dashboard.clone();
    globe.on_move_end(move || {
        let dashboard = dashboard.clone();
        spawn_local(async move {
            apply(&dashboard, PanelUpdate::Values, |dash| dash.motion_ended());
        });
    });
}
