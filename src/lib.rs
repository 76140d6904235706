#![cfg(target_arch = "wasm32")]
use flight_core::{format_place_summary, Dashboard, PlaceBook, ViewerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod cesium;
mod constants;
mod dom;
mod events;
mod markup;
mod panel;

use cesium::CesiumGlobe;
use constants::{DASHBOARD_ID, VIEWER_CONTAINER_ID, VIEWER_OPTIONS_ATTR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("flight-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn read_viewer_options(container: &web::Element) -> ViewerOptions {
    match container.get_attribute(VIEWER_OPTIONS_ATTR) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("[viewer] ignoring malformed {}: {}", VIEWER_OPTIONS_ATTR, e);
            ViewerOptions::default()
        }),
        None => ViewerOptions::default(),
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = document
        .get_element_by_id(VIEWER_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", VIEWER_CONTAINER_ID))?;
    let root = document
        .get_element_by_id(DASHBOARD_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", DASHBOARD_ID))?;

    let options = read_viewer_options(&container);
    let dashboard = Dashboard::new(PlaceBook::default(), options.clone())?;
    let dashboard: events::SharedDashboard = Rc::new(RefCell::new(dashboard));
    dashboard.borrow_mut().subscribe(|coords| {
        log::debug!("[dashboard] current {}", format_place_summary(coords));
    });

    let globe = CesiumGlobe::create(&container, &options)?;
    events::wire_move_end(&globe, &dashboard);
    dashboard.borrow_mut().mount(globe);

    panel::render(&document, &*dashboard.borrow());
    events::wire_panel(&root, &dashboard);
    log::info!("[dashboard] ready with {} places", dashboard.borrow().places().len());
    Ok(())
}
