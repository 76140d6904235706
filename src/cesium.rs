//! Bindings to the subset of the CesiumJS API the dashboard drives.
//!
//! The page loads `Cesium.js` as a global script before this module starts;
//! everything below resolves against `globalThis.Cesium`.

use anyhow::anyhow;
use flight_core::{CameraPose, FlyToRequest, GlobeViewer, ViewerOptions};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Cesium)]
    pub type Viewer;

    #[wasm_bindgen(constructor, js_namespace = Cesium, catch)]
    fn new(container: &web::Element, options: &JsValue) -> Result<Viewer, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn camera(this: &Viewer) -> Camera;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Cesium)]
    pub type Camera;

    #[wasm_bindgen(method, js_name = flyTo)]
    fn fly_to(this: &Camera, options: &JsValue);

    #[wasm_bindgen(method, getter, js_name = positionCartographic)]
    fn position_cartographic(this: &Camera) -> Cartographic;

    #[wasm_bindgen(method, getter)]
    fn heading(this: &Camera) -> f64;

    #[wasm_bindgen(method, getter)]
    fn pitch(this: &Camera) -> f64;

    #[wasm_bindgen(method, getter)]
    fn roll(this: &Camera) -> f64;

    #[wasm_bindgen(method, getter, js_name = moveEnd)]
    fn move_end(this: &Camera) -> CesiumEvent;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Cesium)]
    pub type Cartographic;

    #[wasm_bindgen(method, getter)]
    fn longitude(this: &Cartographic) -> f64;

    #[wasm_bindgen(method, getter)]
    fn latitude(this: &Cartographic) -> f64;

    #[wasm_bindgen(method, getter)]
    fn height(this: &Cartographic) -> f64;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Cesium)]
    pub type Cartesian3;

    #[wasm_bindgen(constructor, js_namespace = Cesium)]
    fn new(x: f64, y: f64, z: f64) -> Cartesian3;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Cesium, js_name = Event)]
    pub type CesiumEvent;

    /// Returns a function that removes the listener again.
    #[wasm_bindgen(method, js_name = addEventListener)]
    fn add_event_listener(this: &CesiumEvent, listener: &js_sys::Function) -> js_sys::Function;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Cesium, js_name = createWorldTerrain, catch)]
    fn create_world_terrain() -> Result<JsValue, JsValue>;
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

fn set_ion_token(token: &str) -> Result<(), JsValue> {
    let cesium = Reflect::get(&js_sys::global(), &JsValue::from_str("Cesium"))?;
    let ion = Reflect::get(&cesium, &JsValue::from_str("Ion"))?;
    Reflect::set(
        &ion,
        &JsValue::from_str("defaultAccessToken"),
        &JsValue::from_str(token),
    )
    .map(|_| ())
}

fn viewer_options_object(options: &ViewerOptions) -> Result<Object, JsValue> {
    let obj = Object::new();
    set(&obj, "homeButton", &JsValue::from_bool(options.home_button))?;
    set(
        &obj,
        "navigationHelpButton",
        &JsValue::from_bool(options.help_button),
    )?;
    if options.world_terrain {
        match create_world_terrain() {
            Ok(terrain) => set(&obj, "terrainProvider", &terrain)?,
            Err(e) => log::warn!("[viewer] world terrain unavailable: {:?}", e),
        }
    }
    Ok(obj)
}

fn fly_to_options(request: &FlyToRequest) -> Result<Object, JsValue> {
    let d = request.destination;
    let orientation = Object::new();
    set(&orientation, "heading", &JsValue::from_f64(request.heading_rad))?;
    set(&orientation, "pitch", &JsValue::from_f64(request.pitch_rad))?;
    set(&orientation, "roll", &JsValue::from_f64(request.roll_rad))?;

    let opts = Object::new();
    set(&opts, "destination", &Cartesian3::new(d.x, d.y, d.z))?;
    set(&opts, "orientation", &orientation)?;
    Ok(opts)
}

/// A `Cesium.Viewer` living in a container element.
pub struct CesiumGlobe {
    viewer: Viewer,
}

impl CesiumGlobe {
    pub fn create(container: &web::Element, options: &ViewerOptions) -> anyhow::Result<Self> {
        if let Some(token) = options.ion_token.as_deref() {
            set_ion_token(token).map_err(|e| anyhow!("setting ion token: {:?}", e))?;
        }
        let js_options =
            viewer_options_object(options).map_err(|e| anyhow!("viewer options: {:?}", e))?;
        let viewer =
            Viewer::new(container, &js_options).map_err(|e| anyhow!("Cesium.Viewer: {:?}", e))?;
        log::info!(
            "[viewer] Cesium viewer created (home={}, help={})",
            options.home_button,
            options.help_button
        );
        Ok(Self { viewer })
    }

    /// Subscribe to the camera's motion-ended event for the page lifetime.
    pub fn on_move_end(&self, handler: impl FnMut() + 'static) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let _remove = self
            .viewer
            .camera()
            .move_end()
            .add_event_listener(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

impl GlobeViewer for CesiumGlobe {
    fn fly_to(&mut self, request: &FlyToRequest) {
        match fly_to_options(request) {
            Ok(opts) => self.viewer.camera().fly_to(&opts),
            Err(e) => log::error!("[viewer] fly-to options error: {:?}", e),
        }
    }

    fn camera_pose(&self) -> Option<CameraPose> {
        let camera = self.viewer.camera();
        let position = camera.position_cartographic();
        let pose = CameraPose {
            longitude_rad: position.longitude(),
            latitude_rad: position.latitude(),
            height_m: position.height(),
            heading_rad: camera.heading(),
            pitch_rad: camera.pitch(),
            roll_rad: camera.roll(),
        };
        // a camera without a resolved position reports NaN/undefined
        [pose.longitude_rad, pose.latitude_rad, pose.height_m]
            .iter()
            .all(|v| v.is_finite())
            .then_some(pose)
    }
}
