use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Listen for `event` on `element` for the page lifetime.
pub fn add_listener(
    element: &web::Element,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    if let Err(e) =
        element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("addEventListener({}) error: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn set_inner_html(document: &web::Document, element_id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_inner_html(html);
    }
}

#[inline]
pub fn event_target_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

/// Nearest ancestor-or-self of `el` carrying `attr`, and the attribute value.
pub fn closest_with_attr(el: &web::Element, attr: &str) -> Option<(web::Element, String)> {
    let found = el.closest(&format!("[{}]", attr)).ok().flatten()?;
    let value = found.get_attribute(attr)?;
    Some((found, value))
}
