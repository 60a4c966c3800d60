//! Small DOM lookups shared by the page components.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element matches {0}")]
    MissingElement(String),
    #[error("element {0} is not an HTMLElement")]
    NotHtmlElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn element_by_id(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(format!("#{}", id)))
}

pub fn html_element_by_id(id: &str) -> Result<HtmlElement, DomError> {
    element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::NotHtmlElement(format!("#{}", id)))
}

/// Vertical scroll offset of the page, never negative.
pub fn scroll_offset() -> Result<f64, DomError> {
    Ok(window()?.page_y_offset()?.max(0.0))
}

pub fn smooth_scroll_to(top: f64) -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Runs `f` once, on the next animation frame.
pub fn request_frame<F>(f: F) -> Result<(), DomError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window()?.request_animation_frame(callback.unchecked_ref())?;
    Ok(())
}

/// `id` of the closest enclosing `<section>`, if there is one with an id.
pub fn enclosing_section_id(element: &Element) -> Option<String> {
    element
        .closest("section")
        .ok()
        .flatten()
        .map(|section| section.id())
        .filter(|id| !id.is_empty())
}
