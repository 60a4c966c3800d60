use wasm_bindgen::JsValue;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::dom::{self, DomError};
use crate::telemetry::{self, Event};

/// In-page target id for an anchor `href`. A bare `#` has no target and is
/// left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target sits just below the fixed
/// header.
pub fn scroll_destination(rect_top: f64, page_offset: f64, header_height: f64) -> f64 {
    rect_top + page_offset - header_height
}

/// Smoothly scrolls to `#id` and records it in the history. Returns an error
/// when the target is missing so the caller can fall back to the browser's
/// default jump.
fn scroll_to_anchor(href: &str, id: &str) -> Result<(), DomError> {
    let window = dom::window()?;
    let target = dom::element_by_id(id)?;
    let header_height = dom::html_element_by_id(config::HEADER_ID)
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0);

    let top = scroll_destination(
        target.get_bounding_client_rect().top(),
        dom::scroll_offset()?,
        header_height,
    );

    telemetry::track(&Event::Navigation {
        from: window.location().hash()?,
        to: href.to_string(),
        timestamp: telemetry::now(),
    });

    dom::smooth_scroll_to(top)?;
    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(href))?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(id) = anchor_target(&href) else {
                return;
            };
            // Only take over the click when the target actually exists.
            if dom::element_by_id(id).is_err() {
                return;
            }
            e.prevent_default();
            if let Err(err) = scroll_to_anchor(&href, id) {
                log::warn!("Anchor scroll to {} failed: {}", href, err);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
