use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::dom;
use crate::telemetry::{self, Event};

/// Injected once at the app root; every [`RippleButton`] relies on it.
pub const RIPPLE_CSS: &str = r#"
    .ripple {
        position: absolute;
        border-radius: 50%;
        transform: scale(0);
        animation: ripple-animation 0.6s ease-out;
        background-color: rgba(255, 255, 255, 0.5);
        pointer-events: none;
    }

    @keyframes ripple-animation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }
"#;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub diameter: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// A circle covering the button, centred on the click point.
    pub fn at_click(
        (width, height): (f64, f64),
        (client_x, client_y): (f64, f64),
        (offset_left, offset_top): (f64, f64),
    ) -> Self {
        let diameter = width.max(height);
        let radius = diameter / 2.0;
        Self {
            diameter,
            left: client_x - offset_left - radius,
            top: client_y - offset_top - radius,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {d}px; height: {d}px; left: {}px; top: {}px;",
            self.left,
            self.top,
            d = self.diameter
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    // The counter keys the span so a second click replaces the old ripple
    // instead of reusing it, which restarts the CSS animation.
    let ripple = use_state(|| None::<(u32, RippleGeometry)>);

    let onclick = {
        let ripple = ripple.clone();
        let label = props.label.clone();
        let forward = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(button) = e
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            {
                let geometry = RippleGeometry::at_click(
                    (f64::from(button.client_width()), f64::from(button.client_height())),
                    (f64::from(e.client_x()), f64::from(e.client_y())),
                    (f64::from(button.offset_left()), f64::from(button.offset_top())),
                );
                let generation = (*ripple).map(|(n, _)| n.wrapping_add(1)).unwrap_or(0);
                ripple.set(Some((generation, geometry)));

                telemetry::track(&Event::ButtonClick {
                    button: label.trim().to_string(),
                    section: dom::enclosing_section_id(&button).unwrap_or_else(|| "header".to_string()),
                    timestamp: telemetry::now(),
                });
            }

            if let Some(forward) = &forward {
                forward.emit(e);
            }
        })
    };

    html! {
        <button
            class={props.class.clone()}
            style="position: relative; overflow: hidden;"
            {onclick}
        >
            { props.label.to_string() }
            {
                if let Some((key, geometry)) = *ripple {
                    html! { <span key={key} class="ripple" style={geometry.style()}></span> }
                } else {
                    html! {}
                }
            }
        </button>
    }
}
