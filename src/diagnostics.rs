use gloo_timers::callback::Timeout;
use web_sys::{Element, ErrorEvent, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom::{self, DomError};
use crate::telemetry::{self, Event, PageMetrics};

/// Tab from an unfocused page jumps straight to the hero instead of walking
/// through the header links.
pub fn should_skip_to_hero(key: &str, shift: bool, focus_on_body: bool) -> bool {
    key == "Tab" && !shift && focus_on_body
}

/// `document.readyState` once every subresource, and so `load`, is done.
pub fn is_load_complete(ready_state: &str) -> bool {
    ready_state == "complete"
}

pub fn initialized_event() -> Result<Event, DomError> {
    let window = dom::window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Event::Initialized {
        timestamp: telemetry::now(),
        user_agent: window.navigator().user_agent()?,
        viewport: format!("{}x{}", width, height),
    })
}

fn page_metrics() -> Result<PageMetrics, DomError> {
    let performance = dom::window()?
        .performance()
        .ok_or_else(|| DomError::Js("performance API unavailable".to_string()))?;
    let timing = performance.timing();
    Ok(PageMetrics::from_timing(
        timing.navigation_start(),
        timing.response_start(),
        timing.dom_content_loaded_event_end(),
        timing.load_event_end(),
    ))
}

fn report_page_metrics() {
    match page_metrics() {
        Ok(metrics) => metrics.report(),
        Err(e) => log::debug!("Skipping performance metrics: {}", e),
    }
}

fn skip_to_hero(e: &KeyboardEvent) -> Result<(), DomError> {
    let document = dom::document()?;
    let focus_on_body = match (document.active_element(), document.body()) {
        (Some(active), Some(body)) => {
            let body: &Element = body.as_ref();
            &active == body
        }
        _ => false,
    };
    if !should_skip_to_hero(&e.key(), e.shift_key(), focus_on_body) {
        return Ok(());
    }

    let hero = dom::html_element_by_id(config::HERO_ID)?;
    e.prevent_default();
    hero.focus()?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    hero.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Page-wide listeners: global error logging, load-time metrics and the
/// skip-to-hero keyboard shortcut.
#[hook]
pub fn use_page_diagnostics() {
    let metrics_reported = use_mut_ref(|| false);

    use_event_with_window("error", |e: ErrorEvent| {
        gloo_console::error!(format!(
            "JavaScript Error: {} ({}:{}:{})",
            e.message(),
            e.filename(),
            e.lineno(),
            e.colno()
        ));
    });

    {
        let metrics_reported = metrics_reported.clone();
        use_event_with_window("load", move |_: web_sys::Event| {
            if metrics_reported.replace(true) {
                return;
            }
            // loadEventEnd is only filled in once the load handlers return.
            Timeout::new(0, report_page_metrics).forget();
        });
    }

    // The bundle usually boots after `load` already fired.
    use_effect_with_deps(
        move |_| {
            let complete = dom::document()
                .map(|d| is_load_complete(&d.ready_state()))
                .unwrap_or(false);
            if complete && !metrics_reported.replace(true) {
                report_page_metrics();
            }
            || ()
        },
        (),
    );

    use_event_with_window("keydown", |e: KeyboardEvent| {
        if let Err(err) = skip_to_hero(&e) {
            log::debug!("Skip to hero unavailable: {}", err);
        }
    });
}
