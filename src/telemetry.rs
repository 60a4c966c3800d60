//! Structured console events, kept in one shape so an analytics sink can be
//! attached later without touching the components.

use serde::Serialize;

use crate::config;

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Initialized {
        timestamp: String,
        user_agent: String,
        viewport: String,
    },
    Navigation {
        from: String,
        to: String,
        timestamp: String,
    },
    CalculatorUpdate {
        amount: u32,
        savings: f64,
        savings_percent: Option<u32>,
    },
    ElementVisible {
        element: String,
        timestamp: String,
    },
    ImageLoaded {
        src: String,
    },
    ButtonClick {
        button: String,
        section: String,
        timestamp: String,
    },
    PageMetrics(PageMetrics),
}

pub fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub fn track(event: &Event) {
    match serde_json::to_string(event) {
        Ok(json) => log::info!("{}", json),
        Err(e) => log::warn!("Failed to serialize telemetry event: {}", e),
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PageMetrics {
    pub page_load_ms: f64,
    pub dom_content_loaded_ms: f64,
    pub first_byte_ms: f64,
}

impl PageMetrics {
    /// Builds the metrics from `performance.timing` marks, all relative to
    /// navigation start.
    pub fn from_timing(
        navigation_start: f64,
        response_start: f64,
        dom_content_loaded_end: f64,
        load_event_end: f64,
    ) -> Self {
        Self {
            page_load_ms: load_event_end - navigation_start,
            dom_content_loaded_ms: dom_content_loaded_end - navigation_start,
            first_byte_ms: response_start - navigation_start,
        }
    }

    pub fn content_loaded_within_budget(&self) -> bool {
        self.dom_content_loaded_ms < config::CONTENT_LOADED_BUDGET_MS
    }

    pub fn page_load_within_budget(&self) -> bool {
        self.page_load_ms < config::PAGE_LOAD_BUDGET_MS
    }

    pub fn report(&self) {
        track(&Event::PageMetrics(*self));
        if self.content_loaded_within_budget() {
            log::info!("First Contentful Paint target met (< 1.5s)");
        }
        if self.page_load_within_budget() {
            log::info!("Time to Interactive target met (< 3s)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_serialize_with_a_tag() {
        let event = Event::CalculatorUpdate {
            amount: 100_000,
            savings: 7700.0,
            savings_percent: Some(96),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "event": "calculator_update",
                "amount": 100000,
                "savings": 7700.0,
                "savings_percent": 96
            })
        );
    }

    #[test]
    fn metrics_flatten_into_the_event() {
        let metrics = PageMetrics::from_timing(1000.0, 1080.0, 1900.0, 3500.0);
        let value = serde_json::to_value(Event::PageMetrics(metrics)).unwrap();
        assert_eq!(value["event"], "page_metrics");
        assert_eq!(value["page_load_ms"], 2500.0);
        assert_eq!(value["dom_content_loaded_ms"], 900.0);
        assert_eq!(value["first_byte_ms"], 80.0);
    }

    #[test]
    fn budgets() {
        let fast = PageMetrics::from_timing(0.0, 50.0, 1200.0, 2900.0);
        assert!(fast.content_loaded_within_budget());
        assert!(fast.page_load_within_budget());

        let slow = PageMetrics::from_timing(0.0, 400.0, 1500.0, 3000.0);
        assert!(!slow.content_loaded_within_budget());
        assert!(!slow.page_load_within_budget());
    }

    #[test]
    fn timestamps_are_rfc3339() {
        assert!(chrono::DateTime::parse_from_rfc3339(&now()).is_ok());
    }
}
