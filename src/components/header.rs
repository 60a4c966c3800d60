use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::ripple::RippleButton;
use crate::config;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollDirection::Up => "up",
            ScrollDirection::Down => "down",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub direction: ScrollDirection,
}

/// Remembers the last scroll offset so each observation can tell which way
/// the page moved.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn observe(&mut self, offset: f64) -> HeaderState {
        let direction = if offset > self.last_offset {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_offset = offset.max(0.0);

        HeaderState {
            scrolled: offset > config::SCROLL_THRESHOLD,
            direction,
        }
    }
}

/// Lets at most one header update wait for the next animation frame, however
/// many scroll events arrive in between.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    ticking: bool,
}

impl FrameThrottle {
    /// True when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.ticking, true)
    }

    pub fn frame_done(&mut self) {
        self.ticking = false;
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let state = use_state_eq(|| HeaderState {
        scrolled: false,
        direction: ScrollDirection::Up,
    });
    let tracker = use_mut_ref(ScrollTracker::default);
    let throttle = use_mut_ref(FrameThrottle::default);

    {
        let state = state.clone();
        use_event_with_window("scroll", move |_: web_sys::Event| {
            if !throttle.borrow_mut().request() {
                return;
            }

            let update = {
                let state = state.clone();
                let tracker = tracker.clone();
                let throttle = throttle.clone();
                move || {
                    if let Ok(offset) = dom::scroll_offset() {
                        state.set(tracker.borrow_mut().observe(offset));
                    }
                    throttle.borrow_mut().frame_done();
                }
            };
            if let Err(e) = dom::request_frame(update) {
                log::debug!("Header update not scheduled: {}", e);
                throttle.borrow_mut().frame_done();
            }
        });
    }

    html! {
        <header
            id={config::HEADER_ID}
            class={classes!("site-header", state.scrolled.then(|| "scrolled"))}
            data-direction={state.direction.as_str()}
        >
            <nav class="nav-content">
                <AnchorLink href="#hero" class="nav-logo">{"ZeroPesa"}</AnchorLink>
                <div class="nav-right">
                    <AnchorLink href="#problem" class="nav-link">{"Why"}</AnchorLink>
                    <AnchorLink href="#how-it-works" class="nav-link">{"How it works"}</AnchorLink>
                    <AnchorLink href="#calculator" class="nav-link">{"Calculator"}</AnchorLink>
                    <AnchorLink href="#trust" class="nav-link">{"Trust"}</AnchorLink>
                    <RippleButton class="btn-primary" label="Get the app" />
                </div>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_past_threshold() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.observe(100.0).scrolled);
        assert!(tracker.observe(101.0).scrolled);
        assert!(!tracker.observe(20.0).scrolled);
    }

    #[test]
    fn direction_follows_offset_changes() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.observe(300.0).direction, ScrollDirection::Down);
        assert_eq!(tracker.observe(250.0).direction, ScrollDirection::Up);
        assert_eq!(tracker.observe(250.0).direction, ScrollDirection::Up);
        assert_eq!(tracker.observe(400.0).direction, ScrollDirection::Down);
    }

    #[test]
    fn one_frame_per_scroll_burst() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());

        throttle.frame_done();
        assert!(throttle.request());
    }

    #[test]
    fn overscroll_does_not_go_negative() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(-40.0);
        assert_eq!(tracker.observe(0.0).direction, ScrollDirection::Up);
        assert_eq!(tracker.observe(1.0).direction, ScrollDirection::Down);
    }
}
