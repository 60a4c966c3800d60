//! Count-up animation for the calculator's numeric outputs.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Rounds to a whole number and adds thousands separators, e.g. `92,000`.
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Reads back a previously rendered value. Every non-digit is dropped, and
/// text without digits counts as zero.
pub fn parse_displayed(text: &str) -> f64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<f64>().unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub value: f64,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
}

impl Tween {
    pub fn new(start: f64, end: f64, duration_ms: f64) -> Self {
        Self { start, end, duration_ms }
    }

    /// Value to show `elapsed_ms` after the animation started. The last frame
    /// lands exactly on `end`.
    pub fn sample(&self, elapsed_ms: f64) -> Frame {
        let progress = if self.duration_ms > 0.0 {
            (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            return Frame { value: self.end, done: true };
        }

        let eased = ease_out_cubic(progress);
        Frame {
            value: self.start + (self.end - self.start) * eased,
            done: false,
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Counter shared between an animator and its queued frames. A frame only
/// runs while the token it was started with is still current.
#[derive(Clone, Debug, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    /// Starts a new generation, making every earlier token stale.
    pub fn begin(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }

    pub fn cancel(&self) {
        self.begin();
    }
}

/// Drives one output field. Starting a new animation bumps the generation,
/// which stops whatever frames the previous one still had queued.
#[derive(Debug, Default)]
pub struct FieldAnimator {
    generation: Generation,
}

impl FieldAnimator {
    /// Stops the running animation, leaving the field at its current value.
    pub fn cancel(&self) {
        self.generation.cancel();
    }

    pub fn animate(&self, element: Element, tween: Tween) {
        let generation = self.generation.begin();

        let Some(window) = web_sys::window() else {
            element.set_text_content(Some(&format_number(tween.end)));
            return;
        };
        let started_at = window.performance().map(|p| p.now()).unwrap_or(0.0);

        let fallback = element.clone();
        let current = self.generation.clone();
        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let next_frame = frame.clone();
        let raf_window = window.clone();

        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if !current.is_current(generation) {
                // Superseded by a newer animation on the same field.
                let _ = next_frame.borrow_mut().take();
                return;
            }

            let Frame { value, done } = tween.sample(timestamp - started_at);
            element.set_text_content(Some(&format_number(value)));

            if done {
                let _ = next_frame.borrow_mut().take();
                return;
            }
            if let Some(callback) = next_frame.borrow().as_ref() {
                if raf_window
                    .request_animation_frame(callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    element.set_text_content(Some(&format_number(tween.end)));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let scheduled = frame
            .borrow()
            .as_ref()
            .map(|callback| window.request_animation_frame(callback.as_ref().unchecked_ref()));
        if !matches!(scheduled, Some(Ok(_))) {
            log::warn!("requestAnimationFrame unavailable, snapping to final value");
            let _ = frame.borrow_mut().take();
            fallback.set_text_content(Some(&format_number(tween.end)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_generation_makes_older_frames_stale() {
        let generation = Generation::default();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn cancel_stales_the_running_generation() {
        let generation = Generation::default();
        let queued = generation.clone();
        let token = generation.begin();
        generation.cancel();
        assert!(!queued.is_current(token));
    }

    #[test]
    fn animator_cancel_reaches_queued_frames() {
        let animator = FieldAnimator::default();
        let frames = animator.generation.clone();
        let token = animator.generation.begin();
        animator.cancel();
        assert!(!frames.is_current(token));
    }

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn tween_rises_monotonically_and_snaps_to_end() {
        let tween = Tween::new(0.0, 7700.0, 500.0);
        let mut previous = tween.start;
        for ms in (0..=520).step_by(16) {
            let frame = tween.sample(f64::from(ms));
            assert!(frame.value >= previous, "dropped at {}ms", ms);
            assert!(frame.value <= tween.end);
            previous = frame.value;
        }
        let last = tween.sample(500.0);
        assert!(last.done);
        assert_eq!(last.value, 7700.0);
    }

    #[test]
    fn tween_falls_monotonically_when_value_shrinks() {
        let tween = Tween::new(92_000.0, 9_200.0 / 3.0, 400.0);
        let mut previous = tween.start;
        for ms in (0..400).step_by(10) {
            let frame = tween.sample(f64::from(ms));
            assert!(!frame.done);
            assert!(frame.value <= previous);
            assert!(frame.value >= tween.end);
            previous = frame.value;
        }
        assert_eq!(tween.sample(10_000.0).value, 9_200.0 / 3.0);
    }

    #[test]
    fn early_timestamps_hold_the_start_value() {
        let tween = Tween::new(300.0, 1500.0, 500.0);
        assert_eq!(tween.sample(-3.0), Frame { value: 300.0, done: false });
    }

    #[test]
    fn zero_duration_jumps_straight_to_end() {
        let tween = Tween::new(1.0, 2.0, 0.0);
        assert_eq!(tween.sample(0.0), Frame { value: 2.0, done: true });
    }

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.4), "999");
        assert_eq!(format_number(999.5), "1,000");
        assert_eq!(format_number(92_000.0), "92,000");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
        assert_eq!(format_number(-38_500.0), "-38,500");
    }

    #[test]
    fn parses_rendered_text() {
        assert_eq!(parse_displayed("92,000"), 92_000.0);
        assert_eq!(parse_displayed("KES 1,500"), 1500.0);
        assert_eq!(parse_displayed(""), 0.0);
        assert_eq!(parse_displayed("—"), 0.0);
    }
}
