//! Fee comparison between the traditional remittance scheme and ZeroPesa.
//!
//! Everything in here is pure: the calculator component feeds it the slider
//! amount and hands the resulting [`ComparisonResult`] to the presentation
//! layer.

use thiserror::Error;

use crate::config;

#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("amount {0:?} is not an integer")]
    Unparseable(String),
}

/// Parses the raw value of the amount slider.
pub fn parse_amount(raw: &str) -> Result<u32, AmountError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| AmountError::Unparseable(raw.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    pub fee_rate: f64,
    pub markup_rate: f64,
}

impl FeeSchedule {
    /// 6% transfer fee plus a 2% exchange markup.
    pub const OLD: FeeSchedule = FeeSchedule {
        fee_rate: config::OLD_FEE_RATE,
        markup_rate: config::OLD_MARKUP_RATE,
    };

    /// 0.3% flat, no markup.
    pub const NEW: FeeSchedule = FeeSchedule {
        fee_rate: config::NEW_FEE_RATE,
        markup_rate: 0.0,
    };

    pub fn breakdown(&self, amount: u32) -> FeeBreakdown {
        let amount = f64::from(amount);
        let fee = amount * self.fee_rate;
        let markup = amount * self.markup_rate;
        let total = fee + markup;
        FeeBreakdown {
            fee,
            markup,
            total,
            receive_amount: amount - total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeBreakdown {
    pub fee: f64,
    pub markup: f64,
    pub total: f64,
    pub receive_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonResult {
    pub amount: u32,
    pub old: FeeBreakdown,
    pub new: FeeBreakdown,
    pub savings: f64,
    /// `None` when the old scheme charges nothing, which only happens for a
    /// zero amount.
    pub savings_percent: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    /// Maps a keyboard `key` value to a slider step. Only the arrow keys move
    /// the amount.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "ArrowRight" => Some(StepDirection::Up),
            "ArrowDown" | "ArrowLeft" => Some(StepDirection::Down),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeCalculator {
    pub old: FeeSchedule,
    pub new: FeeSchedule,
    pub min_amount: u32,
    pub max_amount: u32,
    pub step: u32,
}

impl Default for FeeCalculator {
    fn default() -> Self {
        Self {
            old: FeeSchedule::OLD,
            new: FeeSchedule::NEW,
            min_amount: config::MIN_AMOUNT,
            max_amount: config::MAX_AMOUNT,
            step: config::AMOUNT_STEP,
        }
    }
}

impl FeeCalculator {
    /// Computes both schemes for `amount`. The slider keeps the amount inside
    /// its bounds, so no clamping happens here.
    pub fn compare(&self, amount: u32) -> ComparisonResult {
        let old = self.old.breakdown(amount);
        let new = self.new.breakdown(amount);
        let savings = old.total - new.total;
        let savings_percent = if old.total > 0.0 {
            Some((savings / old.total * 100.0).round().clamp(0.0, 100.0) as u32)
        } else {
            None
        };

        ComparisonResult {
            amount,
            old,
            new,
            savings,
            savings_percent,
        }
    }

    /// Moves `amount` one keyboard step, staying inside the slider bounds.
    pub fn step(&self, amount: u32, direction: StepDirection) -> u32 {
        match direction {
            StepDirection::Up => amount.saturating_add(self.step).min(self.max_amount),
            StepDirection::Down => amount.saturating_sub(self.step).max(self.min_amount),
        }
    }

    /// Share of the slider track left of the thumb, as a percentage.
    pub fn fill_percent(&self, amount: u32) -> f64 {
        let span = f64::from(self.max_amount - self.min_amount);
        if span <= 0.0 {
            return 100.0;
        }
        (f64::from(amount) - f64::from(self.min_amount)) / span * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn in_range_amounts() -> impl Iterator<Item = u32> {
        (config::MIN_AMOUNT..=config::MAX_AMOUNT).step_by(2_500)
    }

    #[test]
    fn hundred_thousand_scenario() {
        let result = FeeCalculator::default().compare(100_000);

        assert!(close(result.old.fee, 6000.0));
        assert!(close(result.old.markup, 2000.0));
        assert!(close(result.old.total, 8000.0));
        assert!(close(result.old.receive_amount, 92_000.0));
        assert!(close(result.new.fee, 300.0));
        assert!(close(result.new.total, 300.0));
        assert!(close(result.new.receive_amount, 99_700.0));
        assert!(close(result.savings, 7700.0));
        assert_eq!(result.savings_percent, Some(96));
    }

    #[test]
    fn bounds_scenarios() {
        let calculator = FeeCalculator::default();

        let low = calculator.compare(config::MIN_AMOUNT);
        assert!(close(low.old.total, 800.0));
        assert!(close(low.new.total, 30.0));
        assert!(close(low.savings, 770.0));
        assert_eq!(low.savings_percent, Some(96));

        let high = calculator.compare(config::MAX_AMOUNT);
        assert!(close(high.old.total, 40_000.0));
        assert!(close(high.new.total, 1500.0));
        assert!(close(high.savings, 38_500.0));
        assert_eq!(high.savings_percent, Some(96));
    }

    #[test]
    fn breakdown_invariants_hold_across_range() {
        let calculator = FeeCalculator::default();
        for amount in in_range_amounts() {
            let result = calculator.compare(amount);
            assert_eq!(result.old.fee + result.old.markup, result.old.total);
            assert_eq!(f64::from(amount) - result.old.total, result.old.receive_amount);
            assert_eq!(result.new.total, result.new.fee);
            assert_eq!(result.new.markup, 0.0);
            assert!(result.savings >= 0.0, "negative savings at {}", amount);
            let percent = result.savings_percent.expect("non-zero old total");
            assert!(percent <= 100);
        }
    }

    #[test]
    fn compare_is_deterministic() {
        let calculator = FeeCalculator::default();
        assert_eq!(calculator.compare(123_456), calculator.compare(123_456));
    }

    #[test]
    fn zero_amount_has_no_savings_percent() {
        let result = FeeCalculator::default().compare(0);
        assert_eq!(result.old.total, 0.0);
        assert_eq!(result.savings_percent, None);
    }

    #[test]
    fn parse_amount_accepts_slider_values_only() {
        assert_eq!(parse_amount("250000"), Ok(250_000));
        assert_eq!(parse_amount(" 10000 "), Ok(10_000));
        assert_eq!(
            parse_amount("abc"),
            Err(AmountError::Unparseable("abc".to_string()))
        );
        assert!(parse_amount("").is_err());
        assert!(parse_amount("-5").is_err());
    }

    #[test]
    fn keyboard_steps_are_clamped() {
        let calculator = FeeCalculator::default();
        assert_eq!(calculator.step(100_000, StepDirection::Up), 110_000);
        assert_eq!(calculator.step(100_000, StepDirection::Down), 90_000);
        assert_eq!(calculator.step(495_000, StepDirection::Up), config::MAX_AMOUNT);
        assert_eq!(calculator.step(15_000, StepDirection::Down), config::MIN_AMOUNT);
        assert_eq!(calculator.step(config::MIN_AMOUNT, StepDirection::Down), config::MIN_AMOUNT);
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(StepDirection::from_key("ArrowRight"), Some(StepDirection::Up));
        assert_eq!(StepDirection::from_key("ArrowUp"), Some(StepDirection::Up));
        assert_eq!(StepDirection::from_key("ArrowLeft"), Some(StepDirection::Down));
        assert_eq!(StepDirection::from_key("ArrowDown"), Some(StepDirection::Down));
        assert_eq!(StepDirection::from_key("Enter"), None);
    }

    #[test]
    fn fill_percent_tracks_slider_position() {
        let calculator = FeeCalculator::default();
        assert!(close(calculator.fill_percent(config::MIN_AMOUNT), 0.0));
        assert!(close(calculator.fill_percent(config::MAX_AMOUNT), 100.0));
        assert!(close(calculator.fill_percent(255_000), 50.0));
    }
}
