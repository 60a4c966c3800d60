use web_sys::{Element, HtmlElement, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::animation::{parse_displayed, FieldAnimator, Tween};
use crate::calculator::{parse_amount, ComparisonResult, FeeCalculator, StepDirection};
use crate::components::reveal::Reveal;
use crate::config;
use crate::debounce::Debouncer;
use crate::telemetry::{self, Event};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputField {
    Amount,
    OldFee,
    OldMarkup,
    OldTotal,
    OldReceive,
    NewFee,
    NewTotal,
    NewReceive,
    Savings,
}

impl OutputField {
    pub const ALL: [OutputField; 9] = [
        OutputField::Amount,
        OutputField::OldFee,
        OutputField::OldMarkup,
        OutputField::OldTotal,
        OutputField::OldReceive,
        OutputField::NewFee,
        OutputField::NewTotal,
        OutputField::NewReceive,
        OutputField::Savings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            OutputField::Amount => "current-amount",
            OutputField::OldFee => "old-fee",
            OutputField::OldMarkup => "old-markup",
            OutputField::OldTotal => "old-total",
            OutputField::OldReceive => "old-receive",
            OutputField::NewFee => "new-fee",
            OutputField::NewTotal => "new-total",
            OutputField::NewReceive => "new-receive",
            OutputField::Savings => "savings",
        }
    }

    pub fn duration_ms(&self) -> f64 {
        match self {
            OutputField::Amount => config::AMOUNT_ANIMATION_MS,
            _ => config::FIELD_ANIMATION_MS,
        }
    }

    pub fn value(&self, result: &ComparisonResult) -> f64 {
        match self {
            OutputField::Amount => f64::from(result.amount),
            OutputField::OldFee => result.old.fee,
            OutputField::OldMarkup => result.old.markup,
            OutputField::OldTotal => result.old.total,
            OutputField::OldReceive => result.old.receive_amount,
            OutputField::NewFee => result.new.fee,
            OutputField::NewTotal => result.new.total,
            OutputField::NewReceive => result.new.receive_amount,
            OutputField::Savings => result.savings,
        }
    }
}

/// Text for the savings percentage. With nothing charged by the old scheme
/// there is no meaningful percentage, so a dash replaces any earlier number.
pub fn savings_percent_text(percent: Option<u32>) -> String {
    match percent {
        Some(percent) => percent.to_string(),
        None => "—".to_string(),
    }
}

struct OutputSlot {
    field: OutputField,
    node: NodeRef,
    animator: FieldAnimator,
}

/// Everything the calculator writes to. Consumes a [`ComparisonResult`] and
/// never computes anything itself.
struct ResultView {
    outputs: Vec<OutputSlot>,
    savings_percent: NodeRef,
    highlight: NodeRef,
}

impl ResultView {
    fn new() -> Self {
        Self {
            outputs: OutputField::ALL
                .iter()
                .map(|&field| OutputSlot {
                    field,
                    node: NodeRef::default(),
                    animator: FieldAnimator::default(),
                })
                .collect(),
            savings_percent: NodeRef::default(),
            highlight: NodeRef::default(),
        }
    }

    fn node(&self, field: OutputField) -> NodeRef {
        self.outputs
            .iter()
            .find(|slot| slot.field == field)
            .map(|slot| slot.node.clone())
            .unwrap_or_default()
    }

    fn present(&self, result: &ComparisonResult) {
        for slot in &self.outputs {
            if let Some(element) = slot.node.cast::<Element>() {
                let start = parse_displayed(&element.text_content().unwrap_or_default());
                let tween = Tween::new(start, slot.field.value(result), slot.field.duration_ms());
                slot.animator.animate(element, tween);
            }
        }

        if let Some(element) = self.savings_percent.cast::<Element>() {
            if result.savings_percent.is_none() {
                log::warn!("No savings percentage for amount {}", result.amount);
            }
            element.set_text_content(Some(&savings_percent_text(result.savings_percent)));
        }

        self.pulse();
    }

    /// Restarts the highlight animation. Reading `offsetWidth` forces a reflow
    /// between removing and re-adding the class.
    fn pulse(&self) {
        if let Some(highlight) = self.highlight.cast::<HtmlElement>() {
            let classes = highlight.class_list();
            let _ = classes.remove_1("pulse");
            let _ = highlight.offset_width();
            let _ = classes.add_1("pulse");
        }
    }

    fn cancel(&self) {
        for slot in &self.outputs {
            slot.animator.cancel();
        }
    }
}

fn paint_fill(slider: &HtmlInputElement, percent: f64) {
    let gradient = format!(
        "linear-gradient(to right, var(--teal-light) 0%, var(--teal-light) {p}%, var(--grey-light) {p}%, var(--grey-light) 100%)",
        p = percent
    );
    if let Err(e) = slider.style().set_property("background", &gradient) {
        log::debug!("Could not paint slider fill: {:?}", e);
    }
}

pub enum Msg {
    Input,
    Recalculate,
    KeyDown(KeyboardEvent),
}

pub struct FeeCalculatorWidget {
    calculator: FeeCalculator,
    slider: NodeRef,
    view: ResultView,
    debounce: Debouncer,
}

impl FeeCalculatorWidget {
    fn recalculate(&self) {
        let Some(slider) = self.slider.cast::<HtmlInputElement>() else {
            return;
        };
        let amount = match parse_amount(&slider.value()) {
            Ok(amount) => amount,
            Err(e) => {
                log::debug!("Skipping fee calculation: {}", e);
                return;
            }
        };

        let result = self.calculator.compare(amount);
        self.view.present(&result);
        paint_fill(&slider, self.calculator.fill_percent(amount));

        telemetry::track(&Event::CalculatorUpdate {
            amount,
            savings: result.savings,
            savings_percent: result.savings_percent,
        });
    }

    fn output(&self, field: OutputField) -> Html {
        html! {
            <span id={field.id()} ref={self.view.node(field)}>{"0"}</span>
        }
    }
}

impl Component for FeeCalculatorWidget {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            calculator: FeeCalculator::default(),
            slider: NodeRef::default(),
            view: ResultView::new(),
            debounce: Debouncer::new(config::INPUT_DEBOUNCE_MS),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input => {
                let link = ctx.link().clone();
                self.debounce.call(move || link.send_message(Msg::Recalculate));
            }
            Msg::Recalculate => self.recalculate(),
            Msg::KeyDown(e) => {
                let Some(direction) = StepDirection::from_key(&e.key()) else {
                    return false;
                };
                let Some(slider) = self.slider.cast::<HtmlInputElement>() else {
                    return false;
                };
                let Ok(current) = parse_amount(&slider.value()) else {
                    return false;
                };
                // The browser would otherwise apply its own step on top.
                e.prevent_default();
                let next = self.calculator.step(current, direction);
                if next != current {
                    slider.set_value(&next.to_string());
                    self.recalculate();
                }
            }
        }
        // Outputs are written straight to the DOM by the animators.
        false
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.recalculate();
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.debounce.is_pending() {
            log::debug!("Dropping pending fee calculation");
        }
        self.debounce.cancel();
        self.view.cancel();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|_: InputEvent| Msg::Input);
        let onkeydown = ctx.link().callback(Msg::KeyDown);

        html! {
            <div class="calculator">
                <div class="calculator-input">
                    <label for="amount-slider">
                        {"You send: KES "}{ self.output(OutputField::Amount) }
                    </label>
                    <input
                        ref={self.slider.clone()}
                        id="amount-slider"
                        type="range"
                        min={config::MIN_AMOUNT.to_string()}
                        max={config::MAX_AMOUNT.to_string()}
                        step="1000"
                        value={config::INITIAL_AMOUNT.to_string()}
                        {oninput}
                        {onkeydown}
                    />
                </div>
                <div class="comparison-grid">
                    <Reveal class="comparison-card old-way">
                        <h3>{"Traditional transfer"}</h3>
                        <p>{"Transfer fee (6%): KES "}{ self.output(OutputField::OldFee) }</p>
                        <p>{"Exchange markup (2%): KES "}{ self.output(OutputField::OldMarkup) }</p>
                        <p>{"Total cost: KES "}{ self.output(OutputField::OldTotal) }</p>
                        <p class="receive">{"Family receives: KES "}{ self.output(OutputField::OldReceive) }</p>
                    </Reveal>
                    <Reveal class="comparison-card new-way" delay="150">
                        <h3>{"ZeroPesa"}</h3>
                        <p>{"Transfer fee (0.3%): KES "}{ self.output(OutputField::NewFee) }</p>
                        <p>{"Exchange markup: KES 0"}</p>
                        <p>{"Total cost: KES "}{ self.output(OutputField::NewTotal) }</p>
                        <p class="receive">{"Family receives: KES "}{ self.output(OutputField::NewReceive) }</p>
                    </Reveal>
                </div>
                <div class="savings-highlight" ref={self.view.highlight.clone()}>
                    {"You save KES "}{ self.output(OutputField::Savings) }
                    {" ("}<span id="savings-percent" ref={self.view.savings_percent.clone()}>{"0"}</span>{"%)"}
                </div>
            </div>
        }
    }
}
