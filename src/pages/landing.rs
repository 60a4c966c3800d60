use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::fee_calculator::FeeCalculatorWidget;
use crate::components::lazy_image::LazyImage;
use crate::components::reveal::Reveal;
use crate::components::ripple::RippleButton;
use crate::components::showcase::{Showcase, ShowcaseItem};
use crate::config;

const SHOWCASE: &[(&str, &str)] = &[
    ("/assets/showcase-send.webp", "Send to any M-Pesa number in seconds"),
    ("/assets/showcase-rate.webp", "See the exact rate before you pay"),
    ("/assets/showcase-receipt.webp", "Your family gets every shilling you promised"),
];

const PROBLEMS: &[(&str, &str)] = &[
    ("Hidden markups", "Banks quote a fee, then quietly take another 2% on the exchange rate."),
    ("High transfer fees", "Sending home still costs around 6% with most providers."),
    ("Slow delivery", "Transfers can take days to land, right when money is needed most."),
];

const STEPS: &[(&str, &str)] = &[
    ("Enter the amount", "Choose how much you want to send and see the fee up front."),
    ("Pick the recipient", "Any M-Pesa number in Kenya, saved for next time."),
    ("Done", "Money arrives in minutes with a single 0.3% fee."),
];

const TRUST_PILLARS: &[(&str, &str)] = &[
    ("Licensed", "Regulated money transfer partner in every corridor we serve."),
    ("Transparent", "One fee, shown before you send. No exchange markup."),
    ("Secure", "Bank-grade encryption on every transfer."),
];

fn cards(kind: &'static str, entries: &[(&str, &str)]) -> Html {
    html! {
        <>
            { for entries.iter().enumerate().map(|(i, (title, body))| html! {
                <Reveal class={kind} delay={(i * 150).to_string()}>
                    <h3>{ *title }</h3>
                    <p>{ *body }</p>
                </Reveal>
            }) }
        </>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let showcase: Vec<ShowcaseItem> = SHOWCASE
        .iter()
        .map(|(image, caption)| ShowcaseItem {
            image: AttrValue::from(*image),
            caption: AttrValue::from(*caption),
        })
        .collect();

    html! {
        <main class="landing-page">
            <Reveal
                tag="section"
                id={config::HERO_ID}
                class="hero"
                tabindex="-1"
                threshold={config::SECTION_REVEAL_THRESHOLD}
            >
                <div class="hero-content">
                    <h1>{"Send money home. Keep the fees."}</h1>
                    <p class="hero-subtitle">
                        {"ZeroPesa moves your money to Kenya for a flat 0.3%, with no exchange markup."}
                    </p>
                    <div class="hero-cta-group">
                        <AnchorLink href="#calculator" class="forward-link">
                            {"See how much you save"}
                        </AnchorLink>
                        <RippleButton class="btn-primary" label="Get started" />
                        <RippleButton class="btn-secondary" label="How it works" />
                    </div>
                </div>
                <Showcase items={showcase} />
            </Reveal>

            <Reveal tag="section" id="problem" class="problem" threshold={config::SECTION_REVEAL_THRESHOLD}>
                <h2>{"Sending money home shouldn't cost this much"}</h2>
                <div class="card-grid">{ cards("problem-card", PROBLEMS) }</div>
            </Reveal>

            <Reveal tag="section" id="how-it-works" class="how-it-works" threshold={config::SECTION_REVEAL_THRESHOLD}>
                <h2>{"Three steps, one small fee"}</h2>
                <div class="card-grid">{ cards("step-card", STEPS) }</div>
            </Reveal>

            <Reveal tag="section" id="calculator" class="calculator-section" threshold={config::SECTION_REVEAL_THRESHOLD}>
                <h2>{"See what you keep"}</h2>
                <FeeCalculatorWidget />
            </Reveal>

            <Reveal tag="section" id="trust" class="trust" threshold={config::SECTION_REVEAL_THRESHOLD}>
                <h2>{"Built to be trusted"}</h2>
                <div class="card-grid">{ cards("trust-pillar", TRUST_PILLARS) }</div>
                <LazyImage src="/assets/partners.webp" alt="Our licensed partners" class="partner-logos" />
            </Reveal>

            <Reveal tag="section" id="download" class="download" threshold={config::SECTION_REVEAL_THRESHOLD}>
                <h2>{"Get ZeroPesa"}</h2>
                <div class="store-buttons">
                    <RippleButton class="btn-app-store" label="App Store" />
                    <RippleButton class="btn-google-play" label="Google Play" />
                </div>
            </Reveal>

            <footer class="footer">
                <p>{"© 2025 ZeroPesa"}</p>
                <AnchorLink href="#" class="back-to-top">{"Back to top"}</AnchorLink>
            </footer>
        </main>
    }
}
