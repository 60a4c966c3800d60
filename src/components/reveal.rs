use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::hooks::{use_first_intersection, ObserverOptions};
use crate::telemetry::{self, Event};

/// Stagger delay from a `data-delay` value: leading digits in milliseconds,
/// anything else counts as no delay.
pub fn parse_delay(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub tabindex: Option<AttrValue>,
    #[prop_or(config::CARD_REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub delay: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps content that fades in (via the `visible` class) the first time it
/// scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    let on_visible = {
        let visible = visible.clone();
        let delay = parse_delay(&props.delay);
        Callback::from(move |element: Element| {
            let visible = visible.clone();
            Timeout::new(delay, move || {
                visible.set(true);
                telemetry::track(&Event::ElementVisible {
                    element: element.class_name(),
                    timestamp: telemetry::now(),
                });
            })
            .forget();
        })
    };

    use_first_intersection(
        node.clone(),
        ObserverOptions {
            threshold: props.threshold,
            root_margin: "0px",
        },
        on_visible,
    );

    html! {
        <@{props.tag.to_string()}
            ref={node}
            id={props.id.clone()}
            tabindex={props.tabindex.clone()}
            class={classes!(props.class.clone(), (*visible).then(|| "visible"))}
            data-delay={props.delay.clone()}
        >
            { for props.children.iter() }
        </@>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_default_to_a_plain_card() {
        let props = yew::props!(RevealProps {});
        assert_eq!(&*props.tag, "div");
        assert_eq!(props.threshold, config::CARD_REVEAL_THRESHOLD);
        assert_eq!(props.tabindex, None);
    }

    #[test]
    fn focusable_sections_keep_their_tabindex() {
        let props = yew::props!(RevealProps {
            tag: "section",
            id: config::HERO_ID,
            tabindex: "-1",
            threshold: config::SECTION_REVEAL_THRESHOLD,
        });
        assert_eq!(&*props.tag, "section");
        assert_eq!(props.id.as_deref(), Some(config::HERO_ID));
        assert_eq!(props.tabindex.as_deref(), Some("-1"));
        assert_eq!(props.threshold, config::SECTION_REVEAL_THRESHOLD);
    }

    #[test]
    fn delay_reads_leading_digits() {
        assert_eq!(parse_delay("200"), 200);
        assert_eq!(parse_delay(" 150ms"), 150);
        assert_eq!(parse_delay(""), 0);
        assert_eq!(parse_delay("soon"), 0);
    }
}
