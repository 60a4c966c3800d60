use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::config;

#[derive(Clone, PartialEq)]
pub struct ShowcaseItem {
    pub image: AttrValue,
    pub caption: AttrValue,
}

/// Index shown after `current`, wrapping at the end. An empty showcase stays
/// at zero.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub items: Vec<ShowcaseItem>,
}

#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let active = use_state(|| 0usize);
    let len = props.items.len();

    {
        let active = active.clone();
        // A zero interval never starts the timer.
        let millis = if len == 0 { 0 } else { config::SHOWCASE_INTERVAL_MS };
        use_interval(
            move || {
                active.set(next_index(*active, len));
            },
            millis,
        );
    }

    html! {
        <div class="phone-showcase">
            { for props.items.iter().enumerate().map(|(i, item)| html! {
                <div class={classes!("showcase-item", (i == *active).then(|| "active"))}>
                    <LazyImage src={item.image.clone()} alt={item.caption.clone()} class="showcase-image" />
                    <p class="showcase-caption">{ item.caption.to_string() }</p>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_around() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(0, 1), 0);
    }

    #[test]
    fn empty_showcase_stays_put() {
        assert_eq!(next_index(0, 0), 0);
    }
}
