use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::hooks::{use_first_intersection, ObserverOptions};
use crate::telemetry::{self, Event};

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Holds the real `src` back in `data-src` until the image is within
/// [`config::LAZY_IMAGE_ROOT_MARGIN`] of the viewport.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let loaded = use_state_eq(|| false);

    let on_visible = {
        let loaded = loaded.clone();
        let src = props.src.clone();
        Callback::from(move |_: Element| {
            loaded.set(true);
            telemetry::track(&Event::ImageLoaded { src: src.to_string() });
        })
    };

    use_first_intersection(
        node.clone(),
        ObserverOptions {
            threshold: 0.0,
            root_margin: config::LAZY_IMAGE_ROOT_MARGIN,
        },
        on_visible,
    );

    let (src, data_src) = if *loaded {
        (Some(props.src.clone()), None)
    } else {
        (None, Some(props.src.clone()))
    };

    html! {
        <img
            ref={node}
            class={props.class.clone()}
            alt={props.alt.clone()}
            {src}
            data-src={data_src}
        />
    }
}
