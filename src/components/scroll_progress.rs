use stylist::yew::styled_component;
use yew::prelude::*;

use crate::hooks::{use_scroll_fraction, use_spring};

#[styled_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let fraction = use_scroll_fraction();
    let smoothed = use_spring(fraction);

    let bar = css!(
        r#"
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        height: 4px;
        background: var(--primary);
        transform-origin: left center;
        z-index: 50;
        pointer-events: none;
    "#
    );

    html! {
        <div
            class={bar}
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{:.0}", fraction * 100.0)}
            style={format!("transform: scaleX({:.4});", smoothed)}
        />
    }
}
