use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use stylist::yew::styled_component;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::constellation::{
    color_for, connecting_segments, ink_for, place_stars, Highlight, Star, StarFocus, Viewport,
};
use crate::content::{BRAND, TECH_STACK};
use crate::dom;

pub enum HighlightAction {
    Hover(Option<&'static str>),
    TogglePin(&'static str),
}

impl Reducible for Highlight {
    type Action = HighlightAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            HighlightAction::Hover(category) => self.hover(category),
            HighlightAction::TogglePin(category) => self.toggle_pin(category),
        };
        Rc::new(next)
    }
}

pub enum FocusAction {
    Enter(usize),
    Leave,
    Tap(usize),
}

impl Reducible for StarFocus {
    type Action = FocusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            FocusAction::Enter(index) => self.enter(index),
            FocusAction::Leave => self.leave(),
            FocusAction::Tap(index) => self.tap(index),
        };
        Rc::new(next)
    }
}

#[styled_component(TechConstellation)]
pub fn tech_constellation() -> Html {
    let node = use_node_ref();
    let stars = use_state(Vec::<Star>::new);
    let measure_attempt = use_state(|| 0u32);
    let highlight = use_reducer(Highlight::default);
    let focus = use_reducer(StarFocus::default);

    // Lay the stars out once per mount. Until the container has a size there
    // is nothing to place, so check again shortly.
    {
        let node = node.clone();
        let stars = stars.clone();
        let retry_attempt = measure_attempt.clone();
        use_effect_with_deps(
            move |attempt| {
                let viewport = node
                    .cast::<Element>()
                    .map(|element| {
                        let (width, height) = dom::element_size(&element);
                        Viewport::new(width, height)
                    })
                    .unwrap_or(Viewport::new(0.0, 0.0));

                let retry = if viewport.is_measured() {
                    let placed = place_stars(TECH_STACK, viewport, &mut rand::thread_rng());
                    debug!(
                        "Placed {} stars in {:.0}x{:.0}",
                        placed.len(),
                        viewport.width,
                        viewport.height
                    );
                    stars.set(placed);
                    None
                } else {
                    let next = *attempt + 1;
                    Some(Timeout::new(config::MEASURE_RETRY_MS, move || {
                        retry_attempt.set(next);
                    }))
                };
                move || drop(retry)
            },
            *measure_attempt,
        );
    }

    let active = highlight.active();

    let container = css!(
        r#"
        position: relative;
        width: 100%;
        height: 600px;
        overflow: hidden;
        border-radius: 0.5rem;
        background: linear-gradient(to bottom, #111827, #1f2937);
    "#
    );

    let star_nodes = stars.iter().enumerate().map(|(index, star)| {
        let color = color_for(TECH_STACK, star.category);
        let lit = active == Some(star.category);
        let focused = focus.star == Some(index);

        let on_enter = {
            let focus = focus.dispatcher();
            Callback::from(move |_: MouseEvent| focus.dispatch(FocusAction::Enter(index)))
        };
        let on_leave = {
            let focus = focus.dispatcher();
            Callback::from(move |_: MouseEvent| focus.dispatch(FocusAction::Leave))
        };
        // Touch screens get no hover, so a tap toggles the tooltip
        let on_tap = {
            let focus = focus.dispatcher();
            Callback::from(move |_: MouseEvent| focus.dispatch(FocusAction::Tap(index)))
        };

        html! {
            <>
                <div
                    class={classes!("star", lit.then(|| "lit"), focused.then(|| "focused"))}
                    style={format!(
                        "left: {:.1}px; top: {:.1}px; width: {size:.2}px; height: {size:.2}px; background-color: {color}; --glow: {color}; animation-delay: {:.2}s;",
                        star.x,
                        star.y,
                        index as f64 * 0.05,
                        size = star.size,
                        color = color,
                    )}
                    onmouseenter={on_enter}
                    onmouseleave={on_leave}
                    onclick={on_tap}
                />
                {
                    if focused {
                        html! {
                            <div
                                class="star-tooltip"
                                role="tooltip"
                                style={format!(
                                    "left: {:.1}px; top: {:.1}px; background-color: {}; color: {};",
                                    star.x,
                                    star.y,
                                    color,
                                    ink_for(TECH_STACK, star.category),
                                )}
                            >
                                <div class="tooltip-name">{star.name}</div>
                                <div class="tooltip-category">{star.category}</div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </>
        }
    });

    let lines = match active {
        Some(category) => {
            let color = color_for(TECH_STACK, category);
            html! {
                <svg class="constellation-lines" key={category}>
                    { for connecting_segments(&stars, category).into_iter().enumerate().map(|(index, segment)| html! {
                        <line
                            x1={segment.x1.to_string()}
                            y1={segment.y1.to_string()}
                            x2={segment.x2.to_string()}
                            y2={segment.y2.to_string()}
                            stroke={color}
                            stroke-width="1"
                            pathLength="1"
                            style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}
                        />
                    }) }
                </svg>
            }
        }
        None => html! {},
    };

    let legend = TECH_STACK.iter().map(|category| {
        let name = category.name;
        let on_enter = {
            let highlight = highlight.clone();
            Callback::from(move |_: MouseEvent| highlight.dispatch(HighlightAction::Hover(Some(name))))
        };
        let on_leave = {
            let highlight = highlight.clone();
            Callback::from(move |_: MouseEvent| highlight.dispatch(HighlightAction::Hover(None)))
        };
        let on_tap = {
            let highlight = highlight.clone();
            Callback::from(move |_: MouseEvent| highlight.dispatch(HighlightAction::TogglePin(name)))
        };
        let pinned = highlight.pinned == Some(name);

        html! {
            <button
                class={classes!("legend-item", pinned.then(|| "pinned"))}
                aria-pressed={pinned.to_string()}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
                onclick={on_tap}
            >
                <span class="legend-swatch" style={format!("background-color: {};", category.color)} />
                {category.icon.render(16, "currentColor")}
                <span>{name}</span>
            </button>
        }
    });

    html! {
        <div class={classes!(container, "constellation")} ref={node}>
            { for star_nodes }
            { lines }
            <div class="constellation-legend">
                { for legend }
            </div>
        </div>
    }
}

#[function_component(TechStackSection)]
pub fn tech_stack_section() -> Html {
    html! {
        <section id="tech-stack" class="section section-fade-up">
            <div class="container">
                <h2 class="section-title centered">{"Our Tech Constellation"}</h2>
                <p class="section-lead centered">
                    {format!(
                        "Explore the universe of technologies powering {}. Hover over the stars to discover the constellations of our tech stack.",
                        BRAND
                    )}
                </p>
                <div class="constellation-frame reveal-up">
                    <TechConstellation />
                </div>
            </div>
            <style>
                {r#"
                    .constellation-frame {
                        max-width: 56rem;
                        margin: 0 auto;
                        animation-duration: 0.8s;
                    }
                    .star {
                        position: absolute;
                        border-radius: 9999px;
                        cursor: pointer;
                        transform: translate(-50%, -50%);
                        animation: star-in 0.5s ease-out backwards;
                        transition: transform 0.2s, box-shadow 0.2s;
                    }
                    .star:hover,
                    .star.focused,
                    .star.lit {
                        transform: translate(-50%, -50%) scale(2);
                        box-shadow: 0 0 10px var(--glow);
                    }
                    .star-tooltip {
                        position: absolute;
                        z-index: 5;
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                        white-space: nowrap;
                        pointer-events: none;
                        transform: translate(-50%, calc(-100% - 10px));
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    }
                    .tooltip-name {
                        font-size: 0.875rem;
                        font-weight: 700;
                    }
                    .tooltip-category {
                        font-size: 0.75rem;
                        opacity: 0.8;
                    }
                    .constellation-lines {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        pointer-events: none;
                    }
                    .constellation-lines line {
                        stroke-dasharray: 1;
                        stroke-dashoffset: 1;
                        opacity: 0;
                        animation: draw-line 1s ease-out forwards;
                    }
                    .constellation-legend {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 0.5rem;
                    }
                    .legend-item {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0;
                        border: none;
                        background: none;
                        color: #fff;
                        font: inherit;
                        cursor: pointer;
                        transition: transform 0.2s;
                    }
                    .legend-item:hover,
                    .legend-item.pinned {
                        transform: scale(1.05);
                    }
                    .legend-item.pinned span:last-child {
                        text-decoration: underline;
                    }
                    .legend-swatch {
                        width: 1rem;
                        height: 1rem;
                        border-radius: 9999px;
                    }
                    @keyframes star-in {
                        from { opacity: 0; transform: translate(-50%, -50%) scale(0); }
                        to { opacity: 1; transform: translate(-50%, -50%) scale(1); }
                    }
                    @keyframes draw-line {
                        to { stroke-dashoffset: 0; opacity: 0.5; }
                    }
                "#}
            </style>
        </section>
    }
}
