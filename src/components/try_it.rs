use yew::prelude::*;

use crate::config;
use crate::content::{BRAND, TRY_IT_BLURB};
use crate::hooks::{use_frame_clock, use_reveal};
use crate::icons::Icon;
use crate::motion::{lerp, Easing, Timeline};

const REVEAL_SECS: f64 = 0.8;
const REVEAL_RISE_PX: f64 = 50.0;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds to wait after the section first comes into view.
    #[prop_or_default]
    pub delay: f64,
}

/// Fades its children up the first time it scrolls into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let finished = use_state(|| false);
    let elapsed = use_frame_clock(revealed && !*finished);

    let progress = if *finished {
        1.0
    } else if revealed {
        Timeline::once(REVEAL_SECS, Easing::EaseOut)
            .with_delay(props.delay)
            .progress(elapsed)
    } else {
        0.0
    };

    // Stop the clock once the fade is done
    {
        let finished = finished.clone();
        use_effect_with_deps(
            move |done| {
                if *done {
                    finished.set(true);
                }
                || ()
            },
            progress >= 1.0,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("animated-section", props.class.clone())}
            style={format!(
                "opacity: {:.3}; transform: translateY({:.1}px);",
                progress,
                lerp(REVEAL_RISE_PX, 0.0, progress)
            )}
        >
            { for props.children.iter() }
        </div>
    }
}

#[function_component(TryItSection)]
pub fn try_it_section() -> Html {
    html! {
        <section id="try-it" class="section try-it">
            <div class="try-it-pattern" aria-hidden="true" />
            <div class="container try-it-inner">
                <AnimatedSection>
                    <h2 class="section-title centered">{format!("Ready to Experience {}?", BRAND)}</h2>
                </AnimatedSection>
                <AnimatedSection delay={0.2}>
                    <p class="section-lead centered">
                        {TRY_IT_BLURB}
                    </p>
                </AnimatedSection>
                <AnimatedSection class={classes!("try-it-actions")} delay={0.4}>
                    <a href={config::get_search_url()} class="try-it-button primary">
                        {format!("Try {}", BRAND)}
                        {Icon::ArrowRight.render(20, "currentColor")}
                    </a>
                    <a
                        href={config::GITHUB_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="try-it-button outline"
                    >
                        {Icon::Github.render(20, "currentColor")}
                        {"View on GitHub"}
                    </a>
                </AnimatedSection>
            </div>
            <style>
                {r#"
                    .try-it {
                        position: relative;
                        overflow: hidden;
                        background: var(--background);
                    }
                    .try-it-pattern {
                        position: absolute;
                        inset: 0;
                        opacity: 0.06;
                        background-image: repeating-linear-gradient(45deg, var(--primary) 0, var(--primary) 1px, transparent 0, transparent 50%);
                        background-size: 24px 24px;
                        animation: pattern-pan 20s linear infinite;
                    }
                    .try-it-inner {
                        position: relative;
                        z-index: 1;
                    }
                    .animated-section {
                        will-change: opacity, transform;
                    }
                    .try-it-actions.animated-section {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .try-it-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        font-weight: 600;
                        text-decoration: none;
                        transition: transform 0.2s, background 0.2s;
                    }
                    .try-it-button:hover {
                        transform: scale(1.05);
                    }
                    .try-it-button.primary {
                        background: var(--primary);
                        color: #fff;
                    }
                    .try-it-button.outline {
                        border: 1px solid var(--border);
                        color: var(--foreground);
                    }
                    .try-it-button.outline:hover {
                        background: var(--accent);
                    }
                    @keyframes pattern-pan {
                        from { background-position: 0 0; }
                        to { background-position: 240px 240px; }
                    }
                    @media (min-width: 640px) {
                        .try-it-actions.animated-section { flex-direction: row; }
                    }
                "#}
            </style>
        </section>
    }
}
