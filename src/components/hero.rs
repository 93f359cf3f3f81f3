use rand::Rng;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::{
    BRAND, FLOATING_ICONS, PEERLIST_BADGE, PEERLIST_URL, PRODUCT_HUNT_BADGE, PRODUCT_HUNT_URL,
};
use crate::hooks::use_scroll_fraction;
use crate::icons::Icon;
use crate::scroll::HeroTransform;

// Only the first few icons drift on small screens.
const SMALL_SCREEN_ICONS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drift {
    pub left_vw: f64,
    pub duration_secs: f64,
    pub spin_deg: f64,
}

impl Drift {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left_vw: rng.gen_range(0.0..100.0),
            duration_secs: rng.gen_range(10.0..30.0),
            spin_deg: rng.gen_range(0.0..360.0),
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}vw; animation-duration: {:.2}s; --spin: {:.1}deg;",
            self.left_vw, self.duration_secs, self.spin_deg
        )
    }
}

#[function_component(FloatingIcons)]
fn floating_icons() -> Html {
    let drifts = use_state(|| {
        let mut rng = rand::thread_rng();
        FLOATING_ICONS
            .iter()
            .map(|_| Drift::random(&mut rng))
            .collect::<Vec<_>>()
    });

    let (window_width, _) = use_window_size();
    let shown = if window_width < config::SMALL_BREAKPOINT {
        SMALL_SCREEN_ICONS
    } else {
        FLOATING_ICONS.len()
    };

    html! {
        <div class="floating-icons" aria-hidden="true">
            { for FLOATING_ICONS.iter().zip(drifts.iter()).take(shown).map(|(icon, drift)| html! {
                <div class="floating-icon" style={drift.style()}>
                    {icon.render(32, "currentColor")}
                </div>
            }) }
        </div>
    }
}

#[function_component(TryButton)]
pub fn try_button() -> Html {
    html! {
        <a href={config::get_search_url()} class="try-button">
            {format!("Try {}", BRAND)}
            {Icon::ArrowRight.render(20, "currentColor")}
        </a>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let fraction = use_scroll_fraction();
    let transform = HeroTransform::at(fraction);

    html! {
        <section class="hero">
            <FloatingIcons />
            <div class="hero-inner" style={transform.to_style()}>
                <h1 class="hero-title reveal-up">{format!("Introducing {}", BRAND)}</h1>
                <p class="hero-subtitle reveal-up">
                    {"A minimalistic AI search engine designed to deliver answers in the simplest and most elegant way possible.✨"}
                </p>
                <div class="hero-actions">
                    <div class="reveal-up" style="animation-delay: 0.1s;">
                        <TryButton />
                    </div>
                    <div class="hero-badges reveal-up" style="animation-delay: 0.2s;">
                        <a href={PRODUCT_HUNT_URL} target="_blank" rel="noopener noreferrer">
                            <img
                                src={PRODUCT_HUNT_BADGE}
                                alt="MiniPerplx - A minimalistic AI-powered search engine. | Product Hunt"
                                width="250"
                                height="54"
                            />
                        </a>
                        <a href={PEERLIST_URL} target="_blank" rel="noopener noreferrer">
                            <img src={PEERLIST_BADGE} alt="Peerlist" width="32" height="32" />
                        </a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        overflow: hidden;
                        width: 100%;
                        padding: 12rem 0;
                        background: linear-gradient(to bottom, var(--background), var(--muted));
                    }
                    .hero-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        text-align: center;
                        will-change: opacity, transform;
                    }
                    .hero-title {
                        margin: 0 0 1rem;
                        font-family: var(--serif);
                        font-weight: 700;
                        font-size: 3.75rem;
                        line-height: 1.1;
                        letter-spacing: -0.025em;
                    }
                    .hero-subtitle {
                        max-width: 700px;
                        margin: 0 auto 1.5rem;
                        font-family: var(--serif);
                        font-size: 1.25rem;
                        color: var(--muted-foreground);
                        text-wrap: balance;
                    }
                    .hero-actions {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .hero-badges {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                    }
                    .hero-badges img {
                        height: 3rem;
                        width: auto;
                    }
                    .try-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        background: #27272a;
                        color: #fff;
                        font-weight: 600;
                        text-decoration: none;
                        transition: transform 0.2s, background 0.2s;
                    }
                    .try-button:hover {
                        background: rgba(39, 39, 42, 0.9);
                        transform: scale(1.05) rotate(3deg);
                    }
                    .floating-icons {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .floating-icon {
                        position: absolute;
                        top: 0;
                        color: var(--primary);
                        opacity: 0.1;
                        animation-name: drift-down;
                        animation-timing-function: linear;
                        animation-iteration-count: infinite;
                    }
                    .floating-icon .icon {
                        width: 1.25rem;
                        height: 1.25rem;
                    }
                    @keyframes drift-down {
                        from { transform: translateY(-50px) rotate(0deg); }
                        to { transform: translateY(100vh) rotate(var(--spin)); }
                    }
                    @media (min-width: 640px) {
                        .floating-icon .icon { width: 1.5rem; height: 1.5rem; }
                        .hero-badges { flex-direction: row; gap: 1.5rem; }
                    }
                    @media (min-width: 768px) {
                        .hero-title { font-size: 4.5rem; }
                        .hero-subtitle { font-size: 1.5rem; }
                        .floating-icon .icon { width: 2rem; height: 2rem; }
                    }
                    @media (min-width: 1024px) {
                        .hero-title { font-size: 6rem; }
                        .floating-icon .icon { width: 2.5rem; height: 2.5rem; }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_drift_ranges() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let drift = Drift::random(&mut rng);
            assert!((0.0..100.0).contains(&drift.left_vw));
            assert!((10.0..30.0).contains(&drift.duration_secs));
            assert!((0.0..360.0).contains(&drift.spin_deg));
        }
    }
}
