use chrono::Datelike;
use rand::Rng;
use yew::prelude::*;

use crate::content::BRAND;

const BUBBLE_COUNT: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub pulse_secs: f64,
}

impl Bubble {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(25.0..75.0),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            pulse_secs: rng.gen_range(5.0..10.0),
        }
    }

    fn style(&self) -> String {
        format!(
            "width: {size:.1}px; height: {size:.1}px; left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s;",
            self.left_pct,
            self.top_pct,
            self.pulse_secs,
            size = self.size_px,
        )
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND)
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let bubbles = use_state(|| {
        let mut rng = rand::thread_rng();
        (0..BUBBLE_COUNT)
            .map(|_| Bubble::random(&mut rng))
            .collect::<Vec<_>>()
    });
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-bubbles" aria-hidden="true">
                { for bubbles.iter().map(|bubble| html! {
                    <div class="footer-bubble" style={bubble.style()} />
                }) }
            </div>
            <div class="footer-inner">
                <h2 class="footer-brand">{BRAND}</h2>
                <p class="footer-copy">{copyright_line(year)}</p>
            </div>
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        overflow: hidden;
                        padding: 4rem 1rem;
                        background: var(--background);
                        border-top: 1px solid var(--border);
                    }
                    .footer-bubbles {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }
                    .footer-bubble {
                        position: absolute;
                        border-radius: 9999px;
                        background: var(--primary);
                        opacity: 0.1;
                        animation-name: bubble-pulse;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                    }
                    .footer-inner {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                    }
                    .footer-brand {
                        margin: 0;
                        font-family: var(--serif);
                        font-size: 4rem;
                        font-weight: 700;
                        letter-spacing: -0.04em;
                        animation: footer-rise 0.8s ease-out backwards;
                    }
                    .footer-copy {
                        margin: 2rem 0 0;
                        font-size: 0.875rem;
                        color: var(--muted-foreground);
                        animation: footer-fade 0.8s 0.5s ease-out backwards;
                    }
                    @keyframes footer-rise {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes footer-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes bubble-pulse {
                        0%, 100% { transform: scale(1); opacity: 0.1; }
                        50% { transform: scale(1.2); opacity: 0.2; }
                    }
                    @media (min-width: 768px) {
                        .footer-brand { font-size: 8rem; }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bubble_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let bubble = Bubble::random(&mut rng);
            assert!((25.0..75.0).contains(&bubble.size_px));
            assert!((0.0..100.0).contains(&bubble.left_pct));
            assert!((0.0..100.0).contains(&bubble.top_pct));
            assert!((5.0..10.0).contains(&bubble.pulse_secs));
        }
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 MiniPerplx. All rights reserved."
        );
    }
}
