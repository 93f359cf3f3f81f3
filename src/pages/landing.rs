use log::{debug, warn};
use yew::prelude::*;

use crate::components::features::{AboutSection, FeaturesSection};
use crate::components::footer::SiteFooter;
use crate::components::hero::Hero;
use crate::components::nav::SiteHeader;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::tech_stack::TechStackSection;
use crate::components::testimonials::{QuoteMarquee, TestimonialSection};
use crate::components::try_it::TryItSection;
use crate::dom;

#[function_component(Landing)]
pub fn landing() -> Html {
    // In-page anchors glide while the landing page is mounted
    use_effect_with_deps(
        |_| {
            let guard = match dom::smooth_root_scroll() {
                Ok(guard) => {
                    debug!("Smooth scrolling on");
                    Some(guard)
                }
                Err(e) => {
                    warn!("Could not enable smooth scrolling: {}", e);
                    None
                }
            };
            move || drop(guard)
        },
        (),
    );

    html! {
        <div id="start" class="landing">
            <ScrollProgress />
            <SiteHeader />
            <main>
                <Hero />
                <AboutSection />
                <FeaturesSection />
                <TechStackSection />
                <TestimonialSection />
                <QuoteMarquee />
                <div class="divider" />
                <TryItSection />
            </main>
            <SiteFooter />
            <style>
                {r#"
                    :root {
                        --background: #ffffff;
                        --foreground: #18181b;
                        --primary: #18181b;
                        --muted: #f4f4f5;
                        --muted-foreground: #71717a;
                        --accent: #f4f4f5;
                        --border: #e4e4e7;
                        --serif: 'Instrument Serif', Georgia, serif;
                    }
                    body {
                        margin: 0;
                        font-family: 'Inter', system-ui, -apple-system, sans-serif;
                        background: var(--background);
                        color: var(--foreground);
                    }
                    .landing {
                        display: flex;
                        flex-direction: column;
                        min-height: 100vh;
                    }
                    .landing main {
                        flex: 1;
                    }
                    .section {
                        position: relative;
                        width: 100%;
                        padding: 3rem 0;
                    }
                    .container {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .section-title {
                        margin: 0 0 2rem;
                        font-family: var(--serif);
                        font-size: 1.875rem;
                        font-weight: 700;
                        letter-spacing: -0.025em;
                    }
                    .centered {
                        text-align: center;
                    }
                    .section-lead {
                        max-width: 700px;
                        margin: 0 auto 3rem;
                        font-size: 1.125rem;
                        color: var(--muted-foreground);
                    }
                    .section-intro {
                        margin-bottom: 3rem;
                        text-align: center;
                    }
                    .card {
                        padding: 1.5rem;
                        border: 1px solid var(--border);
                        border-radius: 0.75rem;
                        background: var(--background);
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                    }
                    .card-text {
                        margin: 0;
                        color: var(--muted-foreground);
                        line-height: 1.6;
                    }
                    .reveal-up {
                        animation: fade-up 0.5s ease-out backwards;
                    }
                    .section-fade-down {
                        background: linear-gradient(to bottom, var(--muted), var(--background));
                    }
                    .section-fade-up {
                        background: linear-gradient(to bottom, var(--background), var(--muted));
                    }
                    .divider {
                        height: 1px;
                        max-width: 72rem;
                        margin: 0 auto;
                        background: var(--border);
                    }
                    @keyframes fade-up {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (min-width: 768px) {
                        .section { padding: 6rem 0; }
                        .container { padding: 0 1.5rem; }
                        .section-title { font-size: 3rem; }
                        .section-lead { font-size: 1.25rem; }
                    }
                    @media (min-width: 1024px) {
                        .section { padding: 8rem 0; }
                    }
                "#}
            </style>
        </div>
    }
}
