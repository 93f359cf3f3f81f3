use yew::prelude::*;

use crate::content::{Feature, ABOUT_POINTS, BRAND, FEATURES};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let Feature {
        icon,
        title,
        description,
    } = props.feature;

    html! {
        <div class="card feature-card">
            <div class="feature-icon">
                {icon.render(32, "currentColor")}
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="card-text">{description}</p>
        </div>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about-us" class="section section-fade-down">
            <div class="container">
                <div class="section-intro reveal-up">
                    <h2 class="section-title">{format!("About {}", BRAND)}</h2>
                    <p class="section-lead">
                        {"MiniPerplx is reimagining the way you search and interact with information online."}
                    </p>
                </div>
                <div class="about-grid">
                    { for ABOUT_POINTS.iter().enumerate().map(|(index, point)| html! {
                        <div
                            class="card about-card reveal-up"
                            style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}
                        >
                            {point.icon.render(48, "currentColor")}
                            <h3 class="feature-title">{point.title}</h3>
                            <p class="card-text">{point.description}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    .about-card {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .about-card .icon {
                        margin-bottom: 1rem;
                        color: var(--primary);
                    }
                    @media (min-width: 768px) {
                        .about-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                "#}
            </style>
        </section>
    }
}

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    html! {
        <section id="features" class="section">
            <div class="container">
                <h2 class="section-title centered">{"Powerful Features"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <FeatureCard feature={*feature} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .features-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    .feature-card {
                        transition: box-shadow 0.3s, transform 0.3s;
                    }
                    .feature-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 6px 16px rgba(24, 24, 27, 0.12);
                    }
                    .feature-icon {
                        display: inline-block;
                        padding: 0.5rem;
                        border-radius: 9999px;
                        color: var(--primary);
                        animation: icon-pop 0.6s 0.2s cubic-bezier(0.34, 1.56, 0.64, 1) both;
                    }
                    .feature-title {
                        margin: 1rem 0 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                    }
                    @keyframes icon-pop {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @media (min-width: 640px) {
                        .features-grid { grid-template-columns: repeat(2, 1fr); }
                        .feature-title { font-size: 1.5rem; }
                    }
                    @media (min-width: 1024px) {
                        .features-grid { grid-template-columns: repeat(3, 1fr); gap: 3rem; }
                    }
                "#}
            </style>
        </section>
    }
}
