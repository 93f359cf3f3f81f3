use log::debug;
use stylist::yew::styled_component;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::{QUOTES, TWEET_IDS};
use crate::hooks::use_frame_clock;
use crate::marquee::{doubled, strip_offset, MarqueeController, MarqueeMode};
use crate::motion::Timeline;

const TWEET_EMBED_URL: &str = "https://platform.twitter.com/embed/Tweet.html?id=";

#[derive(Properties, PartialEq)]
pub struct TweetEmbedProps {
    pub id: &'static str,
}

/// Third-party post widget; the page only knows the post id.
#[function_component(TweetEmbed)]
pub fn tweet_embed(props: &TweetEmbedProps) -> Html {
    html! {
        <iframe
            class="tweet-embed"
            src={format!("{}{}", TWEET_EMBED_URL, props.id)}
            title={format!("Post {}", props.id)}
            loading="lazy"
        />
    }
}

#[styled_component(TestimonialSection)]
pub fn testimonial_section() -> Html {
    let (window_width, _) = use_window_size();
    let controller = use_mut_ref(|| MarqueeController::new(config::MOBILE_BREAKPOINT));
    let mode = use_state(|| MarqueeMode::for_width(window_width, config::MOBILE_BREAKPOINT));

    {
        let mode = mode.clone();
        use_effect_with_deps(
            move |width| {
                let mut controller = controller.borrow_mut();
                if let Some(next) = controller.observe(*width) {
                    debug!(
                        "Testimonials now {:?} at {}px (scroll runs: {})",
                        next,
                        width,
                        controller.runs()
                    );
                    mode.set(next);
                }
                || ()
            },
            window_width,
        );
    }

    let scrolling = *mode == MarqueeMode::Scrolling;
    let elapsed = use_frame_clock(scrolling);
    let offset = strip_offset(&Timeline::looping(config::TESTIMONIAL_LOOP_SECS), elapsed);

    let window = css!(
        r#"
        position: relative;
        height: 400px;
        overflow: hidden;
    "#
    );

    let body = if scrolling {
        html! {
            <div class={window}>
                <div class="marquee-strip" style={format!("transform: translateX({:.3}%);", offset)}>
                    { for doubled(TWEET_IDS).into_iter().enumerate().map(|(index, id)| html! {
                        <div class="marquee-card" key={index}>
                            <TweetEmbed {id} />
                        </div>
                    }) }
                </div>
            </div>
        }
    } else {
        html! {
            <div class="testimonial-grid">
                { for TWEET_IDS.iter().map(|&id| html! {
                    <div class="tweet-container" key={id}>
                        <TweetEmbed {id} />
                    </div>
                }) }
            </div>
        }
    };

    html! {
        <section id="testimonials" class="section section-fade-down testimonials">
            <div class="container">
                <h2 class="section-title centered">{"What People Are Saying"}</h2>
                { body }
            </div>
            <style>
                {r#"
                    .testimonials {
                        overflow: hidden;
                    }
                    .marquee-strip {
                        position: absolute;
                        top: 0;
                        left: 0;
                        display: flex;
                        will-change: transform;
                    }
                    .marquee-card {
                        width: 300px;
                        flex-shrink: 0;
                        margin-right: 1.5rem;
                    }
                    .testimonial-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        grid-auto-rows: min-content;
                        gap: 1rem;
                    }
                    .tweet-embed {
                        width: 100%;
                        min-height: 360px;
                        border: none;
                        border-radius: 0.75rem;
                        background: var(--background);
                    }
                    @media (min-width: 1024px) {
                        .testimonial-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                "#}
            </style>
        </section>
    }
}

/// Always-on ribbon of short quotes.
#[function_component(QuoteMarquee)]
pub fn quote_marquee() -> Html {
    let elapsed = use_frame_clock(true);
    let offset = strip_offset(&Timeline::looping(config::QUOTE_LOOP_SECS), elapsed);

    html! {
        <div class="quote-marquee">
            <div class="quote-strip" style={format!("transform: translateX({:.3}%);", offset)}>
                { for doubled(QUOTES).into_iter().enumerate().map(|(index, quote)| html! {
                    <span class="quote" key={index}>{quote}</span>
                }) }
            </div>
            <style>
                {r#"
                    .quote-marquee {
                        padding: 1rem 0;
                        overflow: hidden;
                        background: var(--primary);
                    }
                    .quote-strip {
                        display: flex;
                        width: max-content;
                        white-space: nowrap;
                        will-change: transform;
                    }
                    .quote {
                        margin: 0 2rem;
                        color: #fff;
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                "#}
            </style>
        </div>
    }
}
