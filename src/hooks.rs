use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use web_sys::js_sys::Date;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom;
use crate::motion::Spring;
use crate::scroll::{in_view, scroll_fraction};

/// Seconds since `running` last became true. Reads 0 while stopped, and
/// starts over from 0 every time it is switched back on.
#[hook]
pub fn use_frame_clock(running: bool) -> f64 {
    let elapsed = use_state(|| 0.0_f64);

    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |running| {
                elapsed.set(0.0);
                let interval = running.then(|| {
                    let started = Date::now();
                    Interval::new(config::FRAME_INTERVAL_MS, move || {
                        elapsed.set((Date::now() - started) / 1000.0);
                    })
                });
                // Dropping the interval cancels it
                move || drop(interval)
            },
            running,
        );
    }

    *elapsed
}

/// Follows `target` through a critically damped spring. The ticker only runs
/// while the spring is moving.
#[hook]
pub fn use_spring(target: f64) -> f64 {
    let value = use_state(|| 0.0_f64);
    let spring = use_mut_ref(|| {
        Spring::critically_damped(
            config::SPRING_STIFFNESS,
            config::SPRING_MASS,
            config::SPRING_REST_DELTA,
        )
    });

    {
        let value = value.clone();
        use_effect_with_deps(
            move |target| {
                spring.borrow_mut().set_target(*target);

                let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if !spring.borrow().is_resting() {
                    let handle = ticker.clone();
                    let mut last = Date::now();
                    let interval = Interval::new(config::FRAME_INTERVAL_MS, move || {
                        let now = Date::now();
                        let mut spring = spring.borrow_mut();
                        value.set(spring.step((now - last) / 1000.0));
                        last = now;
                        if spring.is_resting() {
                            // Can't drop the interval from inside its own callback
                            let handle = handle.clone();
                            Timeout::new(0, move || {
                                handle.borrow_mut().take();
                            })
                            .forget();
                        }
                    });
                    *ticker.borrow_mut() = Some(interval);
                }

                move || {
                    ticker.borrow_mut().take();
                }
            },
            target,
        );
    }

    *value
}

/// Page scroll as a fraction in `[0, 1]`, updated on scroll and resize.
#[hook]
pub fn use_scroll_fraction() -> f64 {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    match dom::document_scroll_height() {
        Ok(scroll_height) => scroll_fraction(scroll_y, scroll_height, viewport_height),
        Err(e) => {
            debug!("Scroll height unavailable: {}", e);
            0.0
        }
    }
}

/// Turns true the first time `node` scrolls into view and stays true.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |&(_, viewport_height)| {
                if !*revealed {
                    if let Some(element) = node.cast::<Element>() {
                        let (top, bottom) = dom::element_span(&element);
                        if in_view(top, bottom, viewport_height, config::REVEAL_MARGIN_PX) {
                            revealed.set(true);
                        }
                    }
                }
                || ()
            },
            (scroll_y, viewport_height),
        );
    }

    *revealed
}
