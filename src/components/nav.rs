use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::{NavLink, BRAND, EXPLORE_LINKS, TRY_IT_LINK};
use crate::dom::{self, StyleGuard, StyleTarget};
use crate::error::DomError;
use crate::hooks::use_frame_clock;
use crate::icons::Icon;
use crate::motion::{Easing, Timeline};

const MENU_EXIT_MS: u32 = 200;
const MENU_EXIT_SECS: f64 = 0.2;

/// The mobile menu. A menu that was just closed keeps its panel on screen
/// while it animates out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
    pub exiting: bool,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        if self.open {
            self.close()
        } else {
            Self {
                open: true,
                exiting: false,
            }
        }
    }

    pub fn select_link(self) -> Self {
        self.close()
    }

    /// The panel only exists below the mobile breakpoint.
    pub fn resize(self, width: f64) -> Self {
        if width >= config::MOBILE_BREAKPOINT {
            self.close()
        } else {
            self
        }
    }

    pub fn finish_exit(self) -> Self {
        Self {
            exiting: false,
            ..self
        }
    }

    pub fn panel_visible(&self) -> bool {
        self.open || self.exiting
    }

    fn close(self) -> Self {
        if self.open {
            Self {
                open: false,
                exiting: true,
            }
        } else {
            self
        }
    }
}

pub enum MenuAction {
    Toggle,
    SelectLink,
    Resize(f64),
    FinishExit,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            MenuAction::Toggle => self.toggle(),
            MenuAction::SelectLink => self.select_link(),
            MenuAction::Resize(width) => self.resize(width),
            MenuAction::FinishExit => self.finish_exit(),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// What the scroll-lock effect holds for one value of the open flag. A failed
/// lock is logged and the menu works without it.
fn hold_scroll_lock<T, F>(open: bool, lock: F) -> Option<StyleGuard<T>>
where
    T: StyleTarget,
    F: FnOnce() -> Result<StyleGuard<T>, DomError>,
{
    if !open {
        return None;
    }
    match lock() {
        Ok(guard) => {
            debug!("Locked page scroll for mobile menu (was {:?})", guard.previous());
            Some(guard)
        }
        Err(e) => {
            warn!("Could not lock page scroll: {}", e);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
struct MobileNavItemProps {
    link: NavLink,
    on_select: Callback<MouseEvent>,
}

#[function_component(MobileNavItem)]
fn mobile_nav_item(props: &MobileNavItemProps) -> Html {
    html! {
        <li>
            <a href={props.link.href} class="mobile-nav-link" onclick={props.on_select.clone()}>
                {props.link.title}
            </a>
        </li>
    }
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu = use_reducer(MenuState::default);
    let explore_open = use_state(|| false);
    let (window_width, _) = use_window_size();

    {
        let dispatcher = menu.dispatcher();
        use_effect_with_deps(
            move |width| {
                dispatcher.dispatch(MenuAction::Resize(*width));
                || ()
            },
            window_width,
        );
    }

    // Body scroll stays locked exactly as long as the panel is open. The
    // guard is released by this effect's teardown: on close, on link click,
    // on widening and when the header unmounts.
    use_effect_with_deps(
        move |open| {
            let guard = hold_scroll_lock(*open, dom::lock_body_scroll);
            move || drop(guard)
        },
        menu.open,
    );

    {
        let dispatcher = menu.dispatcher();
        use_effect_with_deps(
            move |exiting| {
                let timeout = exiting.then(|| {
                    Timeout::new(MENU_EXIT_MS, move || dispatcher.dispatch(MenuAction::FinishExit))
                });
                move || drop(timeout)
            },
            menu.exiting,
        );
    }

    let exit_elapsed = use_frame_clock(menu.exiting);
    let exit_progress = if menu.exiting {
        Timeline::once(MENU_EXIT_SECS, Easing::EaseInOut).progress(exit_elapsed)
    } else {
        0.0
    };

    let toggle_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuAction::Toggle))
    };

    let close_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuAction::SelectLink))
    };

    let open_explore = {
        let explore_open = explore_open.clone();
        Callback::from(move |_: MouseEvent| explore_open.set(true))
    };

    let close_explore = {
        let explore_open = explore_open.clone();
        Callback::from(move |_: MouseEvent| explore_open.set(false))
    };

    let toggle_explore = {
        let explore_open = explore_open.clone();
        Callback::from(move |_: MouseEvent| explore_open.set(!*explore_open))
    };

    html! {
        <>
            <header class="site-header">
                <a class="brand-link" href="#start">
                    <span class="brand-name">{BRAND}</span>
                </a>

                <nav class="desktop-nav">
                    <div class="nav-explore" onmouseenter={open_explore} onmouseleave={close_explore.clone()}>
                        <button
                            class={classes!("nav-trigger", (*explore_open).then(|| "open"))}
                            aria-expanded={(*explore_open).to_string()}
                            onclick={toggle_explore}
                        >
                            {"Explore"}
                            {Icon::ChevronDown.render(14, "currentColor")}
                        </button>
                        {
                            if *explore_open {
                                html! {
                                    <ul class="explore-panel">
                                        { for EXPLORE_LINKS.iter().map(|link| html! {
                                            <li>
                                                <a href={link.href} class="explore-item" onclick={close_explore.clone()}>
                                                    <div class="explore-title">{link.title}</div>
                                                    { for link.blurb.map(|blurb| html! {
                                                        <p class="explore-blurb">{blurb}</p>
                                                    }) }
                                                </a>
                                            </li>
                                        }) }
                                    </ul>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <a href={TRY_IT_LINK.href} class="nav-trigger">{TRY_IT_LINK.title}</a>
                </nav>

                <button class="menu-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                    {
                        if menu.open {
                            Icon::X.render(24, "currentColor")
                        } else {
                            Icon::Menu.render(24, "currentColor")
                        }
                    }
                </button>
            </header>

            {
                if menu.panel_visible() {
                    html! {
                        <div
                            class={classes!("mobile-panel", menu.exiting.then(|| "exiting"))}
                            style={format!(
                                "opacity: {:.3}; transform: scaleY({:.3});",
                                1.0 - exit_progress,
                                1.0 - exit_progress
                            )}
                        >
                            <nav>
                                <ul>
                                    { for EXPLORE_LINKS.iter().chain(std::iter::once(&TRY_IT_LINK)).map(|link| html! {
                                        <MobileNavItem link={*link} on_select={close_menu.clone()} />
                                    }) }
                                </ul>
                            </nav>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 40;
                        height: 4rem;
                        padding: 0 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(4px);
                    }
                    .brand-link {
                        text-decoration: none;
                        color: var(--foreground);
                    }
                    .brand-name {
                        font-family: var(--serif);
                        font-weight: 700;
                        font-size: 1.25rem;
                        letter-spacing: -0.02em;
                        transition: color 0.2s;
                    }
                    .brand-link:hover .brand-name {
                        color: var(--primary);
                    }
                    .desktop-nav {
                        display: none;
                        align-items: center;
                        gap: 0.25rem;
                    }
                    .nav-explore {
                        position: relative;
                    }
                    .nav-trigger {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.25rem;
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: transparent;
                        color: var(--foreground);
                        font: inherit;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .nav-trigger:hover,
                    .nav-trigger.open {
                        background: var(--accent);
                    }
                    .nav-trigger .icon {
                        transition: transform 0.2s;
                    }
                    .nav-trigger.open .icon {
                        transform: rotate(180deg);
                    }
                    .explore-panel {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 400px;
                        margin: 0;
                        padding: 1rem;
                        list-style: none;
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 0.5rem;
                        background: var(--background);
                        border: 1px solid var(--border);
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                        animation: panel-in 0.15s ease-out;
                    }
                    .explore-item {
                        display: block;
                        padding: 0.75rem;
                        border-radius: 0.375rem;
                        text-decoration: none;
                        color: var(--foreground);
                    }
                    .explore-item:hover {
                        background: var(--accent);
                    }
                    .explore-title {
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .explore-blurb {
                        margin: 0.25rem 0 0;
                        font-size: 0.875rem;
                        color: var(--muted-foreground);
                    }
                    .menu-toggle {
                        display: inline-flex;
                        padding: 0.5rem;
                        border: none;
                        background: transparent;
                        color: var(--foreground);
                        cursor: pointer;
                    }
                    .mobile-panel {
                        position: fixed;
                        left: 0;
                        right: 0;
                        top: 4rem;
                        z-index: 30;
                        overflow: hidden;
                        background: var(--background);
                        border-bottom: 1px solid var(--border);
                        transform-origin: top center;
                        animation: panel-in 0.2s ease-out;
                    }
                    .mobile-panel.exiting {
                        pointer-events: none;
                    }
                    .mobile-panel ul {
                        list-style: none;
                        margin: 0;
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .mobile-nav-link {
                        display: block;
                        padding: 0.5rem 0;
                        color: var(--foreground);
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .mobile-nav-link:hover {
                        color: var(--primary);
                    }
                    @keyframes panel-in {
                        from { opacity: 0; transform: translateY(-6px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (min-width: 640px) {
                        .site-header {
                            justify-content: center;
                            gap: 1.25rem;
                        }
                    }
                    @media (min-width: 768px) {
                        .desktop-nav {
                            display: flex;
                        }
                        .menu-toggle,
                        .mobile-panel {
                            display: none;
                        }
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::testing::FakeElement;

    /// The header's scroll-lock effect: torn down and re-run whenever the
    /// open flag changes, torn down for good on drop.
    struct Header {
        body: FakeElement,
        menu: MenuState,
        guard: Option<StyleGuard<FakeElement>>,
    }

    impl Header {
        fn mount(body: FakeElement) -> Self {
            Self {
                body,
                menu: MenuState::default(),
                guard: None,
            }
        }

        fn apply(&mut self, next: MenuState) {
            if next.open != self.menu.open {
                self.guard = None;
                let body = self.body.clone();
                self.guard = hold_scroll_lock(next.open, move || dom::lock_scroll(body));
            }
            self.menu = next;
        }

        fn overflow(&self) -> Option<String> {
            self.body.get("overflow")
        }
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let menu = MenuState::default().toggle();
        assert!(menu.open);
        assert!(menu.panel_visible());

        let menu = menu.toggle();
        assert!(!menu.open);
        assert!(menu.exiting);
        assert!(menu.panel_visible());

        let menu = menu.finish_exit();
        assert!(!menu.panel_visible());
    }

    #[test]
    fn test_closed_menu_ignores_close_paths() {
        let menu = MenuState::default();
        assert_eq!(menu.select_link(), menu);
        assert_eq!(menu.resize(1200.0), menu);
    }

    #[test]
    fn test_resize_closes_only_past_breakpoint() {
        let open = MenuState::default().toggle();
        assert_eq!(open.resize(767.0), open);
        assert!(!open.resize(768.0).open);
        assert!(!open.resize(800.0).open);
    }

    #[test]
    fn test_reopen_during_exit() {
        let menu = MenuState::default().toggle().toggle().toggle();
        assert!(menu.open);
        assert!(!menu.exiting);
    }

    #[test]
    fn test_every_close_path_restores_scroll() {
        let closers: [fn(MenuState) -> MenuState; 3] = [
            MenuState::toggle,
            MenuState::select_link,
            |menu| menu.resize(800.0),
        ];
        for close in closers {
            let body = FakeElement::default();
            body.set_style("overflow", "auto").unwrap();
            let mut header = Header::mount(body);

            header.apply(header.menu.toggle());
            assert_eq!(header.overflow().as_deref(), Some("hidden"));

            header.apply(close(header.menu));
            assert!(header.guard.is_none());
            assert_eq!(header.overflow().as_deref(), Some("auto"));
        }
    }

    #[test]
    fn test_unmount_while_open_restores_scroll() {
        let body = FakeElement::default();
        let mut header = Header::mount(body.clone());
        header.apply(header.menu.toggle());
        assert_eq!(body.get("overflow").as_deref(), Some("hidden"));
        drop(header);
        assert_eq!(body.get("overflow"), None);
    }

    #[test]
    fn test_reopen_does_not_capture_locked_value() {
        let body = FakeElement::default();
        let mut header = Header::mount(body.clone());
        for _ in 0..3 {
            header.apply(header.menu.toggle());
            header.apply(header.menu.select_link());
            header.apply(header.menu.finish_exit());
        }
        header.apply(header.menu.toggle());
        header.apply(header.menu.resize(500.0));
        assert_eq!(body.get("overflow").as_deref(), Some("hidden"));
        drop(header);
        assert_eq!(body.get("overflow"), None);
    }

    #[test]
    fn test_failed_lock_leaves_menu_usable() {
        let guard = hold_scroll_lock::<FakeElement, _>(true, || Err(DomError::NoBody));
        assert!(guard.is_none());
        assert!(MenuState::default().toggle().open);
    }
}
