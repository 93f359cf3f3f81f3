use yew::prelude::*;

/// Stroke glyphs used on the page, drawn on a 24x24 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Search,
    Zap,
    Code,
    Cloud,
    Link,
    MapPin,
    Globe,
    Mic,
    ArrowRight,
    Github,
    Server,
    Palette,
    Cpu,
    ChevronDown,
    Menu,
    X,
}

enum Shape {
    Path(&'static str),
    Circle(f32, f32, f32),
    Rect(f32, f32, f32, f32, f32),
}

use Shape::{Circle, Path, Rect};

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::Search => &[Circle(11.0, 11.0, 8.0), Path("m21 21-4.3-4.3")],
            Icon::Zap => &[Path("M13 2 3 14h9l-1 8 10-12h-9l1-8z")],
            Icon::Code => &[Path("m16 18 6-6-6-6"), Path("m8 6-6 6 6 6")],
            Icon::Cloud => &[Path("M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z")],
            Icon::Link => &[
                Path("M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"),
                Path("M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"),
            ],
            Icon::MapPin => &[
                Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
                Circle(12.0, 10.0, 3.0),
            ],
            Icon::Globe => &[
                Circle(12.0, 12.0, 10.0),
                Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
                Path("M2 12h20"),
            ],
            Icon::Mic => &[
                Path("M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3Z"),
                Path("M19 10v2a7 7 0 0 1-14 0v-2"),
                Path("M12 19v3"),
            ],
            Icon::ArrowRight => &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
            Icon::Github => &[
                Path("M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"),
                Path("M9 18c-4.51 2-5-2-7-2"),
            ],
            Icon::Server => &[
                Rect(2.0, 2.0, 20.0, 8.0, 2.0),
                Rect(2.0, 14.0, 20.0, 8.0, 2.0),
                Path("M6 6h.01"),
                Path("M6 18h.01"),
            ],
            Icon::Palette => &[
                Circle(13.5, 6.5, 0.5),
                Circle(17.5, 10.5, 0.5),
                Circle(8.5, 7.5, 0.5),
                Circle(6.5, 12.5, 0.5),
                Path("M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z"),
            ],
            Icon::Cpu => &[
                Rect(4.0, 4.0, 16.0, 16.0, 2.0),
                Rect(9.0, 9.0, 6.0, 6.0, 0.0),
                Path("M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2"),
            ],
            Icon::ChevronDown => &[Path("m6 9 6 6 6-6")],
            Icon::Menu => &[Path("M4 6h16"), Path("M4 12h16"), Path("M4 18h16")],
            Icon::X => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
        }
    }

    pub fn render(self, size: u32, color: &str) -> Html {
        let shapes = self.shapes().iter().map(|shape| match *shape {
            Path(d) => html! { <path d={d} /> },
            Circle(cx, cy, r) => html! {
                <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
            },
            Rect(x, y, width, height, rx) => html! {
                <rect
                    x={x.to_string()}
                    y={y.to_string()}
                    width={width.to_string()}
                    height={height.to_string()}
                    rx={rx.to_string()}
                />
            },
        });

        html! {
            <svg
                class="icon"
                width={size.to_string()}
                height={size.to_string()}
                viewBox="0 0 24 24"
                fill="none"
                stroke={color.to_string()}
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                { for shapes }
            </svg>
        }
    }
}
