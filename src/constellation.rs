//! Star layout for the tech stack widget.
//!
//! Each category gets an anchor on a ring around the centre of the widget,
//! and its items are scattered in a fan around that anchor. Sizes and radii
//! are random, the overall shape is not.

use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::content::TechCategory;

const MAX_RADIUS_SHARE: f64 = 0.4;
const ANCHOR_RING: f64 = 0.8;
const ITEM_RADIUS_MIN: f64 = 0.1;
const ITEM_RADIUS_MAX: f64 = 0.4;
const FAN_SPREAD: f64 = PI * 0.5;
const STAR_SIZE_MIN: f64 = 2.0;
const STAR_SIZE_MAX: f64 = 4.0;

const FALLBACK_COLOR: &str = "#FFFFFF";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    #[cfg(test)]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    fn max_radius(&self) -> f64 {
        self.width.min(self.height) * MAX_RADIUS_SHARE
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub angle: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub name: &'static str,
    pub category: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

pub fn category_anchors(count: usize, viewport: Viewport) -> Vec<Anchor> {
    let (cx, cy) = viewport.center();
    let ring = viewport.max_radius() * ANCHOR_RING;
    (0..count)
        .map(|index| {
            let angle = index as f64 / count as f64 * TAU;
            Anchor {
                angle,
                x: cx + angle.cos() * ring,
                y: cy + angle.sin() * ring,
            }
        })
        .collect()
}

pub fn place_stars<R: Rng>(
    categories: &[TechCategory],
    viewport: Viewport,
    rng: &mut R,
) -> Vec<Star> {
    if !viewport.is_measured() {
        return Vec::new();
    }

    let max_radius = viewport.max_radius();
    let anchors = category_anchors(categories.len(), viewport);

    categories
        .iter()
        .zip(anchors)
        .flat_map(|(category, anchor)| {
            let count = category.items.len() as f64;
            category
                .items
                .iter()
                .enumerate()
                .map(|(index, &name)| {
                    let angle = anchor.angle + (index as f64 / count - 0.5) * FAN_SPREAD;
                    let radius =
                        rng.gen_range(ITEM_RADIUS_MIN..ITEM_RADIUS_MAX) * max_radius;
                    Star {
                        x: anchor.x + angle.cos() * radius,
                        y: anchor.y + angle.sin() * radius,
                        size: rng.gen_range(STAR_SIZE_MIN..STAR_SIZE_MAX),
                        name,
                        category: category.name,
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn stars_in<'a>(stars: &'a [Star], category: &str) -> Vec<&'a Star> {
    stars.iter().filter(|star| star.category == category).collect()
}

/// Closed loop through the stars of one category, in placement order.
pub fn connecting_segments(stars: &[Star], category: &str) -> Vec<Segment> {
    let members = stars_in(stars, category);
    let count = members.len();
    members
        .iter()
        .enumerate()
        .map(|(index, star)| {
            let next = members[(index + 1) % count];
            Segment {
                x1: star.x,
                y1: star.y,
                x2: next.x,
                y2: next.y,
            }
        })
        .collect()
}

pub fn color_for(categories: &[TechCategory], name: &str) -> &'static str {
    categories
        .iter()
        .find(|category| category.name == name)
        .map(|category| category.color)
        .unwrap_or(FALLBACK_COLOR)
}

pub fn ink_for(categories: &[TechCategory], name: &str) -> &'static str {
    categories
        .iter()
        .find(|category| category.name == name)
        .map(|category| category.ink)
        .unwrap_or("#000")
}

/// Which category is lit. Hover wins; a tap pins a category so touch
/// screens can reach the same view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Highlight {
    pub hovered: Option<&'static str>,
    pub pinned: Option<&'static str>,
}

impl Highlight {
    pub fn active(&self) -> Option<&'static str> {
        self.hovered.or(self.pinned)
    }

    pub fn hover(self, category: Option<&'static str>) -> Self {
        Self {
            hovered: category,
            ..self
        }
    }

    pub fn toggle_pin(self, category: &'static str) -> Self {
        let pinned = if self.pinned == Some(category) {
            None
        } else {
            Some(category)
        };
        Self { pinned, ..self }
    }
}

/// Which star shows its tooltip. Hover shows it for as long as the pointer
/// stays; a tap shows it until the same star is tapped again. Touch screens
/// send a synthetic enter right before the tap, so a tap on a star that is
/// only hovered keeps it up instead of hiding it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StarFocus {
    pub star: Option<usize>,
    tapped: bool,
}

impl StarFocus {
    pub fn enter(self, index: usize) -> Self {
        if self.star == Some(index) {
            self
        } else {
            Self {
                star: Some(index),
                tapped: false,
            }
        }
    }

    pub fn leave(self) -> Self {
        Self::default()
    }

    pub fn tap(self, index: usize) -> Self {
        if self.star == Some(index) && self.tapped {
            Self::default()
        } else {
            Self {
                star: Some(index),
                tapped: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TECH_STACK;
    use crate::icons::Icon;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn category(name: &'static str, items: &'static [&'static str]) -> TechCategory {
        TechCategory {
            name,
            icon: Icon::Server,
            color: "#123456",
            ink: "#fff",
            items,
        }
    }

    fn angle_gap(a: f64, b: f64) -> f64 {
        (b - a).rem_euclid(TAU)
    }

    #[test]
    fn test_stars_stay_inside_viewport() {
        let sizes = [
            (1.0, 1.0),
            (37.0, 900.0),
            (320.0, 600.0),
            (896.0, 600.0),
            (1920.0, 40.0),
            (5000.0, 5000.0),
        ];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (width, height) in sizes {
                let viewport = Viewport::new(width, height);
                for star in place_stars(TECH_STACK, viewport, &mut rng) {
                    assert!(
                        viewport.contains(star.x, star.y),
                        "{} at ({}, {}) outside {}x{}",
                        star.name,
                        star.x,
                        star.y,
                        width,
                        height
                    );
                }
            }
        }
    }

    #[test]
    fn test_anchors_evenly_spaced() {
        let viewport = Viewport::new(800.0, 600.0);
        for count in 1..=12 {
            let anchors = category_anchors(count, viewport);
            assert_eq!(anchors.len(), count);
            for pair in anchors.windows(2) {
                let gap = angle_gap(pair[0].angle, pair[1].angle);
                assert!((gap - TAU / count as f64).abs() < 1e-9);
            }
            let ring = viewport.max_radius() * ANCHOR_RING;
            for anchor in &anchors {
                let distance = (anchor.x - 400.0).hypot(anchor.y - 300.0);
                assert!((distance - ring).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_unmeasured_viewport_places_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(place_stars(TECH_STACK, Viewport::new(0.0, 0.0), &mut rng).is_empty());
        assert!(place_stars(TECH_STACK, Viewport::new(600.0, 0.0), &mut rng).is_empty());
    }

    #[test]
    fn test_sizes_within_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let stars = place_stars(TECH_STACK, Viewport::new(896.0, 600.0), &mut rng);
        assert!(stars
            .iter()
            .all(|star| (STAR_SIZE_MIN..STAR_SIZE_MAX).contains(&star.size)));
    }

    #[test]
    fn test_items_stay_near_their_anchor() {
        let viewport = Viewport::new(1000.0, 800.0);
        let anchors = category_anchors(TECH_STACK.len(), viewport);
        let mut rng = StdRng::seed_from_u64(3);
        let stars = place_stars(TECH_STACK, viewport, &mut rng);
        for (category, anchor) in TECH_STACK.iter().zip(&anchors) {
            for star in stars_in(&stars, category.name) {
                let distance = (star.x - anchor.x).hypot(star.y - anchor.y);
                assert!(distance >= ITEM_RADIUS_MIN * viewport.max_radius() - 1e-9);
                assert!(distance <= ITEM_RADIUS_MAX * viewport.max_radius() + 1e-9);
            }
        }
    }

    #[test]
    fn test_three_categories_highlight_end_to_end() {
        let categories = [
            category("Core", &["a", "b", "c", "d", "e"]),
            category("Styling", &["f", "g", "h"]),
            category("Services", &["i", "j", "k", "l", "m", "n"]),
        ];
        let mut rng = StdRng::seed_from_u64(2024);
        let stars = place_stars(&categories, Viewport::new(896.0, 600.0), &mut rng);

        assert_eq!(stars.len(), 14);
        assert!(stars
            .iter()
            .all(|star| categories.iter().any(|c| c.name == star.category)));

        for (name, expected) in [("Core", 5), ("Styling", 3), ("Services", 6)] {
            let lit = stars_in(&stars, name);
            assert_eq!(lit.len(), expected);
            assert!(lit.iter().all(|star| star.category == name));

            let segments = connecting_segments(&stars, name);
            assert_eq!(segments.len(), expected);
            let first = lit[0];
            let last_segment = segments[expected - 1];
            assert_eq!((last_segment.x2, last_segment.y2), (first.x, first.y));
            for (segment, pair) in segments.iter().zip(lit.windows(2)) {
                assert_eq!((segment.x1, segment.y1), (pair[0].x, pair[0].y));
                assert_eq!((segment.x2, segment.y2), (pair[1].x, pair[1].y));
            }
        }
    }

    #[test]
    fn test_unknown_category_has_no_segments() {
        let mut rng = StdRng::seed_from_u64(1);
        let stars = place_stars(TECH_STACK, Viewport::new(500.0, 500.0), &mut rng);
        assert!(connecting_segments(&stars, "Databases").is_empty());
        assert_eq!(color_for(TECH_STACK, "Databases"), FALLBACK_COLOR);
        assert_eq!(color_for(TECH_STACK, "UI & Styling"), "#00CED1");
    }

    #[test]
    fn test_hover_beats_pin() {
        let highlight = Highlight::default().toggle_pin("UI & Styling");
        assert_eq!(highlight.active(), Some("UI & Styling"));

        let hovering = highlight.hover(Some("Core Technologies"));
        assert_eq!(hovering.active(), Some("Core Technologies"));

        let left = hovering.hover(None);
        assert_eq!(left.active(), Some("UI & Styling"));

        let unpinned = left.toggle_pin("UI & Styling");
        assert_eq!(unpinned.active(), None);
    }

    #[test]
    fn test_second_tap_hides_tooltip() {
        let focus = StarFocus::default().tap(3);
        assert_eq!(focus.star, Some(3));
        assert_eq!(focus.tap(3).star, None);
    }

    #[test]
    fn test_touch_enter_then_tap_shows_tooltip() {
        let focus = StarFocus::default().enter(3).tap(3);
        assert_eq!(focus.star, Some(3));
        assert_eq!(focus.enter(3).tap(3).star, None);
    }

    #[test]
    fn test_tap_moves_between_stars() {
        let focus = StarFocus::default().tap(1).tap(4);
        assert_eq!(focus.star, Some(4));
        assert_eq!(focus.tap(4).star, None);
    }

    #[test]
    fn test_hover_follows_pointer() {
        let focus = StarFocus::default().enter(2);
        assert_eq!(focus.star, Some(2));
        assert_eq!(focus.enter(5).star, Some(5));
        assert_eq!(focus.leave().star, None);
        assert_eq!(StarFocus::default().tap(2).leave().star, None);
    }
}
