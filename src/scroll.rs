use crate::config;
use crate::motion::lerp;

/// How far the page has been scrolled, from 0 at the top to 1 at the bottom.
pub fn scroll_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Clamped linear mapping of `x` from `input` onto `output`.
pub fn map_range(x: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (a, b) = input;
    if a == b {
        return if x < a { output.0 } else { output.1 };
    }
    let t = ((x - a) / (b - a)).clamp(0.0, 1.0);
    lerp(output.0, output.1, t)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    pub opacity: f64,
    pub scale: f64,
    pub translate_y: f64,
}

impl HeroTransform {
    pub fn at(fraction: f64) -> Self {
        let range = (0.0, config::HERO_FADE_END);
        Self {
            opacity: map_range(fraction, range, (1.0, 0.0)),
            scale: map_range(fraction, range, (1.0, 0.95)),
            translate_y: map_range(fraction, range, (0.0, -50.0)),
        }
    }

    pub fn to_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.1}px) scale({:.4});",
            self.opacity, self.translate_y, self.scale
        )
    }
}

/// Whether an element spanning `top..bottom` (viewport coordinates) is on
/// screen once `margin` pixels are shaved off both viewport edges.
pub fn in_view(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin && bottom > margin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_starts_at_zero() {
        assert_eq!(scroll_fraction(0.0, 4000.0, 800.0), 0.0);
    }

    #[test]
    fn test_fraction_is_monotonic_and_clamped() {
        let mut previous = -1.0;
        for step in 0..=500 {
            let y = step as f64 * 10.0;
            let fraction = scroll_fraction(y, 4000.0, 800.0);
            assert!((0.0..=1.0).contains(&fraction));
            assert!(fraction >= previous);
            previous = fraction;
        }
        assert_eq!(scroll_fraction(3200.0, 4000.0, 800.0), 1.0);
        assert_eq!(scroll_fraction(9000.0, 4000.0, 800.0), 1.0);
        assert_eq!(scroll_fraction(-40.0, 4000.0, 800.0), 0.0);
    }

    #[test]
    fn test_unscrollable_page_reports_zero() {
        assert_eq!(scroll_fraction(0.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(20.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn test_hero_fully_visible_at_top() {
        let hero = HeroTransform::at(0.0);
        assert_eq!(hero.opacity, 1.0);
        assert_eq!(hero.scale, 1.0);
        assert_eq!(hero.translate_y, 0.0);
    }

    #[test]
    fn test_hero_gone_past_fade_end() {
        for fraction in [0.2, 0.21, 0.5, 0.99, 1.0] {
            let hero = HeroTransform::at(fraction);
            assert_eq!(hero.opacity, 0.0, "fraction {fraction}");
            assert!((hero.scale - 0.95).abs() < 1e-12);
            assert_eq!(hero.translate_y, -50.0);
        }
    }

    #[test]
    fn test_hero_halfway() {
        let hero = HeroTransform::at(0.1);
        assert!((hero.opacity - 0.5).abs() < 1e-9);
        assert!((hero.translate_y + 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_in_view_respects_margin() {
        assert!(in_view(200.0, 400.0, 800.0, 100.0));
        assert!(!in_view(750.0, 950.0, 800.0, 100.0));
        assert!(!in_view(-300.0, 50.0, 800.0, 100.0));
        assert!(in_view(-300.0, 150.0, 800.0, 100.0));
    }

    #[test]
    fn test_map_range_clamps() {
        assert_eq!(map_range(-1.0, (0.0, 1.0), (10.0, 20.0)), 10.0);
        assert_eq!(map_range(2.0, (0.0, 1.0), (10.0, 20.0)), 20.0);
        assert_eq!(map_range(0.25, (0.0, 1.0), (10.0, 20.0)), 12.5);
    }
}
