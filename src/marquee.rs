use crate::motion::Timeline;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarqueeMode {
    /// Narrow screens: one strip holding the list twice, looping left.
    Scrolling,
    /// Wide screens: static grid, no animation.
    Grid,
}

impl MarqueeMode {
    pub fn for_width(width: f64, threshold: f64) -> Self {
        if width < threshold {
            MarqueeMode::Scrolling
        } else {
            MarqueeMode::Grid
        }
    }
}

/// Tracks the layout mode across resize events and only reports real
/// changes, so a burst of resizes at one width never restarts the loop.
#[derive(Debug)]
pub struct MarqueeController {
    threshold: f64,
    mode: Option<MarqueeMode>,
    runs: u32,
}

impl MarqueeController {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            mode: None,
            runs: 0,
        }
    }

    #[cfg(test)]
    pub fn mode(&self) -> Option<MarqueeMode> {
        self.mode
    }

    /// How many times scrolling has been (re)started.
    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn observe(&mut self, width: f64) -> Option<MarqueeMode> {
        let next = MarqueeMode::for_width(width, self.threshold);
        if self.mode == Some(next) {
            return None;
        }
        self.mode = Some(next);
        if next == MarqueeMode::Scrolling {
            self.runs += 1;
        }
        Some(next)
    }
}

/// Horizontal shift of a doubled strip, in percent of the strip width.
/// At -50% the second copy sits exactly where the first one started.
pub fn strip_offset(timeline: &Timeline, elapsed: f64) -> f64 {
    -50.0 * timeline.progress(elapsed)
}

/// The list twice over, so the strip can wrap without a gap.
pub fn doubled<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 768.0;

    #[test]
    fn test_mode_boundary() {
        assert_eq!(MarqueeMode::for_width(320.0, THRESHOLD), MarqueeMode::Scrolling);
        assert_eq!(MarqueeMode::for_width(767.9, THRESHOLD), MarqueeMode::Scrolling);
        assert_eq!(MarqueeMode::for_width(768.0, THRESHOLD), MarqueeMode::Grid);
        assert_eq!(MarqueeMode::for_width(1440.0, THRESHOLD), MarqueeMode::Grid);
    }

    #[test]
    fn test_repeated_width_reports_once() {
        let mut controller = MarqueeController::new(THRESHOLD);
        assert_eq!(controller.observe(400.0), Some(MarqueeMode::Scrolling));
        for _ in 0..10 {
            assert_eq!(controller.observe(400.0), None);
        }
        assert_eq!(controller.observe(500.0), None);
        assert_eq!(controller.runs(), 1);
    }

    #[test]
    fn test_one_flip_per_crossing() {
        let mut controller = MarqueeController::new(THRESHOLD);
        let widths = [1024.0, 1000.0, 700.0, 650.0, 650.0, 900.0, 900.0, 500.0, 768.0];
        let flips: Vec<_> = widths
            .iter()
            .filter_map(|&width| controller.observe(width))
            .collect();
        assert_eq!(
            flips,
            vec![
                MarqueeMode::Grid,
                MarqueeMode::Scrolling,
                MarqueeMode::Grid,
                MarqueeMode::Scrolling,
                MarqueeMode::Grid,
            ]
        );
        assert_eq!(controller.runs(), 2);
        assert_eq!(controller.mode(), Some(MarqueeMode::Grid));
    }

    #[test]
    fn test_offset_loops_back_to_start() {
        let timeline = Timeline::looping(30.0);
        assert_eq!(strip_offset(&timeline, 0.0), 0.0);
        assert!((strip_offset(&timeline, 15.0) + 25.0).abs() < 1e-9);
        assert_eq!(strip_offset(&timeline, 30.0), 0.0);
        for step in 0..300 {
            let offset = strip_offset(&timeline, step as f64 * 0.37);
            assert!((-50.0..=0.0).contains(&offset));
        }
    }

    #[test]
    fn test_doubled_keeps_order() {
        assert_eq!(doubled(&["a", "b", "c"]), vec!["a", "b", "c", "a", "b", "c"]);
        assert!(doubled::<&str>(&[]).is_empty());
    }
}
