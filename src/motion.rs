//! Time based interpolation for the page animations.
//!
//! A [`Timeline`] turns elapsed seconds into a progress value in `[0, 1]`;
//! components sample it from a frame clock and map the progress onto
//! whatever they animate. [`Spring`] smooths a moving target.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Repeat {
    Once,
    Loop,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Timeline {
    pub fn once(duration: f64, easing: Easing) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing,
            repeat: Repeat::Once,
        }
    }

    pub fn looping(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing: Easing::Linear,
            repeat: Repeat::Loop,
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn progress(&self, elapsed: f64) -> f64 {
        let local = (elapsed - self.delay).max(0.0);
        if self.duration <= 0.0 {
            return 1.0;
        }
        let raw = match self.repeat {
            Repeat::Once => (local / self.duration).min(1.0),
            Repeat::Loop => (local % self.duration) / self.duration,
        };
        self.easing.apply(raw)
    }
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

// Larger steps are split so a stalled tab does not blow up the integration.
const MAX_SPRING_STEP: f64 = 1.0 / 240.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    mass: f64,
    rest_delta: f64,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Spring with damping `2 * sqrt(k * m)`: fastest approach with no overshoot.
    pub fn critically_damped(stiffness: f64, mass: f64, rest_delta: f64) -> Self {
        Self {
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            mass,
            rest_delta,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    #[cfg(test)]
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_resting(&self) -> bool {
        (self.target - self.value).abs() < self.rest_delta && self.velocity.abs() < self.rest_delta
    }

    /// Advances by `dt` seconds and returns the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 && !self.is_resting() {
            let h = remaining.min(MAX_SPRING_STEP);
            let force = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_resting() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_is_periodic() {
        let timeline = Timeline::looping(30.0);
        for elapsed in [0.0, 4.5, 12.0, 29.9] {
            let a = timeline.progress(elapsed);
            let b = timeline.progress(elapsed + 30.0);
            let c = timeline.progress(elapsed + 300.0);
            assert!((a - b).abs() < 1e-9, "{elapsed}: {a} vs {b}");
            assert!((a - c).abs() < 1e-9, "{elapsed}: {a} vs {c}");
        }
        assert_eq!(timeline.progress(0.0), 0.0);
        assert!((timeline.progress(15.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_once_holds_at_end() {
        let timeline = Timeline::once(0.5, Easing::EaseOut).with_delay(0.2);
        assert_eq!(timeline.progress(0.0), 0.0);
        assert_eq!(timeline.progress(0.2), 0.0);
        assert_eq!(timeline.progress(0.8), 1.0);
        assert_eq!(timeline.progress(42.0), 1.0);
    }

    #[test]
    fn test_easings_keep_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12);
            assert!((easing.apply(2.0) - 1.0).abs() < 1e-12);
        }
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_spring_reaches_target_without_overshoot() {
        let mut spring = Spring::critically_damped(100.0, 1.0, 0.001);
        spring.set_target(1.0);
        let mut previous = spring.value();
        for _ in 0..(60 * 3) {
            let value = spring.step(1.0 / 60.0);
            assert!(value <= 1.0, "overshot: {value}");
            assert!(value >= previous, "moved backwards: {previous} -> {value}");
            previous = value;
        }
        assert!(spring.is_resting());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn test_spring_survives_long_frame() {
        let mut spring = Spring::critically_damped(100.0, 1.0, 0.001);
        spring.set_target(0.75);
        let value = spring.step(5.0);
        assert_eq!(value, 0.75);
    }

    #[test]
    fn test_spring_retargets_mid_flight() {
        let mut spring = Spring::critically_damped(100.0, 1.0, 0.001);
        spring.set_target(1.0);
        spring.step(0.1);
        let mid = spring.value();
        assert!(mid > 0.0 && mid < 1.0);
        spring.set_target(0.0);
        spring.step(3.0);
        assert_eq!(spring.value(), 0.0);
    }
}
