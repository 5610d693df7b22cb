//! Scroll-linked parallax and the looping badge animation.
//!
//! Both are described as data here and handed to the browser as CSS; nothing
//! in the application schedules frames itself.

/// Vertical travel of the hero content, in pixels, over the hero's scroll
/// lifetime.
pub const PARALLAX_RANGE: f64 = 60.0;

/// How far the hero has scrolled past the top of the viewport.
///
/// `top` is the hero's top edge relative to the viewport and `height` its
/// height, both in pixels. 0 while the top edge is at (or below) the viewport
/// top, 1 once the bottom edge has reached it.
#[must_use]
pub fn scroll_progress(top: f64, height: f64) -> f64 {
    if height <= 0.0 || !top.is_finite() {
        return 0.0;
    }
    let progress = -top / height;
    if progress <= 0.0 {
        0.0
    } else {
        progress.min(1.0)
    }
}

/// Maps progress in [0, 1] linearly onto [0, `PARALLAX_RANGE`].
#[must_use]
pub fn parallax_offset(progress: f64) -> f64 {
    progress * PARALLAX_RANGE
}

#[must_use]
pub fn hero_transform(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// A looping path through evenly spaced waypoints.
///
/// `x`, `y` and `scale` must hold the same number of waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionPath {
    pub x: &'static [f64],
    pub y: &'static [f64],
    pub scale: &'static [f64],
    pub duration_secs: f64,
    /// CSS timing function
    pub ease: &'static str,
    pub repeat_forever: bool,
}

const BADGE_X: [f64; 4] = [0.0, 30.0, -30.0, 0.0];
const BADGE_Y: [f64; 4] = [0.0, -30.0, 30.0, 0.0];
const BADGE_SCALE: [f64; 4] = [1.0, 1.1, 0.9, 1.0];
const BADGE_BASE_SECS: u32 = 8;

pub const BADGE_KEYFRAMES: &str = "float-badge";

/// Motion of the floating badge at `index`: the period grows by one second
/// per badge so neighbours drift out of phase.
#[must_use]
pub fn badge_motion(index: usize) -> MotionPath {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    MotionPath {
        x: &BADGE_X,
        y: &BADGE_Y,
        scale: &BADGE_SCALE,
        duration_secs: f64::from(BADGE_BASE_SECS.saturating_add(index)),
        ease: "ease-in-out",
        repeat_forever: true,
    }
}

impl MotionPath {
    fn waypoints(&self) -> usize {
        self.x.len().min(self.y.len()).min(self.scale.len())
    }

    /// `@keyframes` rule visiting every waypoint.
    #[must_use]
    pub fn keyframes_css(&self, name: &str) -> String {
        let count = self.waypoints();
        let steps = u32::try_from(count.saturating_sub(1)).unwrap_or(u32::MAX).max(1);
        let mut css = format!("@keyframes {name} {{");
        for (i, step) in (0..count).zip(0u32..) {
            let stop = f64::from(step) * 100.0 / f64::from(steps);
            css.push_str(&format!(
                " {stop:.2}% {{ transform: translate({}px, {}px) scale({}); }}",
                self.x[i], self.y[i], self.scale[i]
            ));
        }
        css.push_str(" }");
        css
    }

    /// `animation` shorthand running the keyframes called `name`.
    #[must_use]
    pub fn animation_css(&self, name: &str) -> String {
        let iterations = if self.repeat_forever { "infinite" } else { "1" };
        format!("{name} {}s {} {iterations}", self.duration_secs, self.ease)
    }
}
