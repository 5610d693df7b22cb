//! Random placement of the floating hero badges.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const MIN_PERCENT: f64 = 10.0;
pub const MAX_PERCENT: f64 = 90.0;

/// Badge position as percentages of the hero box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgePosition {
    pub top: f64,
    pub left: f64,
}

impl BadgePosition {
    /// Inline style placing the badge.
    #[must_use]
    pub fn style(&self) -> String {
        format!("top: {}%; left: {}%; z-index: 5;", self.top, self.left)
    }
}

/// Source of badge positions.
///
/// `Entropy` gives a fresh layout on every render. `Seeded` repeats the same
/// layout for the same seed.
pub enum BadgeRng {
    Entropy,
    Seeded(StdRng),
}

impl BadgeRng {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => BadgeRng::Seeded(StdRng::seed_from_u64(seed)),
            None => BadgeRng::Entropy,
        }
    }

    /// Uniform sample in [0, 1).
    fn unit(&mut self) -> f64 {
        match self {
            BadgeRng::Seeded(rng) => rng.random::<f64>(),
            BadgeRng::Entropy => entropy(),
        }
    }

    /// Draws top and left independently from [`MIN_PERCENT`, `MAX_PERCENT`).
    pub fn place(&mut self) -> BadgePosition {
        let span = MAX_PERCENT - MIN_PERCENT;
        let top = MIN_PERCENT + self.unit() * span;
        let left = MIN_PERCENT + self.unit() * span;
        BadgePosition { top, left }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy() -> f64 {
    rand::rng().random::<f64>()
}

#[cfg(target_arch = "wasm32")]
fn entropy() -> f64 {
    use leptos::wasm_bindgen::prelude::wasm_bindgen;

    #[wasm_bindgen(inline_js = "export function unit_random() { return Math.random(); }")]
    extern "C" {
        fn unit_random() -> f64;
    }

    unit_random()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_bounds(pos: BadgePosition) {
        assert!((MIN_PERCENT..=MAX_PERCENT).contains(&pos.top), "top {}", pos.top);
        assert!((MIN_PERCENT..=MAX_PERCENT).contains(&pos.left), "left {}", pos.left);
    }

    #[test]
    fn entropy_positions_stay_in_bounds() {
        // one rng per simulated mount
        for _ in 0..2_000 {
            let mut rng = BadgeRng::new(None);
            assert_in_bounds(rng.place());
        }
    }

    #[test]
    fn seeded_positions_stay_in_bounds() {
        let mut rng = BadgeRng::new(Some(7));
        for _ in 0..2_000 {
            assert_in_bounds(rng.place());
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = BadgeRng::new(Some(42));
        let mut b = BadgeRng::new(Some(42));
        for _ in 0..8 {
            assert_eq!(a.place(), b.place());
        }
    }

    #[test]
    fn positions_spread_across_range() {
        let mut rng = BadgeRng::new(Some(1));
        let tops: Vec<f64> = (0..500).map(|_| rng.place().top).collect();
        assert!(tops.iter().any(|t| *t < 30.0));
        assert!(tops.iter().any(|t| *t > 70.0));
    }

    #[test]
    fn style_sets_top_and_left() {
        let pos = BadgePosition { top: 12.5, left: 80.0 };
        assert_eq!(pos.style(), "top: 12.5%; left: 80%; z-index: 5;");
    }
}
