/*!
Exponential moving averages of the LBD of learned clauses, in fixed point.

Two averages are kept:
- A fast average, over a short window, which tracks the quality of recent learning.
- A slow average, over a long window, which tracks the quality of learning over the solve.

Each average with a window of 2^w is updated on a new value *v* by:

```none
average ← average - average / 2^w + v · 2^(SCALE - w)
```

So, each average approaches *v* · 2^SCALE on a constant input, and the two averages are directly comparable.
If the fast average rises sufficiently above the slow average recent learning has been poor, and a [restart](crate::procedures::restart) may help.
*/

/// The fixed-point scale of an average.
pub const EMA_SCALE: u32 = 20;

/// The value both averages start from.
const EMA_INITIAL: u64 = 1 << 24;

/// A pair of fast and slow moving averages of LBD.
#[derive(Clone, Debug)]
pub struct LbdAverages {
    fast: u64,
    slow: u64,
    fast_window: u32,
    slow_window: u32,
}

impl LbdAverages {
    /// Fresh averages, with windows given as powers of two.
    pub fn new(fast_window: u32, slow_window: u32) -> Self {
        LbdAverages {
            fast: EMA_INITIAL,
            slow: EMA_INITIAL,
            fast_window: fast_window.clamp(1, EMA_SCALE),
            slow_window: slow_window.clamp(1, EMA_SCALE),
        }
    }

    /// Folds `lbd` into both averages.
    pub fn update(&mut self, lbd: u32) {
        let lbd = lbd as u64;

        self.fast -= self.fast >> self.fast_window;
        self.fast += lbd << (EMA_SCALE - self.fast_window);

        self.slow -= self.slow >> self.slow_window;
        self.slow += lbd << (EMA_SCALE - self.slow_window);
    }

    /// The ceiling on the fast average, as `margin` percent of the slow average.
    fn ceiling(&self, margin: u64) -> u64 {
        (self.slow / 100).saturating_mul(margin)
    }

    /// True if the fast average exceeds `margin` percent of the slow average.
    pub fn exceeds(&self, margin: u64) -> bool {
        self.fast > self.ceiling(margin)
    }

    /// Lowers the fast average to `margin` percent of the slow average.
    pub fn clamp_fast(&mut self, margin: u64) {
        self.fast = self.ceiling(margin);
    }

    pub fn fast(&self) -> u64 {
        self.fast
    }

    pub fn slow(&self) -> u64 {
        self.slow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_input_converges_to_scaled_value() {
        let mut averages = LbdAverages::new(5, 15);
        for _ in 0..2_000 {
            averages.update(3);
        }

        let target = 3_u64 << EMA_SCALE;
        let distance = averages.fast().abs_diff(target);
        assert!(distance < target / 100);
    }

    #[test]
    fn poor_learning_exceeds_margin() {
        let mut averages = LbdAverages::new(5, 15);
        for _ in 0..1_000 {
            averages.update(2);
        }
        assert!(!averages.exceeds(125));

        for _ in 0..100 {
            averages.update(40);
        }
        assert!(averages.exceeds(125));

        averages.clamp_fast(125);
        assert!(!averages.exceeds(125));
    }
}
