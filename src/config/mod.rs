/*!
Configuration of a context.

All configuration for a context is contained within a [Config], given when the context is built.
Each value is a [ConfigOption], which pairs the value with a name and the bounds within which the value may be set.

```rust
# use stoat_sat::config::Config;
let mut config = Config::default();
assert!(config.reduction_quality.set(4).is_ok());
assert!(config.restart_margin.set(10_000).is_err());
```

The defaults reproduce the classic behaviour of a small glucose-style solver:
- A learned-clause budget of 2000, growing by 300.
- Restarts when the fast moving average of LBD exceeds 125% of the slow moving average.
- Reductions keeping learned clauses with fewer than 6 literals satisfied by the saved phases.
*/

mod config_option;
pub use config_option::ConfigOption;

mod mode;
pub use mode::Mode;

use std::time::Duration;

/// The default capacity of the clause arena, in cells.
pub const ARENA_CAPACITY: usize = 1 << 30;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum number of cells the clause arena may hold.
    ///
    /// Cells also record offsets into the arena, so the capacity is bounded by `i32::MAX`.
    pub arena_capacity: ConfigOption<usize>,

    /// The initial count of learned clauses tolerated before a reduction.
    pub lemma_budget: ConfigOption<usize>,

    /// The amount by which the learned-clause budget grows each time it is exceeded.
    pub lemma_budget_increment: ConfigOption<usize>,

    /// Learned clauses with fewer literals satisfied by the saved phases survive a reduction.
    pub reduction_quality: ConfigOption<usize>,

    /// Permit restarts, and so reductions.
    pub restart: ConfigOption<bool>,

    /// Restart when the fast average exceeds this percentage of the slow average.
    pub restart_margin: ConfigOption<u64>,

    /// The window of the fast average of LBD, as a power of two.
    pub fast_window: ConfigOption<u32>,

    /// The window of the slow average of LBD, as a power of two.
    pub slow_window: ConfigOption<u32>,

    /// Stop a solve after this many conflicts.
    pub conflict_limit: ConfigOption<Option<usize>>,

    /// Stop a solve after this much time.
    pub time_limit: ConfigOption<Option<Duration>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            arena_capacity: ConfigOption {
                name: "arena_capacity",
                min: 1,
                max: i32::MAX as usize,
                value: ARENA_CAPACITY,
            },

            lemma_budget: ConfigOption {
                name: "lemma_budget",
                min: 0,
                max: usize::MAX,
                value: 2000,
            },

            lemma_budget_increment: ConfigOption {
                name: "lemma_budget_increment",
                min: 1,
                max: usize::MAX,
                value: 300,
            },

            reduction_quality: ConfigOption {
                name: "reduction_quality",
                min: 0,
                max: usize::MAX,
                value: 6,
            },

            restart: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                value: true,
            },

            restart_margin: ConfigOption {
                name: "restart_margin",
                min: 0,
                max: 1000,
                value: 125,
            },

            fast_window: ConfigOption {
                name: "fast_window",
                min: 1,
                max: crate::generic::ema::EMA_SCALE,
                value: 5,
            },

            slow_window: ConfigOption {
                name: "slow_window",
                min: 1,
                max: crate::generic::ema::EMA_SCALE,
                value: 15,
            },

            conflict_limit: ConfigOption {
                name: "conflict_limit",
                min: None,
                max: Some(usize::MAX),
                value: None,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: None,
                max: Some(Duration::MAX),
                value: None,
            },
        }
    }
}
