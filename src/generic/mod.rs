//! Generic structures, independent of the details of a solve.

pub mod ema;
