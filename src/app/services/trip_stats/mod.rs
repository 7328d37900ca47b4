//! Descriptive statistics over a filtered dataset
//!
//! Four independent, stateless aggregators, each consuming a borrowed
//! dataset and producing one summary structure. None of them share state or
//! memoize across calls, and all of them return a well-formed "no data"
//! value for an empty dataset instead of failing.

pub mod duration;
pub mod frequency;
pub mod station;
pub mod time;
pub mod user;

#[cfg(test)]
mod tests;

pub use duration::DurationStats;
pub use station::{StationPairCount, StationStats};
pub use time::TimeStats;
pub use user::{BirthYearStats, UserStats, ValueCount};
