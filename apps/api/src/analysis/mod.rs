// Profile/job comparison: keyword gap analysis plus the illustrative gauge value.
// `gap` and `illustrative` are pure; only the handlers touch the record store.

pub mod gap;
pub mod handlers;
pub mod illustrative;

pub use gap::{analyze, GapReport};
pub use illustrative::{illustrative_score, IllustrativeScore};
