//! Business workflows layered over the ledger.
//!
//! Each workflow is a short, synchronous sequence of ledger reads, rule
//! evaluations and at most one ledger write. Workflows never retry and
//! never write before every check has passed.

mod hiring;
mod scoring;

pub use hiring::{HireOutcome, HireRequest, hire_employee};
pub use scoring::{PerformanceOutcome, PerformanceRequest, score_commercial_performance};
