//! URL reachability verification.
//!
//! [`HttpChecker`] probes a single URL with a HEAD request; the coordinator
//! fans those probes out over a bounded worker pool and hands back verdicts in
//! input order.

mod checker;
mod coordinator;

pub use checker::{is_reachable_status, Checker, HttpChecker, CHECK_TIMEOUT};
pub use coordinator::{verify_all, verify_all_with, Verdict, VerdictObserver, Verification};
