//! Parallel verification of generated entries.
//!
//! Checks run on a dedicated pool of exactly `workers` threads. Results are
//! collected through an indexed parallel iterator, so every check writes only
//! its own pre-allocated slot and the verdict list comes back in input order
//! no matter which checks finish first.

use playgen_common::Entry;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::checker::Checker;

/// Called from worker threads as each verdict completes, in completion order.
pub type VerdictObserver<'a> = &'a (dyn Fn(&Verdict, usize) + Sync);

/// Reachability outcome for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Position of the entry in the verified list.
    pub position: usize,
    /// Range index of the entry.
    pub index: u64,
    pub url: String,
    pub reachable: bool,
}

/// Ordered verdicts for a full verification round.
#[derive(Debug, Clone, Default)]
pub struct Verification {
    verdicts: Vec<Verdict>,
    valid: usize,
}

impl Verification {
    fn from_verdicts(verdicts: Vec<Verdict>) -> Self {
        let valid = verdicts.iter().filter(|v| v.reachable).count();
        Self { verdicts, valid }
    }

    /// Verdicts in input order.
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    pub fn valid(&self) -> usize {
        self.valid
    }

    pub fn invalid(&self) -> usize {
        self.verdicts.len() - self.valid
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Keep only the entries whose verdict was reachable, preserving order.
    ///
    /// `entries` must be the list that was verified.
    pub fn retain_reachable(&self, entries: Vec<Entry>) -> Vec<Entry> {
        debug_assert_eq!(entries.len(), self.verdicts.len());

        entries
            .into_iter()
            .zip(&self.verdicts)
            .filter_map(|(entry, verdict)| verdict.reachable.then_some(entry))
            .collect()
    }
}

/// Check every entry exactly once using up to `workers` threads.
pub fn verify_all(entries: &[Entry], checker: &dyn Checker, workers: usize) -> Verification {
    verify_all_with(entries, checker, workers, None)
}

/// Like [`verify_all`], reporting each verdict to `observer` as it lands
/// together with the number of checks finished so far.
pub fn verify_all_with(
    entries: &[Entry],
    checker: &dyn Checker,
    workers: usize,
    observer: Option<VerdictObserver<'_>>,
) -> Verification {
    let workers = workers.max(1);
    let finished = AtomicUsize::new(0);

    tracing::info!(
        "Verifying {} URLs with {} workers",
        entries.len(),
        workers
    );

    let check_one = |(position, entry): (usize, &Entry)| {
        let verdict = Verdict {
            position,
            index: entry.index,
            url: entry.url.clone(),
            reachable: checker.check(&entry.url),
        };

        let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(observer) = observer {
            observer(&verdict, done);
        }
        verdict
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("playgen-verify-{}", i))
        .build();

    let verdicts: Vec<Verdict> = match pool {
        Ok(pool) => pool.install(|| {
            entries
                .par_iter()
                .with_max_len(1)
                .enumerate()
                .map(check_one)
                .collect()
        }),
        Err(e) => {
            tracing::warn!("Failed to start verification workers, checking sequentially: {}", e);
            entries.iter().enumerate().map(check_one).collect()
        }
    };

    let verification = Verification::from_verdicts(verdicts);
    tracing::info!(
        "Verification complete: {} valid, {} invalid",
        verification.valid(),
        verification.invalid()
    );
    verification
}
