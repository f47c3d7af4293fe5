//! Search generation counter.
//!
//! Every new search bumps the counter. An enrichment run holds the
//! [`GenerationGuard`] issued for its search and checks it before applying
//! anything, so results from a superseded search are dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SearchGeneration {
    current: Arc<AtomicU64>,
}

impl SearchGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating every guard issued before.
    #[must_use]
    pub fn advance(&self) -> GenerationGuard {
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        GenerationGuard {
            id,
            current: Arc::clone(&self.current),
        }
    }

    /// A guard for the current generation without advancing it.
    #[must_use]
    pub fn guard(&self) -> GenerationGuard {
        GenerationGuard {
            id: self.current(),
            current: Arc::clone(&self.current),
        }
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct GenerationGuard {
    id: u64,
    current: Arc<AtomicU64>,
}

impl GenerationGuard {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// `false` once a newer search has started.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.id
    }
}
