use std::sync::atomic::{AtomicU64, Ordering};

/// Pořadová čísla requestů jedné stránky.
///
/// Číslo se přiděluje v okamžiku odeslání fetche. Výsledek se aplikuje jen
/// tehdy, je-li novější než všechno dosud aplikované.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// `false` pro výsledek starší než poslední aplikovaný
    pub fn try_apply(&self, seq: u64) -> bool {
        self.applied.fetch_max(seq, Ordering::AcqRel) < seq
    }

    pub fn last_applied(&self) -> u64 {
        self.applied.load(Ordering::Acquire)
    }
}
