use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{RequestSequence, Resource, ResourceFetcher};
use crate::backend::Backend;
use crate::error::FetchError;

/// Výsledek `refresh()`
#[derive(Debug)]
pub enum RefreshOutcome<S> {
    /// Jiný refresh už běží, nic se neodeslalo
    AlreadyInFlight,
    /// Výsledek s pořadovým číslem přiděleným při odeslání re-fetche
    Completed(u64, Result<Option<S>, FetchError>),
}

/// Invalidace cache backendu a následný re-fetch, nejvýše jeden najednou
pub struct RefreshCoordinator {
    backend: Arc<dyn Backend>,
    in_flight: AtomicBool,
}

/// Drží in-flight flag; uvolní ho při dropu i při chybě nebo zrušení future
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl RefreshCoordinator {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn try_begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(&self.in_flight))
    }

    /// Re-fetch se odešle až po dokončení invalidace, nikdy souběžně.
    pub async fn refresh<R: Resource>(
        &self,
        fetcher: &ResourceFetcher,
        sequence: &RequestSequence,
    ) -> RefreshOutcome<R::Snapshot> {
        let Some(_in_flight) = self.try_begin() else {
            tracing::debug!("Refresh of {} already in flight, skipping", R::KIND);
            return RefreshOutcome::AlreadyInFlight;
        };

        tracing::info!("Invalidating backend cache before refreshing {}", R::KIND);
        if let Err(err) = self.backend.invalidate().await {
            tracing::error!("Cache invalidation failed: {}", err);
            return RefreshOutcome::Completed(sequence.issue(), Err(err));
        }

        let seq = sequence.issue();
        RefreshOutcome::Completed(seq, fetcher.fetch::<R>().await)
    }
}
