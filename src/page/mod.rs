//! Synchronizační vrstva sdílená všemi stránkami: fetch, refresh,
//! session guard, odvození podle namespace a rozbalování detailu.

mod expansion;
mod fetcher;
mod namespace;
mod refresh;
mod resource;
mod sequence;
mod session;
mod state;

pub use expansion::ExpansionState;
pub use fetcher::ResourceFetcher;
pub use namespace::{
    derive, derive_overview, DerivedView, NamespaceCounts, NamespaceSelection, OverviewView,
    DEFAULT_NAMESPACE,
};
pub use refresh::{RefreshCoordinator, RefreshOutcome};
pub use resource::{ConfigMaps, Ingresses, Nodes, Overview, Pods, Resource, Secrets, Services};
pub use sequence::RequestSequence;
pub use session::{NavigationLog, Navigator, SessionGuard};
pub use state::FetchState;

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::backend::Backend;
use crate::error::FetchError;
use crate::models::{ResourceItem, ResourceSnapshot};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Jedna instance stránky pro druh resource `R`.
///
/// Stav (fetch, výběr namespace, rozbalení) patří jen této instanci a mění se
/// výhradně přes metody níže. Klon sdílí tutéž instanci.
pub struct Page<R: Resource> {
    inner: Arc<PageInner<R>>,
}

struct PageInner<R: Resource> {
    fetcher: ResourceFetcher,
    refresh: RefreshCoordinator,
    guard: SessionGuard,
    sequence: RequestSequence,
    mounted: AtomicBool,
    fetch: Mutex<FetchState<R::Snapshot>>,
    selection: Mutex<NamespaceSelection>,
    expansion: Mutex<ExpansionState>,
    last_fetched: Mutex<Option<DateTime<Utc>>>,
}

impl<R: Resource> Clone for Page<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Resource> Page<R> {
    /// Nová instance ve stavu `Idle`, zatím bez requestu
    pub fn new(backend: Arc<dyn Backend>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            inner: Arc::new(PageInner {
                fetcher: ResourceFetcher::new(Arc::clone(&backend)),
                refresh: RefreshCoordinator::new(backend),
                guard: SessionGuard::new(navigator),
                sequence: RequestSequence::new(),
                mounted: AtomicBool::new(true),
                fetch: Mutex::new(FetchState::Idle),
                selection: Mutex::new(NamespaceSelection::default()),
                expansion: Mutex::new(ExpansionState::default()),
                last_fetched: Mutex::new(None),
            }),
        }
    }

    /// Vytvoří stránku a rovnou načte snapshot
    pub async fn mount(backend: Arc<dyn Backend>, navigator: Arc<dyn Navigator>) -> Self {
        let page = Self::new(backend, navigator);
        page.load().await;
        page
    }

    /// Teardown. Výsledky, které dorazí potom, se zahodí.
    pub fn unmount(&self) {
        tracing::debug!("Unmounting {} page", R::KIND);
        self.inner.mounted.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.load(Ordering::Acquire)
    }

    /// Načte snapshot bez invalidace cache backendu.
    ///
    /// Během běžícího refreshe se nic neodešle, jeho re-fetch stav stejně přepíše.
    pub async fn load(&self) {
        if !self.is_mounted() {
            return;
        }
        if self.is_refreshing() {
            tracing::debug!("Refresh of {} in flight, skipping load", R::KIND);
            return;
        }

        *lock(&self.inner.fetch) = FetchState::Loading;
        let seq = self.inner.sequence.issue();
        let result = self.inner.fetcher.fetch::<R>().await;
        self.apply(seq, result);
    }

    /// Invalidace cache a re-fetch. Vrací `false`, pokud už refresh běží.
    pub async fn refresh(&self) -> bool {
        if !self.is_mounted() {
            return false;
        }

        let outcome = self
            .inner
            .refresh
            .refresh::<R>(&self.inner.fetcher, &self.inner.sequence)
            .await;

        match outcome {
            RefreshOutcome::AlreadyInFlight => false,
            RefreshOutcome::Completed(seq, result) => {
                self.apply(seq, result);
                true
            }
        }
    }

    /// Akce "Retry" na chybovém panelu
    pub async fn retry(&self) -> bool {
        self.refresh().await
    }

    pub fn is_refreshing(&self) -> bool {
        self.inner.refresh.is_in_flight()
    }

    fn apply(&self, seq: u64, result: Result<Option<R::Snapshot>, FetchError>) {
        if !self.is_mounted() {
            tracing::debug!("Discarding stale {} result, page was unmounted", R::KIND);
            return;
        }

        // Zámek drží kontrolu pořadí i zápis pohromadě
        let mut fetch = lock(&self.inner.fetch);
        if !self.inner.sequence.try_apply(seq) {
            tracing::debug!(
                "Discarding {} result #{}, newer #{} already applied",
                R::KIND,
                seq,
                self.inner.sequence.last_applied()
            );
            return;
        }

        let next = match result {
            Ok(Some(snapshot)) => {
                *lock(&self.inner.last_fetched) = Some(Utc::now());
                FetchState::Ready(Arc::new(snapshot))
            }
            Ok(None) => FetchState::Empty,
            Err(err) => {
                let err = self.inner.guard.inspect(err);
                tracing::error!("Failed to load {}: {}", R::KIND, err);
                FetchState::Failed(err)
            }
        };

        *fetch = next;
    }

    pub fn state(&self) -> FetchState<R::Snapshot> {
        lock(&self.inner.fetch).clone()
    }

    pub fn snapshot(&self) -> Option<Arc<R::Snapshot>> {
        lock(&self.inner.fetch).snapshot().cloned()
    }

    pub fn last_fetched(&self) -> Option<DateTime<Utc>> {
        *lock(&self.inner.last_fetched)
    }

    pub fn namespace(&self) -> String {
        lock(&self.inner.selection).as_str().to_string()
    }

    /// Okamžitá změna namespace, nezávislá na běžícím fetchi. Sbalí detail.
    pub fn select_namespace(&self, namespace: impl Into<String>) {
        let namespace = namespace.into();
        tracing::debug!("Selecting namespace '{}' on {} page", namespace, R::KIND);

        lock(&self.inner.selection).set(namespace);
        lock(&self.inner.expansion).on_namespace_change();
    }

    pub fn expansion(&self) -> ExpansionState {
        *lock(&self.inner.expansion)
    }

    pub fn toggle_expansion(&self, index: usize) {
        lock(&self.inner.expansion).toggle(index);
    }

    /// Odvozený pohled pro aktuálně vybraný namespace
    pub fn view(&self) -> Option<R::View> {
        let snapshot = self.snapshot()?;
        let namespace = self.namespace();
        Some(R::derive(&snapshot, &namespace))
    }
}

impl<R, T> Page<R>
where
    R: Resource<Snapshot = ResourceSnapshot<T>, View = DerivedView<T>>,
    T: ResourceItem,
{
    /// Namespace známé backendu, pro výběr
    pub fn namespaces(&self) -> Vec<String> {
        self.snapshot()
            .map(|s| s.namespace_list.clone())
            .unwrap_or_default()
    }

    /// Rozbalená položka aktuálního filtrovaného seznamu
    pub fn expanded_item(&self) -> Option<T> {
        if !T::EXPANDABLE {
            return None;
        }
        let index = self.expansion().expanded()?;
        self.view()?.items.into_iter().nth(index)
    }
}
