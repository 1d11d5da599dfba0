use std::sync::{Arc, Mutex, PoisonError};

use crate::error::FetchError;
use crate::nav::Route;

/// Navigace mimo aktuální stránku (side effect)
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigátor, který si cíle jen zaznamená
#[derive(Debug, Default)]
pub struct NavigationLog {
    routes: Mutex<Vec<Route>>,
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes().last().copied()
    }
}

impl Navigator for NavigationLog {
    fn navigate(&self, route: Route) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

/// Jediné místo, kde se chyba mění v navigaci.
///
/// 401 → přesměrování na vstupní stránku a chyba `AuthExpired`;
/// ostatní chyby projdou beze změny.
#[derive(Clone)]
pub struct SessionGuard {
    navigator: Arc<dyn Navigator>,
}

impl SessionGuard {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    pub fn inspect(&self, err: FetchError) -> FetchError {
        if !err.is_auth_failure() {
            return err;
        }

        tracing::warn!("Session expired, redirecting to {}", Route::Entry.path());
        self.navigator.navigate(Route::Entry);
        FetchError::AuthExpired
    }
}
