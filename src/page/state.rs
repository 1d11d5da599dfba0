use std::fmt;
use std::sync::Arc;

use crate::error::FetchError;

/// Stav načítání jedné stránky. Vždy platí právě jedna varianta.
pub enum FetchState<S> {
    Idle,
    Loading,
    Ready(Arc<S>),
    /// Backend nevrátil žádná data (`null` obálka); není to chyba
    Empty,
    Failed(FetchError),
}

impl<S> FetchState<S> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn snapshot(&self) -> Option<&Arc<S>> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading...",
            Self::Ready(_) => "Ready",
            Self::Empty => "No Data Available",
            Self::Failed(_) => "Error",
        }
    }
}

impl<S> Default for FetchState<S> {
    fn default() -> Self {
        Self::Idle
    }
}

// Ruční impl, snapshot je za Arc a nemusí být Clone
impl<S> Clone for FetchState<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Loading => Self::Loading,
            Self::Ready(snapshot) => Self::Ready(Arc::clone(snapshot)),
            Self::Empty => Self::Empty,
            Self::Failed(err) => Self::Failed(err.clone()),
        }
    }
}

impl<S> fmt::Debug for FetchState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
            other => f.write_str(other.status_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state: FetchState<u32> = FetchState::default();
        assert!(matches!(state, FetchState::Idle));
        assert!(state.snapshot().is_none());
        assert_eq!(state.status_text(), "Idle");
    }

    #[test]
    fn test_accessors() {
        let ready = FetchState::Ready(Arc::new(7));
        assert_eq!(ready.snapshot().map(|s| **s), Some(7));
        assert!(ready.error().is_none());

        let failed: FetchState<u32> = FetchState::Failed(FetchError::AuthExpired);
        assert_eq!(failed.error(), Some(&FetchError::AuthExpired));
        assert_eq!(failed.status_text(), "Error");
        assert!(FetchState::<u32>::Loading.is_loading());
    }
}
