//! Sdílená navigace mezi stránkami (sidebar)

use crate::models::ResourceKind;
use crate::page::Navigator;

/// Cíl navigace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Vstupní stránka s nahráním kubeconfigu
    Entry,
    Resource(ResourceKind),
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Entry => "/",
            Self::Resource(kind) => kind.path(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Entry => "Upload Config",
            Self::Resource(kind) => kind.label(),
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        if path == "/" {
            return Some(Self::Entry);
        }
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.path() == path)
            .map(Self::Resource)
    }
}

impl From<ResourceKind> for Route {
    fn from(kind: ResourceKind) -> Self {
        Self::Resource(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub route: Route,
    pub label: &'static str,
    pub active: bool,
}

/// Jedna navigační komponenta parametrizovaná aktivní položkou
#[derive(Debug, Clone, Copy)]
pub struct Sidebar {
    active: Route,
}

impl Sidebar {
    pub fn new(active: impl Into<Route>) -> Self {
        Self {
            active: active.into(),
        }
    }

    pub fn active(&self) -> Route {
        self.active
    }

    pub fn entries(&self) -> Vec<NavEntry> {
        ResourceKind::ALL
            .into_iter()
            .map(|kind| {
                let route = Route::Resource(kind);
                NavEntry {
                    route,
                    label: route.label(),
                    active: route == self.active,
                }
            })
            .collect()
    }

    pub fn navigate(&mut self, route: Route, navigator: &dyn Navigator) {
        self.active = route;
        navigator.navigate(route);
    }

    /// Jednořádkový výpis, aktivní položka v hranatých závorkách
    pub fn render(&self) -> String {
        self.entries()
            .iter()
            .map(|entry| {
                if entry.active {
                    format!("[{}]", entry.label)
                } else {
                    entry.label.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
