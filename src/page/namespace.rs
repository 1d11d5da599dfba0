//! Odvození zobrazovaných dat pro vybraný namespace.
//!
//! Čistě synchronní výpočet nad snapshotem, žádný síťový přístup.
//! Přepočítává se při každé změně namespace.

use std::fmt;

use crate::models::{ClusterOverview, IntegrityIssue, ResourceItem, ResourceSnapshot, Totals};

pub const DEFAULT_NAMESPACE: &str = "default";

/// Aktivní namespace stránky. Změna nikdy nemění snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSelection(String);

impl NamespaceSelection {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self(namespace.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn set(&mut self, namespace: impl Into<String>) {
        self.0 = namespace.into();
    }
}

impl Default for NamespaceSelection {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl fmt::Display for NamespaceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Skalární metriky jednoho namespace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceCounts {
    pub total: u64,
    pub running: u64,
    /// `total - running`, zespodu oříznuto na 0
    pub unavailable: u64,
    /// Nastaveno, když backend hlásí `running > total`
    pub anomaly: Option<IntegrityIssue>,
}

impl NamespaceCounts {
    pub fn derive(totals: &Totals, running: Option<&Totals>, namespace: &str) -> Self {
        let total = totals.get(namespace);
        let running = running.map(|r| r.get(namespace)).unwrap_or(0);

        let anomaly = (running > total).then(|| {
            tracing::warn!(
                "Backend reports {} running out of {} total in namespace '{}'",
                running,
                total,
                namespace
            );
            IntegrityIssue::RunningExceedsTotal {
                namespace: namespace.to_string(),
                total,
                running,
            }
        });

        Self {
            total,
            running,
            unavailable: total.saturating_sub(running),
            anomaly,
        }
    }

    pub fn of<T>(snapshot: &ResourceSnapshot<T>, namespace: &str) -> Self {
        Self::derive(&snapshot.totals, snapshot.running.as_ref(), namespace)
    }
}

/// Výsledek odvození pro seznamovou stránku
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<T> {
    pub namespace: String,
    pub counts: NamespaceCounts,
    pub items: Vec<T>,
}

impl<T> DerivedView<T> {
    pub fn total(&self) -> u64 {
        self.counts.total
    }

    pub fn running(&self) -> u64 {
        self.counts.running
    }

    pub fn unavailable(&self) -> u64 {
        self.counts.unavailable
    }
}

/// `(snapshot, namespace) -> DerivedView`
///
/// Cluster-scoped resources (nodes) namespace ignorují a vrací vše.
pub fn derive<T: ResourceItem>(snapshot: &ResourceSnapshot<T>, namespace: &str) -> DerivedView<T> {
    let items = if snapshot.totals.is_cluster_scoped() {
        snapshot.items.clone()
    } else {
        snapshot
            .items
            .iter()
            .filter(|item| item.namespace() == Some(namespace))
            .cloned()
            .collect()
    };

    DerivedView {
        namespace: namespace.to_string(),
        counts: NamespaceCounts::of(snapshot, namespace),
        items,
    }
}

/// Souhrn overview stránky pro jeden namespace
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewView {
    pub namespace: String,
    pub namespaces: u64,
    pub nodes: NamespaceCounts,
    pub pods: Option<NamespaceCounts>,
    pub services: Option<NamespaceCounts>,
    pub ingress: Option<NamespaceCounts>,
    pub secrets: Option<NamespaceCounts>,
    pub config_maps: Option<NamespaceCounts>,
}

pub fn derive_overview(overview: &ClusterOverview, namespace: &str) -> OverviewView {
    OverviewView {
        namespace: namespace.to_string(),
        namespaces: overview.namespaces.total,
        nodes: NamespaceCounts::derive(
            &Totals::Cluster(overview.total_nodes),
            Some(&Totals::Cluster(overview.running_nodes)),
            namespace,
        ),
        pods: overview.pods.as_ref().map(|s| NamespaceCounts::of(s, namespace)),
        services: overview.services.as_ref().map(|s| NamespaceCounts::of(s, namespace)),
        ingress: overview.ingress.as_ref().map(|s| NamespaceCounts::of(s, namespace)),
        secrets: overview.secrets.as_ref().map(|s| NamespaceCounts::of(s, namespace)),
        config_maps: overview.config_maps.as_ref().map(|s| NamespaceCounts::of(s, namespace)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NodeInfo, PodInfo, ResourceKind, SecretInfo};
    use std::collections::BTreeMap;

    fn pod(name: &str, namespace: &str) -> PodInfo {
        PodInfo {
            name: name.to_string(),
            namespace: namespace.to_string(),
            ..Default::default()
        }
    }

    fn per_namespace(entries: &[(&str, u64)]) -> Totals {
        Totals::PerNamespace(
            entries
                .iter()
                .map(|(ns, count)| (ns.to_string(), *count))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    fn pods_snapshot() -> ResourceSnapshot<PodInfo> {
        ResourceSnapshot {
            kind: ResourceKind::Pods,
            totals: per_namespace(&[("default", 3), ("kube-system", 5)]),
            running: Some(per_namespace(&[("default", 2), ("kube-system", 5)])),
            items: vec![
                pod("web-1", "default"),
                pod("coredns-1", "kube-system"),
                pod("web-2", "default"),
                pod("coredns-2", "kube-system"),
                pod("proxy", "kube-system"),
                pod("db", "default"),
            ],
            namespace_list: vec!["default".to_string(), "kube-system".to_string()],
        }
    }

    #[test]
    fn test_default_namespace_scenario() {
        let view = derive(&pods_snapshot(), "default");

        assert_eq!(view.total(), 3);
        assert_eq!(view.running(), 2);
        assert_eq!(view.unavailable(), 1);
        let names: Vec<_> = view.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["web-1", "web-2", "db"]);
        assert!(view.counts.anomaly.is_none());
    }

    #[test]
    fn test_filtered_items_match_namespace() {
        let snapshot = pods_snapshot();
        for namespace in &snapshot.namespace_list {
            let view = derive(&snapshot, namespace);
            assert!(view.items.iter().all(|p| &p.namespace == namespace));
        }
    }

    #[test]
    fn test_unavailable_is_total_minus_running() {
        let counts = NamespaceCounts::derive(
            &per_namespace(&[("default", 10)]),
            Some(&per_namespace(&[("default", 7)])),
            "default",
        );
        assert_eq!(counts.unavailable, 3);
    }

    #[test]
    fn test_unknown_namespace_yields_zero() {
        let view = derive(&pods_snapshot(), "monitoring");
        assert_eq!(view.counts, NamespaceCounts::default());
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_running_exceeding_total_is_clamped_and_flagged() {
        let counts = NamespaceCounts::derive(
            &per_namespace(&[("default", 2)]),
            Some(&per_namespace(&[("default", 5)])),
            "default",
        );
        assert_eq!(counts.unavailable, 0);
        assert_eq!(
            counts.anomaly,
            Some(IntegrityIssue::RunningExceedsTotal {
                namespace: "default".to_string(),
                total: 2,
                running: 5,
            })
        );
    }

    #[test]
    fn test_kind_without_readiness() {
        let snapshot = ResourceSnapshot {
            kind: ResourceKind::Secrets,
            totals: per_namespace(&[("default", 4)]),
            running: None,
            items: vec![SecretInfo {
                name: "tls".to_string(),
                namespace: "default".to_string(),
                ..Default::default()
            }],
            namespace_list: vec!["default".to_string()],
        };

        let view = derive(&snapshot, "default");
        assert_eq!(view.running(), 0);
        assert_eq!(view.unavailable(), 4);
        assert_eq!(view.items.len(), 1);
    }

    #[test]
    fn test_cluster_scoped_ignores_namespace() {
        let snapshot = ResourceSnapshot {
            kind: ResourceKind::Nodes,
            totals: Totals::Cluster(3),
            running: Some(Totals::Cluster(2)),
            items: vec![NodeInfo::default(), NodeInfo::default(), NodeInfo::default()],
            namespace_list: Vec::new(),
        };

        let view = derive(&snapshot, "kube-system");
        assert_eq!(view.total(), 3);
        assert_eq!(view.unavailable(), 1);
        assert_eq!(view.items.len(), 3);
    }

    #[test]
    fn test_selection_defaults_to_default() {
        let mut selection = NamespaceSelection::default();
        assert_eq!(selection.as_str(), "default");
        selection.set("kube-system");
        assert_eq!(selection.to_string(), "kube-system");
    }
}
