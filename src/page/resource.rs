use serde_json::Value;
use std::fmt::Debug;

use super::namespace::{derive as derive_view, derive_overview, DerivedView, OverviewView};
use crate::error::FetchError;
use crate::models::{
    ClusterOverview, ConfigMapInfo, IngressInfo, IntegrityIssue, NodeInfo, PodInfo, ResourceKind,
    ResourceSnapshot, SecretInfo, ServiceInfo,
};

/// Vazba druhu resource na jeho snapshot a odvozený pohled
pub trait Resource: Send + Sync + 'static {
    const KIND: ResourceKind;

    type Snapshot: Debug + Send + Sync + 'static;
    type View: Debug;

    /// Tělo odpovědi → snapshot; `None` pro "no data"
    fn parse(body: Value) -> Result<Option<Self::Snapshot>, FetchError>;

    fn derive(snapshot: &Self::Snapshot, namespace: &str) -> Self::View;

    fn integrity_issues(_snapshot: &Self::Snapshot) -> Vec<IntegrityIssue> {
        Vec::new()
    }
}

macro_rules! list_resource {
    ($(#[$meta:meta])* $marker:ident, $kind:expr, $item:ty) => {
        $(#[$meta])*
        pub struct $marker;

        impl Resource for $marker {
            const KIND: ResourceKind = $kind;

            type Snapshot = ResourceSnapshot<$item>;
            type View = DerivedView<$item>;

            fn parse(body: Value) -> Result<Option<Self::Snapshot>, FetchError> {
                ResourceSnapshot::from_body(Self::KIND, body)
            }

            fn derive(snapshot: &Self::Snapshot, namespace: &str) -> Self::View {
                derive_view(snapshot, namespace)
            }

            fn integrity_issues(snapshot: &Self::Snapshot) -> Vec<IntegrityIssue> {
                snapshot.integrity_issues()
            }
        }
    };
}

list_resource!(
    /// `/nodes`, cluster-scoped
    Nodes,
    ResourceKind::Nodes,
    NodeInfo
);
list_resource!(Pods, ResourceKind::Pods, PodInfo);
list_resource!(Services, ResourceKind::Services, ServiceInfo);
list_resource!(Ingresses, ResourceKind::Ingress, IngressInfo);
list_resource!(Secrets, ResourceKind::Secrets, SecretInfo);
list_resource!(ConfigMaps, ResourceKind::ConfigMaps, ConfigMapInfo);

/// `/overview`
pub struct Overview;

impl Resource for Overview {
    const KIND: ResourceKind = ResourceKind::Overview;

    type Snapshot = ClusterOverview;
    type View = OverviewView;

    fn parse(body: Value) -> Result<Option<Self::Snapshot>, FetchError> {
        ClusterOverview::from_body(body)
    }

    fn derive(snapshot: &Self::Snapshot, namespace: &str) -> Self::View {
        derive_overview(snapshot, namespace)
    }

    fn integrity_issues(snapshot: &Self::Snapshot) -> Vec<IntegrityIssue> {
        let nested = [
            snapshot.pods.as_ref().map(ResourceSnapshot::integrity_issues),
            snapshot.services.as_ref().map(ResourceSnapshot::integrity_issues),
            snapshot.ingress.as_ref().map(ResourceSnapshot::integrity_issues),
            snapshot.secrets.as_ref().map(ResourceSnapshot::integrity_issues),
            snapshot.config_maps.as_ref().map(ResourceSnapshot::integrity_issues),
        ];
        let mut issues: Vec<IntegrityIssue> = nested.into_iter().flatten().flatten().collect();

        if snapshot.running_nodes > snapshot.total_nodes {
            issues.push(IntegrityIssue::RunningExceedsTotal {
                namespace: String::new(),
                total: snapshot.total_nodes,
                running: snapshot.running_nodes,
            });
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overview_checks_every_nested_snapshot() {
        let body = json!({
            "totalNodes": 1,
            "runningNodes": 1,
            "pods": { "total": { "default": 1 }, "running": { "default": 1 }, "pods": [] },
            "namespaces": { "total": 1, "namespacelist": ["default"] },
            "services": {
                "total": { "default": 1 },
                "services": [{ "name": "orphan-svc", "namespace": "ghost" }]
            },
            "totalIngress": null,
            "totalSecrets": {
                "total": { "default": 1 },
                "secrets": [{ "name": "orphan-secret", "namespace": "ghost" }]
            },
            "totalConfigMaps": {
                "total": { "default": 1, "ghost": 1 },
                "confs": [{ "name": "orphan-conf", "namespace": "ghost" }]
            }
        });
        let overview = Overview::parse(body).unwrap().unwrap();

        let issues = Overview::integrity_issues(&overview);
        let items: Vec<String> = issues
            .iter()
            .filter_map(|issue| match issue {
                IntegrityIssue::NamespaceNotListed { item, .. } => Some(item.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(items, vec!["orphan-svc", "orphan-secret", "orphan-conf"]);
        assert_eq!(
            issues
                .iter()
                .filter(|issue| matches!(issue, IntegrityIssue::NamespaceMissingFromTotals { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn test_overview_flags_running_nodes_above_total() {
        let body = json!({ "totalNodes": 1, "runningNodes": 3 });
        let overview = Overview::parse(body).unwrap().unwrap();

        assert_eq!(
            Overview::integrity_issues(&overview),
            vec![IntegrityIssue::RunningExceedsTotal {
                namespace: String::new(),
                total: 1,
                running: 3,
            }]
        );
    }
}
