use serde::Deserialize;
use serde_json::Value;

use super::snapshot::take;
use super::{
    nullable, ConfigMapInfo, IngressInfo, PodInfo, ResourceItem, ResourceKind, ResourceSnapshot,
    SecretInfo, ServiceInfo,
};
use crate::error::FetchError;

/// Odpověď `/overview`: souhrn celého clusteru v jednom objektu
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterOverview {
    pub total_nodes: u64,
    pub running_nodes: u64,
    pub namespaces: NamespaceSummary,
    pub pods: Option<ResourceSnapshot<PodInfo>>,
    pub services: Option<ResourceSnapshot<ServiceInfo>>,
    pub ingress: Option<ResourceSnapshot<IngressInfo>>,
    pub secrets: Option<ResourceSnapshot<SecretInfo>>,
    pub config_maps: Option<ResourceSnapshot<ConfigMapInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NamespaceSummary {
    pub total: u64,
    #[serde(rename = "namespacelist", deserialize_with = "nullable")]
    pub namespace_list: Vec<String>,
}

impl ClusterOverview {
    pub fn from_body(body: Value) -> Result<Option<Self>, FetchError> {
        let mut fields = match body {
            Value::Null => return Ok(None),
            Value::Object(fields) => fields,
            _ => {
                return Err(FetchError::InvalidResponse(
                    "expected JSON object from /overview".to_string(),
                ))
            }
        };

        let namespaces: NamespaceSummary = take(&mut fields, "namespaces")?.unwrap_or_default();

        let mut overview = Self {
            total_nodes: take(&mut fields, "totalNodes")?.unwrap_or(0),
            running_nodes: take(&mut fields, "runningNodes")?.unwrap_or(0),
            pods: nested(&mut fields, "pods", ResourceKind::Pods)?,
            services: nested(&mut fields, "services", ResourceKind::Services)?,
            ingress: nested(&mut fields, "totalIngress", ResourceKind::Ingress)?,
            secrets: nested(&mut fields, "totalSecrets", ResourceKind::Secrets)?,
            config_maps: nested(&mut fields, "totalConfigMaps", ResourceKind::ConfigMaps)?,
            namespaces,
        };

        // namespacelist dostávají vnořené obálky jen od dedikovaných endpointů
        let list = overview.namespaces.namespace_list.clone();
        fill_namespaces(&mut overview.pods, &list);
        fill_namespaces(&mut overview.services, &list);
        fill_namespaces(&mut overview.ingress, &list);
        fill_namespaces(&mut overview.secrets, &list);
        fill_namespaces(&mut overview.config_maps, &list);

        Ok(Some(overview))
    }
}

fn nested<T: ResourceItem>(
    fields: &mut serde_json::Map<String, Value>,
    key: &str,
    kind: ResourceKind,
) -> Result<Option<ResourceSnapshot<T>>, FetchError> {
    match fields.remove(key) {
        Some(inner) => ResourceSnapshot::from_envelope(kind, inner),
        None => Ok(None),
    }
}

fn fill_namespaces<T>(snapshot: &mut Option<ResourceSnapshot<T>>, list: &[String]) {
    if let Some(snapshot) = snapshot {
        if snapshot.namespace_list.is_empty() {
            snapshot.namespace_list = list.to_vec();
        }
    }
}
