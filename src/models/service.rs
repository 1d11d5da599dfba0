use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{nullable, PortInfo, ResourceItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceInfo {
    pub name: String,
    pub namespace: String,
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(deserialize_with = "nullable")]
    pub selector: BTreeMap<String, String>,
    #[serde(rename = "clusterip", deserialize_with = "nullable")]
    pub cluster_ips: Vec<String>,
    #[serde(rename = "externalip", deserialize_with = "nullable")]
    pub external_ips: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub ports: Vec<PortInfo>,
    pub age: String,
}

fn or_none(values: &[String]) -> String {
    if values.is_empty() {
        "<none>".to_string()
    } else {
        values.join(",")
    }
}

impl ResourceItem for ServiceInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }

    fn columns(&self) -> Vec<(&'static str, String)> {
        let ports: Vec<String> = self
            .ports
            .iter()
            .map(|p| format!("{}:{}/{}", p.port, p.target_port, p.protocol))
            .collect();
        let selector: Vec<String> = self
            .selector
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();

        vec![
            ("NAME", self.name.clone()),
            ("TYPE", self.service_type.clone()),
            ("CLUSTER-IP", or_none(&self.cluster_ips)),
            ("EXTERNAL-IP", or_none(&self.external_ips)),
            ("PORTS", or_none(&ports)),
            ("SELECTOR", or_none(&selector)),
            ("AGE", self.age.clone()),
        ]
    }
}
