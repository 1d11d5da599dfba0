use serde::{Deserialize, Serialize};

use super::{nullable, ResourceItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngressInfo {
    pub name: String,
    pub namespace: String,
    #[serde(deserialize_with = "nullable")]
    pub hosts: Vec<String>,
    pub address: String,
    pub age: String,
    #[serde(deserialize_with = "nullable")]
    pub rules: Vec<IngressRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngressRule {
    pub host: String,
    #[serde(deserialize_with = "nullable")]
    pub paths: Vec<IngressPath>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngressPath {
    pub path: String,
    #[serde(rename = "pathtype")]
    pub path_type: String,
    pub backend: Option<IngressBackend>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngressBackend {
    pub name: String,
    #[serde(rename = "ports")]
    pub port: u32,
}

impl ResourceItem for IngressInfo {
    const EXPANDABLE: bool = true;

    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }

    fn columns(&self) -> Vec<(&'static str, String)> {
        let hosts = if self.hosts.is_empty() {
            "*".to_string()
        } else {
            self.hosts.join(",")
        };
        vec![
            ("NAME", self.name.clone()),
            ("HOSTS", hosts),
            ("ADDRESS", self.address.clone()),
            ("AGE", self.age.clone()),
        ]
    }

    fn details(&self) -> Vec<String> {
        if self.rules.is_empty() {
            return vec!["No routing rules defined".to_string()];
        }

        let mut lines = vec![format!("Rules ({})", self.rules.len())];
        for rule in &self.rules {
            let host = if rule.host.is_empty() { "*" } else { rule.host.as_str() };
            lines.push(format!("host: {}", host));
            for path in &rule.paths {
                let backend = path
                    .backend
                    .as_ref()
                    .map(|b| format!("{}:{}", b.name, b.port))
                    .unwrap_or_else(|| "<default>".to_string());
                lines.push(format!("  {} ({}) -> {}", path.path, path.path_type, backend));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ingress_rules_details() {
        let ingress: IngressInfo = serde_json::from_value(json!({
            "name": "web",
            "namespace": "default",
            "hosts": ["example.com"],
            "rules": [{
                "host": "example.com",
                "paths": [
                    { "path": "/", "pathtype": "Prefix", "backend": { "name": "web-svc", "ports": 80 } },
                    { "path": "/static", "pathtype": "Exact", "backend": null }
                ]
            }]
        }))
        .unwrap();

        let details = ingress.details();
        assert_eq!(details[0], "Rules (1)");
        assert!(details.contains(&"  / (Prefix) -> web-svc:80".to_string()));
        assert!(details.contains(&"  /static (Exact) -> <default>".to_string()));
    }
}
