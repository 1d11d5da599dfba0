use serde::{Deserialize, Serialize};

use super::ResourceItem;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretInfo {
    pub name: String,
    pub namespace: String,
    /// Opaque, kubernetes.io/tls, ...
    #[serde(rename = "type")]
    pub secret_type: String,
    #[serde(rename = "datacount")]
    pub data_count: u32,
    pub age: String,
}

impl ResourceItem for SecretInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }

    fn columns(&self) -> Vec<(&'static str, String)> {
        vec![
            ("NAME", self.name.clone()),
            ("TYPE", self.secret_type.clone()),
            ("DATA", self.data_count.to_string()),
            ("AGE", self.age.clone()),
        ]
    }
}
