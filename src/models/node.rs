use serde::{Deserialize, Serialize};

use super::ResourceItem;

/// Node je cluster-scoped, nemá namespace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeInfo {
    pub name: String,
    pub status: String,
    pub roles: String,
    pub age: String,
    pub version: String,
    pub ip: String,
    #[serde(rename = "osimage")]
    pub os_image: String,
    #[serde(rename = "kernelversion")]
    pub kernel_version: String,
    pub runtime: String,
    #[serde(rename = "cpucapacity")]
    pub cpu_capacity: String,
    #[serde(rename = "memorycapacity")]
    pub memory_capacity: String,
    #[serde(rename = "podscapacity")]
    pub pods_capacity: String,
}

impl NodeInfo {
    pub fn is_ready(&self) -> bool {
        self.status == "Ready"
    }
}

impl ResourceItem for NodeInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        None
    }

    fn columns(&self) -> Vec<(&'static str, String)> {
        vec![
            ("NAME", self.name.clone()),
            ("STATUS", self.status.clone()),
            ("ROLES", self.roles.clone()),
            ("AGE", self.age.clone()),
            ("VERSION", self.version.clone()),
            ("INTERNAL-IP", self.ip.clone()),
            ("CPU", self.cpu_capacity.clone()),
            ("MEMORY", self.memory_capacity.clone()),
            ("PODS", self.pods_capacity.clone()),
        ]
    }
}
