use serde::{Deserialize, Serialize};

use super::{nullable, ResourceItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodInfo {
    pub name: String,
    pub namespace: String,
    pub status: String,
    pub restarts: u32,
    pub age: String,
    pub node: String,
    pub ip: String,
    #[serde(rename = "container", deserialize_with = "nullable")]
    pub containers: Vec<ContainerInfo>,
    #[serde(rename = "readycontainer")]
    pub ready_containers: u32,
    #[serde(rename = "totalcontainer")]
    pub total_containers: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerInfo {
    pub name: String,
    pub image: String,
    #[serde(deserialize_with = "nullable")]
    pub ports: Vec<PortInfo>,
}

/// Port kontejneru nebo service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortInfo {
    pub port: u32,
    #[serde(rename = "targetport")]
    pub target_port: u32,
    pub protocol: String,
}

impl PortInfo {
    pub fn display(&self) -> String {
        format!("{}/{}", self.port, self.protocol)
    }
}

impl PodInfo {
    pub fn is_running(&self) -> bool {
        self.status == "Running"
    }
}

impl ResourceItem for PodInfo {
    const EXPANDABLE: bool = true;

    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }

    fn columns(&self) -> Vec<(&'static str, String)> {
        let node = if self.node.is_empty() { "<none>" } else { self.node.as_str() };
        vec![
            ("NAME", self.name.clone()),
            ("STATUS", self.status.clone()),
            ("RESTARTS", self.restarts.to_string()),
            ("AGE", self.age.clone()),
            ("NODE", node.to_string()),
            ("IP", self.ip.clone()),
            (
                "CONTAINERS",
                format!("{}/{}", self.ready_containers, self.total_containers),
            ),
        ]
    }

    fn details(&self) -> Vec<String> {
        if self.containers.is_empty() {
            return vec!["No container information available".to_string()];
        }

        let mut lines = vec![format!("Containers ({})", self.containers.len())];
        for container in &self.containers {
            lines.push(format!("{}  image: {}", container.name, container.image));
            if !container.ports.is_empty() {
                let ports: Vec<String> = container.ports.iter().map(PortInfo::display).collect();
                lines.push(format!("  ports: {}", ports.join(", ")));
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
    fn test_pod_wire_names() {
        let pod: PodInfo = serde_json::from_value(json!({
            "name": "api-7d9",
            "namespace": "default",
            "status": "Running",
            "restarts": 2,
            "container": [
                { "name": "api", "image": "api:1.2", "ports": [{ "port": 8080, "protocol": "TCP" }] },
                { "name": "sidecar", "image": "envoy:1.30", "ports": null }
            ],
            "readycontainer": 2,
            "totalcontainer": 2
        }))
        .unwrap();

        assert!(pod.is_running());
        assert_eq!(pod.containers.len(), 2);
        assert!(pod.containers[1].ports.is_empty());

        let details = pod.details();
        assert_eq!(details[0], "Containers (2)");
        assert!(details.iter().any(|l| l.contains("8080/TCP")));
    }

    #[test]
    fn test_pod_without_node() {
        let pod = PodInfo {
            name: "pending".to_string(),
            ..Default::default()
        };
        let columns = pod.columns();
        assert!(columns.contains(&("NODE", "<none>".to_string())));
        assert_eq!(pod.details(), vec!["No container information available"]);
    }
}
