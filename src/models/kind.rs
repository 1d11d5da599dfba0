use std::fmt;

/// Druh resource, který backend vystavuje na vlastním endpointu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ResourceKind {
    Overview,
    Nodes,
    Pods,
    #[value(alias = "svc")]
    Services,
    Ingress,
    Secrets,
    #[value(alias = "configmap")]
    ConfigMaps,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        Self::Overview,
        Self::Nodes,
        Self::Pods,
        Self::Services,
        Self::Ingress,
        Self::Secrets,
        Self::ConfigMaps,
    ];

    /// Cesta endpointu relativně k base URL backendu
    pub fn path(self) -> &'static str {
        match self {
            Self::Overview => "/overview",
            Self::Nodes => "/nodes",
            Self::Pods => "/pods",
            Self::Services => "/svc",
            Self::Ingress => "/ingress",
            Self::Secrets => "/secrets",
            Self::ConfigMaps => "/configmap",
        }
    }

    /// Klíč obálky v JSON odpovědi; overview je plochý objekt
    pub fn envelope_key(self) -> Option<&'static str> {
        match self {
            Self::Overview => None,
            Self::Nodes => Some("nodes"),
            Self::Pods => Some("pods"),
            Self::Services => Some("services"),
            Self::Ingress => Some("ingress"),
            Self::Secrets => Some("secrets"),
            Self::ConfigMaps => Some("configmap"),
        }
    }

    /// Klíč seznamu položek uvnitř obálky
    pub fn items_key(self) -> Option<&'static str> {
        match self {
            Self::Overview => None,
            Self::ConfigMaps => Some("confs"),
            other => other.envelope_key(),
        }
    }

    pub fn is_namespaced(self) -> bool {
        !matches!(self, Self::Overview | Self::Nodes)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Nodes => "Nodes",
            Self::Pods => "Pods",
            Self::Services => "Services",
            Self::Ingress => "Ingress",
            Self::Secrets => "Secrets",
            Self::ConfigMaps => "Config Maps",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = ResourceKind::ALL.iter().map(|k| k.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), ResourceKind::ALL.len());
    }

    #[test]
    fn test_config_map_keys() {
        assert_eq!(ResourceKind::ConfigMaps.path(), "/configmap");
        assert_eq!(ResourceKind::ConfigMaps.envelope_key(), Some("configmap"));
        assert_eq!(ResourceKind::ConfigMaps.items_key(), Some("confs"));
        assert_eq!(ResourceKind::Services.path(), "/svc");
        assert_eq!(ResourceKind::Overview.items_key(), None);
    }
}
