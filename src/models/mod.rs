mod config_map;
mod ingress;
mod kind;
mod node;
mod overview;
mod pod;
mod secret;
mod service;
mod snapshot;

pub use config_map::ConfigMapInfo;
pub use ingress::{IngressBackend, IngressInfo, IngressPath, IngressRule};
pub use kind::ResourceKind;
pub use node::NodeInfo;
pub use overview::{ClusterOverview, NamespaceSummary};
pub use pod::{ContainerInfo, PodInfo, PortInfo};
pub use secret::SecretInfo;
pub use service::ServiceInfo;
pub use snapshot::{IntegrityIssue, ResourceSnapshot, Totals};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fmt::Debug;

/// Jeden záznam ze seznamu v obálce (pod, service, ...)
pub trait ResourceItem: DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Položky s detailním řádkem (pody, ingress)
    const EXPANDABLE: bool = false;

    fn name(&self) -> &str;

    /// `None` pro cluster-scoped resources (nodes)
    fn namespace(&self) -> Option<&str>;

    /// Sloupce pro tabulkový výpis
    fn columns(&self) -> Vec<(&'static str, String)>;

    /// Řádky detailu po rozbalení
    fn details(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Go backend serializuje nil slice/mapu jako `null`
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
