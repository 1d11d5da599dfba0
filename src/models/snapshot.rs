use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::{ResourceItem, ResourceKind};
use crate::error::FetchError;

/// Počty per namespace, nebo jedno číslo pro cluster-scoped resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Totals {
    Cluster(u64),
    PerNamespace(BTreeMap<String, u64>),
}

impl Default for Totals {
    fn default() -> Self {
        Self::PerNamespace(BTreeMap::new())
    }
}

impl Totals {
    /// Počet pro namespace; chybějící namespace = 0
    pub fn get(&self, namespace: &str) -> u64 {
        match self {
            Self::Cluster(count) => *count,
            Self::PerNamespace(map) => map.get(namespace).copied().unwrap_or(0),
        }
    }

    pub fn contains(&self, namespace: &str) -> bool {
        match self {
            Self::Cluster(_) => true,
            Self::PerNamespace(map) => map.contains_key(namespace),
        }
    }

    pub fn sum(&self) -> u64 {
        match self {
            Self::Cluster(count) => *count,
            Self::PerNamespace(map) => map.values().sum(),
        }
    }

    pub fn is_cluster_scoped(&self) -> bool {
        matches!(self, Self::Cluster(_))
    }
}

/// Nekonzistence v datech z backendu. Nejsou fatální, jen se logují.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    NamespaceMissingFromTotals { item: String, namespace: String },
    NamespaceMissingFromRunning { item: String, namespace: String },
    NamespaceNotListed { item: String, namespace: String },
    RunningExceedsTotal { namespace: String, total: u64, running: u64 },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamespaceMissingFromTotals { item, namespace } => {
                write!(f, "item '{}' in namespace '{}' has no total count", item, namespace)
            }
            Self::NamespaceMissingFromRunning { item, namespace } => {
                write!(f, "item '{}' in namespace '{}' has no running count", item, namespace)
            }
            Self::NamespaceNotListed { item, namespace } => {
                write!(f, "item '{}' references unknown namespace '{}'", item, namespace)
            }
            Self::RunningExceedsTotal { namespace, total, running } => write!(
                f,
                "namespace '{}' reports {} running out of {} total",
                namespace, running, total
            ),
        }
    }
}

/// Celá (nefiltrovaná) odpověď jednoho resource endpointu
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSnapshot<T> {
    pub kind: ResourceKind,
    pub totals: Totals,
    /// `None` pro resources bez konceptu readiness
    pub running: Option<Totals>,
    pub items: Vec<T>,
    pub namespace_list: Vec<String>,
}

impl<T: ResourceItem> ResourceSnapshot<T> {
    /// Parsuje celé tělo odpovědi `{ "<envelope key>": { ... } }`.
    ///
    /// Vrací `Ok(None)` když backend danou obálku nemá (`null`), tj. "no data".
    pub fn from_body(kind: ResourceKind, body: Value) -> Result<Option<Self>, FetchError> {
        let key = kind.envelope_key().ok_or_else(|| {
            FetchError::InvalidResponse(format!("{} has no resource envelope", kind))
        })?;

        let Value::Object(mut envelope) = body else {
            return Err(FetchError::InvalidResponse(format!(
                "expected JSON object from {}",
                kind.path()
            )));
        };

        match envelope.remove(key) {
            Some(inner) => Self::from_envelope(kind, inner),
            None => Err(FetchError::InvalidResponse(format!(
                "missing `{}` in response from {}",
                key,
                kind.path()
            ))),
        }
    }

    /// Parsuje vnitřek obálky (`total`, `running`, seznam položek, `namespacelist`)
    pub fn from_envelope(kind: ResourceKind, inner: Value) -> Result<Option<Self>, FetchError> {
        let mut fields = match inner {
            Value::Null => return Ok(None),
            Value::Object(fields) => fields,
            other => {
                return Err(FetchError::InvalidResponse(format!(
                    "`{}` envelope is not an object: {}",
                    kind.envelope_key().unwrap_or("overview"),
                    other
                )))
            }
        };

        let totals: Option<Totals> = take(&mut fields, "total")?;
        let running: Option<Totals> = take(&mut fields, "running")?;
        let namespace_list: Option<Vec<String>> = take(&mut fields, "namespacelist")?;
        let items: Option<Vec<T>> = match kind.items_key() {
            Some(items_key) => take(&mut fields, items_key)?,
            None => None,
        };

        Ok(Some(Self {
            kind,
            totals: totals.unwrap_or_default(),
            running,
            items: items.unwrap_or_default(),
            namespace_list: namespace_list.unwrap_or_default(),
        }))
    }

    /// Kontrola invariantů: namespace položky je v `totals` (a v `running`),
    /// je v `namespace_list`, a `running <= total`.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        for item in &self.items {
            let Some(namespace) = item.namespace() else {
                continue;
            };

            if !self.totals.contains(namespace) {
                issues.push(IntegrityIssue::NamespaceMissingFromTotals {
                    item: item.name().to_string(),
                    namespace: namespace.to_string(),
                });
            }
            if let Some(running) = &self.running {
                if !running.contains(namespace) {
                    issues.push(IntegrityIssue::NamespaceMissingFromRunning {
                        item: item.name().to_string(),
                        namespace: namespace.to_string(),
                    });
                }
            }
            if !self.namespace_list.iter().any(|ns| ns == namespace) {
                issues.push(IntegrityIssue::NamespaceNotListed {
                    item: item.name().to_string(),
                    namespace: namespace.to_string(),
                });
            }
        }

        if let Some(running) = &self.running {
            issues.extend(running_exceeds_total(&self.totals, running));
        }

        issues
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn running_exceeds_total(totals: &Totals, running: &Totals) -> Vec<IntegrityIssue> {
    match (totals, running) {
        (Totals::Cluster(total), Totals::Cluster(up)) if up > total => {
            vec![IntegrityIssue::RunningExceedsTotal {
                namespace: String::new(),
                total: *total,
                running: *up,
            }]
        }
        (Totals::PerNamespace(_), Totals::PerNamespace(up)) => up
            .iter()
            .filter(|(ns, count)| **count > totals.get(ns))
            .map(|(ns, count)| IntegrityIssue::RunningExceedsTotal {
                namespace: ns.clone(),
                total: totals.get(ns),
                running: *count,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Vyjme pole z objektu; chybějící pole i `null` je `None`
pub(crate) fn take<T>(fields: &mut Map<String, Value>, key: &str) -> Result<Option<T>, FetchError>
where
    T: for<'de> Deserialize<'de>,
{
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| FetchError::InvalidResponse(format!("field `{}`: {}", key, e))),
    }
}
