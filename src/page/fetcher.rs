use std::sync::Arc;

use super::Resource;
use crate::backend::Backend;
use crate::error::FetchError;

/// Jeden GET na endpoint resource, mapování na snapshot. Žádné retry.
#[derive(Clone)]
pub struct ResourceFetcher {
    backend: Arc<dyn Backend>,
}

impl ResourceFetcher {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// `Ok(None)` = backend pro tento druh nemá data
    pub async fn fetch<R: Resource>(&self) -> Result<Option<R::Snapshot>, FetchError> {
        tracing::debug!("Fetching {} from {}", R::KIND, R::KIND.path());

        let body = self.backend.fetch(R::KIND).await?;
        let snapshot = R::parse(body)?;

        match &snapshot {
            Some(snapshot) => {
                for issue in R::integrity_issues(snapshot) {
                    tracing::warn!("{} data integrity: {}", R::KIND, issue);
                }
                tracing::info!("Fetched {}", R::KIND);
            }
            None => tracing::info!("Backend has no {} data", R::KIND),
        }

        Ok(snapshot)
    }
}
