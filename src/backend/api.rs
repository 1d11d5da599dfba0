use async_trait::async_trait;
use serde_json::Value;

use super::{Backend, BackendClient};
use crate::error::FetchError;
use crate::models::ResourceKind;

const REFRESH_PATH: &str = "/refresh";

#[async_trait]
impl Backend for BackendClient {
    async fn fetch(&self, kind: ResourceKind) -> Result<Value, FetchError> {
        self.get(kind.path()).await
    }

    async fn invalidate(&self) -> Result<(), FetchError> {
        // Tělo odpovědi klienta nezajímá
        self.get_ok(REFRESH_PATH).await
    }
}
