mod api;
mod client;

pub use client::BackendClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;
use crate::models::ResourceKind;

/// Aggregation API backendu, konzumované jako neprůhledné HTTP API
#[async_trait]
pub trait Backend: Send + Sync {
    /// Jeden GET na endpoint daného druhu, vrací syrové JSON tělo
    async fn fetch(&self, kind: ResourceKind) -> Result<Value, FetchError>;

    /// Invalidace cache backendu; vrací se až po jejím znovunaplnění
    async fn invalidate(&self) -> Result<(), FetchError>;
}
