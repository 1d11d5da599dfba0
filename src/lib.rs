//! kubedeck: view-model vrstva dashboardu Kubernetes clusteru nad
//! aggregation API backendem.

pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod nav;
pub mod page;
pub mod utils;

pub use backend::{Backend, BackendClient};
pub use config::Config;
pub use error::FetchError;
pub use page::{FetchState, Page};
