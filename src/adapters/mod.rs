//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Site and preference persistence (JSON files, in-memory)
//! - `factors` - Emission factor table sources (YAML/JSON files, in-memory)
//! - `http` - Axum REST API

pub mod factors;
pub mod http;
pub mod storage;

pub use factors::{FileFactorSource, InMemoryFactorSource};
pub use http::{api_router, AppState};
pub use storage::{FilePreferenceStore, FileSiteRepository, InMemoryPreferenceStore, InMemorySiteRepository};
