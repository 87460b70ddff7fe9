//! Storage Adapters
//!
//! Implementations of the SiteRepository and PreferenceStore ports.
//!
//! ## Available Adapters
//!
//! - **FileSiteRepository** / **FilePreferenceStore** - JSON files on disk
//! - **InMemorySiteRepository** / **InMemoryPreferenceStore** - In memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSiteRepository, InMemorySiteRepository};
//!
//! // Production: file-based storage
//! let sites = FileSiteRepository::new("./data");
//!
//! // Testing: in-memory storage
//! let sites = InMemorySiteRepository::new();
//! ```

mod file_preference_store;
mod file_site_repository;
mod in_memory_preference_store;
mod in_memory_site_repository;

pub use file_preference_store::FilePreferenceStore;
pub use file_site_repository::FileSiteRepository;
pub use in_memory_preference_store::InMemoryPreferenceStore;
pub use in_memory_site_repository::InMemorySiteRepository;
