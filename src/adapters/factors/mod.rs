//! Factor Table Source Adapters
//!
//! - **FileFactorSource** - YAML or JSON factor file
//! - **InMemoryFactorSource** - Fixed tables (testing)

mod file_factor_source;
mod in_memory_factor_source;

pub use file_factor_source::FileFactorSource;
pub use in_memory_factor_source::InMemoryFactorSource;
