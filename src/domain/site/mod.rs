//! Site domain module.
//!
//! # Module Structure
//!
//! - `aggregate` - Site aggregate holding activity rows and the financial ledger
//! - `workspace` - SiteWorkspace: ordered sites with one active

mod aggregate;
mod errors;
mod workspace;

pub use aggregate::{Site, DEFAULT_COMPANY_NAME, UNNAMED_SITE};
pub use errors::WorkspaceError;
pub use workspace::{SiteWorkspace, DEFAULT_SITE_NAME};
