use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SiteId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("Site name cannot be empty")]
    EmptySiteName,

    #[error("Site not found: {0}")]
    SiteNotFound(SiteId),

    #[error("Cannot delete the last remaining site")]
    LastSite,
}

impl From<WorkspaceError> for DomainError {
    fn from(err: WorkspaceError) -> Self {
        let code = match &err {
            WorkspaceError::EmptySiteName => ErrorCode::EmptyField,
            WorkspaceError::SiteNotFound(_) => ErrorCode::SiteNotFound,
            WorkspaceError::LastSite => ErrorCode::LastSite,
        };
        DomainError::new(code, err.to_string())
    }
}
