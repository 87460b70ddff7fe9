//! Site aggregate: one building or event with its activity data and ledger.

use serde::{Deserialize, Serialize};

use super::WorkspaceError;
use crate::domain::emissions::{ActivityCategory, ActivityRow, CategoryRows};
use crate::domain::finance::FinancialLedger;
use crate::domain::foundation::SiteId;

/// Name given to a site renamed to blank.
pub const UNNAMED_SITE: &str = "Unnamed Site";

/// Company name used when none has been entered.
pub const DEFAULT_COMPANY_NAME: &str = "My Company";

fn default_company_name() -> String {
    DEFAULT_COMPANY_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    id: SiteId,
    name: String,
    #[serde(default = "default_company_name")]
    company_name: String,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    data: CategoryRows,
    #[serde(flatten)]
    ledger: FinancialLedger,
}

impl Site {
    /// Creates an empty site. The name is trimmed and must not be blank.
    pub fn new(name: impl AsRef<str>) -> Result<Self, WorkspaceError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(WorkspaceError::EmptySiteName);
        }
        Ok(Self::named(name.to_string()))
    }

    pub(super) fn named(name: String) -> Self {
        Self {
            id: SiteId::new(),
            name,
            company_name: default_company_name(),
            notes: String::new(),
            data: CategoryRows::new(),
            ledger: FinancialLedger::new(),
        }
    }

    pub fn id(&self) -> SiteId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn data(&self) -> &CategoryRows {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut CategoryRows {
        &mut self.data
    }

    pub fn ledger(&self) -> &FinancialLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut FinancialLedger {
        &mut self.ledger
    }

    /// Renames the site; a blank name becomes [`UNNAMED_SITE`].
    pub fn rename(&mut self, name: impl AsRef<str>) {
        let name = name.as_ref().trim();
        self.name = if name.is_empty() {
            UNNAMED_SITE.to_string()
        } else {
            name.to_string()
        };
    }

    pub fn set_company_name(&mut self, company_name: impl Into<String>) {
        self.company_name = company_name.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Appends a default row (current year, zero quantities).
    pub fn add_row(&mut self, category: ActivityCategory) -> &mut ActivityRow {
        self.data.add_row(category)
    }

    pub fn remove_row(&mut self, category: ActivityCategory, index: usize) -> Option<ActivityRow> {
        self.data.remove_row(category, index)
    }

    pub fn row_mut(&mut self, category: ActivityCategory, index: usize) -> Option<&mut ActivityRow> {
        self.data.row_mut(category, index)
    }
}
