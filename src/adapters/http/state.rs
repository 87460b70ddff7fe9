//! Shared application state for the HTTP routers.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::handlers::{
    ApplyLedgerChangeHandler, CalculateSiteReportHandler, CreateSiteHandler, DeleteSiteHandler,
    GetFinancialSummaryHandler, LoadWorkspaceHandler, RecordCashTransactionHandler, SetCountryHandler,
    SwitchSiteHandler, UpdateSiteDataHandler, UpdateSiteDetailsHandler,
};
use crate::application::CalculationService;
use crate::ports::{PreferenceStore, SiteRepository};

/// State cloned into every request.
///
/// The calculation service sits behind a single-writer lock: reports hold the
/// read guard for a whole pass, country switches and table replacement take
/// the write guard.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RwLock<CalculationService>>,
    pub sites: Arc<dyn SiteRepository>,
    pub preferences: Arc<dyn PreferenceStore>,
}

impl AppState {
    pub fn new(
        service: CalculationService,
        sites: Arc<dyn SiteRepository>,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            service: Arc::new(RwLock::new(service)),
            sites,
            preferences,
        }
    }

    pub fn site_report_handler(&self) -> CalculateSiteReportHandler {
        CalculateSiteReportHandler::new(self.sites.clone(), self.service.clone())
    }

    pub fn set_country_handler(&self) -> SetCountryHandler {
        SetCountryHandler::new(self.service.clone(), self.preferences.clone())
    }

    pub fn load_workspace_handler(&self) -> LoadWorkspaceHandler {
        LoadWorkspaceHandler::new(self.sites.clone(), self.preferences.clone())
    }

    pub fn create_site_handler(&self) -> CreateSiteHandler {
        CreateSiteHandler::new(self.sites.clone(), self.preferences.clone())
    }

    pub fn delete_site_handler(&self) -> DeleteSiteHandler {
        DeleteSiteHandler::new(self.sites.clone(), self.preferences.clone())
    }

    pub fn switch_site_handler(&self) -> SwitchSiteHandler {
        SwitchSiteHandler::new(self.sites.clone(), self.preferences.clone())
    }

    pub fn update_site_data_handler(&self) -> UpdateSiteDataHandler {
        UpdateSiteDataHandler::new(self.sites.clone())
    }

    pub fn update_site_details_handler(&self) -> UpdateSiteDetailsHandler {
        UpdateSiteDetailsHandler::new(self.sites.clone())
    }

    pub fn record_cash_handler(&self) -> RecordCashTransactionHandler {
        RecordCashTransactionHandler::new(self.sites.clone())
    }

    pub fn ledger_change_handler(&self) -> ApplyLedgerChangeHandler {
        ApplyLedgerChangeHandler::new(self.sites.clone())
    }

    pub fn financial_summary_handler(&self) -> GetFinancialSummaryHandler {
        GetFinancialSummaryHandler::new(self.sites.clone())
    }
}
