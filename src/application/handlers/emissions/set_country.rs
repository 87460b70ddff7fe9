//! SetCountryHandler - Command handler switching and persisting the active country.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::CalculationService;
use crate::domain::foundation::{CountryCode, DomainError};
use crate::ports::PreferenceStore;

#[derive(Debug, Clone)]
pub struct SetCountryCommand {
    pub country: CountryCode,
}

pub struct SetCountryHandler {
    service: Arc<RwLock<CalculationService>>,
    preferences: Arc<dyn PreferenceStore>,
}

impl SetCountryHandler {
    pub fn new(service: Arc<RwLock<CalculationService>>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self { service, preferences }
    }

    /// Switches the country, then records it as the user's preference.
    pub async fn handle(&self, cmd: SetCountryCommand) -> Result<CountryCode, DomainError> {
        self.service.write().await.set_country(cmd.country.clone())?;
        self.preferences.save_country(&cmd.country).await?;
        Ok(cmd.country)
    }
}
