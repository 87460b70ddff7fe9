//! Site workspace command handlers.

mod create_site;
mod delete_site;
mod load_workspace;
mod switch_site;
mod update_site_data;
mod update_site_details;

pub use create_site::{CreateSiteCommand, CreateSiteHandler};
pub use delete_site::{DeleteSiteCommand, DeleteSiteHandler};
pub use load_workspace::LoadWorkspaceHandler;
pub use switch_site::{SwitchSiteCommand, SwitchSiteHandler};
pub use update_site_data::{UpdateSiteDataCommand, UpdateSiteDataHandler};
pub use update_site_details::{UpdateSiteDetailsCommand, UpdateSiteDetailsHandler};
