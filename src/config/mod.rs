pub mod app_config;
pub mod campaign_config;
pub mod server_config;
pub mod sheets_config;

pub use app_config::{AppConfig, ConfigError};
pub use campaign_config::CampaignConfig;
pub use server_config::ServerConfig;
pub use sheets_config::SpreadsheetConfig;
