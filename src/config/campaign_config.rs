#[derive(serde::Deserialize, Debug, Clone, Copy)]
pub struct CampaignConfig {
    /// Fundraising goal the progress bar is measured against. Must be
    /// positive; validated when the config file is loaded.
    pub target_amount: f64,
}
