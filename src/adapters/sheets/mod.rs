pub mod auth;
pub mod donation_sheet;
pub mod flatten_values;
pub mod http_client;

pub use donation_sheet::DonationSheet;
