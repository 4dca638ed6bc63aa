pub mod credential_provider;
pub mod donation_source;

pub use credential_provider::{CredentialError, CredentialProvider};
pub use donation_source::{DonationSource, DonationSourceError};
