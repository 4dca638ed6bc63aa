pub mod donation;
pub mod progress;
pub mod summary;

pub use donation::{parse_donation, parse_donations, top_donations};
pub use progress::progress_percent;
pub use summary::{CredentialSource, Summary};
