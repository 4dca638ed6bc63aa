pub mod aggregator;

pub use aggregator::DonationAggregator;
