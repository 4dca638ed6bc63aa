use std::fmt::{self, Formatter};

use super::donation::top_donations;

/// Which step of the credential fallback chain produced (or failed to
/// produce) the service account key. Rendered on the page for
/// observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    EnvVar,
    LocalFile,
    None,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            CredentialSource::EnvVar => "environment variable",
            CredentialSource::LocalFile => "local file",
            CredentialSource::None => "none",
        };
        write!(f, "{label}")
    }
}

/// Placeholder figures served while no credentials are configured, so
/// the page is demonstrably working before deployment is finished.
pub const FALLBACK_TOTAL: f64 = 450.0;
pub const FALLBACK_TOP_3: [f64; 3] = [200.0, 150.0, 100.0];

/// Result of one aggregation run. Built fresh per request, handed to the
/// renderer, then discarded; constructors are the only way to build one,
/// which keeps the error/total invariants in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    total: f64,
    top_3: Vec<f64>,
    error: Option<String>,
    source: CredentialSource,
}

impl Summary {
    pub fn success(amounts: &[f64], source: CredentialSource) -> Self {
        Summary {
            total: amounts.iter().sum(),
            top_3: top_donations(amounts, 3),
            error: None,
            source,
        }
    }

    /// The fixed placeholder summary used when the credential chain is
    /// exhausted without finding anything.
    pub fn fallback() -> Self {
        Summary {
            total: FALLBACK_TOTAL,
            top_3: FALLBACK_TOP_3.to_vec(),
            error: Some(
                "no service account credentials configured; showing placeholder data".to_string(),
            ),
            source: CredentialSource::None,
        }
    }

    /// An infrastructure failure somewhere in the pipeline. Totals are
    /// zeroed regardless of how far the run got.
    pub fn failure(message: impl Into<String>, source: CredentialSource) -> Self {
        Summary {
            total: 0.0,
            top_3: Vec::new(),
            error: Some(message.into()),
            source,
        }
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn top_3(&self) -> &[f64] {
        &self.top_3
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_sums_and_ranks() {
        let summary = Summary::success(&[100.0, 50.0, 25.5], CredentialSource::LocalFile);
        assert_eq!(summary.total(), 175.5);
        assert_eq!(summary.top_3(), &[100.0, 50.0, 25.5]);
        assert_eq!(summary.error(), None);
        assert_eq!(summary.source(), CredentialSource::LocalFile);
    }

    #[test]
    fn success_with_no_donations_is_zero() {
        let summary = Summary::success(&[], CredentialSource::EnvVar);
        assert_eq!(summary.total(), 0.0);
        assert!(summary.top_3().is_empty());
        assert_eq!(summary.error(), None);
    }

    #[test]
    fn top_3_is_capped_at_three() {
        let summary = Summary::success(&[1.0, 4.0, 2.0, 8.0, 3.0], CredentialSource::EnvVar);
        assert_eq!(summary.top_3(), &[8.0, 4.0, 3.0]);
    }

    #[test]
    fn fallback_carries_the_fixed_figures() {
        let summary = Summary::fallback();
        assert_eq!(summary.total(), 450.0);
        assert_eq!(summary.top_3(), &[200.0, 150.0, 100.0]);
        assert_eq!(summary.source(), CredentialSource::None);
        assert!(summary.error().is_some());
    }

    #[test]
    fn failure_zeroes_the_aggregates() {
        let summary = Summary::failure("sheet not found", CredentialSource::LocalFile);
        assert_eq!(summary.total(), 0.0);
        assert!(summary.top_3().is_empty());
        assert_eq!(summary.error(), Some("sheet not found"));
        assert_eq!(summary.source(), CredentialSource::LocalFile);
    }

    #[test]
    fn source_labels_match_the_chain() {
        assert_eq!(CredentialSource::EnvVar.to_string(), "environment variable");
        assert_eq!(CredentialSource::LocalFile.to_string(), "local file");
        assert_eq!(CredentialSource::None.to_string(), "none");
    }
}
