use error_stack::Report;
use google_sheets4::oauth2::ServiceAccountKey;
use tracing::{debug, instrument};

use crate::config::SpreadsheetConfig;
use crate::domain::CredentialSource;
use crate::ports::{CredentialError, CredentialProvider};

use super::{EnvCredentialProvider, FileCredentialProvider};

/// Ordered fallback chain over credential providers. Providers are
/// tried in sequence; the first one that produces a key wins.
pub struct CredentialResolver {
    providers: Vec<Box<dyn CredentialProvider>>,
}

/// Every possible end state of one resolution pass. `Missing` is not an
/// error: the caller serves placeholder data instead. `Failed` carries
/// the label of the provider that blew up, so the page can say where to
/// look.
pub enum ResolveOutcome {
    Resolved {
        key: ServiceAccountKey,
        source: CredentialSource,
    },
    Missing,
    Failed {
        source: CredentialSource,
        report: Report<CredentialError>,
    },
}

impl CredentialResolver {
    pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        CredentialResolver { providers }
    }

    /// The production chain: environment variable first, local key file
    /// second.
    pub fn standard(config: &SpreadsheetConfig) -> Self {
        Self::new(vec![
            Box::new(EnvCredentialProvider::new()),
            Box::new(FileCredentialProvider::new(
                config.credentials_file.as_ref(),
            )),
        ])
    }

    #[instrument(skip(self))]
    pub fn resolve(&self) -> ResolveOutcome {
        for provider in &self.providers {
            match provider.provide() {
                Ok(Some(key)) => {
                    debug!(source = %provider.source(), "credentials resolved");
                    return ResolveOutcome::Resolved {
                        key,
                        source: provider.source(),
                    };
                }
                Ok(None) => continue,
                Err(report) => {
                    return ResolveOutcome::Failed {
                        source: provider.source(),
                        report,
                    }
                }
            }
        }
        ResolveOutcome::Missing
    }
}

#[cfg(test)]
mod tests {
    use error_stack::report;

    use super::super::{parse_service_account_json, tests::SAMPLE_KEY_JSON};
    use super::*;

    enum Scripted {
        Produce(CredentialSource),
        Absent(CredentialSource),
        Fail(CredentialSource),
    }

    impl CredentialProvider for Scripted {
        fn source(&self) -> CredentialSource {
            match self {
                Scripted::Produce(source) | Scripted::Absent(source) | Scripted::Fail(source) => {
                    *source
                }
            }
        }

        fn provide(&self) -> error_stack::Result<Option<ServiceAccountKey>, CredentialError> {
            match self {
                Scripted::Produce(source) => {
                    parse_service_account_json(SAMPLE_KEY_JSON, *source).map(Some)
                }
                Scripted::Absent(_) => Ok(None),
                Scripted::Fail(source) => Err(report!(CredentialError::Malformed(*source))),
            }
        }
    }

    #[test]
    fn first_producing_provider_wins() {
        let resolver = CredentialResolver::new(vec![
            Box::new(Scripted::Produce(CredentialSource::EnvVar)),
            Box::new(Scripted::Produce(CredentialSource::LocalFile)),
        ]);
        match resolver.resolve() {
            ResolveOutcome::Resolved { source, .. } => {
                assert_eq!(source, CredentialSource::EnvVar);
            }
            _ => panic!("expected resolution"),
        }
    }

    #[test]
    fn absent_sources_fall_through() {
        let resolver = CredentialResolver::new(vec![
            Box::new(Scripted::Absent(CredentialSource::EnvVar)),
            Box::new(Scripted::Produce(CredentialSource::LocalFile)),
        ]);
        match resolver.resolve() {
            ResolveOutcome::Resolved { source, .. } => {
                assert_eq!(source, CredentialSource::LocalFile);
            }
            _ => panic!("expected resolution from the second provider"),
        }
    }

    #[test]
    fn exhausted_chain_is_missing_not_an_error() {
        let resolver = CredentialResolver::new(vec![
            Box::new(Scripted::Absent(CredentialSource::EnvVar)),
            Box::new(Scripted::Absent(CredentialSource::LocalFile)),
        ]);
        assert!(matches!(resolver.resolve(), ResolveOutcome::Missing));
    }

    #[test]
    fn a_failing_provider_stops_the_chain() {
        let resolver = CredentialResolver::new(vec![
            Box::new(Scripted::Fail(CredentialSource::EnvVar)),
            Box::new(Scripted::Produce(CredentialSource::LocalFile)),
        ]);
        match resolver.resolve() {
            ResolveOutcome::Failed { source, .. } => {
                assert_eq!(source, CredentialSource::EnvVar);
            }
            _ => panic!("expected the malformed env blob to surface"),
        }
    }

    #[test]
    fn empty_chain_is_missing() {
        let resolver = CredentialResolver::new(Vec::new());
        assert!(matches!(resolver.resolve(), ResolveOutcome::Missing));
    }
}
