//! Repository listing service contract and in-memory adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use super::types::{
    merge_repositories, Repository, RepositoryError, RepositoryQuery, RepositorySource,
};

/// Object-safe boxed future used by [`RepositoryService`] async methods.
pub type RepositoryFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service listing a user's repositories on one provider.
pub trait RepositoryService {
    /// Lists repositories for the user `query` names on `source`.
    fn list_repositories<'a>(
        &'a self,
        source: RepositorySource,
        query: &'a RepositoryQuery,
    ) -> RepositoryFuture<'a, Result<Vec<Repository>, RepositoryError>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory repository service with canned per-provider responses.
pub struct MemoryRepositoryService {
    responses: Rc<RefCell<HashMap<RepositorySource, Result<Vec<Repository>, RepositoryError>>>>,
}

impl MemoryRepositoryService {
    /// Sets the response returned for `source`.
    pub fn set_response(
        &self,
        source: RepositorySource,
        response: Result<Vec<Repository>, RepositoryError>,
    ) {
        self.responses.borrow_mut().insert(source, response);
    }
}

impl RepositoryService for MemoryRepositoryService {
    fn list_repositories<'a>(
        &'a self,
        source: RepositorySource,
        _query: &'a RepositoryQuery,
    ) -> RepositoryFuture<'a, Result<Vec<Repository>, RepositoryError>> {
        Box::pin(async move {
            self.responses
                .borrow()
                .get(&source)
                .cloned()
                .unwrap_or_else(|| Ok(Vec::new()))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Merged listing across providers plus the providers that failed.
pub struct RepositoryListing {
    /// Repositories from every provider that answered, newest first.
    pub repositories: Vec<Repository>,
    /// One entry per provider that failed; its repositories are absent from the listing.
    pub errors: Vec<RepositoryError>,
}

/// Lists both providers concurrently and merges the results by update time.
///
/// A failing provider contributes no entries and is reported in [`RepositoryListing::errors`];
/// there is no retry.
pub async fn fetch_all_repositories_with<S: RepositoryService + ?Sized>(
    service: &S,
    query: &RepositoryQuery,
) -> RepositoryListing {
    let (github, gitlab) = futures::join!(
        service.list_repositories(RepositorySource::GitHub, query),
        service.list_repositories(RepositorySource::GitLab, query),
    );

    let mut listings = Vec::with_capacity(2);
    let mut errors = Vec::new();
    for result in [github, gitlab] {
        match result {
            Ok(repos) => listings.push(repos),
            Err(err) => errors.push(err),
        }
    }

    RepositoryListing {
        repositories: merge_repositories(listings),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use futures::executor::block_on;

    use super::*;

    fn repo(name: &str, source: RepositorySource, updated_at: &str) -> Repository {
        Repository {
            id: 7,
            name: name.to_string(),
            description: None,
            url: format!("https://example.invalid/{name}"),
            stars: 0,
            forks: 0,
            language: None,
            updated_at: updated_at.parse::<DateTime<Utc>>().expect("timestamp"),
            source,
        }
    }

    #[test]
    fn listing_merges_both_providers_newest_first() {
        let service = MemoryRepositoryService::default();
        service.set_response(
            RepositorySource::GitHub,
            Ok(vec![repo("older", RepositorySource::GitHub, "2024-01-01T00:00:00Z")]),
        );
        service.set_response(
            RepositorySource::GitLab,
            Ok(vec![repo("newer", RepositorySource::GitLab, "2024-06-01T00:00:00Z")]),
        );

        let listing = block_on(fetch_all_repositories_with(
            &service,
            &RepositoryQuery::default(),
        ));
        assert!(listing.errors.is_empty());
        let names: Vec<_> = listing.repositories.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["newer", "older"]);
    }

    #[test]
    fn failing_provider_degrades_to_the_other_listing() {
        let service = MemoryRepositoryService::default();
        service.set_response(
            RepositorySource::GitHub,
            Err(RepositoryError::Status {
                provider: RepositorySource::GitHub,
                status: 403,
            }),
        );
        service.set_response(
            RepositorySource::GitLab,
            Ok(vec![repo("kept", RepositorySource::GitLab, "2024-06-01T00:00:00Z")]),
        );

        let listing = block_on(fetch_all_repositories_with(
            &service,
            &RepositoryQuery::default(),
        ));
        assert_eq!(listing.repositories.len(), 1);
        assert_eq!(listing.errors.len(), 1);
        assert_eq!(listing.errors[0].provider(), RepositorySource::GitHub);
    }

    #[test]
    fn both_providers_failing_yields_empty_listing() {
        let service = MemoryRepositoryService::default();
        for provider in RepositorySource::ALL {
            service.set_response(
                provider,
                Err(RepositoryError::Network {
                    provider,
                    message: "offline".into(),
                }),
            );
        }

        let listing = block_on(fetch_all_repositories_with(
            &service,
            &RepositoryQuery::default(),
        ));
        assert!(listing.repositories.is_empty());
        assert_eq!(listing.errors.len(), 2);
    }
}
