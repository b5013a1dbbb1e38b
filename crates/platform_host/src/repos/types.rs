//! Repository listing models shared by the Projects app and host adapters.
//!
//! GitHub and GitLab describe repositories with different field names. Both payloads are decoded
//! into their wire structs here and normalised into [`Repository`], so adapters only move bytes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::OWNER;

/// GitHub account listed by default.
pub const DEFAULT_GITHUB_USER: &str = OWNER.github_user;
/// GitLab account listed by default.
pub const DEFAULT_GITLAB_USER: &str = OWNER.gitlab_user;
/// Page size requested from each provider.
pub const DEFAULT_REPOSITORIES_PER_PAGE: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Code hosting provider a repository was listed from.
pub enum RepositorySource {
    /// `api.github.com`
    GitHub,
    /// `gitlab.com`
    GitLab,
}

impl RepositorySource {
    /// Both providers, in merge tie-break order.
    pub const ALL: [Self; 2] = [Self::GitHub, Self::GitLab];

    /// Human-readable provider label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::GitLab => "GitLab",
        }
    }
}

impl std::fmt::Display for RepositorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Which accounts to list and how many entries to request from each provider.
pub struct RepositoryQuery {
    /// GitHub username.
    pub github_user: String,
    /// GitLab username.
    pub gitlab_user: String,
    /// `per_page` query parameter sent to both providers.
    pub per_page: u32,
}

impl Default for RepositoryQuery {
    fn default() -> Self {
        Self {
            github_user: DEFAULT_GITHUB_USER.to_string(),
            gitlab_user: DEFAULT_GITLAB_USER.to_string(),
            per_page: DEFAULT_REPOSITORIES_PER_PAGE,
        }
    }
}

impl RepositoryQuery {
    /// REST endpoint listing the configured user's repositories on `source`.
    pub fn endpoint(&self, source: RepositorySource) -> String {
        match source {
            RepositorySource::GitHub => format!(
                "https://api.github.com/users/{}/repos?sort=updated&per_page={}",
                self.github_user, self.per_page
            ),
            RepositorySource::GitLab => format!(
                "https://gitlab.com/api/v4/users/{}/projects?order_by=updated_at&per_page={}",
                self.gitlab_user, self.per_page
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Provider-neutral repository entry.
pub struct Repository {
    /// Provider-assigned numeric id; unique only together with `source`.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// Optional description. Empty descriptions are normalised to `None`.
    pub description: Option<String>,
    /// Browser URL of the repository.
    pub url: String,
    /// Star count.
    pub stars: u32,
    /// Fork count.
    pub forks: u32,
    /// Primary language, when the provider reports one.
    pub language: Option<String>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Provider the entry was listed from.
    pub source: RepositorySource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Subset of a GitHub `GET /users/{user}/repos` entry.
pub struct GitHubRepository {
    /// Repository id.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Browser URL.
    pub html_url: String,
    /// Star count.
    #[serde(default)]
    pub stargazers_count: u32,
    /// Fork count.
    #[serde(default)]
    pub forks_count: u32,
    /// Primary language.
    pub language: Option<String>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<GitHubRepository> for Repository {
    fn from(raw: GitHubRepository) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            description: non_empty(raw.description),
            url: raw.html_url,
            stars: raw.stargazers_count,
            forks: raw.forks_count,
            language: non_empty(raw.language),
            updated_at: raw.updated_at,
            source: RepositorySource::GitHub,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Subset of a GitLab `GET /users/{user}/projects` entry.
pub struct GitLabProject {
    /// Project id.
    pub id: u64,
    /// Project name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Browser URL.
    pub web_url: String,
    /// Star count.
    #[serde(default)]
    pub star_count: u32,
    /// Fork count.
    #[serde(default)]
    pub forks_count: u32,
    /// Last activity timestamp, always present.
    pub last_activity_at: DateTime<Utc>,
    /// Last update timestamp, only returned by newer API versions.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<GitLabProject> for Repository {
    fn from(raw: GitLabProject) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            description: non_empty(raw.description),
            url: raw.web_url,
            stars: raw.star_count,
            forks: raw.forks_count,
            // the projects endpoint does not report languages
            language: None,
            updated_at: raw.updated_at.unwrap_or(raw.last_activity_at),
            source: RepositorySource::GitLab,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure listing repositories from one provider.
pub enum RepositoryError {
    /// The request never produced a response.
    #[error("{provider} request failed: {message}")]
    Network {
        /// Provider.
        provider: RepositorySource,
        /// Transport error text.
        message: String,
    },
    /// The provider answered with a non-success status.
    #[error("{provider} responded with HTTP {status}")]
    Status {
        /// Provider.
        provider: RepositorySource,
        /// HTTP status code.
        status: u16,
    },
    /// The body was not the expected JSON array.
    #[error("{provider} payload could not be decoded: {message}")]
    Decode {
        /// Provider.
        provider: RepositorySource,
        /// Decoder error text.
        message: String,
    },
}

impl RepositoryError {
    /// Provider the error belongs to.
    pub fn provider(&self) -> RepositorySource {
        match self {
            Self::Network { provider, .. }
            | Self::Status { provider, .. }
            | Self::Decode { provider, .. } => *provider,
        }
    }
}

/// Decodes a provider response body into normalised repositories.
///
/// # Errors
///
/// Returns [`RepositoryError::Decode`] when `body` is not a JSON array of the provider's shape.
pub fn parse_repositories(
    source: RepositorySource,
    body: &str,
) -> Result<Vec<Repository>, RepositoryError> {
    let decode = |e: serde_json::Error| RepositoryError::Decode {
        provider: source,
        message: e.to_string(),
    };
    match source {
        RepositorySource::GitHub => {
            let raw: Vec<GitHubRepository> = serde_json::from_str(body).map_err(decode)?;
            Ok(raw.into_iter().map(Repository::from).collect())
        }
        RepositorySource::GitLab => {
            let raw: Vec<GitLabProject> = serde_json::from_str(body).map_err(decode)?;
            Ok(raw.into_iter().map(Repository::from).collect())
        }
    }
}

/// Merges listings and sorts them by `updated_at`, newest first.
///
/// Equal timestamps fall back to provider order and then name so the output is deterministic.
pub fn merge_repositories(
    listings: impl IntoIterator<Item = Vec<Repository>>,
) -> Vec<Repository> {
    let mut merged: Vec<Repository> = listings.into_iter().flatten().collect();
    merged.sort_by(|a, b| {
        b.updated_at
            .cmp(&a.updated_at)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.name.cmp(&b.name))
    });
    merged
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GITHUB_BODY: &str = r#"[
        {
            "id": 11,
            "name": "phone-shell",
            "description": "Portfolio shell",
            "html_url": "https://github.com/octocat/phone-shell",
            "stargazers_count": 4,
            "forks_count": 1,
            "language": "Rust",
            "updated_at": "2024-03-01T10:00:00Z",
            "private": false
        }
    ]"#;

    const GITLAB_BODY: &str = r#"[
        {
            "id": 22,
            "name": "dotfiles",
            "description": "",
            "web_url": "https://gitlab.com/octocat/dotfiles",
            "star_count": 2,
            "forks_count": 0,
            "last_activity_at": "2024-03-02T08:30:00.123Z"
        }
    ]"#;

    #[test]
    fn github_payload_is_normalised() {
        let repos = parse_repositories(RepositorySource::GitHub, GITHUB_BODY).expect("parse");
        assert_eq!(repos.len(), 1);
        let repo = &repos[0];
        assert_eq!(repo.name, "phone-shell");
        assert_eq!(repo.url, "https://github.com/octocat/phone-shell");
        assert_eq!(repo.stars, 4);
        assert_eq!(repo.language.as_deref(), Some("Rust"));
        assert_eq!(repo.source, RepositorySource::GitHub);
    }

    #[test]
    fn gitlab_payload_uses_last_activity_and_drops_empty_description() {
        let repos = parse_repositories(RepositorySource::GitLab, GITLAB_BODY).expect("parse");
        let repo = &repos[0];
        assert_eq!(repo.description, None);
        assert_eq!(repo.language, None);
        assert_eq!(repo.updated_at.to_rfc3339(), "2024-03-02T08:30:00.123+00:00");
        assert_eq!(repo.source, RepositorySource::GitLab);
    }

    #[test]
    fn gitlab_prefers_updated_at_when_present() {
        let body = r#"[{"id":1,"name":"a","description":null,"web_url":"u","last_activity_at":"2024-01-01T00:00:00Z","updated_at":"2024-02-01T00:00:00Z"}]"#;
        let repos = parse_repositories(RepositorySource::GitLab, body).expect("parse");
        assert_eq!(repos[0].updated_at.to_rfc3339(), "2024-02-01T00:00:00+00:00");
    }

    #[test]
    fn error_payload_is_a_decode_error() {
        let err = parse_repositories(RepositorySource::GitHub, r#"{"message":"Not Found"}"#)
            .expect_err("object is not a listing");
        assert_eq!(err.provider(), RepositorySource::GitHub);
        assert!(matches!(err, RepositoryError::Decode { .. }));
    }

    #[test]
    fn merge_places_newer_gitlab_repo_before_older_github_repo() {
        let github = parse_repositories(RepositorySource::GitHub, GITHUB_BODY).expect("github");
        let gitlab = parse_repositories(RepositorySource::GitLab, GITLAB_BODY).expect("gitlab");

        let merged = merge_repositories([github, gitlab]);
        let names: Vec<_> = merged.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["dotfiles", "phone-shell"]);
    }

    #[test]
    fn merge_breaks_timestamp_ties_by_source_then_name() {
        let at = "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().expect("ts");
        let entry = |name: &str, source| Repository {
            id: 1,
            name: name.to_string(),
            description: None,
            url: String::new(),
            stars: 0,
            forks: 0,
            language: None,
            updated_at: at,
            source,
        };
        let merged = merge_repositories([
            vec![entry("zeta", RepositorySource::GitLab)],
            vec![
                entry("beta", RepositorySource::GitHub),
                entry("alpha", RepositorySource::GitHub),
            ],
        ]);
        let order: Vec<_> = merged.iter().map(|r| (r.source, r.name.as_str())).collect();
        assert_eq!(
            order,
            vec![
                (RepositorySource::GitHub, "alpha"),
                (RepositorySource::GitHub, "beta"),
                (RepositorySource::GitLab, "zeta"),
            ]
        );
    }

    #[test]
    fn endpoints_carry_user_and_page_size() {
        let query = RepositoryQuery {
            github_user: "gh".into(),
            gitlab_user: "gl".into(),
            per_page: 5,
        };
        assert_eq!(
            query.endpoint(RepositorySource::GitHub),
            "https://api.github.com/users/gh/repos?sort=updated&per_page=5"
        );
        assert_eq!(
            query.endpoint(RepositorySource::GitLab),
            "https://gitlab.com/api/v4/users/gl/projects?order_by=updated_at&per_page=5"
        );
    }
}
