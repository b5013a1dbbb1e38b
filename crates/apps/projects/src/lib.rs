//! Built-in Projects app listing public GitHub and GitLab repositories.
//!
//! Both providers are queried concurrently through the injected
//! [`platform_host::RepositoryService`]. A failing provider degrades to an empty contribution and
//! a logged error; the listing from the other provider still renders.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{cell::Cell, rc::Rc};

use chrono::{DateTime, Utc};
use leptos::*;
use phone_app_contract::AppServices;
use platform_host::{
    fetch_all_repositories_with, Repository, RepositoryError, RepositoryListing, RepositorySource,
};
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SourceFilter {
    #[default]
    All,
    Only(RepositorySource),
}

impl SourceFilter {
    const ALL: [Self; 3] = [
        Self::All,
        Self::Only(RepositorySource::GitHub),
        Self::Only(RepositorySource::GitLab),
    ];

    fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(source) => source.label(),
        }
    }

    fn matches(self, repository: &Repository) -> bool {
        match self {
            Self::All => true,
            Self::Only(source) => repository.source == source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadState {
    Loading,
    Loaded(RepositoryListing),
}

fn visible_repositories(listing: &RepositoryListing, filter: SourceFilter) -> Vec<Repository> {
    listing
        .repositories
        .iter()
        .filter(|repository| filter.matches(repository))
        .cloned()
        .collect()
}

fn unavailable_note(errors: &[RepositoryError]) -> Option<String> {
    let providers: Vec<&str> = errors.iter().map(|err| err.provider().label()).collect();
    match providers.as_slice() {
        [] => None,
        [provider] => Some(format!("{provider} is unavailable right now.")),
        _ => Some("Repositories are unavailable right now.".to_string()),
    }
}

fn updated_label(updated_at: DateTime<Utc>) -> String {
    format!("Updated {}", updated_at.format("%b %-d, %Y"))
}

#[component]
fn RepositoryRow(repository: Repository) -> impl IntoView {
    let subtitle = repository
        .description
        .clone()
        .unwrap_or_else(|| updated_label(repository.updated_at));
    view! {
        <ListRow title=repository.name.clone() subtitle=subtitle leading_icon=IconName::Projects>
            <span class="app-projects-meta">
                <span data-ui-slot="source" data-source=repository.source.label()>
                    {repository.source.label()}
                </span>
                {repository
                    .language
                    .clone()
                    .map(|language| view! { <span data-ui-slot="language">{language}</span> })}
                <span data-ui-slot="stars" aria-label="Stars">
                    <Icon icon=IconName::Star size=IconSize::Sm />
                    {repository.stars}
                </span>
                <span data-ui-slot="forks" aria-label="Forks">
                    <Icon icon=IconName::Fork size=IconSize::Sm />
                    {repository.forks}
                </span>
                <a href=repository.url.clone() target="_blank" rel="noopener noreferrer">
                    "View"
                </a>
            </span>
        </ListRow>
    }
}

#[component]
/// Projects app screen.
pub fn ProjectsApp(
    /// Injected shell services.
    services: AppServices,
) -> impl IntoView {
    let load_state = create_rw_signal(LoadState::Loading);
    let filter = create_rw_signal(SourceFilter::default());

    // Fetches have no cancellation; results arriving after unmount are dropped.
    let mounted = Rc::new(Cell::new(true));
    {
        let mounted = mounted.clone();
        on_cleanup(move || mounted.set(false));
    }

    let repositories = services.repositories();
    let query = services.repository_query().clone();
    spawn_local(async move {
        let listing = fetch_all_repositories_with(repositories.as_ref(), &query).await;
        for err in &listing.errors {
            logging::error!("projects fetch failed: {err}");
        }
        if mounted.get() {
            load_state.set(LoadState::Loaded(listing));
        }
    });

    let visible = Signal::derive(move || {
        load_state.with(|state| match state {
            LoadState::Loading => Vec::new(),
            LoadState::Loaded(listing) => visible_repositories(listing, filter.get()),
        })
    });
    let note = Signal::derive(move || {
        load_state.with(|state| match state {
            LoadState::Loading => None,
            LoadState::Loaded(listing) => unavailable_note(&listing.errors),
        })
    });
    let on_back = Callback::new(move |_| services.close());

    view! {
        <AppScreen title="Projects" app="projects" on_back=on_back>
            <div class="app-projects-filters" role="group" aria-label="Source filter">
                {SourceFilter::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <Button
                                variant=ButtonVariant::Quiet
                                layout_class="app-projects-filter"
                                aria_label=format!("Show {}", option.label())
                                on_click=Callback::new(move |_| filter.set(option))
                            >
                                <span data-selected=move || (filter.get() == option).to_string()>
                                    {option.label()}
                                </span>
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || note.get().map(|note| view! { <p class="app-projects-note" role="status">{note}</p> })}
            {move || {
                if load_state.with(|state| matches!(state, LoadState::Loading)) {
                    view! { <EmptyState message="Loading repositories..." /> }.into_view()
                } else if visible.with(Vec::is_empty) {
                    view! { <EmptyState message="No repositories to show." /> }.into_view()
                } else {
                    view! {
                        <ul class="app-projects-list">
                            <For
                                each=move || visible.get()
                                key=|repository| (repository.source, repository.id)
                                children=|repository| view! { <RepositoryRow repository=repository /> }
                            />
                        </ul>
                    }
                    .into_view()
                }
            }}
        </AppScreen>
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn repository(name: &str, source: RepositorySource, day: u32) -> Repository {
        Repository {
            id: u64::from(day),
            name: name.to_string(),
            description: None,
            url: format!("https://example.com/{name}"),
            stars: 0,
            forks: 0,
            language: None,
            updated_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
            source,
        }
    }

    #[test]
    fn filter_keeps_listing_order() {
        let listing = RepositoryListing {
            repositories: vec![
                repository("newest", RepositorySource::GitLab, 9),
                repository("middle", RepositorySource::GitHub, 5),
                repository("oldest", RepositorySource::GitLab, 1),
            ],
            errors: Vec::new(),
        };

        let names = |filter| {
            visible_repositories(&listing, filter)
                .into_iter()
                .map(|repository| repository.name)
                .collect::<Vec<_>>()
        };
        assert_eq!(names(SourceFilter::All), vec!["newest", "middle", "oldest"]);
        assert_eq!(
            names(SourceFilter::Only(RepositorySource::GitLab)),
            vec!["newest", "oldest"]
        );
        assert_eq!(
            names(SourceFilter::Only(RepositorySource::GitHub)),
            vec!["middle"]
        );
    }

    #[test]
    fn unavailable_note_names_the_failed_provider() {
        assert_eq!(unavailable_note(&[]), None);
        let gitlab_down = RepositoryError::Status {
            provider: RepositorySource::GitLab,
            status: 503,
        };
        assert_eq!(
            unavailable_note(std::slice::from_ref(&gitlab_down)).as_deref(),
            Some("GitLab is unavailable right now.")
        );
        let github_down = RepositoryError::Network {
            provider: RepositorySource::GitHub,
            message: "offline".to_string(),
        };
        assert_eq!(
            unavailable_note(&[github_down, gitlab_down]).as_deref(),
            Some("Repositories are unavailable right now.")
        );
    }

    #[test]
    fn updated_label_uses_short_month_format() {
        let updated = Utc.with_ymd_and_hms(2024, 3, 5, 8, 30, 0).unwrap();
        assert_eq!(updated_label(updated), "Updated Mar 5, 2024");
    }
}
