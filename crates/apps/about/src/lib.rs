//! Built-in About app: static profile, skills, and contact links.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use phone_app_contract::AppServices;
use platform_host::{OwnerProfile, OWNER};
use system_ui::prelude::*;

const HEADLINE: &str = "Software engineer building fast, typed, browser-first tools.";
const BIO: &str = "I like small binaries, strong types, and interfaces that feel like real \
                   devices. This phone is a Rust and WebAssembly rewrite of my portfolio.";
const SKILLS: [&str; 6] = ["Rust", "WebAssembly", "Leptos", "TypeScript", "Linux", "CI/CD"];

fn profile_links(owner: &OwnerProfile) -> [(&'static str, String); 3] {
    [
        ("GitHub", owner.github_url()),
        ("GitLab", owner.gitlab_url()),
        ("Email", owner.mailto()),
    ]
}

#[component]
/// About app screen.
pub fn AboutApp(
    /// Injected shell services.
    services: AppServices,
) -> impl IntoView {
    let on_back = Callback::new(move |_| services.close());

    view! {
        <AppScreen title="About" app="about" on_back=on_back>
            <header class="app-about-hero">
                <Icon icon=IconName::About size=IconSize::Xl />
                <h2>{OWNER.name}</h2>
                <p>{HEADLINE}</p>
            </header>
            <p class="app-about-bio">{BIO}</p>
            <ul class="app-about-skills" aria-label="Skills">
                {SKILLS.into_iter().map(|skill| view! { <li>{skill}</li> }).collect_view()}
            </ul>
            <ul class="app-about-links" aria-label="Links">
                {profile_links(&OWNER)
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <ListRow title=label>
                                <a href=href target="_blank" rel="noopener noreferrer">
                                    "Open"
                                </a>
                            </ListRow>
                        }
                    })
                    .collect_view()}
            </ul>
        </AppScreen>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_follow_the_owner_profile() {
        let links = profile_links(&OWNER);
        assert_eq!(links[0].1, format!("https://github.com/{}", OWNER.github_user));
        assert_eq!(links[1].1, format!("https://gitlab.com/{}", OWNER.gitlab_user));
        assert_eq!(links[2].1, format!("mailto:{}", OWNER.email));
    }
}
