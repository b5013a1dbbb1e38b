//! Identity of the portfolio owner. Accounts listed by Projects and linked from About.

/// Owner accounts and contact address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerProfile {
    /// Display name.
    pub name: &'static str,
    /// GitHub username.
    pub github_user: &'static str,
    /// GitLab username.
    pub gitlab_user: &'static str,
    /// Contact email.
    pub email: &'static str,
}

/// The portfolio owner. Edit here to retarget the whole site.
pub const OWNER: OwnerProfile = OwnerProfile {
    name: "Portfolio Owner",
    github_user: "octocat",
    gitlab_user: "octocat",
    email: "hello@example.com",
};

impl OwnerProfile {
    /// Public GitHub profile page.
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github_user)
    }

    /// Public GitLab profile page.
    pub fn gitlab_url(&self) -> String {
        format!("https://gitlab.com/{}", self.gitlab_user)
    }

    /// `mailto:` link for the contact address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RepositoryQuery;

    #[test]
    fn repository_query_defaults_to_owner_accounts() {
        let query = RepositoryQuery::default();
        assert_eq!(query.github_user, OWNER.github_user);
        assert_eq!(query.gitlab_user, OWNER.gitlab_user);
    }

    #[test]
    fn profile_links_point_at_owner_accounts() {
        let owner = OwnerProfile {
            name: "Jane",
            github_user: "jane-gh",
            gitlab_user: "jane-gl",
            email: "jane@example.org",
        };
        assert_eq!(owner.github_url(), "https://github.com/jane-gh");
        assert_eq!(owner.gitlab_url(), "https://gitlab.com/jane-gl");
        assert_eq!(owner.mailto(), "mailto:jane@example.org");
    }
}
