//! Repository and edit-link settings in `themeConfig`.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! repo = "vuejs/vuepress"          # GitHub shorthand or a full URL
//! repoLabel = "View source"        # inferred from the host when omitted
//! docsRepo = "vuejs/vuepress"      # docs live in another repository
//! docsDir = "docs"                 # docs are not at the repository root
//! docsBranch = "master"
//! editLinks = true
//! editLinkText = "Help us improve this page!"
//! ```

use crate::config::types::ConfigDiagnostics;
use crate::config::util::is_absolute_url;
use crate::config::value::Fields;
use serde::Serialize;

/// Branch used for edit links when `docsBranch` is not set.
pub const DEFAULT_DOCS_BRANCH: &str = "master";

/// Edit link text used when `editLinkText` is not set.
pub const DEFAULT_EDIT_LINK_TEXT: &str = "Edit this page";

/// Hosts recognized when inferring the repository link label.
const REPO_HOSTS: &[(&str, &str)] = &[
    ("github", "GitHub"),
    ("gitlab", "GitLab"),
    ("bitbucket", "Bitbucket"),
];

pub(crate) const REPO_FIELDS: &[&str] = &[
    "repo",
    "repoLabel",
    "docsRepo",
    "docsDir",
    "docsBranch",
    "editLinks",
    "editLinkText",
];

/// Where the site's source lives and how "edit this page" links are built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_repo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_dir: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_branch: Option<String>,

    pub edit_links: bool,

    /// Only meaningful when `edit_links` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link_text: Option<String>,
}

impl RepoConfig {
    /// Read and type-check one repository field of `themeConfig`.
    pub(crate) fn parse_field(
        &mut self,
        key: &str,
        fields: &Fields<'_>,
        diag: &mut ConfigDiagnostics,
    ) {
        match key {
            "repo" => self.repo = fields.string(key, diag),
            "repoLabel" => self.repo_label = fields.string(key, diag),
            "docsRepo" => self.docs_repo = fields.string(key, diag),
            "docsDir" => self.docs_dir = fields.string(key, diag),
            "docsBranch" => self.docs_branch = fields.string(key, diag),
            "editLinks" => self.edit_links = fields.boolean(key, diag).unwrap_or(false),
            "editLinkText" => self.edit_link_text = fields.string(key, diag),
            _ => {}
        }
    }

    /// Cross-field checks, run once every field has been read.
    pub(crate) fn check(&self, fields: &Fields<'_>, diag: &mut ConfigDiagnostics) {
        if self.edit_link_text.is_some() && !self.edit_links {
            diag.warn(
                fields.child_path("editLinkText"),
                "has no effect while `editLinks` is false",
            );
        }
    }

    /// Browsable repository URL.
    ///
    /// `owner/name` is expanded to a GitHub URL; full URLs are kept.
    pub fn repo_url(&self) -> Option<String> {
        self.repo.as_deref().map(expand_repo)
    }

    /// Label for the repository link in the navbar.
    ///
    /// Uses `repoLabel` when set, otherwise guesses from the host:
    /// `GitHub`, `GitLab`, `Bitbucket`, or `Source` for anything else.
    pub fn repo_label(&self) -> Option<String> {
        if let Some(label) = &self.repo_label {
            return Some(label.clone());
        }
        let url = self.repo_url()?;
        let host = url::Url::parse(&url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
            .unwrap_or_default();
        let label = REPO_HOSTS
            .iter()
            .find(|(needle, _)| host.contains(*needle))
            .map_or("Source", |(_, label)| *label);
        Some(label.to_string())
    }

    #[inline]
    pub fn edit_link_text(&self) -> &str {
        self.edit_link_text
            .as_deref()
            .unwrap_or(DEFAULT_EDIT_LINK_TEXT)
    }

    #[inline]
    pub fn docs_branch(&self) -> &str {
        self.docs_branch.as_deref().unwrap_or(DEFAULT_DOCS_BRANCH)
    }

    /// "Edit this page" URL for a document path relative to `docsDir`.
    ///
    /// Returns `None` when edit links are disabled or no repository is set.
    ///
    /// ```text
    /// github:    <repo>/edit/<branch>/<dir>/<path>
    /// gitlab:    <repo>/-/edit/<branch>/<dir>/<path>
    /// bitbucket: <repo>/src/<branch>/<dir>/<path>?mode=edit&spa=0&at=<branch>&fileviewer=file-view-default
    /// ```
    pub fn edit_link(&self, relative_path: &str) -> Option<String> {
        if !self.edit_links {
            return None;
        }
        let docs_repo = self.docs_repo.as_deref().or(self.repo.as_deref())?;
        let branch = self.docs_branch();
        let dir = match self.docs_dir.as_deref().map(|d| d.trim_matches('/')) {
            Some(d) if !d.is_empty() => format!("{d}/"),
            _ => String::new(),
        };
        let path = relative_path.trim_start_matches('/');

        let repo_lower = docs_repo.to_ascii_lowercase();
        let link = if repo_lower.contains("bitbucket.org") {
            let base = docs_repo.trim_end_matches('/');
            format!(
                "{base}/src/{branch}/{dir}{path}?mode=edit&spa=0&at={branch}&fileviewer=file-view-default"
            )
        } else if repo_lower.contains("gitlab.com") {
            let base = docs_repo.trim_end_matches('/');
            format!("{base}/-/edit/{branch}/{dir}{path}")
        } else {
            let base = expand_repo(docs_repo);
            let base = base.trim_end_matches('/');
            format!("{base}/edit/{branch}/{dir}{path}")
        };
        Some(link)
    }
}

fn expand_repo(repo: &str) -> String {
    if is_absolute_url(repo) {
        repo.to_string()
    } else {
        format!("https://github.com/{}", repo.trim_matches('/'))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::FieldPath;
    use serde_json::{Value, json};

    fn parse(raw: Value) -> (RepoConfig, ConfigDiagnostics) {
        let mut diag = ConfigDiagnostics::new();
        let path = FieldPath::root().key("themeConfig");
        let fields = Fields::new(&raw, path, &mut diag).unwrap();
        let mut config = RepoConfig::default();
        for (key, _) in fields.entries() {
            config.parse_field(key, &fields, &mut diag);
        }
        config.check(&fields, &mut diag);
        (config, diag)
    }

    fn repo(repo: &str) -> RepoConfig {
        RepoConfig {
            repo: Some(repo.into()),
            ..RepoConfig::default()
        }
    }

    #[test]
    fn test_repo_url_shorthand() {
        assert_eq!(
            repo("vuejs/vuepress").repo_url().as_deref(),
            Some("https://github.com/vuejs/vuepress")
        );
        assert_eq!(
            repo("https://gitlab.com/foo/bar").repo_url().as_deref(),
            Some("https://gitlab.com/foo/bar")
        );
        assert_eq!(RepoConfig::default().repo_url(), None);
    }

    #[test]
    fn test_repo_label_inference() {
        assert_eq!(repo("vuejs/vuepress").repo_label().as_deref(), Some("GitHub"));
        assert_eq!(
            repo("https://GitLab.com/foo/bar").repo_label().as_deref(),
            Some("GitLab")
        );
        assert_eq!(
            repo("https://bitbucket.org/foo/bar").repo_label().as_deref(),
            Some("Bitbucket")
        );
        assert_eq!(
            repo("https://git.example.com/foo").repo_label().as_deref(),
            Some("Source")
        );
    }

    #[test]
    fn test_repo_label_explicit() {
        let config = RepoConfig {
            repo_label: Some("查看源码".into()),
            ..repo("vuejs/vuepress")
        };
        assert_eq!(config.repo_label().as_deref(), Some("查看源码"));
    }

    #[test]
    fn test_edit_link_disabled() {
        assert_eq!(repo("vuejs/vuepress").edit_link("README.md"), None);
        let no_repo = RepoConfig {
            edit_links: true,
            ..RepoConfig::default()
        };
        assert_eq!(no_repo.edit_link("README.md"), None);
    }

    #[test]
    fn test_edit_link_github() {
        let config = RepoConfig {
            docs_repo: Some("vuejs/vuepress".into()),
            docs_dir: Some("docs/".into()),
            edit_links: true,
            ..repo("vuejs/vuepress")
        };
        assert_eq!(
            config.edit_link("foo/one.md").as_deref(),
            Some("https://github.com/vuejs/vuepress/edit/master/docs/foo/one.md")
        );
    }

    #[test]
    fn test_edit_link_gitlab_and_bitbucket() {
        let gitlab = RepoConfig {
            edit_links: true,
            docs_branch: Some("main".into()),
            ..repo("https://gitlab.com/foo/bar/")
        };
        assert_eq!(
            gitlab.edit_link("README.md").as_deref(),
            Some("https://gitlab.com/foo/bar/-/edit/main/README.md")
        );

        let bitbucket = RepoConfig {
            edit_links: true,
            docs_dir: Some("docs".into()),
            ..repo("https://bitbucket.org/foo/bar")
        };
        assert_eq!(
            bitbucket.edit_link("README.md").as_deref(),
            Some(
                "https://bitbucket.org/foo/bar/src/master/docs/README.md?mode=edit&spa=0&at=master&fileviewer=file-view-default"
            )
        );
    }

    #[test]
    fn test_edit_link_text_default() {
        assert_eq!(RepoConfig::default().edit_link_text(), DEFAULT_EDIT_LINK_TEXT);
    }

    #[test]
    fn test_parse_type_checks() {
        let (config, diag) =
            parse(json!({ "repo": "vuejs/vuepress", "editLinks": "true", "docsDir": 1 }));
        assert_eq!(config.repo.as_deref(), Some("vuejs/vuepress"));
        let paths: Vec<_> = diag.errors().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["themeConfig.editLinks", "themeConfig.docsDir"]);
    }

    #[test]
    fn test_edit_link_text_without_edit_links_warns() {
        let (_, diag) = parse(json!({ "editLinkText": "Edit" }));
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings()[0].path.as_str(), "themeConfig.editLinkText");
    }
}
