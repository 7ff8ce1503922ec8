use std::time::Duration;

// ---------------------------------------------------------------------------
// RepoConfig
// ---------------------------------------------------------------------------

pub const DEFAULT_OWNER: &str = "Qortal";
pub const DEFAULT_REPO: &str = "qapp-templates";
pub const DEFAULT_REFERENCE: &str = "HEAD";
pub const GITHUB_API: &str = "https://api.github.com";
pub const GITHUB_CODELOAD: &str = "https://codeload.github.com";

/// Coordinates of the remote repository holding one template per top-level
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    pub owner: String,
    pub repo: String,
    /// Branch, tag or commit the archive is taken from.
    pub reference: String,
    pub api_base: String,
    pub archive_base: String,
    pub user_agent: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            reference: DEFAULT_REFERENCE.to_string(),
            api_base: GITHUB_API.to_string(),
            archive_base: GITHUB_CODELOAD.to_string(),
            user_agent: format!("create-qapp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl RepoConfig {
    /// Point both endpoints at `base`. Used to aim the client at a mock server.
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        self.api_base = base.clone();
        self.archive_base = base;
        self
    }

    /// Root-contents listing endpoint.
    pub fn contents_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }

    /// Gzipped tarball of the whole tree at `reference`.
    pub fn archive_url(&self) -> String {
        format!(
            "{}/{}/{}/tar.gz/{}",
            self.archive_base.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.reference
        )
    }

    /// Blocking client with no request timeout; a stalled transfer blocks
    /// until the user interrupts it.
    pub(crate) fn http_client(&self) -> reqwest::Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(None::<Duration>)
            .build()
    }
}

// ---------------------------------------------------------------------------
// ScaffoldConfig
// ---------------------------------------------------------------------------

pub const MANIFEST_FILE: &str = "package.json";
pub const PACKAGE_MANAGER: &str = "npm";
pub const EDITOR: &str = "code";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub repo: RepoConfig,
    /// Manifest path relative to the project directory.
    pub manifest_file: String,
    pub package_manager: String,
    pub editor: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            repo: RepoConfig::default(),
            manifest_file: MANIFEST_FILE.to_string(),
            package_manager: PACKAGE_MANAGER.to_string(),
            editor: EDITOR.to_string(),
        }
    }
}
