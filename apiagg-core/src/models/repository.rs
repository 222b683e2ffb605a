//! Repository host types.

use serde::{Deserialize, Serialize};

/// A repository as listed by the repository host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Numeric repository id.
    pub id: u64,

    /// Short name, e.g. `Repo1`.
    pub name: String,

    /// Owner-qualified name, e.g. `testuser/Repo1`.
    #[serde(alias = "fullName")]
    pub full_name: String,

    /// Browser URL.
    #[serde(alias = "htmlUrl")]
    pub html_url: String,

    /// Whether the repository is private.
    #[serde(default, alias = "isPrivate")]
    pub private: bool,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Primary language.
    #[serde(default)]
    pub language: Option<String>,

    /// Star count.
    #[serde(default, alias = "stargazersCount")]
    pub stargazers_count: u64,

    /// Fork count.
    #[serde(default, alias = "forksCount")]
    pub forks_count: u64,
}
