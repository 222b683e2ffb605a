//! Repository host (GitHub) provider implementation.
//!
//! Lists the public repositories of a user.
//!
//! Configuration: `GitHubApi:BaseUrl`, `GitHubApi:ApiKey` (optional; sent as
//! a bearer token when non-empty).

mod api;

pub use api::RepositoryHostClient;
