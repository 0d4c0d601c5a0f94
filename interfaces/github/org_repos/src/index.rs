use reqwest::{Client, StatusCode};
use thiserror::Error;

const API_BASE_URL: &str = "https://api.github.com";
const ORG: &str = "apache";

/// Raw outcome of one GitHub REST call. The body is returned verbatim even
/// for non-2xx statuses; callers decide what to do with it.
pub struct GitHubApiResult {
    pub body: String,
    pub status: StatusCode,
}

/// The three read-only GitHub calls the analyzer makes. Implemented by
/// [`GitHubRestClient`] against api.github.com and by stub clients in tests.
#[allow(async_fn_in_trait)]
pub trait GitHubApi {
    async fn list_org_repos(&self, per_page: u32) -> Result<GitHubApiResult, GitHubRequestError>;

    async fn list_repo_contributors(
        &self,
        repo_name: &str,
        per_page: u32,
    ) -> Result<GitHubApiResult, GitHubRequestError>;

    async fn get_user_profile(&self, login: &str)
        -> Result<GitHubApiResult, GitHubRequestError>;
}

#[derive(Clone)]
pub struct GitHubRestClient {
    token: String,
    client: Client,
}

impl GitHubRestClient {
    pub fn new(token: String) -> Self {
        Self {
            token,
            client: Client::new(),
        }
    }

    async fn execute_get(&self, url: String) -> Result<GitHubApiResult, GitHubRequestError> {
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", "rust-client")
            .send()
            .await
            .map_err(|source| GitHubRequestError::RequestSend { source })?;

        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|source| GitHubRequestError::ResponseRead { source })?;

        Ok(GitHubApiResult { body, status })
    }
}

impl GitHubApi for GitHubRestClient {
    /// Most recently updated repositories of the fixed organization.
    async fn list_org_repos(&self, per_page: u32) -> Result<GitHubApiResult, GitHubRequestError> {
        self.execute_get(format!(
            "{API_BASE_URL}/orgs/{ORG}/repos?sort=updated&direction=desc&per_page={per_page}"
        ))
        .await
    }

    async fn list_repo_contributors(
        &self,
        repo_name: &str,
        per_page: u32,
    ) -> Result<GitHubApiResult, GitHubRequestError> {
        self.execute_get(format!(
            "{API_BASE_URL}/repos/{ORG}/{repo_name}/contributors?per_page={per_page}"
        ))
        .await
    }

    async fn get_user_profile(
        &self,
        login: &str,
    ) -> Result<GitHubApiResult, GitHubRequestError> {
        self.execute_get(format!("{API_BASE_URL}/users/{login}")).await
    }
}

#[derive(Debug, Error)]
pub enum GitHubRequestError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
