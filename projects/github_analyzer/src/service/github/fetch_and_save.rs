use interfaces_github_org_repos::index::{GitHubApi, GitHubApiResult, GitHubRequestError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::db::contributor::models::{Contributor, NewContributor};
use crate::db::repo::models::{NewRepo, Repo};
use super::normalize::{int_at, text_at};
use super::ranking::top_by_stars;
use super::store::{RepoStore, StoreError};

pub const REPOS_TO_FETCH: u32 = 100;
pub const TOP_REPOS_COUNT: usize = 5;
pub const TOP_CONTRIBUTORS_COUNT: usize = 10;

/// A committed repository together with the contributors committed for it in
/// the same run.
#[derive(Debug, Clone, Serialize)]
pub struct RepoWithContributors {
    #[serde(flatten)]
    pub repo: Repo,
    pub contributors: Vec<Contributor>,
}

#[derive(Debug, Error)]
pub enum FetchAndSaveTopRepositoriesError {
    #[error("FetchFromGitHub: {source}")]
    FetchFromGitHub {
        #[from]
        source: GitHubRequestError,
    },

    #[error("ParseResponseBody: {source}")]
    ParseResponseBody {
        #[from]
        source: serde_json::Error,
    },

    #[error("Store: {source}")]
    Store {
        #[from]
        source: StoreError,
    },
}

/// Fetches the 100 most recently updated org repositories, keeps the top 5
/// by star count, enriches each with its top 10 contributors and their
/// profile details, and commits everything as it goes.
///
/// Commits are interleaved with fetching: each repository row is written
/// before its contributors are fetched, and its contributor rows before the
/// next repository is touched. The first error aborts the remaining work and
/// leaves earlier commits in place.
pub async fn fetch_and_save_top_repositories<A, S>(
    api: &A,
    store: &mut S,
) -> Result<Vec<RepoWithContributors>, FetchAndSaveTopRepositoriesError>
where
    A: GitHubApi,
    S: RepoStore,
{
    info!("Fetching {} recently updated repositories", REPOS_TO_FETCH);

    let GitHubApiResult { body, .. } = api.list_org_repos(REPOS_TO_FETCH).await?;
    let listing: Value = serde_json::from_str(&body)?;
    // A non-array body (an error object passed through by the client) yields
    // no nodes and therefore an empty result set.
    let nodes = listing.as_array().cloned().unwrap_or_default();

    let top = top_by_stars(nodes, TOP_REPOS_COUNT);
    info!("Selected top {} repositories by stargazer count", top.len());

    let mut saved = Vec::new();

    for node in &top {
        let repo_name = text_at(node, &["name"], "unknown");
        info!("Processing repository: {}", repo_name);

        let repo = store.insert_repo(build_repo_row(node, &repo_name))?;

        let rows = fetch_contributor_rows(api, &repo_name, repo.id).await?;
        let contributors = store.insert_contributors(rows)?;
        info!(
            "Saved {} contributors for repository: {}",
            contributors.len(),
            repo_name
        );

        saved.push(RepoWithContributors { repo, contributors });
    }

    info!(
        "Successfully processed and saved {} repositories with their contributors",
        saved.len()
    );
    Ok(saved)
}

fn build_repo_row(node: &Value, repo_name: &str) -> NewRepo {
    NewRepo {
        full_name: text_at(node, &["full_name"], repo_name),
        description: text_at(node, &["description"], "No description"),
        stars: int_at(node, &["stargazers_count"], 0),
        forks: int_at(node, &["forks_count"], 0),
        url: text_at(node, &["html_url"], ""),
        watchers_count: int_at(node, &["watchers_count"], 0),
        language: text_at(node, &["language"], "Not specified"),
        open_issues_count: int_at(node, &["open_issues_count"], 0),
        license: text_at(node, &["license", "name"], "No license"),
        open_issues: format!("Open issues: {}", text_at(node, &["open_issues"], "0")),
    }
}

async fn fetch_contributor_rows<A: GitHubApi>(
    api: &A,
    repo_name: &str,
    owner_id: i32,
) -> Result<Vec<NewContributor>, FetchAndSaveTopRepositoriesError> {
    info!("Fetching contributors for repository: {}", repo_name);

    let GitHubApiResult { body, .. } = api
        .list_repo_contributors(repo_name, TOP_CONTRIBUTORS_COUNT as u32)
        .await?;
    let parsed: Value = serde_json::from_str(&body)?;
    let entries = parsed.as_array().cloned().unwrap_or_default();

    let mut rows = Vec::new();

    // Truncate defensively even if the endpoint returns more than requested.
    for entry in entries.iter().take(TOP_CONTRIBUTORS_COUNT) {
        let login = text_at(entry, &["login"], "unknown");
        let contributions = int_at(entry, &["contributions"], 0);
        info!(
            "Processing contributor: {} with {} contributions",
            login, contributions
        );

        let GitHubApiResult { body, .. } = api.get_user_profile(&login).await?;
        let profile: Value = serde_json::from_str(&body)?;

        rows.push(NewContributor {
            repo_id: owner_id,
            login,
            contributions,
            location: text_at(&profile, &["location"], "Not specified"),
            company: text_at(&profile, &["company"], "Not specified"),
        });
    }

    Ok(rows)
}
