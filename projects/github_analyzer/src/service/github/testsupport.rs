use std::collections::HashMap;

use chrono::Utc;
use interfaces_github_org_repos::index::{GitHubApi, GitHubApiResult, GitHubRequestError};
use reqwest::StatusCode;

use crate::db::contributor::models::{Contributor, NewContributor};
use crate::db::repo::models::{NewRepo, Repo};
use super::store::{RepoStore, StoreError};

/// Canned-response GitHub client. Unknown repositories fall back to an empty
/// listing and unknown logins to an empty profile object.
#[derive(Default)]
pub struct StubApi {
    pub repos_body: String,
    pub contributors_by_repo: HashMap<String, String>,
    pub profiles_by_login: HashMap<String, String>,
}

fn ok_result(body: String) -> GitHubApiResult {
    GitHubApiResult {
        body,
        status: StatusCode::OK,
    }
}

impl GitHubApi for StubApi {
    async fn list_org_repos(&self, _per_page: u32) -> Result<GitHubApiResult, GitHubRequestError> {
        Ok(ok_result(self.repos_body.clone()))
    }

    async fn list_repo_contributors(
        &self,
        repo_name: &str,
        _per_page: u32,
    ) -> Result<GitHubApiResult, GitHubRequestError> {
        Ok(ok_result(
            self.contributors_by_repo
                .get(repo_name)
                .cloned()
                .unwrap_or_else(|| "[]".to_owned()),
        ))
    }

    async fn get_user_profile(
        &self,
        login: &str,
    ) -> Result<GitHubApiResult, GitHubRequestError> {
        Ok(ok_result(
            self.profiles_by_login
                .get(login)
                .cloned()
                .unwrap_or_else(|| "{}".to_owned()),
        ))
    }
}

/// Vec-backed store with auto-assigned ids, standing in for Postgres.
#[derive(Default)]
pub struct MemStore {
    repos: Vec<Repo>,
    contributors: Vec<Contributor>,
}

impl RepoStore for MemStore {
    fn insert_repo(&mut self, new: NewRepo) -> Result<Repo, StoreError> {
        let repo = Repo {
            id: self.repos.len() as i32 + 1,
            full_name: new.full_name,
            description: new.description,
            stars: new.stars,
            forks: new.forks,
            url: new.url,
            watchers_count: new.watchers_count,
            language: new.language,
            open_issues_count: new.open_issues_count,
            license: new.license,
            open_issues: new.open_issues,
            created_at: Utc::now().naive_utc(),
        };
        self.repos.push(repo.clone());
        Ok(repo)
    }

    fn insert_contributors(
        &mut self,
        new: Vec<NewContributor>,
    ) -> Result<Vec<Contributor>, StoreError> {
        let mut inserted = Vec::new();

        for row in new {
            let contributor = Contributor {
                id: self.contributors.len() as i32 + 1,
                repo_id: row.repo_id,
                login: row.login,
                contributions: row.contributions,
                location: row.location,
                company: row.company,
            };
            self.contributors.push(contributor.clone());
            inserted.push(contributor);
        }

        Ok(inserted)
    }

    fn all_repos(&mut self) -> Result<Vec<Repo>, StoreError> {
        Ok(self.repos.clone())
    }

    fn all_contributors(&mut self) -> Result<Vec<Contributor>, StoreError> {
        Ok(self.contributors.clone())
    }

    fn repo_contributors(&mut self, repo_id: i32) -> Result<Vec<Contributor>, StoreError> {
        Ok(self
            .contributors
            .iter()
            .filter(|c| c.repo_id == repo_id)
            .cloned()
            .collect())
    }
}
