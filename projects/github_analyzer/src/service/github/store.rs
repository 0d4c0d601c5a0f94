use diesel::PgConnection;
use thiserror::Error;

use crate::db::contributor::models::{Contributor, NewContributor};
use crate::db::contributor::queries::{
    get_all_contributors, get_repo_contributors, insert_contributors,
    GetAllContributorsError, GetRepoContributorsError, InsertContributorsError,
};
use crate::db::repo::models::{NewRepo, Repo};
use crate::db::repo::queries::{get_all_repos, insert_repo, GetAllReposError, InsertRepoError};

/// Persistence seam of the pipeline. Identities are assigned on insert;
/// repeated runs append fresh rows, never upsert.
pub trait RepoStore {
    fn insert_repo(&mut self, new: NewRepo) -> Result<Repo, StoreError>;

    fn insert_contributors(
        &mut self,
        new: Vec<NewContributor>,
    ) -> Result<Vec<Contributor>, StoreError>;

    fn all_repos(&mut self) -> Result<Vec<Repo>, StoreError>;

    fn all_contributors(&mut self) -> Result<Vec<Contributor>, StoreError>;

    fn repo_contributors(&mut self, repo_id: i32) -> Result<Vec<Contributor>, StoreError>;
}

pub struct PgStore<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgStore<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

impl RepoStore for PgStore<'_> {
    fn insert_repo(&mut self, new: NewRepo) -> Result<Repo, StoreError> {
        Ok(insert_repo(self.conn, &new)?)
    }

    fn insert_contributors(
        &mut self,
        new: Vec<NewContributor>,
    ) -> Result<Vec<Contributor>, StoreError> {
        if new.is_empty() {
            return Ok(Vec::new());
        }
        Ok(insert_contributors(self.conn, &new)?)
    }

    fn all_repos(&mut self) -> Result<Vec<Repo>, StoreError> {
        Ok(get_all_repos(self.conn)?)
    }

    fn all_contributors(&mut self) -> Result<Vec<Contributor>, StoreError> {
        Ok(get_all_contributors(self.conn)?)
    }

    fn repo_contributors(&mut self, repo_id: i32) -> Result<Vec<Contributor>, StoreError> {
        Ok(get_repo_contributors(self.conn, repo_id)?)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("InsertRepo: {source}")]
    InsertRepo {
        #[from]
        source: InsertRepoError,
    },

    #[error("InsertContributors: {source}")]
    InsertContributors {
        #[from]
        source: InsertContributorsError,
    },

    #[error("GetAllRepos: {source}")]
    GetAllRepos {
        #[from]
        source: GetAllReposError,
    },

    #[error("GetAllContributors: {source}")]
    GetAllContributors {
        #[from]
        source: GetAllContributorsError,
    },

    #[error("GetRepoContributors: {source}")]
    GetRepoContributors {
        #[from]
        source: GetRepoContributorsError,
    },
}
