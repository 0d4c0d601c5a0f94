use thiserror::Error;
use diesel::prelude::*;
use crate::db::{contributor::models::*, schema::contributors::dsl::*};

#[derive(Debug, Error)]
pub enum InsertContributorsError {
    #[error("InsertContributors: {source}")]
    InsertContributors {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn insert_contributors(
    conn: &mut PgConnection,
    new: &[NewContributor],
) -> Result<Vec<Contributor>, InsertContributorsError> {
    diesel::insert_into(contributors)
        .values(new)
        .get_results(conn)
        .map_err(|source| InsertContributorsError::InsertContributors { source })
}

#[derive(Debug, Error)]
pub enum GetAllContributorsError {
    #[error("GetAllContributors: {source}")]
    GetAllContributors {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn get_all_contributors(
    conn: &mut PgConnection,
) -> Result<Vec<Contributor>, GetAllContributorsError> {
    contributors
        .order(id.asc())
        .load::<Contributor>(conn)
        .map_err(|source| GetAllContributorsError::GetAllContributors { source })
}

#[derive(Debug, Error)]
pub enum GetRepoContributorsError {
    #[error("GetRepoContributors: {source}")]
    GetRepoContributors {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn get_repo_contributors(
    conn: &mut PgConnection,
    repo_id_val: i32,
) -> Result<Vec<Contributor>, GetRepoContributorsError> {
    contributors
        .filter(repo_id.eq(repo_id_val))
        .order(id.asc())
        .load::<Contributor>(conn)
        .map_err(|source| GetRepoContributorsError::GetRepoContributors { source })
}
