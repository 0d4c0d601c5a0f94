use diesel::prelude::*;
use crate::db::{repo::models::*, schema::repos::dsl::*};

#[derive(Debug, thiserror::Error)]
pub enum InsertRepoError {
    #[error("InsertRepo: {source}")]
    InsertRepo {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn insert_repo(
    conn: &mut PgConnection,
    new: &NewRepo,
) -> Result<Repo, InsertRepoError> {
    diesel::insert_into(repos)
        .values(new)
        .get_result(conn)
        .map_err(|source| InsertRepoError::InsertRepo { source })
}

#[derive(Debug, thiserror::Error)]
pub enum GetAllReposError {
    #[error("GetAllRepos: {source}")]
    GetAllRepos {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn get_all_repos(conn: &mut PgConnection) -> Result<Vec<Repo>, GetAllReposError> {
    repos
        .order(id.asc())
        .load::<Repo>(conn)
        .map_err(|source| GetAllReposError::GetAllRepos { source })
}
