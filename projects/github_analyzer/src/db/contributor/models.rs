use diesel::prelude::*;
use serde::Serialize;
use crate::db::schema::contributors;
use crate::db::repo::models::Repo;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(belongs_to(Repo))]
#[diesel(table_name = contributors)]
pub struct Contributor {
    pub id: i32,
    pub repo_id: i32,
    pub login: String,
    pub contributions: i32,
    pub location: String,
    pub company: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contributors)]
pub struct NewContributor {
    pub repo_id: i32,
    pub login: String,
    pub contributions: i32,
    pub location: String,
    pub company: String,
}
