use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;
use crate::db::schema::repos;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = repos)]
pub struct Repo {
    pub id: i32,
    pub full_name: String,
    pub description: String,
    pub stars: i32,
    pub forks: i32,
    pub url: String,
    pub watchers_count: i32,
    pub language: String,
    pub open_issues_count: i32,
    pub license: String,
    pub open_issues: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = repos)]
pub struct NewRepo {
    pub full_name: String,
    pub description: String,
    pub stars: i32,
    pub forks: i32,
    pub url: String,
    pub watchers_count: i32,
    pub language: String,
    pub open_issues_count: i32,
    pub license: String,
    pub open_issues: String,
}
