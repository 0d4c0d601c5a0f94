//! GitHub organization analyzer service
//!
//! - REST API endpoints in `endpoints/`
//! - PostgreSQL models and queries in `db/`
//! - Fetch/rank/enrich/persist pipeline in `service/`
//! - Requires GITHUB_TOKEN and DATABASE_URL env vars

pub mod endpoints;
pub mod db;
pub mod service;
