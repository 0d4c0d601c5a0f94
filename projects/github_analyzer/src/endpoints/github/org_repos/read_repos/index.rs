use axum::{
	extract::Extension,
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use thiserror::Error;

use crate::db::PgPool;
use crate::service::github::store::{PgStore, RepoStore, StoreError};

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("GetConnectionFromPool: {source}")]
	GetConnectionFromPool {
		#[from]
		source: r2d2::Error,
	},
	#[error("GetAllRepos: {source}")]
	GetAllRepos {
		#[from]
		source: StoreError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> axum::response::Response {
		(StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
	}
}

/// Axum handler: GET /api/repos
pub async fn handler(Extension(pool): Extension<PgPool>) -> impl IntoResponse {
	let mut conn = match pool.get() {
		Ok(c) => c,
		Err(source) => return HandlerError::GetConnectionFromPool { source }.into_response(),
	};

	match PgStore::new(&mut conn).all_repos() {
		Ok(repos) => (StatusCode::OK, Json(repos)).into_response(),
		Err(source) => HandlerError::GetAllRepos { source }.into_response(),
	}
}
