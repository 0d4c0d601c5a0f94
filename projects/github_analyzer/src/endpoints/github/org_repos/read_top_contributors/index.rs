use axum::{
	extract::Extension,
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use thiserror::Error;

use crate::db::PgPool;
use crate::service::github::report::top_contributors_by_login;
use crate::service::github::store::{PgStore, StoreError};

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("GetConnectionFromPool: {source}")]
	GetConnectionFromPool {
		#[from]
		source: r2d2::Error,
	},
	#[error("TopContributorsByLogin: {source}")]
	TopContributorsByLogin {
		#[from]
		source: StoreError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> axum::response::Response {
		(StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
	}
}

/// Axum handler: GET /api/top-contributors (legacy)
pub async fn handler(Extension(pool): Extension<PgPool>) -> impl IntoResponse {
	let mut conn = match pool.get() {
		Ok(c) => c,
		Err(source) => return HandlerError::GetConnectionFromPool { source }.into_response(),
	};

	match top_contributors_by_login(&mut PgStore::new(&mut conn)) {
		Ok(map) => (StatusCode::OK, Json(map)).into_response(),
		Err(source) => HandlerError::TopContributorsByLogin { source }.into_response(),
	}
}
