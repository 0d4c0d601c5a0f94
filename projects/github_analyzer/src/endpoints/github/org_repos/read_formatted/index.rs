use axum::{
	extract::Extension,
	http::StatusCode,
	response::IntoResponse,
};
use thiserror::Error;

use crate::db::PgPool;
use crate::service::github::report::render_repositories_and_contributors;
use crate::service::github::store::{PgStore, StoreError};

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("GetConnectionFromPool: {source}")]
	GetConnectionFromPool {
		#[from]
		source: r2d2::Error,
	},
	#[error("RenderReport: {source}")]
	RenderReport {
		#[from]
		source: StoreError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> axum::response::Response {
		(StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
	}
}

/// Axum handler: GET /api/formatted-info
pub async fn handler(Extension(pool): Extension<PgPool>) -> impl IntoResponse {
	let mut conn = match pool.get() {
		Ok(c) => c,
		Err(source) => return HandlerError::GetConnectionFromPool { source }.into_response(),
	};

	match render_repositories_and_contributors(&mut PgStore::new(&mut conn)) {
		Ok(report) => (StatusCode::OK, report).into_response(),
		Err(source) => HandlerError::RenderReport { source }.into_response(),
	}
}
