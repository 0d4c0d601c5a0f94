use axum::{
	extract::Extension,
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use interfaces_github_org_repos::index::GitHubRestClient;
use thiserror::Error;
use tracing::{error, info};

use crate::db::PgPool;
use crate::service::github::fetch_and_save::{
	fetch_and_save_top_repositories, FetchAndSaveTopRepositoriesError,
};
use crate::service::github::store::PgStore;

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("GetConnectionFromPool: {source}")]
	GetConnectionFromPool {
		#[from]
		source: r2d2::Error,
	},
	#[error("FetchAndSaveTopRepositories: {source}")]
	FetchAndSaveTopRepositories {
		#[from]
		source: FetchAndSaveTopRepositoriesError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> axum::response::Response {
		error!("Error fetching and saving repositories: {self}");
		(StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {self}")).into_response()
	}
}

/// Axum handler: POST /api/fetch-and-save
pub async fn handler(
	Extension(pool): Extension<PgPool>,
	Extension(client): Extension<GitHubRestClient>,
) -> impl IntoResponse {
	info!("Received request to fetch and save top repositories");

	let mut conn = match pool.get() {
		Ok(c) => c,
		Err(source) => return HandlerError::GetConnectionFromPool { source }.into_response(),
	};
	let mut store = PgStore::new(&mut conn);

	match fetch_and_save_top_repositories(&client, &mut store).await {
		Ok(repos) => {
			info!("Successfully fetched and saved {} repositories", repos.len());
			(StatusCode::OK, Json(repos)).into_response()
		}
		Err(source) => HandlerError::FetchAndSaveTopRepositories { source }.into_response(),
	}
}
