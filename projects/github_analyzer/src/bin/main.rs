use std::env;
use std::net::SocketAddr;

use axum::{
	extract::Extension,
	routing::{get, post},
	serve, Router,
};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use interfaces_github_org_repos::index::GitHubRestClient;
use thiserror::Error;
use tracing::info;
use utils_trace::tracing_init;

use projects_github_analyzer::endpoints::github::org_repos::{
	fetch_and_save::index::handler as fetch_and_save_handler,
	read_contributors::index::handler as read_contributors_handler,
	read_formatted::index::handler as read_formatted_handler,
	read_repos::index::handler as read_repos_handler,
	read_top_contributors::index::handler as read_top_contributors_handler,
	read_top_repos::index::handler as read_top_repos_handler,
};

#[derive(Debug, Error)]
pub enum MainError {
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: utils_trace::TracingInitError,
	},
	#[error("MissingDatabaseUrl: {source}")]
	MissingDatabaseUrl {
		#[source]
		source: env::VarError,
	},
	#[error("BuildPool: {source}")]
	BuildPool {
		#[source]
		source: r2d2::Error,
	},
	#[error("TcpListenerBind: {source}")]
	TcpListenerBind {
		#[source]
		source: std::io::Error,
	},
	#[error("Serve: {source}")]
	Serve {
		#[source]
		source: std::io::Error,
	},
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
	tracing_init("info")
		.map_err(|source| MainError::TracingInit { source })?;

	dotenvy::dotenv().ok();

	// A missing token is deliberately not rejected here; it surfaces as an
	// authentication error body on the first GitHub call.
	let token = env::var("GITHUB_TOKEN").unwrap_or_default();
	let client = GitHubRestClient::new(token);

	let database_url = env::var("DATABASE_URL")
		.map_err(|source| MainError::MissingDatabaseUrl { source })?;
	let manager = ConnectionManager::<PgConnection>::new(database_url);
	let pool = Pool::builder()
		.build(manager)
		.map_err(|source| MainError::BuildPool { source })?;

	// Set up the router
	let app = Router::new()
		.route("/api/fetch-and-save", post(fetch_and_save_handler))
		.route("/api/repos", get(read_repos_handler))
		.route("/api/contributors", get(read_contributors_handler))
		.route("/api/formatted-info", get(read_formatted_handler))
		.route("/api/top-contributors", get(read_top_contributors_handler))
		.route("/api/top-repos", get(read_top_repos_handler))
		.layer(Extension(pool))
		.layer(Extension(client));

	let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
	let listener = tokio::net::TcpListener::bind(addr)
		.await
		.map_err(|source| MainError::TcpListenerBind { source })?;

	info!("Server running on addr: {}", addr);

	serve(listener, app)
		.await
		.map_err(|source| MainError::Serve { source })?;

	Ok(())
}
