pub mod org_repos;
