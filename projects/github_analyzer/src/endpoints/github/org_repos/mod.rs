pub mod fetch_and_save;
pub mod read_repos;
pub mod read_contributors;
pub mod read_formatted;
pub mod read_top_contributors;
pub mod read_top_repos;
