use std::collections::HashMap;

use serde::Serialize;

use super::store::{RepoStore, StoreError};

/// Repository projection without contributors, kept for callers of the
/// legacy summary route.
#[derive(Debug, Clone, Serialize)]
pub struct RepoSummary {
    pub name: String,
    pub stars: i32,
    pub description: String,
}

/// Multi-line report over everything committed so far, repositories in
/// storage order, each followed by its contributors in insertion order.
pub fn render_repositories_and_contributors<S: RepoStore>(
    store: &mut S,
) -> Result<String, StoreError> {
    let repos = store.all_repos()?;
    let mut result = String::from("Top Apache Repositories and Contributors:\n\n");

    for repo in &repos {
        result.push_str(&format!("Repository: {} (⭐ {})\n", repo.full_name, repo.stars));
        result.push_str(&format!("Language: {}\n", repo.language));
        result.push_str(&format!("Watchers: {}\n", repo.watchers_count));
        result.push_str(&format!("Open Issues: {}\n", repo.open_issues_count));
        result.push_str(&format!("License: {}\n", repo.license));
        result.push_str("Contributors:\n");

        for contributor in store.repo_contributors(repo.id)? {
            result.push_str(&format!(
                "  - {} - {}, location: {}, company: {}, contributions: {}\n",
                repo.full_name,
                contributor.login,
                contributor.location,
                contributor.company,
                contributor.contributions
            ));
        }

        result.push('\n');
    }

    Ok(result)
}

/// Legacy view: later rows silently overwrite earlier rows with the same
/// login.
pub fn top_contributors_by_login<S: RepoStore>(
    store: &mut S,
) -> Result<HashMap<String, i32>, StoreError> {
    let mut contributions = HashMap::new();

    for contributor in store.all_contributors()? {
        contributions.insert(contributor.login, contributor.contributions);
    }

    Ok(contributions)
}

pub fn top_repositories_summary<S: RepoStore>(
    store: &mut S,
) -> Result<Vec<RepoSummary>, StoreError> {
    Ok(store
        .all_repos()?
        .into_iter()
        .map(|repo| RepoSummary {
            name: repo.full_name,
            stars: repo.stars,
            description: repo.description,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::testsupport::MemStore;
    use crate::db::contributor::models::NewContributor;
    use crate::db::repo::models::NewRepo;

    fn sample_repo(full_name: &str, stars: i32) -> NewRepo {
        NewRepo {
            full_name: full_name.to_owned(),
            description: "A library".to_owned(),
            stars,
            forks: 10,
            url: format!("https://github.com/{full_name}"),
            watchers_count: stars,
            language: "Java".to_owned(),
            open_issues_count: 7,
            license: "Apache License 2.0".to_owned(),
            open_issues: "Open issues: 7".to_owned(),
        }
    }

    fn sample_contributor(repo_id: i32, login: &str, contributions: i32) -> NewContributor {
        NewContributor {
            repo_id,
            login: login.to_owned(),
            contributions,
            location: "Denver, CO, USA".to_owned(),
            company: "Rocket Software".to_owned(),
        }
    }

    #[test]
    fn renders_repositories_with_their_contributors() {
        let mut store = MemStore::default();
        let repo = store.insert_repo(sample_repo("apache/commons-lang", 4500)).unwrap();
        store
            .insert_contributors(vec![sample_contributor(repo.id, "garydgregory", 845)])
            .unwrap();

        let report = render_repositories_and_contributors(&mut store).unwrap();

        assert_eq!(
            report,
            "Top Apache Repositories and Contributors:\n\
             \n\
             Repository: apache/commons-lang (⭐ 4500)\n\
             Language: Java\n\
             Watchers: 4500\n\
             Open Issues: 7\n\
             License: Apache License 2.0\n\
             Contributors:\n\
             \x20 - apache/commons-lang - garydgregory, location: Denver, CO, USA, \
             company: Rocket Software, contributions: 845\n\
             \n"
        );
    }

    #[test]
    fn renders_only_the_header_when_nothing_is_stored() {
        let mut store = MemStore::default();

        let report = render_repositories_and_contributors(&mut store).unwrap();

        assert_eq!(report, "Top Apache Repositories and Contributors:\n\n");
    }

    #[test]
    fn duplicate_logins_collapse_to_the_last_row() {
        let mut store = MemStore::default();
        let first = store.insert_repo(sample_repo("apache/commons-lang", 4500)).unwrap();
        let second = store.insert_repo(sample_repo("apache/commons-io", 3500)).unwrap();
        store
            .insert_contributors(vec![sample_contributor(first.id, "garydgregory", 845)])
            .unwrap();
        store
            .insert_contributors(vec![sample_contributor(second.id, "garydgregory", 102)])
            .unwrap();

        let map = top_contributors_by_login(&mut store).unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map["garydgregory"], 102);
    }

    #[test]
    fn summary_projects_name_stars_and_description() {
        let mut store = MemStore::default();
        store.insert_repo(sample_repo("apache/commons-lang", 4500)).unwrap();
        store.insert_repo(sample_repo("apache/commons-io", 3500)).unwrap();

        let summary = top_repositories_summary(&mut store).unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].name, "apache/commons-lang");
        assert_eq!(summary[0].stars, 4500);
        assert_eq!(summary[0].description, "A library");
        assert_eq!(summary[1].name, "apache/commons-io");
    }
}
