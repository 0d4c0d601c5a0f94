use serde_json::Value;
use super::normalize::int_at;

pub fn star_count(node: &Value) -> i32 {
    int_at(node, &["stargazers_count"], 0)
}

/// Stable descending sort on star count, truncated to `count`. Ties keep the
/// relative order of the source listing.
pub fn top_by_stars(mut nodes: Vec<Value>, count: usize) -> Vec<Value> {
    nodes.sort_by(|a, b| star_count(b).cmp(&star_count(a)));
    nodes.truncate(count);
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(name: &str, stars: Option<i64>) -> Value {
        match stars {
            Some(n) => json!({ "name": name, "stargazers_count": n, "language": "Java" }),
            None => json!({ "name": name, "language": "Java" }),
        }
    }

    #[test]
    fn selects_five_in_descending_star_order() {
        let nodes = vec![
            node("a", Some(10)),
            node("b", Some(70)),
            node("c", Some(30)),
            node("d", Some(50)),
            node("e", Some(20)),
            node("f", Some(60)),
            node("g", Some(40)),
        ];

        let top = top_by_stars(nodes, 5);

        let names: Vec<&str> = top.iter().map(|n| n["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["b", "f", "d", "g", "c"]);
        // Nodes pass through unchanged apart from ordering.
        assert_eq!(top[0]["language"], "Java");
    }

    #[test]
    fn equal_star_counts_keep_listing_order() {
        let nodes = vec![
            node("first", Some(5)),
            node("second", Some(5)),
            node("third", Some(5)),
        ];

        let top = top_by_stars(nodes, 5);

        let names: Vec<&str> = top.iter().map(|n| n["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn missing_star_counts_rank_as_zero() {
        let nodes = vec![node("unstarred", None), node("starred", Some(1))];

        let top = top_by_stars(nodes, 5);

        assert_eq!(top[0]["name"], "starred");
        assert_eq!(top[1]["name"], "unstarred");
    }

    #[test]
    fn shorter_listings_are_returned_whole() {
        let top = top_by_stars(vec![node("only", Some(3))], 5);
        assert_eq!(top.len(), 1);
    }
}
