use serde_json::Value;

fn value_at<'a>(node: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = node;
    for key in path {
        current = current.get(key)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// "Key present and not null, else default" extraction shared by every JSON
/// shape the pipeline touches. Non-string scalars render as their JSON text,
/// which is how the numeric `open_issues` field becomes a summary string.
pub fn text_at(node: &Value, path: &[&str], default: &str) -> String {
    match value_at(node, path) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => default.to_owned(),
    }
}

pub fn int_at(node: &Value, path: &[&str], default: i32) -> i32 {
    value_at(node, path)
        .and_then(Value::as_i64)
        .map(|n| n as i32)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_ints_fall_back_to_default() {
        let node = json!({ "stargazers_count": null });
        assert_eq!(int_at(&node, &["stargazers_count"], 0), 0);
        assert_eq!(int_at(&json!({}), &["stargazers_count"], 0), 0);
        assert_eq!(int_at(&json!({ "stargazers_count": 4500 }), &["stargazers_count"], 0), 4500);
    }

    #[test]
    fn missing_and_null_text_falls_back_to_default() {
        assert_eq!(
            text_at(&json!({ "description": null }), &["description"], "No description"),
            "No description"
        );
        assert_eq!(
            text_at(&json!({}), &["description"], "No description"),
            "No description"
        );
        assert_eq!(
            text_at(&json!({ "description": "A library" }), &["description"], "No description"),
            "A library"
        );
    }

    #[test]
    fn numeric_scalars_render_as_text() {
        assert_eq!(text_at(&json!({ "open_issues": 57 }), &["open_issues"], "0"), "57");
    }

    #[test]
    fn license_name_requires_the_full_chain() {
        let with_name = json!({ "license": { "key": "apache-2.0", "name": "Apache License 2.0" } });
        assert_eq!(
            text_at(&with_name, &["license", "name"], "No license"),
            "Apache License 2.0"
        );

        let without_name = json!({ "license": { "key": "apache-2.0" } });
        assert_eq!(text_at(&without_name, &["license", "name"], "No license"), "No license");

        let null_license = json!({ "license": null });
        assert_eq!(text_at(&null_license, &["license", "name"], "No license"), "No license");

        assert_eq!(text_at(&json!({}), &["license", "name"], "No license"), "No license");
    }
}
