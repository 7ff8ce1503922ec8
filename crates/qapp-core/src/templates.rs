//! Template discovery.
//!
//! Every top-level directory of the template repository is one template. The
//! listing comes straight from the hosting API's contents endpoint and is
//! never cached or retried.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::RepoConfig;
use crate::error::{QappError, Result};

/// Fetch the available template names, in the order the API returns them.
///
/// Discovery failures are logged and degrade to an empty list; deciding
/// whether that is fatal is left to the caller.
pub fn list_templates(repo: &RepoConfig) -> Vec<String> {
    match fetch_listing(repo) {
        Ok(templates) => {
            debug!(count = templates.len(), "template listing fetched");
            templates
        }
        Err(e) => {
            warn!("error fetching templates: {e}");
            Vec::new()
        }
    }
}

fn fetch_listing(repo: &RepoConfig) -> Result<Vec<String>> {
    let url = repo.contents_url();
    debug!(%url, "requesting template listing");
    let body: Value = repo
        .http_client()?
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/vnd.github+json")
        .send()?
        .json()?;
    directory_names(body)
}

/// Keep the `name` of every entry whose `type` is `dir`.
///
/// Anything other than a JSON array (an API error object, for instance) is a
/// discovery error. Entries missing either field are skipped.
pub fn directory_names(listing: Value) -> Result<Vec<String>> {
    let Value::Array(entries) = listing else {
        let detail = listing
            .get("message")
            .and_then(Value::as_str)
            .map(|m| format!(" ({m})"))
            .unwrap_or_default();
        return Err(QappError::Fetch(format!(
            "unexpected response format from template listing{detail}"
        )));
    };

    Ok(entries
        .into_iter()
        .filter(|entry| entry.get("type").and_then(Value::as_str) == Some("dir"))
        .filter_map(|entry| entry.get("name").and_then(Value::as_str).map(String::from))
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    const CONTENTS_PATH: &str = "/repos/Qortal/qapp-templates/contents";

    #[test]
    fn keeps_only_directories() {
        let listing = json!([
            {"name": "react", "type": "dir"},
            {"name": "README.md", "type": "file"}
        ]);
        assert_eq!(directory_names(listing).unwrap(), vec!["react"]);
    }

    #[test]
    fn preserves_listing_order() {
        let listing = json!([
            {"name": "vue", "type": "dir"},
            {"name": "angular", "type": "dir"},
            {"name": "react", "type": "dir"}
        ]);
        assert_eq!(
            directory_names(listing).unwrap(),
            vec!["vue", "angular", "react"]
        );
    }

    #[test]
    fn skips_malformed_entries() {
        let listing = json!([
            {"name": "react", "type": "dir"},
            {"type": "dir"},
            {"name": 7, "type": "dir"},
            "plain string"
        ]);
        assert_eq!(directory_names(listing).unwrap(), vec!["react"]);
    }

    #[test]
    fn non_array_is_an_error() {
        let err = directory_names(json!({"message": "API rate limit exceeded"})).unwrap_err();
        assert!(err.to_string().contains("API rate limit exceeded"));
    }

    #[test]
    fn lists_templates_from_server() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", CONTENTS_PATH)
            .match_header("user-agent", mockito::Matcher::Regex("^create-qapp/".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"name":"react","type":"dir"},{"name":"README.md","type":"file"}]"#,
            )
            .create();

        let repo = RepoConfig::default().with_base_url(&server.url());
        assert_eq!(list_templates(&repo), vec!["react"]);
        mock.assert();
    }

    #[test]
    fn non_array_payload_yields_empty_list() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", CONTENTS_PATH)
            .with_status(403)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"API rate limit exceeded"}"#)
            .create();

        let repo = RepoConfig::default().with_base_url(&server.url());
        assert!(list_templates(&repo).is_empty());
    }

    #[test]
    fn unparseable_body_yields_empty_list() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", CONTENTS_PATH)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create();

        let repo = RepoConfig::default().with_base_url(&server.url());
        assert!(list_templates(&repo).is_empty());
    }

    #[test]
    fn slow_listing_is_awaited() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", CONTENTS_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(|w| {
                // Longer than reqwest's default 30s request timeout.
                std::thread::sleep(std::time::Duration::from_secs(32));
                w.write_all(br#"[{"name":"react","type":"dir"}]"#)
            })
            .create();

        let repo = RepoConfig::default().with_base_url(&server.url());
        assert_eq!(list_templates(&repo), vec!["react"]);
    }

    #[test]
    fn unreachable_host_yields_empty_list() {
        let repo = RepoConfig::default().with_base_url("http://127.0.0.1:9");
        assert!(list_templates(&repo).is_empty());
    }
}
