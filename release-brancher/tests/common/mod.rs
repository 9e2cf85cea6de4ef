//! Mock GitHub server helpers shared by the integration tests.

#![allow(dead_code)]

use release_brancher::{GitHubClient, ReleaseConfig, RepositoryRef, Runner, ACCEPT_HEADER};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-token";
pub const DEVELOP_SHA: &str = "0f1e2d3c4b5a";

pub fn install_crypto_provider() {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

pub fn config(server: &MockServer, repositories: &[&str], release: &str) -> ReleaseConfig {
    let repositories = repositories
        .iter()
        .map(|entry| entry.parse::<RepositoryRef>().unwrap())
        .collect();
    ReleaseConfig::new(repositories, release.to_string(), TOKEN.to_string())
        .with_api_base(&server.uri())
        .unwrap()
}

pub fn runner(config: ReleaseConfig) -> Runner {
    install_crypto_provider();
    Runner::new(config).unwrap()
}

pub fn client(server: &MockServer) -> GitHubClient {
    install_crypto_provider();
    GitHubClient::from_config(&config(server, &["org/a"], "1.0")).unwrap()
}

pub fn github_error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "message": message,
        "documentation_url": "https://docs.github.com/rest"
    }))
}

fn tag_names(names: &[&str]) -> Value {
    Value::Array(
        names
            .iter()
            .map(|name| json!({ "name": name, "commit": { "sha": "1234", "url": "https://example.com" } }))
            .collect(),
    )
}

pub async fn mount_tags_page(server: &MockServer, repo: &str, page: u32, names: &[&str]) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{repo}/tags")))
        .and(header("accept", ACCEPT_HEADER))
        .and(query_param("page", page.to_string()))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tag_names(names)))
        .mount(server)
        .await;
}

pub async fn mount_tags(server: &MockServer, repo: &str, names: &[&str]) {
    mount_tags_page(server, repo, 1, names).await;
}

pub async fn mount_develop(server: &MockServer, repo: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{repo}/git/ref/heads/develop")))
        .and(header("accept", ACCEPT_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ref": "refs/heads/develop",
            "node_id": "REF_develop",
            "url": format!("https://api.github.com/repos/{repo}/git/refs/heads/develop"),
            "object": { "sha": DEVELOP_SHA, "type": "commit", "url": "https://example.com" }
        })))
        .mount(server)
        .await;
}

pub async fn mount_branch_exists(server: &MockServer, repo: &str, branch: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{repo}/git/ref/heads/{branch}")))
        .and(header("accept", ACCEPT_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ref": format!("refs/heads/{branch}"),
            "object": { "sha": "ffffffff", "type": "commit" }
        })))
        .mount(server)
        .await;
}

pub async fn mount_branch_missing(server: &MockServer, repo: &str, branch: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{repo}/git/ref/heads/{branch}")))
        .and(header("accept", ACCEPT_HEADER))
        .respond_with(github_error(404, "Not Found"))
        .mount(server)
        .await;
}

pub async fn mount_compare(server: &MockServer, repo: &str, base: &str, status: &str, ahead_by: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{repo}/compare/{base}...develop")))
        .and(header("accept", ACCEPT_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": status,
            "ahead_by": ahead_by,
            "behind_by": 0,
            "total_commits": ahead_by
        })))
        .mount(server)
        .await;
}

pub async fn mount_create_branch(server: &MockServer, repo: &str, branch: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/repos/{repo}/git/refs")))
        .and(header("accept", ACCEPT_HEADER))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "ref": format!("refs/heads/{branch}"),
            "object": { "sha": DEVELOP_SHA, "type": "commit" }
        })))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_create_pr(server: &MockServer, repo: &str, number: u64) {
    Mock::given(method("POST"))
        .and(path(format!("/repos/{repo}/pulls")))
        .and(header("accept", ACCEPT_HEADER))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": number,
            "html_url": format!("https://github.com/{repo}/pull/{number}")
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Fails the test if any POST reaches `repo`.
pub async fn forbid_mutations(server: &MockServer, repo: &str) {
    Mock::given(method("POST"))
        .and(wiremock::matchers::path_regex(format!("^/repos/{repo}/")))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// Paths of the POST requests the server received, in order.
pub async fn post_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.method.as_str() == "POST")
        .map(|request| request.url.path().to_string())
        .collect()
}
