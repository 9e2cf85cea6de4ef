//! Client calls and tag paging against a mock GitHub API.

mod common;

use common::*;
use release_brancher::{
    fetch_latest_tag, open_release_pr, BranchProbe, CompareStatus, PrError, ReleaseRequest,
    RepositoryRef, TagError, ACCEPT_HEADER,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repo() -> RepositoryRef {
    RepositoryRef::new("org", "a")
}

#[tokio::test]
async fn pages_until_short_page() {
    let server = MockServer::start().await;

    let first_page: Vec<String> = (0..100).map(|i| format!("eah_1.{i}.0")).collect();
    let first_page: Vec<&str> = first_page.iter().map(String::as_str).collect();
    mount_tags_page(&server, "org/a", 1, &first_page).await;
    mount_tags_page(&server, "org/a", 2, &["eah_0.9.0", "nightly"]).await;
    Mock::given(method("GET"))
        .and(path("/repos/org/a/tags"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let tag = fetch_latest_tag(&client(&server), &repo(), "eah_")
        .await
        .unwrap();

    assert_eq!(tag, "eah_1.99.0");
}

#[tokio::test]
async fn stops_on_empty_page() {
    let server = MockServer::start().await;

    let first_page: Vec<String> = (0..100).map(|i| format!("v{i}")).collect();
    let first_page: Vec<&str> = first_page.iter().map(String::as_str).collect();
    mount_tags_page(&server, "org/a", 1, &first_page).await;
    mount_tags_page(&server, "org/a", 2, &[]).await;

    let result = fetch_latest_tag(&client(&server), &repo(), "eah_").await;

    assert!(matches!(result, Err(TagError::NoMatchingTag { prefix }) if prefix == "eah_"));
}

#[tokio::test]
async fn probe_distinguishes_missing_from_errors() {
    let server = MockServer::start().await;

    mount_branch_exists(&server, "org/a", "release/1.0").await;
    mount_branch_missing(&server, "org/a", "release/2.0").await;
    Mock::given(method("GET"))
        .and(path("/repos/org/a/git/ref/heads/release/3.0"))
        .respond_with(github_error(401, "Bad credentials"))
        .mount(&server)
        .await;

    let client = client(&server);

    assert_eq!(
        client.probe_branch(&repo(), "release/1.0").await.unwrap(),
        BranchProbe::Exists
    );
    assert_eq!(
        client.probe_branch(&repo(), "release/2.0").await.unwrap(),
        BranchProbe::Missing
    );

    let err = client.probe_branch(&repo(), "release/3.0").await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(
        err.to_string(),
        "Could not check for branch release/3.0: 401: Bad credentials"
    );
}

#[tokio::test]
async fn probe_treats_any_not_found_as_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/org/a/git/ref/heads/release/1.0"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/org/a/git/ref/heads/release/2.0"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("content-type", "text/html")
                .set_body_string("<html>Not Found</html>"),
        )
        .mount(&server)
        .await;

    let client = client(&server);

    assert_eq!(
        client.probe_branch(&repo(), "release/1.0").await.unwrap(),
        BranchProbe::Missing
    );
    assert_eq!(
        client.probe_branch(&repo(), "release/2.0").await.unwrap(),
        BranchProbe::Missing
    );
}

#[tokio::test]
async fn every_request_sends_accept_header_and_token() {
    let server = MockServer::start().await;
    mount_tags(&server, "org/a", &["eah_1.0.0"]).await;
    mount_develop(&server, "org/a").await;
    mount_branch_missing(&server, "org/a", "release/1.0").await;
    mount_create_branch(&server, "org/a", "release/1.0").await;

    let client = client(&server);
    fetch_latest_tag(&client, &repo(), "eah_").await.unwrap();
    client.get_ref_sha(&repo(), "heads/develop").await.unwrap();
    client.probe_branch(&repo(), "release/1.0").await.unwrap();
    client
        .create_branch(&repo(), "release/1.0", DEVELOP_SHA)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 4);
    for request in requests {
        let accept = request.headers.get("accept").map(|v| v.to_str().unwrap().to_string());
        let auth = request.headers.get("authorization").map(|v| v.to_str().unwrap().to_string());
        assert_eq!(accept.as_deref(), Some(ACCEPT_HEADER), "{}", request.url);
        assert_eq!(auth.as_deref(), Some("Bearer test-token"), "{}", request.url);
    }
}

#[tokio::test]
async fn resolves_ref_sha() {
    let server = MockServer::start().await;
    mount_develop(&server, "org/a").await;

    let sha = client(&server)
        .get_ref_sha(&repo(), "heads/develop")
        .await
        .unwrap();

    assert_eq!(sha, DEVELOP_SHA);
}

#[tokio::test]
async fn parses_comparison() {
    let server = MockServer::start().await;
    mount_compare(&server, "org/a", "eah_1.0.0", "diverged", 5).await;

    let comparison = client(&server)
        .compare(&repo(), "eah_1.0.0", "develop")
        .await
        .unwrap();

    assert_eq!(comparison.status, CompareStatus::Diverged);
    assert_eq!(comparison.ahead_by, 5);
    assert!(comparison.has_diverged());
}

#[tokio::test]
async fn create_branch_failure_reports_operation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/org/a/git/refs"))
        .respond_with(github_error(422, "Reference already exists"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .create_branch(&repo(), "release/1.0", DEVELOP_SHA)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(422));
    assert_eq!(
        err.to_string(),
        "Could not create branch release/1.0: 422: Reference already exists"
    );
}

#[tokio::test]
async fn pull_request_not_attempted_when_branch_creation_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/org/a/git/refs"))
        .respond_with(github_error(403, "Forbidden"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/org/a/pulls"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let repository = repo();
    let result = open_release_pr(
        &client(&server),
        &ReleaseRequest {
            repository: &repository,
            branch_name: "release/1.0",
            base_sha: DEVELOP_SHA,
            stable_branch: "master",
            title: "title",
            body: "body",
        },
    )
    .await;

    assert!(matches!(result, Err(PrError::BranchCreation(_))));
}

#[tokio::test]
async fn opens_release_pr_in_order() {
    let server = MockServer::start().await;
    mount_create_branch(&server, "org/a", "release/1.0").await;
    mount_create_pr(&server, "org/a", 42).await;

    let repository = repo();
    let pr = open_release_pr(
        &client(&server),
        &ReleaseRequest {
            repository: &repository,
            branch_name: "release/1.0",
            base_sha: DEVELOP_SHA,
            stable_branch: "master",
            title: "title",
            body: "body",
        },
    )
    .await
    .unwrap();

    assert_eq!(pr.number, 42);
    assert_eq!(pr.url, "https://github.com/org/a/pull/42");
    assert_eq!(pr.branch_name, "release/1.0");
    assert_eq!(
        post_paths(&server).await,
        ["/repos/org/a/git/refs", "/repos/org/a/pulls"]
    );
}
