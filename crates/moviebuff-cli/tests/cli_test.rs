#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

/// Builds a `moviebuff` command isolated from the caller's environment.
fn moviebuff_cmd(dir: &tempfile::TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("moviebuff");
    cmd.env_remove("MOVIEBUFF_URL")
        .env_remove("MOVIEBUFF_CONFIG_DIR")
        .env_remove("OTEL_EXPORTER_OTLP_ENDPOINT")
        .env_remove("RUST_LOG")
        .arg("--dir")
        .arg(dir.path());
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("moviebuff");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("movie"))
        .stdout(predicate::str::contains("certifications"))
        .stdout(predicate::str::contains("mapped-cpl"));
}

#[test]
fn test_resources_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("moviebuff");
    cmd.args(["resources", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--limit"))
        .stdout(predicate::str::contains("--page"));
}

#[test]
fn test_resources_rejects_unknown_kind() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("moviebuff");
    cmd.args(["resources", "songs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_movie_missing_id() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("moviebuff");
    cmd.arg("movie")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<ID>"));
}

#[test]
fn test_missing_token() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    moviebuff_cmd(&dir)
        .env_remove("MOVIEBUFF_API_TOKEN")
        .args(["movie", "sholay"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "MOVIEBUFF_API_TOKEN environment variable is required",
        ));
}

#[test]
fn test_invalid_config_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[api\n").unwrap();

    // Act & Assert
    moviebuff_cmd(&dir)
        .env("MOVIEBUFF_API_TOKEN", "token")
        .args(["movie", "sholay"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[tokio::test]
async fn test_movie_against_mock_server() {
    // Arrange
    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/resources/movies/test-movie"))
        .and(wiremock::matchers::header("X-Api-Key", "token"))
        .respond_with(
            wiremock::ResponseTemplate::new(200)
                .set_body_string(r#"{"name":"Test_Movie", "type":"movie"}"#),
        )
        .mount(&mock_server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    moviebuff_cmd(&dir)
        .env("MOVIEBUFF_API_TOKEN", "token")
        .args(["--base-url", &mock_server.uri(), "movie", "test-movie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Test_Movie"));
}

#[tokio::test]
async fn test_base_url_from_config_file() {
    // Arrange
    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/certifications"))
        .and(wiremock::matchers::query_param("country", "IN"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(
            r#"{"data":[{"childSafe":true,"uuid":"cert-u","code":"U","country":{"code":"IN"}}]}"#,
        ))
        .mount(&mock_server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        format!("[api]\nbase_url = \"{}\"\ntimeout_secs = 10\n", mock_server.uri()),
    )
    .unwrap();

    // Act & Assert
    moviebuff_cmd(&dir)
        .env("MOVIEBUFF_API_TOKEN", "token")
        .args(["certifications", "--country", "IN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 1 certifications"));
}

#[tokio::test]
async fn test_config_dir_from_environment() {
    // Arrange
    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/holidays/IN"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(
            r#"{"name":"Holidays in India","holidays":null,"timeZone":"Asia/Calcutta"}"#,
        ))
        .mount(&mock_server)
        .await;
    let config_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        format!("[api]\nbase_url = \"{}\"\n", mock_server.uri()),
    )
    .unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("moviebuff");
    cmd.env_remove("MOVIEBUFF_URL")
        .env_remove("OTEL_EXPORTER_OTLP_ENDPOINT")
        .env_remove("RUST_LOG")
        .env("MOVIEBUFF_CONFIG_DIR", config_dir.path())
        .env("MOVIEBUFF_API_TOKEN", "token")
        .args(["holidays", "IN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 0 holidays"));
}

#[tokio::test]
async fn test_wrong_resource_kind_reports_not_found() {
    // Arrange
    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .respond_with(
            wiremock::ResponseTemplate::new(200)
                .set_body_string(r#"{"name":"Amitabh Bachchan", "type":"person"}"#),
        )
        .mount(&mock_server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    moviebuff_cmd(&dir)
        .env("MOVIEBUFF_API_TOKEN", "token")
        .env("MOVIEBUFF_URL", mock_server.uri())
        .args(["movie", "amitabh-bachchan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("resource does not exist"));
}

#[tokio::test]
async fn test_access_denied_is_reported() {
    // Arrange
    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .respond_with(wiremock::ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    moviebuff_cmd(&dir)
        .env("MOVIEBUFF_API_TOKEN", "bad-token")
        .args(["--base-url", &mock_server.uri(), "holidays", "IN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("access denied"));
}
