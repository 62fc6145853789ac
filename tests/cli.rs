use assert_cmd::prelude::*;
use std::process::Command;

use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// We check the --help output in order to confirm that the clap cli is setup correctly.
// Any arguments that are incorrectly will cause clap to panic regardless of the arguments or
// options provided.
#[test]
fn check_clap_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("cita")?;

    cmd.arg("--help");
    cmd.assert().success();

    Ok(())
}

#[test]
fn blank_isbn_does_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::cargo_bin("cita")?
        .args(["--api-url", "http://127.0.0.1:9/volumes", "isbn", "   "])
        .output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    Ok(())
}

async fn mock_volumes(isbn: &str) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", format!("isbn:{isbn}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "books#volumes",
            "totalItems": 1,
            "items": [{
                "volumeInfo": {
                    "title": "Cien años de soledad",
                    "authors": ["Gabriel García Márquez"],
                    "publisher": "Buenos Aires: Sudamericana",
                    "publishedDate": "1967-05-30"
                }
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "books#volumes",
            "totalItems": 0
        })))
        .with_priority(10)
        .mount(&server)
        .await;

    server
}

const CIEN_ANOS: &str = "MÁRQUEZ, Gabriel García. (1967). Cien años de soledad. Buenos Aires: Buenos Aires: Sudamericana.\n";

// The binary blocks on its own process, a multi thread runtime keeps the mock server responsive.
#[tokio::test(flavor = "multi_thread")]
async fn plain_isbn_lookup_prints_only_the_citation() -> Result<(), Box<dyn std::error::Error>> {
    let server = mock_volumes("9780307474728").await;
    let uri = server.uri();

    let output = Command::cargo_bin("cita")?
        .args(["--api-url", uri.as_str(), "isbn", "978-0-307-47472-8", "--plain"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(CIEN_ANOS, String::from_utf8(output.stdout)?);

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn not_found_is_reported_on_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let server = mock_volumes("9780307474728").await;
    let uri = server.uri();

    let output = Command::cargo_bin("cita")?
        .args(["--api-url", uri.as_str(), "isbn", "0000000000"])
        .output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?
        .contains("No se encontró información para el ISBN: 0000000000"));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn scan_skips_noise_and_looks_up_first_isbn() -> Result<(), Box<dyn std::error::Error>> {
    let server = mock_volumes("9780307474728").await;
    let uri = server.uri();

    let output = assert_cmd::Command::cargo_bin("cita")?
        .args(["--api-url", uri.as_str(), "scan", "--plain"])
        .write_stdin("QR-Code:https://example.com\n123456789\nEAN-13:9780307474728\n0000000000\n")
        .output()?;

    assert!(output.status.success());
    assert_eq!(CIEN_ANOS, String::from_utf8(output.stdout)?);

    Ok(())
}
