//! Integration tests for the conversion pipeline

use pm2oa_core::{collection, input, output, ConvertError, InputSource, OutputFormat};
use serde_json::Value;
use std::io::Write;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASIC_COLLECTION: &str = r##"{
    "info": {
        "name": "Basic Collection",
        "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
    },
    "item": [
        {
            "name": "Get Users",
            "request": {
                "method": "GET",
                "header": [],
                "url": {
                    "raw": "https://api.example.com/users",
                    "protocol": "https",
                    "host": ["api", "example", "com"],
                    "path": ["users"]
                }
            }
        }
    ]
}"##;

/// The resolver uses a blocking client, so the mock server runs on its
/// own runtime and the test thread stays synchronous.
fn start_mock_server(rt: &tokio::runtime::Runtime) -> MockServer {
    rt.block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/collection.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BASIC_COLLECTION))
            .mount(&server)
            .await;

        server
    })
}

#[test]
fn test_resolve_from_url() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = start_mock_server(&rt);

    let client = input::http_client().unwrap();
    let source = InputSource::from_arg(Some(&format!("{}/collection.json", server.uri())));
    let text = source.resolve(&client).unwrap();

    assert_eq!(text, BASIC_COLLECTION);
}

#[test]
fn test_resolve_from_url_not_found() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = start_mock_server(&rt);

    let client = input::http_client().unwrap();
    let source = InputSource::from_arg(Some(&format!("{}/missing.json", server.uri())));
    let err = source.resolve(&client).unwrap_err();

    assert!(matches!(err, ConvertError::Fetch { status: 404, .. }));
    assert!(err.to_string().contains("404"));
}

#[test]
fn test_pipeline_matches_direct_conversion() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(BASIC_COLLECTION.as_bytes()).unwrap();

    let client = input::http_client().unwrap();
    let source = InputSource::File(file.path().to_path_buf());

    let raw = source.resolve(&client).unwrap();
    let parsed = collection::parse(&raw).unwrap();
    let document = collection::convert(&parsed).unwrap();
    let rendered = output::render(&document, OutputFormat::Json).unwrap();

    // Wrapping the converter must not change what it produces.
    let direct = collection::convert(&collection::parse(BASIC_COLLECTION).unwrap()).unwrap();
    let reparsed: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(reparsed, direct);
}

#[test]
fn test_json_and_yaml_outputs_are_equivalent() {
    let parsed = collection::parse(BASIC_COLLECTION).unwrap();
    let document = collection::convert(&parsed).unwrap();

    let json_text = output::render(&document, OutputFormat::Json).unwrap();
    let yaml_text = output::render(&document, OutputFormat::Yaml).unwrap();

    let from_json: Value = serde_json::from_str(&json_text).unwrap();
    let from_yaml: Value = serde_yaml::from_str(&yaml_text).unwrap();
    assert_eq!(from_json, from_yaml);
}

#[test]
fn test_malformed_input_is_rejected_before_conversion() {
    let err = collection::parse("{\"info\": ").unwrap_err();
    assert!(err
        .to_string()
        .contains("Invalid JSON format in collection data"));
}

#[test]
fn test_transpile_collection_to_yaml_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let out_path = dir.path().join("openapi.yaml");

    let format = OutputFormat::resolve(None, Some(&out_path)).unwrap();
    assert_eq!(format, OutputFormat::Yaml);

    let rendered = pm2oa_core::transpile_collection(BASIC_COLLECTION, format).unwrap();
    output::write_file(&out_path, &rendered).unwrap();

    let written = std::fs::read_to_string(&out_path).unwrap();
    let decoded: Value = serde_yaml::from_str(&written).unwrap();
    assert!(decoded.get("openapi").is_some());
}
