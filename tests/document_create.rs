// tests/document_create.rs
//! Behaviour of a full `documents.create` run against a scripted transport.

mod common;

use common::{test_credentials, RecordingTransport, TEST_TOKEN};
use outline_document::{
    build, CreateDocumentRequest, DocumentCreatePipeline, ErrorKind, ExecutionResult,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn runbook() -> CreateDocumentRequest {
    CreateDocumentRequest::new("Runbook", "c99ad6f3-04b8-4181-aa20-5d5670f5f984")
        .with_text("# Hello World")
}

#[test]
fn test_created_document_is_reported_as_changed() {
    let credentials = test_credentials();
    let transport = RecordingTransport::answering(200, r#"{"data": {"id": "X", "title": "T"}}"#);

    let result = DocumentCreatePipeline::new(&credentials, &transport).execute(&runbook());

    assert!(result.changed);
    assert!(result.error.is_none());
    assert_eq!(result.document.into_value(), json!({"id": "X", "title": "T"}));
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn test_sent_payload_matches_request() {
    let credentials = test_credentials();
    let transport = RecordingTransport::answering(200, r#"{"data": {"id": "X"}}"#);
    let request = runbook()
        .with_parent_document("a79c0232-3d65-43b1-b676-7ecadc57a08f")
        .published(true);

    DocumentCreatePipeline::new(&credentials, &transport).execute(&request);

    assert_eq!(
        transport.last_body(),
        json!({
            "title": "Runbook",
            "text": "# Hello World",
            "collectionId": "c99ad6f3-04b8-4181-aa20-5d5670f5f984",
            "template": false,
            "publish": true,
            "parentDocumentId": "a79c0232-3d65-43b1-b676-7ecadc57a08f"
        })
    );
}

#[test]
fn test_forbidden_is_reported_with_status_and_body() {
    let credentials = test_credentials();
    let transport = RecordingTransport::answering(403, r#"{"error":"forbidden"}"#);

    let result = DocumentCreatePipeline::new(&credentials, &transport).execute(&runbook());

    assert!(!result.changed);
    assert!(result.document.is_empty());
    let failure = result.error.expect("403 should fail");
    assert_eq!(failure.kind, ErrorKind::RemoteStatus);
    assert!(failure.msg.contains("403"));
    assert!(failure.msg.contains(r#"{"error":"forbidden"}"#));
    assert!(!failure.msg.contains(TEST_TOKEN));
}

#[test]
fn test_success_without_data_is_invalid() {
    let credentials = test_credentials();
    let transport = RecordingTransport::answering(200, "{}");

    let result = DocumentCreatePipeline::new(&credentials, &transport).execute(&runbook());

    assert!(!result.changed);
    let failure = result.error.expect("missing data should fail");
    assert_eq!(failure.kind, ErrorKind::ResponseFormat);
    assert_eq!(failure.msg, "invalid response from API");
}

#[test]
fn test_check_mode_issues_no_request() {
    let credentials = test_credentials();
    let transport = RecordingTransport::answering(200, r#"{"data": {"id": "X"}}"#);

    let result = DocumentCreatePipeline::new(&credentials, &transport)
        .check_mode(true)
        .execute(&runbook());

    assert_eq!(transport.call_count(), 0);
    assert_eq!(result, ExecutionResult::unchanged());
    assert_eq!(
        serde_json::to_value(result.to_module_output()).unwrap(),
        json!({"changed": false, "document": {}})
    );
}

#[test]
fn test_missing_collection_fails_before_transport() {
    let credentials = test_credentials();
    let transport = RecordingTransport::answering(200, r#"{"data": {"id": "X"}}"#);

    let result =
        DocumentCreatePipeline::new(&credentials, &transport).execute(&CreateDocumentRequest::new("Runbook", ""));

    assert_eq!(transport.call_count(), 0);
    assert!(!result.changed);
    assert_eq!(result.error.unwrap().kind, ErrorKind::Validation);
}

#[test]
fn test_transport_failure_is_terminal() {
    let credentials = test_credentials();
    let transport = RecordingTransport::unreachable("dns error: no such host");

    let result = DocumentCreatePipeline::new(&credentials, &transport).execute(&runbook());

    assert_eq!(transport.call_count(), 1);
    assert!(!result.changed);
    let failure = result.error.unwrap();
    assert_eq!(failure.kind, ErrorKind::Transport);
    assert_eq!(failure.msg, "Error creating document: dns error: no such host");
    assert_eq!(failure.http_response, None);
}

#[test]
fn test_optional_identifiers_present_iff_populated() {
    let credentials = test_credentials();
    let cases = [
        (None, None, vec![]),
        (Some(""), Some(""), vec![]),
        (Some("p-1"), None, vec!["parentDocumentId"]),
        (None, Some("t-1"), vec!["templateId"]),
        (Some("p-1"), Some("t-1"), vec!["parentDocumentId", "templateId"]),
    ];

    for (parent, template, extra) in cases {
        let mut request = CreateDocumentRequest::new("Doc", "col-1");
        request.parent_document_id = parent.map(str::to_owned);
        request.template_id = template.map(str::to_owned);

        let creation = build(&credentials.endpoint, &request).unwrap();
        let value = serde_json::to_value(&creation.payload).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();

        let mut expected = vec!["collectionId", "publish", "template", "text", "title"];
        expected.extend(extra);
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }
}

#[test]
fn test_build_is_idempotent() {
    let credentials = test_credentials();
    let request = runbook().with_template("bed4fe68").as_template(true);

    let first = build(&credentials.endpoint, &request).unwrap();
    let second = build(&credentials.endpoint, &request).unwrap();

    assert_eq!(first.url.as_str(), second.url.as_str());
    assert_eq!(
        serde_json::to_vec(&first.payload).unwrap(),
        serde_json::to_vec(&second.payload).unwrap()
    );
}
