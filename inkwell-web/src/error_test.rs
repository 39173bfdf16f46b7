use super::*;
use futures::executor::block_on;

fn response_with(status: u16, body: &str) -> reqwest::Response {
    http::Response::builder()
        .status(status)
        .body(body.to_string())
        .unwrap()
        .into()
}

/// Server-supplied detail messages surface verbatim.
#[test]
fn reject_prefers_server_detail() {
    let response = response_with(400, r#"{"detail":"Invalid credentials"}"#);
    let err = block_on(reject(response));
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 400,
            detail: "Invalid credentials".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Invalid credentials");
}

/// A rejection without a parseable body still reports the status.
#[test]
fn reject_falls_back_to_status() {
    let response = response_with(502, "<html>bad gateway</html>");
    let err = block_on(reject(response));
    match err {
        ApiError::Rejected { status, detail } => {
            assert_eq!(status, 502);
            assert!(detail.contains("502"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[test]
fn ok_or_reject_passes_success_through() {
    let response = response_with(200, r#"{"ok":true}"#);
    let passed = block_on(ok_or_reject(response)).unwrap();
    assert_eq!(passed.status().as_u16(), 200);
}

#[test]
fn ok_or_reject_classifies_failure() {
    let response = response_with(404, r#"{"detail":"Article not found"}"#);
    let err = block_on(ok_or_reject(response)).unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 404,
            detail: "Article not found".to_string(),
        }
    );
}

#[test]
fn unauthorized_classification() {
    assert!(ApiError::AuthExpired.is_unauthorized());
    assert!(
        ApiError::Rejected {
            status: 401,
            detail: "Token error".to_string(),
        }
        .is_unauthorized()
    );
    assert!(
        !ApiError::Rejected {
            status: 403,
            detail: "Operation cannot be completed".to_string(),
        }
        .is_unauthorized()
    );
    assert!(!ApiError::Network("connection refused".to_string()).is_unauthorized());
}

#[test]
fn network_error_hides_transport_detail() {
    let err = ApiError::Network("tcp connect error".to_string());
    assert_eq!(err.to_string(), "No response received from the server");
}
