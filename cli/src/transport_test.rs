use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use signin::{LoginConfig, LoginError, LoginFormController, LoginPorts, Notifier, Toast, ToastVariant};
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::store::FileSessionStore;
use crate::terminal::TerminalNavigator;

#[derive(Default)]
struct RecordingNotifier {
    toasts: RefCell<Vec<Toast>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

// =============================================================================
// ReqwestTransport
// =============================================================================

#[tokio::test]
async fn posts_json_body_and_returns_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"email": "a@b.co", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc", "user": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let response = transport
        .post_json(&format!("{}/auth/login", server.uri()), json!({"email": "a@b.co", "password": "pw"}).to_string())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["token"], "abc");
}

#[tokio::test]
async fn error_statuses_are_not_transport_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"message":"Invalid credentials"}"#))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new().unwrap();
    let response = transport.post_json(&format!("{}/auth/login", server.uri()), "{}".to_owned()).await.unwrap();

    assert_eq!(response, TransportResponse::new(401, r#"{"message":"Invalid credentials"}"#));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = ReqwestTransport::new().unwrap();
    let err = transport.post_json(&format!("http://{addr}/auth/login"), "{}".to_owned()).await.unwrap_err();

    assert!(!err.0.is_empty());
}

// =============================================================================
// Full login against a mock server
// =============================================================================

struct Flow {
    controller: LoginFormController,
    notifier: Rc<RecordingNotifier>,
    navigator: Rc<TerminalNavigator>,
    store: FileSessionStore,
    _dir: TempDir,
}

fn flow(server: &MockServer) -> Flow {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    let notifier = Rc::new(RecordingNotifier::default());
    let navigator = Rc::new(TerminalNavigator::default());
    let controller = LoginFormController::new(
        LoginConfig::new(server.uri()),
        LoginPorts {
            transport: Rc::new(ReqwestTransport::new().unwrap()),
            store: Rc::new(store.clone()),
            notifier: notifier.clone(),
            navigator: navigator.clone(),
        },
    );
    Flow { controller, notifier, navigator, store, _dir: dir }
}

#[tokio::test]
async fn successful_login_writes_session_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123", "user": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let f = flow(&server);
    f.controller.set_email("a@b.co");
    f.controller.set_password("pw");
    let session = f.controller.submit().await.unwrap();

    assert_eq!(session.token, "abc123");
    assert_eq!(f.store.get_item("token").unwrap().as_deref(), Some("abc123"));
    assert_eq!(f.store.get_item("user").unwrap().as_deref(), Some(r#"{"id":1}"#));
    assert_eq!(f.navigator.last_route().as_deref(), Some("/"));
    assert_eq!(f.notifier.toasts.borrow()[0].variant, ToastVariant::Default);
}

#[tokio::test]
async fn rejected_login_leaves_no_session_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})))
        .mount(&server)
        .await;

    let f = flow(&server);
    f.controller.set_email("a@b.co");
    f.controller.set_password("wrong");
    let err = f.controller.submit().await.unwrap_err();

    assert!(matches!(err, LoginError::Authentication(_)));
    assert!(!f.store.path().exists());
    assert_eq!(f.navigator.last_route(), None);
    let toasts = f.notifier.toasts.borrow();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].description, "Invalid credentials");
    assert_eq!(toasts[0].variant, ToastVariant::Destructive);
}

#[tokio::test]
async fn invalid_form_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let f = flow(&server);
    f.controller.set_email("not-an-email");
    let err = f.controller.submit().await.unwrap_err();

    assert!(matches!(err, LoginError::Invalid(_)));
    assert!(f.notifier.toasts.borrow().is_empty());
}
