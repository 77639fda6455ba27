// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;
use tickets_machine::application::services::ApplicationServices;
use tickets_machine::infrastructure::{database, sqlite_services};
use tickets_machine::presentation::http::{routes::build_router, state::HttpState};

/// インメモリ SQLite 上に構築したサービスとルーター
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub router: axum::Router,
}

pub async fn make_sqlite_app() -> TestApp {
    let pool = database::init_memory_pool().await.expect("memory pool");
    database::run_migrations(&pool).await.expect("migrations");
    let services = Arc::new(sqlite_services(&Arc::new(pool)));
    let router = build_router(HttpState {
        services: Arc::clone(&services),
    });
    TestApp { services, router }
}

/// ボードストアだけをメモリ上に持つサービス（他のリポジトリは空）
pub fn services_with_boards(boards: Arc<mocks::InMemoryBoards>) -> ApplicationServices {
    ApplicationServices::new(
        boards.clone(),
        boards,
        Arc::new(mocks::EmptyTickets),
        Arc::new(mocks::EmptyTickets),
        Arc::new(mocks::EmptyAgents),
        Arc::new(mocks::EmptyAgentGroups),
        Arc::new(mocks::FixedClock),
        Arc::new(tickets_machine::infrastructure::util::DefaultSlugGenerator),
    )
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn send_json(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn read_text(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// レスポンスが `{error, message}` 形式の JSON エラーであることを確認する
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    assert_eq!(json["error"], expected_error);
    assert!(
        !json["message"].as_str().unwrap_or("").is_empty(),
        "expected non-empty message field"
    );
    json
}

/// チケット作成に必要なエージェント・グループ・ボード
pub struct Seed {
    pub agent_id: i64,
    pub group_id: i64,
    pub board_id: i64,
    pub board_slug: String,
}

pub async fn seed(services: &ApplicationServices, board_name: &str) -> Seed {
    use tickets_machine::application::commands::{
        agents::{CreateAgentCommand, CreateAgentGroupCommand},
        boards::CreateBoardCommand,
    };

    let agent = services
        .agent_commands
        .create_agent(CreateAgentCommand {
            name: "Alice".into(),
            zendesk_user_id: "u-100".into(),
        })
        .await
        .unwrap();
    let group = services
        .agent_commands
        .create_agent_group(CreateAgentGroupCommand {
            name: "Support".into(),
            zendesk_group_id: "g-200".into(),
        })
        .await
        .unwrap();
    let board = services
        .board_commands
        .create_board(CreateBoardCommand {
            name: board_name.into(),
            slug: None,
        })
        .await
        .unwrap();

    Seed {
        agent_id: agent.id,
        group_id: group.id,
        board_id: board.id,
        board_slug: board.slug,
    }
}

/// 有効なチケットフォームの値
pub fn ticket_form(seed: &Seed, subject: &str) -> Vec<(&'static str, String)> {
    vec![
        ("subject", subject.to_string()),
        ("comment", "Printer is on fire".to_string()),
        ("requester", "bob@example.com".to_string()),
        ("assignee", seed.agent_id.to_string()),
        ("group", seed.group_id.to_string()),
        ("ticket_type", "incident".to_string()),
        ("priority", "high".to_string()),
        ("tags", "printer hardware".to_string()),
        ("private_comment", String::new()),
        ("zendesk_ticket_id", String::new()),
        ("board", seed.board_id.to_string()),
    ]
}

pub fn as_pairs<'a>(fields: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
    fields.iter().map(|(k, v)| (*k, v.as_str())).collect()
}

pub fn set_field(fields: &mut [(&'static str, String)], name: &str, value: &str) {
    if let Some(entry) = fields.iter_mut().find(|(k, _)| *k == name) {
        entry.1 = value.to_string();
    }
}
