// tests/e2e_board_pages.rs
use axum::http::StatusCode;
use tickets_machine::application::commands::tickets::{CreateTicketCommand, TicketInput};
use tickets_machine::application::commands::boards::CreateBoardCommand;
use tickets_machine::application::queries::tickets::{GetTicketQuery, ListBoardTicketsQuery};
use tower::util::ServiceExt as _;

mod support;
use support::{as_pairs, get, location, post_form, read_text, set_field, ticket_form};

async fn create_ticket(app: &support::TestApp, seed: &support::Seed, subject: &str) -> i64 {
    let input = TicketInput {
        subject: subject.into(),
        comment: "Printer is on fire".into(),
        requester: "bob@example.com".into(),
        assignee: Some(seed.agent_id),
        group: Some(seed.group_id),
        ticket_type: "question".into(),
        priority: "normal".into(),
        board: Some(seed.board_id),
        ..TicketInput::default()
    };
    app.services
        .ticket_commands
        .create_ticket(CreateTicketCommand { input })
        .await
        .unwrap()
        .id
}

/// ルートはボード一覧へ 302 でリダイレクトする
#[tokio::test]
async fn root_redirects_to_board_list() {
    let app = support::make_sqlite_app().await;
    let resp = app.router.oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/boards");
}

/// フォームからのボード作成はスラッグ付きページへリダイレクトする
#[tokio::test]
async fn board_form_creates_board_with_derived_slug() {
    let app = support::make_sqlite_app().await;

    let resp = app
        .router
        .clone()
        .oneshot(post_form("/boards", &[("name", "Pre-Production"), ("slug", "")]))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/boards/pre-production");

    let resp = app.router.oneshot(get("/boards")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = read_text(resp).await;
    assert!(html.contains(r#"<a href="/boards/pre-production">Pre-Production</a>"#));
}

#[tokio::test]
async fn board_form_with_taken_slug_rerenders_with_message() {
    let app = support::make_sqlite_app().await;
    support::seed(&app.services, "Ops").await;

    let resp = app
        .router
        .oneshot(post_form("/boards", &[("name", "Operations"), ("slug", "ops")]))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = read_text(resp).await;
    assert!(html.contains("already exists"), "{html}");
    assert!(html.contains(r#"value="Operations""#));
}

/// ボードページはチケット表と新規作成フォームを表示する
#[tokio::test]
async fn board_page_lists_tickets() {
    let app = support::make_sqlite_app().await;
    let seed = support::seed(&app.services, "Pre-Production").await;
    create_ticket(&app, &seed, "Printer <b>jam</b>").await;

    let resp = app
        .router
        .oneshot(get("/boards/pre-production"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = read_text(resp).await;
    assert!(html.contains("<th>Zendesk Ticket ID</th>"));
    assert!(html.contains("<th>Comment</th>"));
    assert!(html.contains("<th>Private Comment</th>"));
    assert!(html.contains("<td>Printer is on fire</td>"));
    assert!(html.contains("Printer &lt;b&gt;jam"));
    assert!(html.contains("<td>Alice</td>"));
    assert!(html.contains(r#"action="/boards/pre-production/tickets""#));
    assert!(html.contains(&format!(
        r#"<input type="hidden" id="id_board" name="board" value="{}">"#,
        seed.board_id
    )));
}

#[tokio::test]
async fn unknown_board_page_is_404() {
    let app = support::make_sqlite_app().await;
    let resp = app.router.oneshot(get("/boards/missing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ticket_form_on_board_page_creates_ticket() {
    let app = support::make_sqlite_app().await;
    let seed = support::seed(&app.services, "Pre-Production").await;
    let fields = ticket_form(&seed, "VPN down");

    let resp = app
        .router
        .oneshot(post_form("/boards/pre-production/tickets", &as_pairs(&fields)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/boards/pre-production");
    assert_eq!(app.services.ticket_queries.count_tickets().await.unwrap(), 1);
}

/// フォームに別のボードが送られても、チケットは URL のボードに作成される
#[tokio::test]
async fn ticket_form_uses_board_from_url() {
    let app = support::make_sqlite_app().await;
    let seed = support::seed(&app.services, "Pre-Production").await;
    let other = app
        .services
        .board_commands
        .create_board(CreateBoardCommand {
            name: "Billing".into(),
            slug: None,
        })
        .await
        .unwrap();

    let mut fields = ticket_form(&seed, "VPN down");
    set_field(&mut fields, "board", &other.id.to_string());

    let resp = app
        .router
        .oneshot(post_form("/boards/pre-production/tickets", &as_pairs(&fields)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/boards/pre-production");

    let here = app
        .services
        .ticket_queries
        .list_board_tickets(ListBoardTicketsQuery {
            board_id: seed.board_id,
        })
        .await
        .unwrap();
    let there = app
        .services
        .ticket_queries
        .list_board_tickets(ListBoardTicketsQuery { board_id: other.id })
        .await
        .unwrap();
    assert_eq!(here.len(), 1);
    assert!(there.is_empty());
}

/// 編集フォームには Back リンクと現在の値が表示される
#[tokio::test]
async fn edit_page_shows_back_link_and_values() {
    let app = support::make_sqlite_app().await;
    let seed = support::seed(&app.services, "Pre-Production").await;
    let id = create_ticket(&app, &seed, "VPN down").await;

    let resp = app
        .router
        .oneshot(get(&format!("/tickets/{id}/edit")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = read_text(resp).await;
    assert!(html.contains(r#"<a href="/boards/pre-production">Back</a>"#));
    assert!(html.contains(r#"value="VPN down""#));
    assert!(html.contains(r#"<input type="submit" value="Save">"#));
    assert!(html.contains("<th>Comment</th>"));
    assert!(html.contains("<th>Private Comment</th>"));
    assert!(html.contains("<td>VPN down</td>"));
}

/// 編集を送信すると値が保存され、ボードページへ 302 で戻る
#[tokio::test]
async fn edit_submit_persists_and_redirects() {
    let app = support::make_sqlite_app().await;
    let seed = support::seed(&app.services, "Pre-Production").await;
    let id = create_ticket(&app, &seed, "VPN down").await;

    let mut fields = ticket_form(&seed, "VPN down again");
    set_field(&mut fields, "priority", "urgent");
    set_field(&mut fields, "zendesk_ticket_id", "ZD-42");

    let resp = app
        .router
        .oneshot(post_form(&format!("/tickets/{id}/edit"), &as_pairs(&fields)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/boards/pre-production");

    let ticket = app
        .services
        .ticket_queries
        .get_ticket(GetTicketQuery { id })
        .await
        .unwrap();
    assert_eq!(ticket.subject, "VPN down again");
    assert_eq!(ticket.priority.as_str(), "urgent");
    assert_eq!(ticket.ticket_type.as_str(), "incident");
    assert_eq!(ticket.zendesk_ticket_id.as_deref(), Some("ZD-42"));
}

/// 不正な値はフォームを再表示し、保存しない
#[tokio::test]
async fn invalid_edit_rerenders_form_with_errors() {
    let app = support::make_sqlite_app().await;
    let seed = support::seed(&app.services, "Pre-Production").await;
    let id = create_ticket(&app, &seed, "VPN down").await;

    let mut fields = ticket_form(&seed, "");
    set_field(&mut fields, "assignee", "999");
    set_field(&mut fields, "priority", "whenever");

    let resp = app
        .router
        .oneshot(post_form(&format!("/tickets/{id}/edit"), &as_pairs(&fields)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = read_text(resp).await;
    assert!(html.contains("select a valid choice"), "{html}");
    assert!(html.contains(r#"<a href="/boards/pre-production">Back</a>"#));

    let ticket = app
        .services
        .ticket_queries
        .get_ticket(GetTicketQuery { id })
        .await
        .unwrap();
    assert_eq!(ticket.subject, "VPN down");
}

/// 削除するとチケット数が一つ減り、ボードページへ 302 で戻る
#[tokio::test]
async fn delete_removes_ticket_and_redirects() {
    let app = support::make_sqlite_app().await;
    let seed = support::seed(&app.services, "Pre-Production").await;
    let id = create_ticket(&app, &seed, "VPN down").await;
    create_ticket(&app, &seed, "Printer jam").await;
    let before = app.services.ticket_queries.count_tickets().await.unwrap();

    let resp = app
        .router
        .clone()
        .oneshot(get(&format!("/tickets/{id}/delete")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/boards/pre-production");
    assert_eq!(
        app.services.ticket_queries.count_tickets().await.unwrap(),
        before - 1
    );

    let resp = app
        .router
        .oneshot(get(&format!("/tickets/{id}/edit")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
