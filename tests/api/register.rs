use crate::helpers::spawn_app;
use chrono::Utc;
use intake::domain::{MISSING_NAME_MESSAGE, today_in_jst};
use intake::routes::pages::REGISTERED_MESSAGE;
use std::collections::HashSet;
use wiremock::matchers;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn register_form_defaults_the_date_to_today() {
    let app = spawn_app().await;

    let response = app.get_register_form().await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    let today = today_in_jst(Utc::now()).to_string();
    assert!(body.contains(&format!(r#"name="engagement_date" value="{today}""#)));
}

#[tokio::test]
async fn blank_name_is_rejected_without_calling_the_store() {
    let app = spawn_app().await;

    Mock::given(matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .named("Store must not be called")
        .expect(0)
        .mount(&app.store_server)
        .await;

    for name in ["", "   ", "\t\n"] {
        let response = app.register(name, "2026-01-28", "卸売業").await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The form did not return 400 for name {name:?}"
        );
        let body = response.text().await.unwrap();
        assert!(body.contains(MISSING_NAME_MESSAGE));
        assert!(body.contains("卸売業</textarea>"), "Form values were not kept");
    }
}

#[tokio::test]
async fn malformed_date_is_rejected_without_calling_the_store() {
    let app = spawn_app().await;

    Mock::given(matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&app.store_server)
        .await;

    let response = app.register("テスト商事", "28/01/2026", "").await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn valid_submission_shows_the_generated_call_id() {
    let app = spawn_app().await;
    let store = app.mount_fake_store().await;

    let response = app
        .register("テスト商事", "2026-01-20", "ソフトウェア開発")
        .await;

    assert_eq!(200, response.status().as_u16());
    let body = response.text().await.unwrap();
    let call_ids = store.call_ids();
    assert_eq!(call_ids.len(), 1);
    assert!(body.contains(REGISTERED_MESSAGE));
    assert!(body.contains(&format!(r#"<code id="call-id">{}</code>"#, call_ids[0])));

    let row = &store.rows()[0];
    assert_eq!(row["customer_name"], "テスト商事");
    assert_eq!(row["engagement_date"], "2026-01-20");
    assert_eq!(row["business_desc"], "ソフトウェア開発");
}

#[tokio::test]
async fn form_fields_are_sent_to_the_store_as_submitted() {
    let app = spawn_app().await;
    let store = app.mount_fake_store().await;

    app.register("  テスト商事 ", "", "").await;

    let row = &store.rows()[0];
    assert_eq!(row["customer_name"], "  テスト商事 ");
    assert_eq!(
        row["engagement_date"],
        today_in_jst(Utc::now()).to_string().as_str()
    );
    assert_eq!(row["business_desc"], "");
}

#[tokio::test]
async fn every_submission_gets_a_distinct_call_id() {
    let app = spawn_app().await;
    let store = app.mount_fake_store().await;

    for i in 0..5 {
        let response = app
            .register(&format!("顧客{i}"), "2026-01-28", "")
            .await;
        assert_eq!(200, response.status().as_u16());
    }

    let call_ids = store.call_ids();
    let distinct: HashSet<_> = call_ids.iter().collect();
    assert_eq!(call_ids.len(), 5);
    assert_eq!(distinct.len(), 5);
    assert!(call_ids.iter().all(|id| !id.is_empty()));
}

#[tokio::test]
async fn store_failure_is_shown_to_the_user() {
    let app = spawn_app().await;

    Mock::given(matchers::path("/rest/v1/customers"))
        .and(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let response = app.register("テスト商事", "2026-01-28", "").await;

    assert_eq!(500, response.status().as_u16());
    let body = response.text().await.unwrap();
    assert!(body.contains("エラーが発生しました"));
    assert!(!body.contains(REGISTERED_MESSAGE));
}

#[tokio::test]
async fn malformed_store_response_is_shown_as_an_error() {
    let app = spawn_app().await;

    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&app.store_server)
        .await;

    let response = app.register("テスト商事", "2026-01-28", "").await;

    assert_eq!(500, response.status().as_u16());
    assert!(response.text().await.unwrap().contains("エラーが発生しました"));
}
