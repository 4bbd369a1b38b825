//! Handler tests for the article chains.

use super::*;
use crate::domain::ResultCode;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::test_utils::{
    fixture_now, json_config, seeded_state, test_session_middleware,
};
use crate::inbound::http::users::{LoginRequest, login};
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::{Value, json};

async fn test_service()
-> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    actix_test::init_service(
        App::new()
            .app_data(seeded_state())
            .app_data(json_config())
            .wrap(test_session_middleware())
            .service(
                web::scope("/api/v1")
                    .service(login)
                    .service(list_articles)
                    .service(get_article)
                    .service(write_article)
                    .service(modify_article)
                    .service(delete_article),
            ),
    )
    .await
}

async fn login_as(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    username: &str,
) -> Cookie<'static> {
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(LoginRequest {
            username: username.into(),
            password: "1234".into(),
        })
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::OK, "fixture login succeeds");
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(|cookie| cookie.into_owned())
        .expect("session cookie set")
}

async fn write_as(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    cookie: Cookie<'static>,
    body: Value,
) -> ServiceResponse {
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/articles")
        .cookie(cookie)
        .set_json(body)
        .to_request();
    actix_test::call_service(app, request).await
}

#[rstest]
#[actix_web::test]
async fn write_then_get_returns_article() {
    let app = test_service().await;
    let cookie = login_as(&app, "user1").await;

    let written = write_as(&app, cookie, json!({"subject": "hello", "content": "world"})).await;
    assert_eq!(written.status(), StatusCode::OK);
    let body: Envelope<ArticleResponse> = actix_test::read_body_json(written).await;
    assert_eq!(body.code, ResultCode::ok());
    assert_eq!(body.message, "article 1 was created");

    let fetched = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/articles/1")
            .to_request(),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(fetched).await;
    assert_eq!(body["message"], "article 1 was found");
    assert_eq!(body["data"]["article"]["subject"], "hello");
    assert_eq!(body["data"]["article"]["author"], "user1");
    assert_eq!(
        body["data"]["article"]["createdAt"],
        json!(fixture_now())
    );
}

#[rstest]
#[actix_web::test]
async fn write_requires_session() {
    let app = test_service().await;
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/articles")
        .set_json(json!({"subject": "hello", "content": "world"}))
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "F-401");
    assert_eq!(body["message"], "login required");
}

#[rstest]
#[case(json!({"content": "world"}), "missing required field: subject", "subject")]
#[case(json!({"subject": " ", "content": "world"}), "subject must not be blank", "subject")]
#[case(json!({"subject": "hello", "content": ""}), "content must not be blank", "content")]
#[actix_web::test]
async fn write_rejects_invalid_fields(
    #[case] body: Value,
    #[case] message: &str,
    #[case] field: &str,
) {
    let app = test_service().await;
    let cookie = login_as(&app, "user1").await;

    let response = write_as(&app, cookie, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "F-400");
    assert_eq!(body["message"], message);
    assert_eq!(body["details"]["field"], field);
}

#[rstest]
#[actix_web::test]
async fn missing_article_is_not_found() {
    let app = test_service().await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/articles/999")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "F-404");
    assert_eq!(body["message"], "article 999 does not exist");
    assert!(body["data"].is_null());
}

#[rstest]
#[actix_web::test]
async fn non_numeric_id_is_invalid() {
    let app = test_service().await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/articles/first")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"]["code"], "invalid_id");
}

#[rstest]
#[actix_web::test]
async fn author_can_modify_and_absent_fields_are_kept() {
    let app = test_service().await;
    let cookie = login_as(&app, "user1").await;
    write_as(&app, cookie.clone(), json!({"subject": "hello", "content": "world"})).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::patch()
            .uri("/api/v1/articles/1")
            .cookie(cookie)
            .set_json(json!({"subject": "renamed"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "article 1 was modified");
    assert_eq!(body["data"]["article"]["subject"], "renamed");
    assert_eq!(body["data"]["article"]["content"], "world");
}

#[rstest]
#[actix_web::test]
async fn other_member_is_forbidden_to_modify() {
    let app = test_service().await;
    let author = login_as(&app, "user1").await;
    write_as(&app, author, json!({"subject": "hello", "content": "world"})).await;
    let intruder = login_as(&app, "user2").await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::patch()
            .uri("/api/v1/articles/1")
            .cookie(intruder)
            .set_json(json!({"subject": "hijacked"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "F-403");
    assert_eq!(body["message"], "you may not modify article 1");

    let listing = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/articles").to_request(),
    )
    .await;
    let listing: Value = actix_test::read_body_json(listing).await;
    assert_eq!(listing["data"]["articles"][0]["subject"], "hello");
}

#[rstest]
#[actix_web::test]
async fn modify_of_missing_article_is_not_found() {
    let app = test_service().await;
    let cookie = login_as(&app, "user1").await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::patch()
            .uri("/api/v1/articles/7")
            .cookie(cookie)
            .set_json(json!({"subject": "renamed"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "article 7 does not exist");
}

#[rstest]
#[actix_web::test]
async fn author_can_delete_once() {
    let app = test_service().await;
    let cookie = login_as(&app, "user1").await;
    write_as(&app, cookie.clone(), json!({"subject": "hello", "content": "world"})).await;
    let delete = || {
        actix_test::TestRequest::delete()
            .uri("/api/v1/articles/1")
            .cookie(cookie.clone())
            .to_request()
    };

    let first = actix_test::call_service(&app, delete()).await;
    assert_eq!(first.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(first).await;
    assert_eq!(body["message"], "article 1 was deleted");
    assert_eq!(body["data"]["article"]["id"], 1);

    let second = actix_test::call_service(&app, delete()).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn other_member_is_forbidden_to_delete() {
    let app = test_service().await;
    let author = login_as(&app, "user1").await;
    write_as(&app, author, json!({"subject": "hello", "content": "world"})).await;
    let intruder = login_as(&app, "user2").await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/api/v1/articles/1")
            .cookie(intruder)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "you may not delete article 1");
}

#[rstest]
#[actix_web::test]
async fn listing_is_newest_first() {
    let app = test_service().await;
    let cookie = login_as(&app, "user1").await;
    for subject in ["first", "second"] {
        write_as(&app, cookie.clone(), json!({"subject": subject, "content": "body"})).await;
    }

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/articles").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Envelope<ArticlesResponse> = actix_test::read_body_json(response).await;
    let subjects: Vec<String> = body
        .data
        .expect("listing payload")
        .articles
        .iter()
        .map(|article| article.subject().as_ref().to_owned())
        .collect();
    assert_eq!(subjects, ["second", "first"]);
}
