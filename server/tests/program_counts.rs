use axum::{
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use planner_payloads::ACK_MESSAGE;
use serde_json::{Value, json};
use tower::ServiceExt;

fn post_counts(body: &str) -> Request<Body> {
    Request::post("/api/program-counts")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn valid_submission_gets_fixed_acknowledgment() {
    let response = planner_server::app()
        .oneshot(post_counts(
            r#"{"category":"FDP","programType":"Online","count":5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response.into_body()).await,
        json!({"message": ACK_MESSAGE})
    );
}

#[tokio::test]
async fn empty_object_is_accepted() {
    // No schema enforcement on the endpoint.
    let response = planner_server::app().oneshot(post_counts("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response.into_body()).await,
        json!({"message": ACK_MESSAGE})
    );
}

#[tokio::test]
async fn arbitrary_json_is_accepted() {
    let response = planner_server::app()
        .oneshot(post_counts(r#"{"category":"Conference","count":-3}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn undecodable_body_is_a_bad_request() {
    let response = planner_server::app()
        .oneshot(post_counts("not json at all"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
