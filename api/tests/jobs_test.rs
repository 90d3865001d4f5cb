//! Job posting, ownership and search over HTTP

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::bearer;

fn titles(jobs: &Value) -> Vec<&str> {
    jobs.as_array()
        .unwrap()
        .iter()
        .map(|j| j["title"].as_str().unwrap())
        .collect()
}

#[actix_web::test]
async fn test_create_job_normalizes_tags() {
    let state = common::state();
    let (company_id, token) = common::company(&state, "hr@acme.io").await;
    let app = test::init_service(common::app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/jobs/")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Backend Engineer",
            "description": "Build APIs",
            "location": "Remote, EU",
            "job_type": "remote",
            "job_level": "senior",
            "salary_min": 60000,
            "tag_names": ["Python", " PYTHON ", "go"],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let job: Value = test::read_body_json(resp).await;
    let tags: Vec<&str> = job["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["go", "python"]);
    assert_eq!(job["company_id"], company_id);
    assert_eq!(job["company"]["email"], "hr@acme.io");
    assert!(job["company"].get("jobs").is_none());
    assert_eq!(job["job_type"], "remote");
    assert_eq!(job["is_active"], true);

    let req = test::TestRequest::get().uri("/tags/").to_request();
    let tags: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(tags.as_array().unwrap().len(), 2);
    assert_eq!(tags[0]["name"], "go");
}

#[actix_web::test]
async fn test_create_job_rejects_bad_input() {
    let state = common::state();
    let (_, token) = common::company(&state, "hr@acme.io").await;
    let user_token = common::user(&state, "dev@example.com").await;
    let app = test::init_service(common::app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/jobs/")
        .insert_header(bearer(&token))
        .set_json(json!({"title": "Backend", "description": "x", "salary_max": -5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = test::TestRequest::post()
        .uri("/jobs/")
        .insert_header(bearer(&token))
        .set_json(json!({"title": "Backend", "description": "x", "job_type": "freelance"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = test::TestRequest::post()
        .uri("/jobs/")
        .insert_header(bearer(&user_token))
        .set_json(json!({"title": "Backend", "description": "x"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_only_owner_may_change_a_job() {
    let state = common::state();
    let (_, owner) = common::company(&state, "a@acme.io").await;
    let (_, other) = common::company(&state, "b@initech.io").await;
    let job_id = common::job(&state, &owner, "Backend", &["rust"]).await;
    let app = test::init_service(common::app(state.clone())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/jobs/{}", job_id))
        .insert_header(bearer(&other))
        .set_json(json!({"title": "Hijacked"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&format!("/jobs/{}", job_id))
        .insert_header(bearer(&other))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri(&format!("/jobs/{}", job_id))
        .to_request();
    let job: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(job["title"], "Backend");
}

#[actix_web::test]
async fn test_update_replaces_tags_and_deactivates() {
    let state = common::state();
    let (_, token) = common::company(&state, "hr@acme.io").await;
    let job_id = common::job(&state, &token, "Backend", &["rust", "sql"]).await;
    let app = test::init_service(common::app(state.clone())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/jobs/{}", job_id))
        .insert_header(bearer(&token))
        .set_json(json!({"tag_names": ["Go"], "is_active": false, "location": null}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let job: Value = test::read_body_json(resp).await;
    assert_eq!(job["tags"].as_array().unwrap().len(), 1);
    assert_eq!(job["tags"][0]["name"], "go");
    assert_eq!(job["is_active"], false);
    assert_eq!(job["title"], "Backend");
}

#[actix_web::test]
async fn test_delete_job() {
    let state = common::state();
    let (_, token) = common::company(&state, "hr@acme.io").await;
    let job_id = common::job(&state, &token, "Backend", &[]).await;
    let app = test::init_service(common::app(state.clone())).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/jobs/{}", job_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/jobs/{}", job_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_search_pagination_returns_newest_first() {
    let state = common::state();
    let (_, token) = common::company(&state, "hr@acme.io").await;
    common::job(&state, &token, "First", &[]).await;
    common::job(&state, &token, "Second", &[]).await;
    let app = test::init_service(common::app(state.clone())).await;

    let req = test::TestRequest::get().uri("/jobs/?limit=1").to_request();
    let jobs: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles(&jobs), vec!["Second"]);

    let req = test::TestRequest::get().uri("/jobs/?skip=1&limit=1").to_request();
    let jobs: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles(&jobs), vec!["First"]);
}

#[actix_web::test]
async fn test_search_filters() {
    let state = common::state();
    let (_, token) = common::company(&state, "hr@acme.io").await;
    common::job(&state, &token, "Rust", &["rust"]).await;
    common::job(&state, &token, "Python", &["python"]).await;
    common::job(&state, &token, "Java", &["java"]).await;
    let hidden = common::job(&state, &token, "Hidden Rust", &["rust"]).await;
    let app = test::init_service(common::app(state.clone())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/jobs/{}", hidden))
        .insert_header(bearer(&token))
        .set_json(json!({"is_active": false}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/jobs/?tags=Rust,%20python")
        .to_request();
    let jobs: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles(&jobs), vec!["Python", "Rust"]);

    let req = test::TestRequest::get()
        .uri("/jobs/?tags=rust&is_active=false")
        .to_request();
    let jobs: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles(&jobs), vec!["Hidden Rust"]);

    let req = test::TestRequest::get()
        .uri("/jobs/company/my-jobs")
        .insert_header(bearer(&token))
        .to_request();
    let jobs: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(jobs.as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn test_search_rejects_bad_parameters() {
    let app = test::init_service(common::app(common::state())).await;

    for uri in [
        "/jobs/?limit=0",
        "/jobs/?limit=101",
        "/jobs/?salary_min=-1",
        "/jobs/?job_type=freelance",
        "/jobs/?skip=abc",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
    }
}

#[actix_web::test]
async fn test_unknown_and_malformed_job_ids() {
    let app = test::init_service(common::app(common::state())).await;

    let req = test::TestRequest::get().uri("/jobs/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "NOT_FOUND");

    let req = test::TestRequest::get().uri("/jobs/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_company_listing_includes_jobs() {
    let state = common::state();
    let (_, token) = common::company(&state, "hr@acme.io").await;
    common::company(&state, "empty@initech.io").await;
    common::job(&state, &token, "Backend", &[]).await;
    let app = test::init_service(common::app(state.clone())).await;

    let req = test::TestRequest::get().uri("/companies/").to_request();
    let companies: Value = test::call_and_read_body_json(&app, req).await;
    let companies = companies.as_array().unwrap();

    assert_eq!(companies.len(), 2);
    assert_eq!(companies[0]["email"], "hr@acme.io");
    assert_eq!(companies[0]["jobs"][0]["title"], "Backend");
    assert_eq!(companies[1]["jobs"], json!([]));

    let req = test::TestRequest::get().uri("/companies/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
