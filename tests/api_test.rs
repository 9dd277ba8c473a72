//! Integration tests for the HTTP routes.
//!
//! Requests go through the full router (session gate included) over
//! in-memory stores.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{
    body_json, body_text, form_request, get_request, json_request, location, session_cookie,
    TestApp,
};
use employee_portal::api::HttpSettings;

// =============================================================================
// REST API
// =============================================================================

#[tokio::test]
async fn test_api_create_get_delete_roundtrip() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            "POST",
            "/employees/api",
            json!({"name": "Ann", "age": 30, "department": "Eng", "skills": "Go"}),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["message"], "Employee created");
    assert_eq!(created["employee"]["skills"], json!(["Go"]));
    let id = created["employee"]["id"].as_str().unwrap().to_string();

    let response = app
        .send(get_request(&format!("/employees/api/{}", id), None))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created["employee"]);

    let response = app
        .send(json_request("DELETE", &format!("/employees/api/{}", id), json!({})))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": "Employee deleted"}));

    let response = app
        .send(get_request(&format!("/employees/api/{}", id), None))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_rejects_unknown_fields() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            "POST",
            "/employees/api",
            json!({"name": "Mallory", "id": "00000000-0000-0000-0000-000000000000"}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(app.employees.count().await, 0);
}

#[tokio::test]
async fn test_api_update_keeps_absent_fields() {
    let app = TestApp::new();

    let created = body_json(
        app.send(json_request(
            "POST",
            "/employees/api",
            json!({"name": "Ann", "department": "Eng", "skills": ["Go", "SQL"]}),
        ))
        .await,
    )
    .await;
    let id = created["employee"]["id"].as_str().unwrap().to_string();

    let response = app
        .send(json_request(
            "PUT",
            &format!("/employees/api/{}", id),
            json!({"department": "Ops", "experience": 4}),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["message"], "Employee updated");
    assert_eq!(updated["employee"]["name"], "Ann");
    assert_eq!(updated["employee"]["department"], "Ops");
    assert_eq!(updated["employee"]["yearsExperience"], 4);
    assert_eq!(updated["employee"]["skills"], json!(["Go", "SQL"]));
}

#[tokio::test]
async fn test_api_missing_records() {
    let app = TestApp::new();
    let id = uuid::Uuid::new_v4();

    let response = app
        .send(json_request("PUT", &format!("/employees/api/{}", id), json!({"name": "X"})))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .send(json_request("DELETE", &format!("/employees/api/{}", id), json!({})))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.send(get_request("/employees/api/not-a-uuid", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_delete_unknown_id_keeps_records() {
    let app = TestApp::new();
    app.send(json_request("POST", "/employees/api", json!({"name": "Ann"})))
        .await;

    let response = app
        .send(json_request(
            "DELETE",
            &format!("/employees/api/{}", uuid::Uuid::new_v4()),
            json!({}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.employees.count().await, 1);
}

#[tokio::test]
async fn test_api_list_in_insertion_order() {
    let app = TestApp::new();
    for name in ["Ann", "Bob", "Cy"] {
        app.send(json_request("POST", "/employees/api", json!({"name": name})))
            .await;
    }

    let response = app.send(get_request("/employees/api", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let names: Vec<String> = body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Ann", "Bob", "Cy"]);
}

#[tokio::test]
async fn test_api_guard_when_enabled() {
    let app = TestApp::with_settings(HttpSettings {
        api_require_session: true,
        ..Default::default()
    });

    let response = app.send(get_request("/employees/api", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.employees.calls(), 0);

    let cookie = app.sign_in("ann", "pw").await;
    let response = app.send(get_request("/employees/api", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// HTML pages and sessions
// =============================================================================

#[tokio::test]
async fn test_guarded_page_redirects_without_store_call() {
    let app = TestApp::new();

    let response = app.send(get_request("/employees", None)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
    assert_eq!(app.employees.calls(), 0);
}

#[tokio::test]
async fn test_forged_cookie_is_redirected() {
    let app = TestApp::new();

    let response = app
        .send(get_request("/employees", Some("sid=not-a-real-session")))
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
}

#[tokio::test]
async fn test_register_login_and_list() {
    let app = TestApp::new();

    let response = app
        .send(form_request("/register", "username=ann&password=pa55", None))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));

    let response = app
        .send(form_request("/login", "username=ann&password=pa55", None))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/employees"));
    let set_cookie = response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
    let cookie = session_cookie(&response).unwrap();

    let response = app.send(get_request("/employees", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Signed in as ann"));
}

#[tokio::test]
async fn test_login_failures() {
    let app = TestApp::new();
    app.send(form_request("/register", "username=ann&password=pa55", None))
        .await;

    let response = app
        .send(form_request("/login", "username=bob&password=pa55", None))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&response).is_none());
    assert_eq!(body_text(response).await, "User not found");

    let response = app
        .send(form_request("/login", "username=ann&password=wrong", None))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(response).await, "Incorrect password");

    assert!(app.sessions.is_empty().await);
}

#[tokio::test]
async fn test_duplicate_registration_fails() {
    let app = TestApp::new();
    app.send(form_request("/register", "username=ann&password=first", None))
        .await;

    let response = app
        .send(form_request("/register", "username=ann&password=second", None))
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error registering user");

    // The original password still works
    let response = app
        .send(form_request("/login", "username=ann&password=first", None))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::new();
    let cookie = app.sign_in("ann", "pw").await;

    let response = app.send(get_request("/logout", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));

    let response = app.send(get_request("/employees", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
}

#[tokio::test]
async fn test_form_create_edit_and_delete() {
    let app = TestApp::new();
    let cookie = app.sign_in("ann", "pw").await;

    let response = app
        .send(form_request(
            "/employees",
            "name=Bob&age=41&dob=1983-02-01&skills=Go&skills=Rust",
            Some(&cookie),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/employees"));

    let listed = body_json(app.send(get_request("/employees/api", None)).await).await;
    let employee = &listed[0];
    assert_eq!(employee["age"], 41);
    assert_eq!(employee["dateOfBirth"], "1983-02-01");
    assert_eq!(employee["skills"], json!(["Go", "Rust"]));
    let id = employee["id"].as_str().unwrap().to_string();

    let response = app
        .send(get_request(&format!("/employees/{}/edit", id), Some(&cookie)))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Bob");

    let response = app
        .send(form_request(
            &format!("/employees/{}", id),
            "name=Robert&skills=SQL",
            Some(&cookie),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let updated = body_json(
        app.send(get_request(&format!("/employees/api/{}", id), None))
            .await,
    )
    .await;
    assert_eq!(updated["name"], "Robert");
    assert_eq!(updated["age"], 41);
    assert_eq!(updated["skills"], json!(["SQL"]));

    let response = app
        .send(form_request(&format!("/employees/{}/delete", id), "", Some(&cookie)))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(app.employees.count().await, 0);
}

#[tokio::test]
async fn test_form_update_without_skills_keeps_them() {
    let app = TestApp::new();
    let cookie = app.sign_in("ann", "pw").await;
    let created = body_json(
        app.send(json_request(
            "POST",
            "/employees/api",
            json!({"name": "Ann", "skills": ["Go", "SQL"]}),
        ))
        .await,
    )
    .await;
    let id = created["employee"]["id"].as_str().unwrap().to_string();

    let response = app
        .send(form_request(&format!("/employees/{}", id), "name=Annie", Some(&cookie)))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let updated = body_json(
        app.send(get_request(&format!("/employees/api/{}", id), None))
            .await,
    )
    .await;
    assert_eq!(updated["name"], "Annie");
    assert_eq!(updated["skills"], json!(["Go", "SQL"]));
}

#[tokio::test]
async fn test_get_delete_still_supported() {
    let app = TestApp::new();
    let cookie = app.sign_in("ann", "pw").await;
    let created = body_json(
        app.send(json_request("POST", "/employees/api", json!({"name": "Ann"})))
            .await,
    )
    .await;
    let id = created["employee"]["id"].as_str().unwrap().to_string();

    let response = app
        .send(get_request(&format!("/employees/{}/delete", id), Some(&cookie)))
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(app.employees.count().await, 0);
}

#[tokio::test]
async fn test_edit_missing_employee() {
    let app = TestApp::new();
    let cookie = app.sign_in("ann", "pw").await;

    let response = app
        .send(get_request(
            &format!("/employees/{}/edit", uuid::Uuid::new_v4()),
            Some(&cookie),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Employee not found");
}

// =============================================================================
// Health and docs
// =============================================================================

#[tokio::test]
async fn test_health_without_database() {
    let app = TestApp::new();

    let response = app.send(get_request("/health", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["sessions"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = TestApp::new();

    let response = app.send(get_request("/api-docs/openapi.json", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/employees/api/{id}"].is_object());
}
