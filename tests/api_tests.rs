//! API integration tests
//!
//! These tests expect a running server with a migrated database.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8080/api/v1";

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_nanos()
}

/// Build an email address unique to this test run
fn unique_email(prefix: &str) -> String {
    format!("{}-{}@test.example", prefix, unique_suffix())
}

/// Build an equipment code unique to this test run
fn unique_code(prefix: &str) -> String {
    format!("{}-{}", prefix, unique_suffix())
}

/// Sign up a fresh account, optionally with an invited role
///
/// Returns the bearer token and the signup response body.
async fn signup(client: &Client, prefix: &str, role: Option<&str>) -> (String, Value) {
    let email = unique_email(prefix);
    let url = match role {
        Some(role) => format!("{}/auth/signup?role={}", BASE_URL, role),
        None => format!("{}/auth/signup", BASE_URL),
    };

    let response = client
        .post(url)
        .json(&json!({
            "email": email,
            "password": "secret123",
            "full_name": "Test User"
        }))
        .send()
        .await
        .expect("Failed to send signup request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse signup response");
    let token = body["token"].as_str().expect("No token in response").to_string();
    (token, body)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_signup_and_login() {
    let client = Client::new();
    let email = unique_email("login");

    let response = client
        .post(format!("{}/auth/signup", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "secret123",
            "full_name": "Login Test"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["role"], "viewer");

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["email"], email);
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();
    let (_, body) = signup(&client, "badpass", None).await;
    let email = body["user"]["email"].as_str().expect("No email");

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_get_current_user() {
    let client = Client::new();
    let (token, body) = signup(&client, "me", None).await;
    let email = body["user"]["email"].as_str().expect("No email").to_string();

    let response = client
        .get(format!("{}/auth/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], email);
    assert_eq!(body["role"], "viewer");
}

#[tokio::test]
#[ignore]
async fn test_invited_role_granted_at_signup() {
    let client = Client::new();
    let (_, body) = signup(&client, "invited", Some("editor")).await;

    assert_eq!(body["user"]["role"], "editor");

    // A second signup with the same email is rejected, so the invite
    // role can never be applied to an existing account.
    let email = body["user"]["email"].as_str().expect("No email");
    let response = client
        .post(format!("{}/auth/signup?role=admin", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/equipment", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_viewer_cannot_edit() {
    let client = Client::new();
    let (token, _) = signup(&client, "viewer", None).await;

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Viewer Crane",
            "type": "Crane",
            "equipment_id": unique_code("VC")
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_equipment_crud() {
    let client = Client::new();
    let (token, _) = signup(&client, "equip", Some("editor")).await;
    let code = unique_code("CR");

    // Create
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Tower Crane",
            "type": "Crane",
            "equipment_id": code,
            "description": "40m tower crane"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_str().expect("No equipment ID").to_string();
    assert_eq!(body["type"], "Crane");

    // Read
    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    // Update
    let response = client
        .put(format!("{}/equipment/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "Tower Crane 2" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Tower Crane 2");
    assert_eq!(body["equipment_id"], code);

    // Delete
    let response = client
        .delete(format!("{}/equipment/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_equipment_code_rejected() {
    let client = Client::new();
    let (token, _) = signup(&client, "dup", Some("editor")).await;
    let code = unique_code("DUP");

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Excavator",
            "type": "Excavator",
            "equipment_id": code
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let before: Value = client
        .get(format!("{}/equipment", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    // Same code again is rejected
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Excavator Copy",
            "type": "Excavator",
            "equipment_id": code
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);

    // The rejected create must not have touched the list
    let after: Value = client
        .get(format!("{}/equipment", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(
        before.as_array().expect("Not an array").len(),
        after.as_array().expect("Not an array").len()
    );
}

#[tokio::test]
#[ignore]
async fn test_schedule_entry_and_grid() {
    let client = Client::new();
    let (token, _) = signup(&client, "grid", Some("editor")).await;

    // Create equipment and a location to schedule
    let equipment: Value = client
        .post(format!("{}/equipment", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Crane A",
            "type": "Crane",
            "equipment_id": unique_code("GRID")
        }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let equipment_id = equipment["id"].as_str().expect("No equipment ID");

    let location: Value = client
        .post(format!("{}/locations", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "job_name": "Downtown Site",
            "address": "1 Main St"
        }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let location_id = location["id"].as_str().expect("No location ID");

    // Monday 9-11
    let response = client
        .post(format!("{}/schedule/entries", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "equipment_id": equipment_id,
            "location_id": location_id,
            "day_of_week": 1,
            "start_hour": 9,
            "end_hour": 11
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let entry: Value = response.json().await.expect("Failed to parse response");
    let entry_id = entry["id"].as_str().expect("No entry ID");

    // The grid places the entry once, on Monday, at its start hour
    let grid: Value = client
        .get(format!("{}/schedule/grid?equipment_id={}", BASE_URL, equipment_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let rows = grid["rows"].as_array().expect("No rows");
    assert_eq!(rows.len(), 1);

    let days = rows[0]["days"].as_array().expect("No days");
    assert_eq!(days.len(), 7);

    let mut placements = 0;
    for day in days {
        for block in day["blocks"].as_array().expect("No blocks") {
            if block["entry"]["id"].as_str() == Some(entry_id) {
                placements += 1;
                assert_eq!(day["day_of_week"], 1);
                assert_eq!(block["duration"], 2);
                assert_eq!(block["time_label"], "9:00 AM - 11:00 AM");
            }
        }
    }
    assert_eq!(placements, 1);

    // Cleanup
    let response = client
        .delete(format!("{}/schedule/entries/{}", BASE_URL, entry_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_settings_update_is_idempotent() {
    let client = Client::new();
    let (token, _) = signup(&client, "settings", Some("admin")).await;

    let original: Value = client
        .get(format!("{}/settings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert!(original["start_hour"].is_number());
    assert!(original["end_hour"].is_number());

    // Save twice; the second save must see and return the same window
    for _ in 0..2 {
        let response = client
            .put(format!("{}/settings", BASE_URL))
            .header("Authorization", format!("Bearer {}", token))
            .json(&json!({ "start_hour": 7, "end_hour": 17 }))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());

        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["start_hour"], 7);
        assert_eq!(body["end_hour"], 17);
    }

    // Restore the original window
    let response = client
        .put(format!("{}/settings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&original)
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_settings_rejects_bad_window() {
    let client = Client::new();
    let (token, _) = signup(&client, "badwindow", Some("admin")).await;

    let response = client
        .put(format!("{}/settings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "start_hour": 18, "end_hour": 6 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_settings_require_admin() {
    let client = Client::new();
    let (token, _) = signup(&client, "noadmin", Some("editor")).await;

    let response = client
        .put(format!("{}/settings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "start_hour": 8, "end_hour": 16 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_invite_link() {
    let client = Client::new();
    let (token, _) = signup(&client, "invite", Some("admin")).await;

    let response = client
        .post(format!("{}/users/invite", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "role": "editor" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let url = body["invite_url"].as_str().expect("No invite URL");
    assert!(url.ends_with("/auth?role=editor"));
}

#[tokio::test]
#[ignore]
async fn test_cannot_change_own_role() {
    let client = Client::new();
    let (token, body) = signup(&client, "selfrole", Some("admin")).await;
    let user_id = body["user"]["id"].as_str().expect("No user ID");

    let response = client
        .put(format!("{}/users/{}/role", BASE_URL, user_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "role": "viewer" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}
