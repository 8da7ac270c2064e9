//! Canned random-user payloads for tests.
//!
//! Records are numbered: record `i` has uuid `uuid-{i}`, name `First{i} Last{i}`
//! and thumbnail `https://randomuser.me/api/portraits/thumb/women/{i}.jpg`.

use serde_json::{Value, json};

pub fn sample_user_json(index: usize) -> Value {
    json!({
        "gender": "female",
        "name": { "title": "Ms", "first": format!("First{index}"), "last": format!("Last{index}") },
        "location": { "city": "Oslo", "country": format!("Country{index}") },
        "email": format!("user{index}@example.com"),
        "login": { "uuid": format!("uuid-{index}"), "username": format!("user{index}") },
        "phone": format!("555-01{index:02}"),
        "picture": {
            "large": format!("https://randomuser.me/api/portraits/women/{index}.jpg"),
            "thumbnail": format!("https://randomuser.me/api/portraits/thumb/women/{index}.jpg")
        },
        "nat": "NO"
    })
}

pub fn sample_users_json(count: usize) -> Value {
    json!({
        "results": (0..count).map(sample_user_json).collect::<Vec<_>>(),
        "info": { "seed": "abc", "results": count, "page": 1, "version": "1.4" }
    })
}

pub fn sample_users_body(count: usize) -> String {
    sample_users_json(count).to_string()
}

pub fn json_response(body: impl Into<Vec<u8>>) -> ehttp::Result<ehttp::Response> {
    Ok(response(200, body.into()))
}

pub fn error_response(status: u16) -> ehttp::Result<ehttp::Response> {
    Ok(response(status, Vec::new()))
}

fn response(status: u16, bytes: Vec<u8>) -> ehttp::Response {
    ehttp::Response {
        url: String::new(),
        ok: (200..300).contains(&status),
        status,
        status_text: String::new(),
        headers: Default::default(),
        bytes,
    }
}
