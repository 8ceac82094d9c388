//! Shared harness for HTTP and store tests.
//!
//! Every `TestApp` owns a fresh SQLite file in its own temp directory.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use holonet::http_server::{build_app, App, HttpServerConfig};
use holonet::schema::REGISTRY_SCHEMA;
use holonet::store::{NewCharacter, NewPlanet, NewUser, Store, User};

pub struct TestApp {
    pub store: Store,
    app: App,
    url: String,
    _dir: TempDir,
}

pub fn sqlite_url(dir: &TempDir) -> String {
    format!("sqlite://{}?mode=rwc", dir.path().join("holonet.db").display())
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let url = sqlite_url(&dir);
        let store = Store::open(&url, REGISTRY_SCHEMA).await.unwrap();
        let app = build_app(&HttpServerConfig::default(), store.clone());
        Self {
            store,
            app,
            url,
            _dir: dir,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        self.dispatch(request).await
    }

    /// Send a JSON-typed body verbatim, valid or not
    pub async fn send_raw(&self, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap();
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn post_empty(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, None).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn seed_user(&self, email: &str) -> User {
        self.store
            .create_user(NewUser {
                email: email.to_string(),
                password: "secret".to_string(),
                is_active: true,
            })
            .await
            .unwrap()
    }

    pub async fn seed_planet(&self, name: &str) -> i64 {
        self.store
            .create_planet(NewPlanet {
                name: name.to_string(),
                appearance: "blue".to_string(),
                terrain: "ocean".to_string(),
                climate: "temperate".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    pub async fn seed_character(&self, name: &str) -> i64 {
        self.store
            .create_character(NewCharacter {
                name: name.to_string(),
                appearance: "cloak".to_string(),
                affiliation: "Jedi".to_string(),
            })
            .await
            .unwrap()
            .id
    }
}
