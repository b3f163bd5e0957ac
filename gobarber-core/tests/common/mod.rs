#![allow(dead_code)]

use gobarber_core::App;
use gobarber_core::api::ApiClient;
use gobarber_core::session::{Auth, AuthSession, SessionStore};
use gobarber_core::user::User;
use tempfile::TempDir;
use url::Url;
use wiremock::MockServer;

pub fn user() -> User {
    User {
        id: "provider-1".into(),
        name: "Ana Barbeira".into(),
        email: "ana@example.com".into(),
        avatar_url: None,
    }
}

/// An app pointed at `server`, with its session file in a fresh temp dir.
pub fn app(server: &MockServer, signed_in: bool) -> (App, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("session.json"));

    if signed_in {
        store
            .save(&AuthSession {
                token: "t0k".into(),
                user: user(),
            })
            .unwrap();
    }

    let api = ApiClient::with_http(reqwest::Client::new(), Url::parse(&server.uri()).unwrap());
    let app = App::with_api(api, Auth::load(store).unwrap());
    (app, dir)
}
