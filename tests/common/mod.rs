#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::{self, Next},
    response::Response,
    Router,
};
use hrtist_admin::{config::Config, AppState};
use serde_json::{json, Value as JsonValue};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Hit {
    pub method: String,
    pub path: String,
    pub headers: HeaderMap,
}

type Hits = Arc<Mutex<Vec<Hit>>>;

/// Stand-in for the recruitment backend, listening on an ephemeral port.
pub struct FakeBackend {
    pub base_url: String,
    hits: Hits,
}

impl FakeBackend {
    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }

    pub fn config(&self) -> Config {
        Config::for_backend(&self.base_url)
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(&self.config()).expect("app state")
    }
}

async fn record_hit(State(hits): State<Hits>, req: Request<Body>, next: Next) -> Response {
    hits.lock().unwrap().push(Hit {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        headers: req.headers().clone(),
    });
    next.run(req).await
}

pub async fn spawn_backend(router: Router) -> FakeBackend {
    let hits: Hits = Arc::new(Mutex::new(Vec::new()));
    let app = router.layer(middleware::from_fn_with_state(hits.clone(), record_hit));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fake backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake backend crashed");
    });

    FakeBackend {
        base_url: format!("http://{}", addr),
        hits,
    }
}

pub fn candidate_json(id: i64, nom: &str, prenom: &str) -> JsonValue {
    json!({
        "id": id,
        "nom": nom,
        "prenom": prenom,
        "email": format!("{}.{}@email.com", prenom.to_lowercase(), nom.to_lowercase()),
        "statut": "new",
        "competences": ["Rust"],
        "date_candidature": "2024-03-01T10:00:00Z",
    })
}
