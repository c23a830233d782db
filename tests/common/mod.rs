#![allow(dead_code)]

use axum::{routing::post, Json, Router};
use cardio_risk::survey::{Field, SurveyResponse};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// The worked example: a 45-49 year old woman, 170 cm and 70 kg, who exercises.
pub const EXAMPLE_EDITS: &[(&str, &str)] = &[
    ("General_Health", "2"),
    ("Checkup", "4"),
    ("Exercise", "true"),
    ("Age_Category", "5"),
    ("Height_cm", "170"),
    ("Weight_kg", "70"),
    ("Alcohol_Consumption", "2"),
    ("Fruit_Consumption", "10"),
    ("Green_Vegetables_Consumption", "10"),
    ("FriedPotato_Consumption", "1"),
    ("Sex_Female", "true"),
];

pub const EXAMPLE_VECTOR: [f64; 19] = [
    2.0, 4.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 5.0, 170.0, 70.0, 24.22, 0.0, 2.0, 10.0, 10.0, 1.0,
    1.0, 0.0,
];

pub fn example_survey() -> SurveyResponse {
    EXAMPLE_EDITS
        .iter()
        .fold(SurveyResponse::default(), |s, (name, value)| {
            s.apply(name, *value).expect("example field names are valid")
        })
}

pub fn example_with(field: Field, value: &str) -> SurveyResponse {
    example_survey().update(field, value.into())
}

/// Serves `app` on an ephemeral port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let listener = TcpListener::bind(addr).await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

pub struct MockScorer {
    pub url: String,
    pub requests: Arc<Mutex<Vec<Value>>>,
}

impl MockScorer {
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// A scoring service that records every body it receives and always answers `reply`.
pub async fn spawn_scorer(reply: Value) -> MockScorer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let requests_for_handler = requests.clone();

    let app = Router::new().route(
        "/score",
        post(move |Json(body): Json<Value>| {
            let requests = requests_for_handler.clone();
            let reply = reply.clone();
            async move {
                requests.lock().unwrap().push(body);
                Json(reply)
            }
        }),
    );

    MockScorer {
        url: serve(app).await,
        requests,
    }
}

/// A local address with nothing listening on it.
pub fn dead_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
