use crate::config::ServiceConfig;
use crate::error::{SurveyError, SurveyResult};
use crate::pipeline::{self, Submission};
use crate::protocol::{PredictionResult, ScoreRequest, ScoreResponse};
use crate::survey::SurveyResponse;
use reqwest::Client;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, error, info};

/// Thin wrapper over the remote `/score` endpoint.
pub struct ScoringClient {
    http: Client,
    url: String,
}

impl ScoringClient {
    pub fn new(config: &ServiceConfig) -> SurveyResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            url: config.score_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends one request and returns the decoded body. Non-2xx statuses are errors.
    pub async fn score(&self, request: &ScoreRequest) -> SurveyResult<ScoreResponse> {
        debug!("Sending request: {}", serde_json::to_string(request)?);

        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let body: ScoreResponse = response.json().await?;
        debug!("Response from model: {:?}", body.predictions);
        Ok(body)
    }

    /// Scores a prepared submission and reads the first classification.
    pub async fn classify(&self, submission: &Submission) -> SurveyResult<PredictionResult> {
        let body = self.score(&submission.request()).await?;
        Ok(PredictionResult::from_label(body.first()?))
    }
}

/// Runs the validate, compute, send sequence and allows one request at a time.
pub struct Submitter {
    client: ScoringClient,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Submitter {
    pub fn new(client: ScoringClient) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn acquire(&self) -> SurveyResult<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlightGuard(&self.in_flight))
            .map_err(|_| SurveyError::SubmissionInFlight)
    }

    /// Submits a survey snapshot.
    ///
    /// Validation failures and a pending earlier submission come back as
    /// `Err` with nothing sent. Once the request is on its way every failure
    /// is logged and reported as [`PredictionResult::Unavailable`].
    pub async fn submit(&self, survey: &SurveyResponse) -> SurveyResult<PredictionResult> {
        let submission = pipeline::prepare(survey)?;
        let _guard = self.acquire()?;

        info!(
            "📤 Submitting survey (BMI {:.2}) to {}",
            submission.bmi,
            self.client.url()
        );

        match self.client.classify(&submission).await {
            Ok(result) => {
                info!("✅ {}", result);
                Ok(result)
            }
            Err(e) => {
                error!("Failed to get a prediction: {}", e);
                Ok(PredictionResult::Unavailable)
            }
        }
    }
}
