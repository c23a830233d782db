use crate::error::{SurveyError, SurveyResult};
use crate::pipeline::FeatureVector;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const HIGHER_RISK_MESSAGE: &str = "You have a higher risk of cardiovascular diseases.";
pub const LOWER_RISK_MESSAGE: &str = "You are at lower risk for cardiovascular diseases.";
pub const FAILURE_MESSAGE: &str = "Failed to get a prediction.";
pub const DISCLAIMER: &str =
    "Disclaimer: This prediction is based on a machine learning model and is not entirely accurate.";

/// Body of `POST /score`: a matrix with one row per survey.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScoreRequest {
    pub data: Vec<FeatureVector>,
}

impl ScoreRequest {
    pub fn single(features: FeatureVector) -> Self {
        Self {
            data: vec![features],
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScoreResponse {
    pub predictions: Vec<Value>,
}

impl ScoreResponse {
    /// Classification for the first (and only) submitted row.
    pub fn first(&self) -> SurveyResult<&Value> {
        self.predictions.first().ok_or_else(|| {
            SurveyError::MalformedResponse("predictions array is empty".to_string())
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionResult {
    HigherRisk,
    LowerRisk,
    Unavailable,
}

impl PredictionResult {
    /// Only a numeric `1` means higher risk; every other label reads as lower risk.
    pub fn from_label(label: &Value) -> Self {
        if label.as_f64() == Some(1.0) {
            Self::HigherRisk
        } else {
            Self::LowerRisk
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::HigherRisk => HIGHER_RISK_MESSAGE,
            Self::LowerRisk => LOWER_RISK_MESSAGE,
            Self::Unavailable => FAILURE_MESSAGE,
        }
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
