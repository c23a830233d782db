use crate::error::{SurveyError, SurveyResult};
use crate::protocol::ScoreRequest;
use crate::survey::{options, Field, SurveyResponse};
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use tracing::debug;

pub const FEATURE_COUNT: usize = 19;

/// Column order expected by the scoring model.
pub const FEATURE_ORDER: [Field; FEATURE_COUNT] = [
    Field::GeneralHealth,
    Field::Checkup,
    Field::Exercise,
    Field::SkinCancer,
    Field::OtherCancer,
    Field::Depression,
    Field::Diabetes,
    Field::Arthritis,
    Field::AgeCategory,
    Field::HeightCm,
    Field::WeightKg,
    Field::Bmi,
    Field::SmokingHistory,
    Field::AlcoholConsumption,
    Field::FruitConsumption,
    Field::GreenVegetablesConsumption,
    Field::FriedPotatoConsumption,
    Field::SexFemale,
    Field::SexMale,
];

/// Checked in this order; the first failure is the one reported.
pub const CONSUMPTION_FIELDS: [Field; 4] = [
    Field::AlcoholConsumption,
    Field::FruitConsumption,
    Field::GreenVegetablesConsumption,
    Field::FriedPotatoConsumption,
];

pub const HEIGHT_WEIGHT_MESSAGE: &str = "Height and Weight must be numeric and positive values.";

/// Parses a numeric entry. Empty, whitespace-only, non-finite and negative
/// values are all rejected.
pub fn parse_non_negative(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Weight over height in metres squared, rounded to two decimals.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Value in the column belonging to `field`.
    pub fn get(&self, field: Field) -> Option<f64> {
        FEATURE_ORDER
            .iter()
            .position(|f| *f == field)
            .map(|i| self.0[i])
    }
}

// Whole numbers go out as JSON integers (`170`, not `170.0`).
impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;
        let mut seq = serializer.serialize_seq(Some(FEATURE_COUNT))?;
        for v in &self.0 {
            if v.fract() == 0.0 && v.abs() < EXACT_INT_LIMIT {
                seq.serialize_element(&(*v as i64))?;
            } else {
                seq.serialize_element(v)?;
            }
        }
        seq.end()
    }
}

/// A fully validated survey, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub bmi: f64,
    pub features: FeatureVector,
}

impl Submission {
    pub fn request(&self) -> ScoreRequest {
        ScoreRequest::single(self.features)
    }
}

fn selected(survey: &SurveyResponse, field: Field) -> SurveyResult<&'static options::Choice> {
    let raw = survey.text(field).unwrap_or_default();
    if raw.trim().is_empty() {
        return Err(SurveyError::InvalidInput(format!("{} must be selected.", field)));
    }
    options::find(field.options(), raw).ok_or_else(|| {
        SurveyError::InvalidInput(format!("{} has no option '{}'.", field, raw.trim()))
    })
}

/// Validates a snapshot and assembles its feature vector.
///
/// Nothing is computed until every input has passed, so a rejected survey
/// yields neither a BMI nor a vector.
pub fn prepare(survey: &SurveyResponse) -> SurveyResult<Submission> {
    let (height, weight) = match (
        parse_non_negative(&survey.height_cm),
        parse_non_negative(&survey.weight_kg),
    ) {
        // Zero height would divide by zero.
        (Some(h), Some(w)) if h > 0.0 => (h, w),
        _ => return Err(SurveyError::InvalidInput(HEIGHT_WEIGHT_MESSAGE.to_string())),
    };

    let mut consumption = [0.0; CONSUMPTION_FIELDS.len()];
    for (slot, field) in consumption.iter_mut().zip(CONSUMPTION_FIELDS) {
        *slot = survey
            .text(field)
            .and_then(parse_non_negative)
            .ok_or_else(|| {
                SurveyError::InvalidInput(format!("{} must be a positive numeric value.", field))
            })?;
    }

    let general_health = selected(survey, Field::GeneralHealth)?;
    let checkup = selected(survey, Field::Checkup)?;
    let age_category = selected(survey, Field::AgeCategory)?;

    let bmi = compute_bmi(height, weight);
    if !bmi.is_finite() {
        return Err(SurveyError::InvalidInput(HEIGHT_WEIGHT_MESSAGE.to_string()));
    }
    let [alcohol, fruit, vegetables, fried_potato] = consumption;

    let features = FeatureVector([
        general_health.value.trunc(),
        checkup.value.trunc(),
        flag(survey.exercise),
        flag(survey.skin_cancer),
        flag(survey.other_cancer),
        flag(survey.depression),
        flag(survey.diabetes),
        flag(survey.arthritis),
        age_category.value.trunc(),
        height.trunc(),
        weight.trunc(),
        bmi,
        flag(survey.smoking_history),
        alcohol.trunc(),
        fruit.trunc(),
        vegetables.trunc(),
        fried_potato.trunc(),
        flag(survey.sex_female),
        flag(survey.sex_male),
    ]);

    debug!("Prepared feature vector: {:?}", features.values());
    Ok(Submission { bmi, features })
}
