pub mod options;

use crate::error::{SurveyError, SurveyResult};
use options::Choice;
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

/// Every control on the survey form, named as the form names them.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum Field {
    #[strum(serialize = "General_Health")]
    GeneralHealth,
    #[strum(serialize = "Checkup")]
    Checkup,
    #[strum(serialize = "Exercise")]
    Exercise,
    #[strum(serialize = "Skin_Cancer")]
    SkinCancer,
    #[strum(serialize = "Other_Cancer")]
    OtherCancer,
    #[strum(serialize = "Depression")]
    Depression,
    #[strum(serialize = "Diabetes")]
    Diabetes,
    #[strum(serialize = "Arthritis")]
    Arthritis,
    #[strum(serialize = "Age_Category")]
    AgeCategory,
    #[strum(serialize = "Height_cm")]
    HeightCm,
    #[strum(serialize = "Weight_kg")]
    WeightKg,
    #[strum(serialize = "BMI")]
    Bmi,
    #[strum(serialize = "Smoking_History")]
    SmokingHistory,
    #[strum(serialize = "Alcohol_Consumption")]
    AlcoholConsumption,
    #[strum(serialize = "Fruit_Consumption")]
    FruitConsumption,
    #[strum(serialize = "Green_Vegetables_Consumption")]
    GreenVegetablesConsumption,
    #[strum(serialize = "FriedPotato_Consumption")]
    FriedPotatoConsumption,
    #[strum(serialize = "Sex_Female")]
    SexFemale,
    #[strum(serialize = "Sex_Male")]
    SexMale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldKind {
    /// Select list holding an option code.
    Choice,
    /// Checkbox or radio button.
    Flag,
    /// Free numeric entry, kept as text until submission.
    Entry,
    /// Computed at submission time.
    Derived,
}

impl Field {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::GeneralHealth | Self::Checkup | Self::AgeCategory => FieldKind::Choice,
            Self::HeightCm
            | Self::WeightKg
            | Self::AlcoholConsumption
            | Self::FruitConsumption
            | Self::GreenVegetablesConsumption
            | Self::FriedPotatoConsumption => FieldKind::Entry,
            Self::Bmi => FieldKind::Derived,
            _ => FieldKind::Flag,
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Self::GeneralHealth => "General Health",
            Self::Checkup => "Checkup",
            Self::Exercise => "Do you exercise regularly?",
            Self::SkinCancer => "Did you ever have skin cancer?",
            Self::OtherCancer => "Did you ever have any other type of cancer?",
            Self::Depression => "Did you ever have depression?",
            Self::Diabetes => "Do you have diabetes?",
            Self::Arthritis => "Do you have arthritis?",
            Self::AgeCategory => "Age Category",
            Self::HeightCm => "Height (cm)",
            Self::WeightKg => "Weight (kg)",
            Self::Bmi => "Body mass index (computed on submit)",
            Self::SmokingHistory => "Smoking History",
            Self::AlcoholConsumption => "How many times a month do you consume Alcohol?",
            Self::FruitConsumption => "How many times a month do you consume Fruit?",
            Self::GreenVegetablesConsumption => {
                "How many times a month do you consume Vegetables?"
            }
            Self::FriedPotatoConsumption => {
                "How many times a month do you consume Fried Potatoes?"
            }
            Self::SexFemale => "Sex: Female",
            Self::SexMale => "Sex: Male",
        }
    }

    /// Option list for select fields; empty for everything else.
    pub fn options(&self) -> &'static [Choice] {
        match self {
            Self::GeneralHealth => options::GENERAL_HEALTH,
            Self::Checkup => options::CHECKUP,
            Self::AgeCategory => options::AGE_CATEGORY,
            _ => &[],
        }
    }

    /// Resolves a form name, reporting unknown names as invalid input.
    pub fn resolve(name: &str) -> SurveyResult<Self> {
        Field::from_str(name.trim())
            .map_err(|_| SurveyError::InvalidInput(format!("Unknown survey field '{}'.", name)))
    }
}

/// Raw value coming from a control.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

impl FieldInput {
    fn is_checked(&self) -> bool {
        match self {
            Self::Checked(b) => *b,
            Self::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "1" | "yes" | "on"
            ),
        }
    }

    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Checked(b) => String::from(if b { "1" } else { "0" }),
        }
    }
}

impl From<&str> for FieldInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FieldInput {
    fn from(b: bool) -> Self {
        Self::Checked(b)
    }
}

/// Snapshot of one form session.
///
/// Text fields hold exactly what was typed; nothing is validated until the
/// snapshot is handed to [`crate::pipeline::prepare`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyResponse {
    pub general_health: String,
    pub checkup: String,
    pub exercise: bool,
    pub skin_cancer: bool,
    pub other_cancer: bool,
    pub depression: bool,
    pub diabetes: bool,
    pub arthritis: bool,
    pub age_category: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub smoking_history: bool,
    pub alcohol_consumption: String,
    pub fruit_consumption: String,
    pub green_vegetables_consumption: String,
    pub fried_potato_consumption: String,
    pub sex_female: bool,
    pub sex_male: bool,
}

impl SurveyResponse {
    /// Returns the snapshot with one field replaced.
    ///
    /// Never rejects input. Selecting one sex clears the other; edits
    /// addressed to the derived BMI field are ignored.
    pub fn update(mut self, field: Field, input: FieldInput) -> Self {
        match field.kind() {
            FieldKind::Derived => {
                warn!("{} is computed on submit; ignoring edit", field);
            }
            FieldKind::Flag => {
                let checked = input.is_checked();
                match field {
                    Field::SexFemale => {
                        self.sex_female = checked;
                        if checked {
                            self.sex_male = false;
                        }
                    }
                    Field::SexMale => {
                        self.sex_male = checked;
                        if checked {
                            self.sex_female = false;
                        }
                    }
                    _ => {
                        if let Some(slot) = self.flag_mut(field) {
                            *slot = checked;
                        }
                    }
                }
            }
            FieldKind::Choice | FieldKind::Entry => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = input.into_text();
                }
            }
        }
        self
    }

    /// [`Self::update`] addressed by form name.
    pub fn apply(self, name: &str, input: impl Into<FieldInput>) -> SurveyResult<Self> {
        let field = Field::resolve(name)?;
        Ok(self.update(field, input.into()))
    }

    /// Raw text of a select or entry field.
    pub fn text(&self, field: Field) -> Option<&str> {
        let s = match field {
            Field::GeneralHealth => &self.general_health,
            Field::Checkup => &self.checkup,
            Field::AgeCategory => &self.age_category,
            Field::HeightCm => &self.height_cm,
            Field::WeightKg => &self.weight_kg,
            Field::AlcoholConsumption => &self.alcohol_consumption,
            Field::FruitConsumption => &self.fruit_consumption,
            Field::GreenVegetablesConsumption => &self.green_vegetables_consumption,
            Field::FriedPotatoConsumption => &self.fried_potato_consumption,
            _ => return None,
        };
        Some(s.as_str())
    }

    /// State of a checkbox or radio button.
    pub fn checked(&self, field: Field) -> Option<bool> {
        let b = match field {
            Field::Exercise => self.exercise,
            Field::SkinCancer => self.skin_cancer,
            Field::OtherCancer => self.other_cancer,
            Field::Depression => self.depression,
            Field::Diabetes => self.diabetes,
            Field::Arthritis => self.arthritis,
            Field::SmokingHistory => self.smoking_history,
            Field::SexFemale => self.sex_female,
            Field::SexMale => self.sex_male,
            _ => return None,
        };
        Some(b)
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let s = match field {
            Field::GeneralHealth => &mut self.general_health,
            Field::Checkup => &mut self.checkup,
            Field::AgeCategory => &mut self.age_category,
            Field::HeightCm => &mut self.height_cm,
            Field::WeightKg => &mut self.weight_kg,
            Field::AlcoholConsumption => &mut self.alcohol_consumption,
            Field::FruitConsumption => &mut self.fruit_consumption,
            Field::GreenVegetablesConsumption => &mut self.green_vegetables_consumption,
            Field::FriedPotatoConsumption => &mut self.fried_potato_consumption,
            _ => return None,
        };
        Some(s)
    }

    fn flag_mut(&mut self, field: Field) -> Option<&mut bool> {
        let b = match field {
            Field::Exercise => &mut self.exercise,
            Field::SkinCancer => &mut self.skin_cancer,
            Field::OtherCancer => &mut self.other_cancer,
            Field::Depression => &mut self.depression,
            Field::Diabetes => &mut self.diabetes,
            Field::Arthritis => &mut self.arthritis,
            Field::SmokingHistory => &mut self.smoking_history,
            Field::SexFemale => &mut self.sex_female,
            Field::SexMale => &mut self.sex_male,
            _ => return None,
        };
        Some(b)
    }

    /// Builds a snapshot from a JSON object of `{ "Field_Name": value }`.
    ///
    /// Entries run through the reducer in key order, so the sex invariant
    /// holds even when the object sets both.
    pub fn from_json_str(json: &str) -> SurveyResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(entries) = value else {
            return Err(SurveyError::Config(
                "Answers must be a JSON object keyed by field name".to_string(),
            ));
        };

        entries
            .into_iter()
            .try_fold(Self::default(), |state, (name, value)| {
                let input = match value {
                    Value::Bool(b) => FieldInput::Checked(b),
                    Value::String(s) => FieldInput::Text(s),
                    Value::Number(n) => FieldInput::Text(n.to_string()),
                    Value::Null => FieldInput::Text(String::new()),
                    other => {
                        return Err(SurveyError::Config(format!(
                            "Unsupported value for '{}': {}",
                            name, other
                        )))
                    }
                };
                state.apply(&name, input)
            })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SurveyResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

/// Splits a `Field=value` edit as given on the command line.
pub fn parse_edit(raw: &str) -> SurveyResult<(Field, String)> {
    let (name, value) = raw.split_once('=').ok_or_else(|| {
        SurveyError::InvalidInput(format!("Expected Field=value, got '{}'.", raw))
    })?;
    Ok((Field::resolve(name)?, value.to_string()))
}
