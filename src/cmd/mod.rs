pub mod fields;
pub mod preview;
pub mod submit;

use cardio_risk::error::SurveyResult;
use cardio_risk::survey::{parse_edit, FieldInput, SurveyResponse};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// How a form session is filled in from the command line.
#[derive(Args, Debug, Clone)]
pub struct SurveyArgs {
    /// JSON object of answers keyed by field name
    #[arg(short, long)]
    pub answers: Option<PathBuf>,

    /// Field edit applied after the answers file, e.g. --set Height_cm=170
    #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
    pub edits: Vec<String>,
}

impl SurveyArgs {
    /// Replays the answers file and then each edit through the form reducer.
    pub fn build(&self) -> SurveyResult<SurveyResponse> {
        let mut survey = match &self.answers {
            Some(path) => {
                info!("📂 Loading answers: {}", path.display());
                SurveyResponse::load_from_file(path)?
            }
            None => SurveyResponse::default(),
        };

        for raw in &self.edits {
            let (field, value) = parse_edit(raw)?;
            survey = survey.update(field, FieldInput::Text(value));
        }
        Ok(survey)
    }
}
