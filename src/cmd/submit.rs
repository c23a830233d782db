use super::SurveyArgs;
use crate::reports;
use cardio_risk::client::{ScoringClient, Submitter};
use cardio_risk::config::ServiceConfig;
use cardio_risk::error::SurveyResult;
use cardio_risk::protocol::PredictionResult;

pub async fn run(args: &SurveyArgs, service: &ServiceConfig) -> SurveyResult<PredictionResult> {
    let survey = args.build()?;
    let submitter = Submitter::new(ScoringClient::new(service)?);

    let result = submitter.submit(&survey).await?;
    reports::print_prediction(&result);
    Ok(result)
}
