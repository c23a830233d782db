use super::SurveyArgs;
use crate::reports;
use cardio_risk::error::SurveyResult;
use cardio_risk::pipeline;

/// Validates and prints what would be sent, without touching the network.
pub fn run(args: &SurveyArgs) -> SurveyResult<()> {
    let survey = args.build()?;
    let submission = pipeline::prepare(&survey)?;

    println!("\n🔎 === FEATURE VECTOR === 🔎");
    reports::print_submission(&submission);
    Ok(())
}
