use cardio_risk::config::ServiceConfig;
use cardio_risk::error::SurveyError;
use cardio_risk::protocol::PredictionResult;
use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cardiovascular Diseases Risk Predictor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    service: ServiceConfig,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lists every survey field with its option codes
    Fields,
    /// Validates a survey and prints the feature vector without sending it
    Preview(cmd::SurveyArgs),
    /// Validates a survey, sends it for scoring and shows the prediction
    Submit(cmd::SurveyArgs),
}

fn report_failure(e: SurveyError) -> ! {
    match e {
        SurveyError::InvalidInput(msg) => eprintln!("❌ {}", msg),
        other => error!("{}", other),
    }
    process::exit(1);
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Fields => cmd::fields::run(),
        Commands::Preview(args) => {
            if let Err(e) = cmd::preview::run(args) {
                report_failure(e);
            }
        }
        Commands::Submit(args) => match cmd::submit::run(args, &cli.service).await {
            Ok(PredictionResult::Unavailable) => process::exit(2),
            Ok(_) => {}
            Err(e) => report_failure(e),
        },
    }
}
