use std::process::ExitCode;

use anyhow::Result;
use text_extractor_rust::cli::{self, Action, Parsed};
use text_extractor_rust::{OcrError, OcrOutcome};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = match cli::parse_args(std::env::args_os()) {
        Parsed::Cli(cli) => cli,
        Parsed::Display(err) => {
            err.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Parsed::Invalid(err) => {
            eprintln!("{}", err.render());
            return emit(&OcrError::Usage.into(), false);
        }
    };
    text_extractor_rust::logging::init(cli.verbose)?;

    let action = match cli.action() {
        Ok(action) => action,
        Err(err) => return emit(&err.into(), cli.pretty),
    };
    match action {
        Action::ListLanguages => {
            match text_extractor_rust::list_languages(cli.read_settings.as_deref()) {
                Ok(langs) => {
                    for lang in langs {
                        println!("{}", lang);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => emit(&err.into(), cli.pretty),
            }
        }
        Action::Check => {
            let report = text_extractor_rust::dependency_report(cli.read_settings.as_deref());
            println!("{}", report.to_json(cli.pretty)?);
            Ok(ExitCode::from(report.exit_code() as u8))
        }
        Action::Recognize(config) => {
            let outcome = text_extractor_rust::run(config).await;
            emit(&outcome, cli.pretty)
        }
    }
}

fn emit(outcome: &OcrOutcome, pretty: bool) -> Result<ExitCode> {
    println!("{}", outcome.to_json(pretty)?);
    Ok(ExitCode::from(outcome.exit_code() as u8))
}
