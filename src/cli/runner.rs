use tracing::{error, info, warn};

use skim_request_machine::{
    DispatchOutcome, LOG_FILE_NAME, Logging, RequestTarget, load_dates_file, send_requests,
};

use super::args::CliArgs;
use super::errors::AppError;

/// Dates to send: parsed from the file, or the `--date` value as given.
fn resolve_dates(args: &CliArgs) -> Result<Vec<String>, AppError> {
    match (&args.file, &args.date) {
        (Some(path), _) => Ok(load_dates_file(path)?),
        (None, Some(date)) => Ok(vec![date.clone()]),
        // the required `dates` group rejects this during parsing; `CliArgs`
        // built in code bypasses clap, so it stays an error here
        (None, None) => Err(AppError::MissingArgument {
            arg: "--file or --date".to_string(),
        }),
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let _logging = Logging::init(LOG_FILE_NAME)?;

    let dates = match resolve_dates(&args) {
        Ok(dates) => dates,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    let target = RequestTarget::new(args.address, args.datamart, dates);
    let report = send_requests(&target);

    match &report.outcome {
        DispatchOutcome::Completed => info!(
            "Done: {} of {} request(s) sent",
            report.requests_sent,
            target.dates.len()
        ),
        DispatchOutcome::Stopped { .. } => warn!(
            "{} after {} of {} request(s)",
            report.outcome,
            report.requests_sent,
            target.dates.len()
        ),
        DispatchOutcome::Failed { .. } => {}
    }

    Ok(())
}
