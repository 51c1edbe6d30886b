//! High-level library API: load a dates file and dispatch one extractor
//! request per date over a single connection. Prefer these entrypoints over
//! the lower-level `core` and `io` modules when embedding the crate.
use std::path::Path;

use tracing::{error, info};

use crate::core::dates::{format_dates, parse_dates};
use crate::error::Result;
use crate::io::http::{Connection, Connector, HttpConnector};
use crate::types::{DATA_EXTRACTOR_PATH, DispatchOutcome, DispatchReport, RequestTarget};

/// Read a date specification file and return its dates in wire form
/// (`YYYY-MM-DD`), in send order.
pub fn load_dates_file(path: &Path) -> Result<Vec<String>> {
    info!("Open request file {}", path.display());
    let content = std::fs::read_to_string(path)?;

    info!("Parsing dates");
    let dates = format_dates(&parse_dates(&content)?);

    info!("{:?}", dates);
    Ok(dates)
}

/// Send one request per date of `target` through a single connection.
///
/// Stops after the first response whose status is not 200. Connection and
/// transport errors end the dispatch; they are logged and reported in the
/// returned [`DispatchReport`], never returned as an error.
pub fn dispatch<C: Connector>(connector: &C, target: &RequestTarget) -> DispatchReport {
    let mut requests_sent = 0;
    let outcome = match send_all(connector, target, &mut requests_sent) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = ?e, "Dispatch to {} aborted: {}", target.address, e);
            DispatchOutcome::Failed {
                error: e.to_string(),
            }
        }
    };

    DispatchReport {
        requests_sent,
        outcome,
    }
}

/// [`dispatch`] over HTTP with the default 1800 second timeout.
pub fn send_requests(target: &RequestTarget) -> DispatchReport {
    dispatch(&HttpConnector::default(), target)
}

fn send_all<C: Connector>(
    connector: &C,
    target: &RequestTarget,
    requests_sent: &mut usize,
) -> Result<DispatchOutcome> {
    let mut connection = connector.connect(&target.address)?;
    info!("Open connection to {}", target.address);

    for date in &target.dates {
        info!(
            "Send request: date = {}, datamart = {}",
            date, target.datamart
        );
        let response = connection.get(DATA_EXTRACTOR_PATH, &target.headers_for(date))?;
        *requests_sent += 1;

        info!(
            "Response status: {}. Reason: {}",
            response.status, response.reason
        );
        info!("Response body: {}", response.body);

        if !response.is_ok() {
            return Ok(DispatchOutcome::Stopped {
                date: date.clone(),
                status: response.status,
            });
        }
    }

    Ok(DispatchOutcome::Completed)
}
