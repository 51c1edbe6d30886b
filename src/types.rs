//! Shared types and constants used across the crate.
//! Includes `RequestTarget`, `HttpResponse`, and the dispatch result types
//! (`DispatchOutcome`, `DispatchReport`).
use std::time::Duration;

/// Path of the data-extractor endpoint on the target service.
pub const DATA_EXTRACTOR_PATH: &str = "/skim/datamart/data-extractor";

/// Connect and read timeout for the dispatch connection.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1800);

/// Log file written in the working directory.
pub const LOG_FILE_NAME: &str = "skim-request-machine.log";

/// Format of dates in a date specification (`DD.MM.YYYY`).
pub const INPUT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Format of dates sent in the `ldate` header (`YYYY-MM-DD`).
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

pub const LDATE_HEADER: &str = "ldate";
pub const DATAMART_HEADER: &str = "datamart";

/// Everything one run needs to send its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    /// `host:port` of the target service
    pub address: String,
    pub datamart: String,
    /// Dates in send order, already in their wire form
    pub dates: Vec<String>,
}

impl RequestTarget {
    pub fn new(address: impl Into<String>, datamart: impl Into<String>, dates: Vec<String>) -> Self {
        Self {
            address: address.into(),
            datamart: datamart.into(),
            dates,
        }
    }

    /// Headers for the request of a single date, in send order.
    pub fn headers_for<'a>(&'a self, date: &'a str) -> [(&'static str, &'a str); 2] {
        [(LDATE_HEADER, date), (DATAMART_HEADER, self.datamart.as_str())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Terminal state of a dispatch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Every date was sent and answered with 200.
    Completed,
    /// A response other than 200 ended the loop early.
    Stopped { date: String, status: u16 },
    /// Connection setup or a request failed; the rest was abandoned.
    Failed { error: String },
}

impl std::fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchOutcome::Completed => write!(f, "Completed"),
            DispatchOutcome::Stopped { date, status } => {
                write!(f, "Stopped at {} (status {})", date, status)
            }
            DispatchOutcome::Failed { error } => write!(f, "Failed: {}", error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// Requests that received a response
    pub requests_sent: usize,
    pub outcome: DispatchOutcome,
}
