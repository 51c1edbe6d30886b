#![doc = r#"
skim-request-machine: sends date-scoped requests to a Skim datamart
data-extractor endpoint.

Each request is a plain HTTP/1.1 `GET /skim/datamart/data-extractor` carrying
the business date in an `ldate` header and the datamart in a `datamart`
header. Dates come from a date specification such as
`01.01.2020,05.01.2020-07.01.2020`, which expands to an ordered list of
calendar dates. Requests go out one at a time over a single connection, and
the run stops at the first response that is not `200 OK`.

Quick start
-----------
```rust,no_run
use skim_request_machine::{RequestTarget, format_dates, parse_dates, send_requests};

fn main() -> skim_request_machine::Result<()> {
    let dates = format_dates(&parse_dates("01.01.2020,05.01.2020-07.01.2020")?);
    let target = RequestTarget::new("localhost:8080", "datamart_c", dates);

    let report = send_requests(&target);
    println!("sent={} outcome={}", report.requests_sent, report.outcome);
    Ok(())
}
```

Error handling
--------------
Parsing returns `skim_request_machine::Result<T>`; a token that is not
`DD.MM.YYYY` (or a malformed range) is an [`Error::Format`]. Dispatching never
fails: connection and transport errors are logged and reported in the
returned [`DispatchReport`].

Useful modules
--------------
- [`api`]: dates file loading and request dispatch.
- [`core`]: date specification parsing.
- [`io`]: the `Connector`/`Connection` seam and its HTTP implementation.
- [`logging`]: console + file logging context.
- [`types`]: request and report types, endpoint constants.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod types;

pub use error::{Error, Result};
pub use logging::Logging;
pub use types::{
    DATA_EXTRACTOR_PATH, DEFAULT_TIMEOUT, DispatchOutcome, DispatchReport, HttpResponse,
    LOG_FILE_NAME, RequestTarget,
};

pub use crate::core::dates::{expand_range, format_dates, parse_date, parse_dates};
pub use crate::io::{Connection, Connector, HttpConnection, HttpConnector};

pub use crate::api::{dispatch, load_dates_file, send_requests};
