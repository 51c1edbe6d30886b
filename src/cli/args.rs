use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Two-character short flag for `--datamart`; clap shorts are single characters.
const DATAMART_SHORT: &str = "-dm";
const DATAMART_LONG: &str = "--datamart";

#[derive(Parser, Debug)]
#[command(
    name = "skim-request-machine",
    version,
    about = "Skim datamart request sender"
)]
#[command(group(
    ArgGroup::new("dates")
        .required(true)
        .args(["file", "date"]),
))]
pub struct CliArgs {
    /// Dates file: comma-separated DD.MM.YYYY dates and DD.MM.YYYY-DD.MM.YYYY ranges
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Request date, sent as-is (format YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// host:port
    #[arg(short, long)]
    pub address: String,

    /// datamart_c or datamart_n (short form: -dm)
    #[arg(long)]
    pub datamart: String,
}

impl CliArgs {
    /// Parse the process arguments, accepting `-dm` for `--datamart`.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Flags whose next argument is their value.
const VALUE_FLAGS: &[&str] = &["-a", "--address", "-f", "--file", "-d", "--date", DATAMART_LONG];

/// Rewrite `-dm VALUE`, `-dm=VALUE` and `-dmVALUE` into their `--datamart` forms.
///
/// Only arguments in flag position are touched: values of other flags and
/// everything after `--` pass through unchanged.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut expects_value = false;
    let mut positional_only = false;

    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if expects_value || positional_only {
                expects_value = false;
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let rewritten = match text.strip_prefix(DATAMART_SHORT) {
                Some("") => DATAMART_LONG.to_string(),
                Some(rest) => {
                    let value = rest.strip_prefix('=').unwrap_or(rest);
                    format!("{}={}", DATAMART_LONG, value)
                }
                None => {
                    positional_only = text == "--";
                    expects_value = VALUE_FLAGS.contains(&text);
                    return arg;
                }
            };
            expects_value = rewritten == DATAMART_LONG;
            OsString::from(rewritten)
        })
        .collect()
}
