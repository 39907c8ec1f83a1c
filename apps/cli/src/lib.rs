//! # caddie-cli: Interactive Shopping-Cart Calculator
//!
//! The console front end over `caddie-core`.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     caddie binary (main.rs)                             │
//! │      clap Args ──► CliConfig ──► init_tracing ──► run(stdin, stdout)    │
//! └───────────────────────────────┬─────────────────────────────────────────┘
//!                                 │
//! ┌───────────────────────────────▼─────────────────────────────────────────┐
//! │  session   stage machine: catalog → items → region → total → confirm   │
//! │  console   prompt / re-prompt loop over BufRead + Write                 │
//! │  render    box-drawn tables                                             │
//! │  config    args > env > defaults                                        │
//! │  error     CliError (I/O, closed input, config, summary)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use caddie_cli::{run, CliConfig};
//! use caddie_cli::session::SessionOutcome;
//!
//! let input = "1\n1\ny\n2\n1\nn\nut\ny\n";
//! let mut output = Vec::new();
//! let report = run(&CliConfig::default(), input.as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(report.outcome, SessionOutcome::Confirmed);
//! assert_eq!(report.summary.total.to_string(), "6111.82 €");
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod render;
pub mod session;

use std::io::{BufRead, Write};

use caddie_core::{Catalog, DiscountSchedule};
use tracing::debug;

pub use config::{Args, CliConfig, SummaryFormat};
pub use error::{CliError, CliResult};

use console::Console;
use session::{Session, SessionOutcome, SessionReport};

/// Runs one session against the standard catalog and discount schedule.
///
/// With `SummaryFormat::Json`, a confirmed order is followed by its summary
/// as pretty-printed JSON on `writer`.
pub fn run<R: BufRead, W: Write>(config: &CliConfig, reader: R, writer: W) -> CliResult<SessionReport> {
    let catalog = Catalog::standard();
    let schedule = DiscountSchedule::standard();
    debug!(
        products = catalog.len(),
        tiers = schedule.tiers().len(),
        summary = %config.summary,
        "tables loaded"
    );

    let (report, console) = Session::new(Console::new(reader, writer), &catalog, &schedule).run()?;

    if report.outcome == SessionOutcome::Confirmed && config.summary == SummaryFormat::Json {
        let (_, mut writer) = console.into_parts();
        writeln!(writer, "{}", report.summary.to_json()?)?;
        writer.flush()?;
    }

    Ok(report)
}
