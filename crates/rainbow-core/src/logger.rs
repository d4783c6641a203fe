//! Process-wide logging for the `rainbow` crates.
//!
//! Records from `rainbow*` targets pass at the requested level; everything
//! else (decoders, resamplers) is held to `Warn` so `-v` stays readable.
//! Each line carries the emitting module, e.g.
//! `[  0.012s DEBUG rainbow_detect::extract] no regions left after cleanup`.

use std::fmt::Arguments;
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

const OWN_PREFIX: &str = "rainbow";
const FOREIGN_CAP: LevelFilter = LevelFilter::Warn;

fn is_own_target(target: &str) -> bool {
    target
        .strip_prefix(OWN_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('_') || rest.starts_with("::"))
}

/// Effective level for `target` when the user asked for `level`.
fn level_for(target: &str, level: LevelFilter) -> LevelFilter {
    if is_own_target(target) {
        level
    } else {
        level.min(FOREIGN_CAP)
    }
}

fn format_line(elapsed_s: f64, level: Level, target: &str, args: &Arguments<'_>) -> String {
    format!("[{elapsed_s:7.3}s {level:>5} {target}] {args}")
}

struct TargetLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for TargetLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= level_for(metadata.target(), self.level)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            self.started.elapsed().as_secs_f64(),
            record.level(),
            record.target(),
            record.args(),
        );
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<TargetLogger> = OnceLock::new();

/// Install the stderr logger. `level` applies to the `rainbow` crates;
/// other crates log at `Warn` or quieter.
///
/// Only the first call takes effect.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = LOGGER.get_or_init(|| TargetLogger {
        level,
        started: Instant::now(),
    });
    log::set_logger(logger)?;
    log::set_max_level(level.max(FOREIGN_CAP));
    Ok(())
}

/// `EnvFilter` directives matching [`init_with_level`]'s per-crate levels.
#[cfg(feature = "tracing")]
fn default_directives(level: LevelFilter) -> String {
    let own = level.to_string().to_lowercase();
    let foreign = level.min(FOREIGN_CAP).to_string().to_lowercase();
    format!("{foreign},rainbow={own},rainbow_core={own},rainbow_detect={own}")
}

/// Install a `tracing-subscriber` formatter. `RUST_LOG` wins when set,
/// otherwise `level` is applied the same way as [`init_with_level`].
#[cfg(feature = "tracing")]
pub fn init_tracing(level: LevelFilter, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE);
    let _ = if json {
        builder.json().flatten_event(true).finish().try_init()
    } else {
        builder
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init()
    };
}
