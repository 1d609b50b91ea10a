use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Prints `[symbol] message`, naming the emitting module at debug and trace.
pub struct RosterFormatter;

impl<S, N> FormatEvent<S, N> for RosterFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        write!(writer, "{}", prefix(meta.level(), meta.target()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_symbol(level: &Level) -> ColoredString {
    match *level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::ERROR => "[-]".red().bold(),
    }
}

fn prefix(level: &Level, target: &str) -> String {
    if *level >= Level::DEBUG {
        format!("{} {} ", level_symbol(level), format!("{target}:").dimmed())
    } else {
        format!("{} ", level_symbol(level))
    }
}

/// Maps the `-v` count to a default filter. `RUST_LOG` wins when set.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(RosterFormatter)
        .try_init();
}
