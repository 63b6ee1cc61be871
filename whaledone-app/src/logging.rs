//! Tracing setup: a local-time formatter on stdout plus an optional log file,
//! with stdout output switchable after startup.

use std::{
    fs::{self, File},
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

/// Used when neither `RUST_LOG` nor the config names a filter.
pub const DEFAULT_FILTER: &str = "info,whaledone=debug";

struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        let (pre, post) = if ansi {
            match *meta.level() {
                Level::ERROR => ("\x1b[1;31m", "\x1b[0m"),
                Level::WARN => ("\x1b[1;33m", "\x1b[0m"),
                Level::INFO => ("\x1b[1;32m", "\x1b[0m"),
                Level::DEBUG => ("\x1b[1;34m", "\x1b[0m"),
                Level::TRACE => ("\x1b[1;35m", "\x1b[0m"),
            }
        } else {
            ("", "")
        };
        write!(writer, "{pre}{:>5}{post} ", meta.level())?;

        if ansi {
            write!(writer, "\x1b[36m{}\x1b[0m ", meta.target())?;
        } else {
            write!(writer, "{} ", meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// A writer that can be pointed at a file after initialization.
/// Writes are discarded while no file is set.
#[derive(Clone)]
struct FileSlot(Arc<Mutex<Option<File>>>);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(lock(&self.0))
    }
}

/// A poisoned slot still holds a usable file handle.
fn lock(slot: &Mutex<Option<File>>) -> MutexGuard<'_, Option<File>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

type SetBoolFn = Box<dyn Fn(bool) -> Result<()> + Send + Sync>;

static SET_STDOUT_ENABLED: OnceLock<SetBoolFn> = OnceLock::new();
static FILE_SLOT: OnceLock<Arc<Mutex<Option<File>>>> = OnceLock::new();

/// Picks the first valid directive: `RUST_LOG`, then the configured level,
/// then [`DEFAULT_FILTER`].
fn filter_directive(
    env: Option<&str>,
    configured: Option<&str>,
) -> String {
    [env, configured]
        .into_iter()
        .flatten()
        .find(|directive| EnvFilter::try_new(directive).is_ok())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

fn make_filter(configured: Option<&str>) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    EnvFilter::new(filter_directive(env.as_deref(), configured))
}

fn store_stdout_handle<S>(handle: reload::Handle<EnvFilter, S>)
where
    S: Subscriber + Send + Sync + 'static,
{
    let _ = SET_STDOUT_ENABLED.set(Box::new(move |enabled: bool| {
        // The global level filter stays the ceiling either way.
        let filter = EnvFilter::new(if enabled { "trace" } else { "off" });
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("stdout reload failed: {e}"))
    }));
}

/// Shows or hides stdout output without touching the log file.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    match SET_STDOUT_ENABLED.get() {
        Some(f) => f(enabled),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Starts appending log output to `path`, replacing any open log file.
/// Missing parent directories are created.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create log directory {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    match FILE_SLOT.get() {
        Some(slot) => {
            *lock(slot) = Some(file);
            Ok(())
        }
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Installs the global subscriber. Later calls are ignored.
///
/// - Stdout: colored on a terminal, plain when piped; hidden when
///   `config.stdout` is false.
/// - File: opened when `config.file` is set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_inner: Arc<Mutex<Option<File>>> = Arc::new(Mutex::new(None));
    let _ = FILE_SLOT.set(file_inner.clone());

    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));
    let level_filter = make_filter(config.level.as_deref());

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(false)
        .with_writer(FileSlot(file_inner));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        store_stdout_handle(stdout_handle);
    }

    if !config.stdout {
        set_stdout_enabled(false)?;
    }
    if let Some(path) = &config.file {
        enable_file_logging(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn env_directive_wins() {
        assert_eq!(filter_directive(Some("error"), Some("warn")), "error");
    }

    #[test]
    fn configured_level_used_without_env() {
        assert_eq!(filter_directive(None, Some("warn")), "warn");
    }

    #[test]
    fn invalid_directives_fall_back_to_default() {
        assert_eq!(
            filter_directive(None, Some("not a [valid filter")),
            DEFAULT_FILTER
        );
        assert_eq!(
            filter_directive(Some("also [bad"), Some("warn")),
            "warn"
        );
        assert_eq!(filter_directive(None, None), DEFAULT_FILTER);
    }

    #[test]
    fn file_logging_writes_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("whaledone.log");
        let config = LoggingConfig {
            level: Some("info".to_string()),
            stdout: false,
            file: Some(path.clone()),
        };

        init_logging(&config).unwrap();
        // Error level so a restrictive RUST_LOG cannot hide it.
        tracing::error!("hello from the log test");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(
            contents.contains("hello from the log test"),
            "log file was: {contents:?}"
        );
        assert!(contents.contains("ERROR"));
    }
}
