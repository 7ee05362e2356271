//! Optional host-provided debug hook.
//!
//! The core never prints on its own. A frontend (or a test) may install a
//! [`LogSink`] once per process; the `core_trace!`/`core_warn!` macros in the
//! crate root forward to it. When no sink is installed the macros compile down
//! to a cheap flag check and emit nothing.

use std::fmt;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Trace,
    Warn,
}

pub trait LogSink: Send + Sync + 'static {
    fn log(&self, level: Level, target: &'static str, args: fmt::Arguments);
}

static LOG_SINK: OnceLock<Box<dyn LogSink>> = OnceLock::new();

/// Install a sink. Fails (returning the sink) if one was already installed.
pub fn try_set_log_sink(sink: Box<dyn LogSink>) -> Result<(), Box<dyn LogSink>> {
    LOG_SINK.set(sink)
}

/// Install a closure as the sink. Returns false if a sink was already set.
pub fn set_log_sink_from_fn<F>(f: F) -> bool
where
    F: Fn(Level, &'static str, String) + Send + Sync + 'static,
{
    struct FnSink<F>(F);
    impl<F> LogSink for FnSink<F>
    where
        F: Fn(Level, &'static str, String) + Send + Sync + 'static,
    {
        fn log(&self, level: Level, target: &'static str, args: fmt::Arguments) {
            (self.0)(level, target, args.to_string());
        }
    }
    try_set_log_sink(Box::new(FnSink(f))).is_ok()
}

pub fn has_log_sink() -> bool {
    LOG_SINK.get().is_some()
}

pub(crate) fn emit(level: Level, target: &'static str, args: fmt::Arguments) {
    if let Some(sink) = LOG_SINK.get() {
        sink.log(level, target, args);
    }
}
