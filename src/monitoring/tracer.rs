/*!
 * Tracing
 * Subscriber setup and spans around caller-supplied callbacks
 *
 * Visitors and comparators run while the instance lock is held, so their
 * runtime is the lock hold time. `CallbackSpan` measures it and warns when
 * a callback keeps every other caller waiting for too long.
 */

use std::time::{Duration, Instant};
use tracing::{debug, span, warn, Level, Span};
use tracing_subscriber::{
    fmt::{
        self,
        format::{FmtSpan, Format, Json, JsonFields},
        MakeWriter,
    },
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Environment variable switching the output to JSON
pub const TRACE_JSON_ENV: &str = "SYNC_COLLECTIONS_TRACE_JSON";

/// Lock hold time above which a callback is reported as slow
pub const SLOW_CALLBACK_THRESHOLD: Duration = Duration::from_millis(10);

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SYNC_COLLECTIONS_TRACE_JSON: Enable JSON output (default: false)
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = json_output_requested(std::env::var(TRACE_JSON_ENV).ok().as_deref());

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry.with(json_layer(std::io::stdout)).try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        debug!("Structured tracing initialized");
    }
}

/// True when the JSON switch is set to `1` or `true`
fn json_output_requested(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true"))
}

/// JSON formatting layer with span context and close events
fn json_layer<S, W>(writer: W) -> fmt::Layer<S, JsonFields, Format<Json>, W>
where
    W: for<'w> MakeWriter<'w> + 'static,
{
    fmt::layer()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_current_span(true)
        .with_span_list(true)
        .with_span_events(FmtSpan::CLOSE)
}

/// Span covering one callback-driven operation on a locked container
pub struct CallbackSpan {
    span: Span,
    start: Instant,
    container: &'static str,
    operation: &'static str,
}

impl CallbackSpan {
    pub fn new(container: &'static str, operation: &'static str, size: usize) -> Self {
        let span = span!(
            Level::TRACE,
            "callback",
            container = container,
            operation = operation,
            size = size,
            duration_us = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            container,
            operation,
        }
    }

    /// Time spent since the span was opened
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// True once the callback has run past [`SLOW_CALLBACK_THRESHOLD`]
    pub fn is_slow(&self) -> bool {
        self.elapsed() > SLOW_CALLBACK_THRESHOLD
    }
}

impl Drop for CallbackSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros() as u64);

        if duration > SLOW_CALLBACK_THRESHOLD {
            warn!(
                container = self.container,
                operation = self.operation,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "callback held container lock for a long time"
            );
        }
    }
}

/// Open a span for a callback-driven operation
#[inline]
pub fn span_callback(
    container: &'static str,
    operation: &'static str,
    size: usize,
) -> CallbackSpan {
    CallbackSpan::new(container, operation, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn test_callback_span_measures_time() {
        let span = span_callback("ArrayList", "each", 3);
        std::thread::sleep(Duration::from_millis(2));
        assert!(span.elapsed() >= Duration::from_millis(2));
    }

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedOutput {
        fn json_lines(&self) -> Vec<serde_json::Value> {
            let bytes = self.0.lock().clone();
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    fn capture_json<F: FnOnce()>(f: F) -> Vec<serde_json::Value> {
        let output = CapturedOutput::default();
        let writer = output.clone();
        let subscriber = tracing_subscriber::registry().with(json_layer(move || writer.clone()));
        tracing::subscriber::with_default(subscriber, f);
        output.json_lines()
    }

    fn warnings(lines: &[serde_json::Value]) -> Vec<&serde_json::Value> {
        lines.iter().filter(|line| line["level"] == "WARN").collect()
    }

    #[test]
    fn test_slow_callback_emits_warning() {
        let lines = capture_json(|| {
            let span = span_callback("ArrayList", "each", 3);
            std::thread::sleep(SLOW_CALLBACK_THRESHOLD + Duration::from_millis(5));
            assert!(span.is_slow());
        });

        let warned = warnings(&lines);
        assert_eq!(warned.len(), 1);
        assert_eq!(warned[0]["fields"]["container"], "ArrayList");
        assert_eq!(warned[0]["fields"]["operation"], "each");
        assert_eq!(warned[0]["fields"]["slow"], true);
    }

    #[test]
    fn test_fast_callback_stays_quiet() {
        let lines = capture_json(|| {
            let span = span_callback("HashSet", "any", 0);
            assert!(!span.is_slow());
        });

        assert!(warnings(&lines).is_empty());
        // The span close event still carries its context
        assert!(lines
            .iter()
            .any(|line| line["span"]["operation"] == "any"));
    }

    #[test]
    fn test_json_switch_values() {
        assert!(json_output_requested(Some("1")));
        assert!(json_output_requested(Some("true")));
        assert!(!json_output_requested(Some("0")));
        assert!(!json_output_requested(Some("yes")));
        assert!(!json_output_requested(None));
    }
}
