/*!
 * Monitoring
 * Structured tracing for container operations
 */

mod tracer;

pub use tracer::{init_tracing, span_callback, CallbackSpan, SLOW_CALLBACK_THRESHOLD};
