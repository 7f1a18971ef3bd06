//! Transition listener adapters.
//!
//! - `TracingListener` - Writes each transition to the log
//! - `RecordingListener` - Captures transitions for test assertions

mod recording;
mod tracing_listener;

pub use recording::RecordingListener;
pub use tracing_listener::TracingListener;
