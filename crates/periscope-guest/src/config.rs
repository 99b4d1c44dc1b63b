//! Responder configuration.

use alloc::string::String;

/// Configuration for a guest responder.
#[derive(Clone, Debug)]
pub struct ResponderConfig {
    /// Name used as the `[label]` prefix on debug log lines.
    pub label: String,
    /// Log every decoded inbound tag. On by default; test harnesses
    /// follow the conversation through these lines.
    pub trace_messages: bool,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            label: String::from("guest"),
            trace_messages: true,
        }
    }
}
