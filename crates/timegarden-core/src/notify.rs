//! Transient user-facing notifications.
//!
//! The engine announces stage transitions and terminal states through this
//! seam; the CLI prints them, a GUI would show toasts.

/// Accepts transient user-facing messages.
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

/// Prints notifications to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl NotificationSink for StdoutSink {
    fn notify(&mut self, message: &str) {
        println!("*** {message}");
    }
}

/// Collects notifications in memory, most recent last.
///
/// Used by tests and by embedders that render their own toast overlay.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub messages: Vec<String>,
}

impl NotificationSink for MemorySink {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_keeps_order() {
        let mut sink = MemorySink::default();
        sink.notify("first");
        sink.notify("second");
        assert_eq!(sink.messages, vec!["first", "second"]);
    }
}
