use crate::presentation::components::{LogEntry, LogLevel};
use std::sync::mpsc::{Receiver, Sender, channel};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const CAPTURED_TARGET: &str = "recipe_book";

/// Installs the global subscriber and returns the receiving end of the
/// captured log stream. Must be called once, before any other logging.
pub fn init_log_capture() -> Receiver<LogEntry> {
    let (tx, rx) = channel();

    #[cfg(any(debug_assertions, feature = "verbose-logging"))]
    let filter = LevelFilter::TRACE;

    #[cfg(not(any(debug_assertions, feature = "verbose-logging")))]
    let filter = LevelFilter::DEBUG;

    tracing_subscriber::registry()
        .with(filter)
        .with(CaptureLayer { sender: tx })
        .init();

    rx
}

struct CaptureLayer {
    sender: Sender<LogEntry>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: tracing::Subscriber,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();

        if !metadata.target().starts_with(CAPTURED_TARGET) {
            return;
        }

        let mut visitor = LogVisitor {
            message: String::new(),
        };

        event.record(&mut visitor);

        if !visitor.message.is_empty() {
            let entry = LogEntry::new(LogLevel::from(*metadata.level()), visitor.message);
            // Receiver is gone once the window closes.
            let _ = self.sender.send(entry);
        }
    }
}

struct LogVisitor {
    message: String,
}

impl tracing::field::Visit for LogVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_crate_events_only() {
        let (tx, rx) = channel();
        let subscriber = tracing_subscriber::registry().with(CaptureLayer { sender: tx });

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "recipe_book::application", "Loaded {} recipes", 3);
            tracing::info!(target: "winit::event_loop", "resumed");
        });

        let captured: Vec<LogEntry> = rx.try_iter().collect();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].level, LogLevel::Info);
        assert_eq!(captured[0].message, "Loaded 3 recipes");
    }
}
