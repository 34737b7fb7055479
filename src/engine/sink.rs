//! Display sink: where drawn numbers go.

use tokio::sync::mpsc;

/// Visual treatment of the displayed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayStyle {
    /// Animation frames and the initial placeholder
    #[default]
    Normal,
    /// Settled value, visually emphasized
    Result,
}

/// A single update for the number display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub value: u64,
    pub style: DisplayStyle,
}

impl DisplayUpdate {
    pub fn normal(value: u64) -> Self {
        Self {
            value,
            style: DisplayStyle::Normal,
        }
    }

    pub fn result(value: u64) -> Self {
        Self {
            value,
            style: DisplayStyle::Result,
        }
    }
}

/// Receiver of display updates.
///
/// Implementations may be called from a background task, so they must not
/// touch UI state directly. The terminal front end hands updates to its event
/// loop through a channel.
pub trait DisplaySink: Send + Sync + 'static {
    fn emit(&self, update: DisplayUpdate);
}

impl DisplaySink for mpsc::UnboundedSender<DisplayUpdate> {
    fn emit(&self, update: DisplayUpdate) {
        // Receiver gone means the UI is shutting down
        let _ = self.send(update);
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::{Arc, Mutex};

    use super::{DisplaySink, DisplayUpdate};

    /// Sink that records every update, for assertions.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingSink {
        updates: Arc<Mutex<Vec<DisplayUpdate>>>,
    }

    impl RecordingSink {
        pub fn updates(&self) -> Vec<DisplayUpdate> {
            self.updates.lock().unwrap().clone()
        }

        pub fn last(&self) -> Option<DisplayUpdate> {
            self.updates.lock().unwrap().last().copied()
        }

        pub fn len(&self) -> usize {
            self.updates.lock().unwrap().len()
        }
    }

    impl DisplaySink for RecordingSink {
        fn emit(&self, update: DisplayUpdate) {
            self.updates.lock().unwrap().push(update);
        }
    }
}
