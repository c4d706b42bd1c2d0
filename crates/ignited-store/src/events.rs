//! Settings change events and their subscription bus.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, MutexGuard};

use ignited_types::{SkinScope, Traits};

/// Published after a preference changes.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    /// A named setting changed.
    Changed { name: &'static str },
    /// A preferred controller skin was stored for a system or game.
    PreferredControllerSkin {
        skin: Option<String>,
        scope: SkinScope,
        traits: Traits,
    },
    /// The preferred emulator core for a game type changed.
    PreferredCore { key: String, core: String },
    /// A feature flag or one of its options changed.
    Feature { key: String },
}

/// Fan-out of [`SettingsEvent`]s to any number of channel subscribers.
///
/// Subscribers whose receiver has been dropped are pruned on the next
/// publish.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Mutex<Vec<Sender<SettingsEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Receiver<SettingsEvent> {
        let (tx, rx) = mpsc::channel();
        self.lock().push(tx);
        rx
    }

    pub fn publish(&self, event: SettingsEvent) {
        log::debug!("Settings event: {event:?}");
        self.lock().retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Sender<SettingsEvent>>> {
        // Poison is ignored; the sender list is never left half-updated.
        self.subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
