//! # HUD Events
//!
//! Notifications from the controller to host listeners (sound cues, toast
//! messages, logging). Delivery is best-effort.
//!
//! ```text
//! ┌──────────────┐      ┌─────────────┐      ┌──────────────┐
//! │ HudController│─────>│   bounded   │─────>│ host listener│
//! │  (update)    │ try  │   channel   │ drain│  (any thread)│
//! └──────────────┘ send └─────────────┘      └──────────────┘
//! ```

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use almanac_time::Season;

/// Events emitted by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HudEvent {
    /// The host reported an active session.
    SessionStarted,
    /// The host stopped reporting a session.
    SessionEnded,
    /// The displayed day moved forward (or was seeded, with `delta` 0).
    DayAdvanced {
        /// Displayed day after the change.
        day: u64,
        /// Days added.
        delta: u64,
    },
    /// Time jumped backward and the displayed day was reset.
    TimeReversed {
        /// Displayed day after the reset.
        day: u64,
    },
    /// The season changed.
    SeasonChanged {
        /// Previous season.
        from: Season,
        /// New season.
        to: Season,
        /// Raw day count at the change.
        day: u64,
    },
}

/// Event bus between the controller and its listeners.
///
/// Bounded so a listener that stops draining cannot grow memory.
pub struct EventBus {
    sender: Sender<HudEvent>,
    receiver: Receiver<HudEvent>,
}

impl EventBus {
    /// Creates a new event bus holding at most `capacity` undelivered events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }

    /// Creates a connected sender and receiver.
    #[must_use]
    pub fn create_pair(capacity: usize) -> (EventSender, EventReceiver) {
        let bus = Self::new(capacity);
        (bus.sender(), bus.receiver())
    }
}

/// Handle for sending events.
#[derive(Clone, Debug)]
pub struct EventSender {
    sender: Sender<HudEvent>,
}

impl EventSender {
    /// Sends an event without blocking.
    ///
    /// Returns `false` if the event was dropped.
    #[inline]
    pub fn send(&self, event: HudEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::trace!(?event, "Event channel full, event dropped");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle for receiving events.
#[derive(Clone, Debug)]
pub struct EventReceiver {
    receiver: Receiver<HudEvent>,
}

impl EventReceiver {
    /// Receives all pending events without blocking.
    #[inline]
    pub fn drain(&self) -> Vec<HudEvent> {
        let mut events = Vec::with_capacity(8);
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Receives one event, if any is pending.
    #[inline]
    pub fn try_recv(&self) -> Option<HudEvent> {
        self.receiver.try_recv().ok()
    }

    /// Returns the number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Checks if there are pending events.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}
