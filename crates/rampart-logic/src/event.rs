use rampart_core::{Frame, ObjectId};

/// What kind of simulation event occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// An object entered the world.
    Spawned {
        /// The new object.
        id: ObjectId,
        /// Name of the template it was built from.
        template: String,
    },
    /// An object took damage.
    Damaged {
        /// The damaged object.
        id: ObjectId,
        /// Health lost after armor.
        amount: f32,
    },
    /// An object was healed.
    Healed {
        /// The healed object.
        id: ObjectId,
        /// Health restored.
        amount: f32,
    },
    /// An object left the world.
    Died {
        /// The destroyed object.
        id: ObjectId,
        /// What destroyed it.
        cause: String,
    },
}

impl EventKind {
    /// Check whether a given object is involved in this event.
    pub fn involves(&self, object: ObjectId) -> bool {
        match self {
            Self::Spawned { id, .. }
            | Self::Damaged { id, .. }
            | Self::Healed { id, .. }
            | Self::Died { id, .. } => *id == object,
        }
    }
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone)]
pub struct Event {
    /// The frame when this event occurred.
    pub frame: Frame,
    /// The specific kind of event that occurred.
    pub kind: EventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl Event {
    /// Create a new event with the given frame, kind, and description.
    pub fn new(frame: Frame, kind: EventKind, description: impl Into<String>) -> Self {
        Self {
            frame,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a simulation run.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<Event>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its
    /// capacity.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Return all events that occurred on the given frame.
    pub fn events_at_frame(&self, frame: Frame) -> Vec<&Event> {
        self.events.iter().filter(|e| e.frame == frame).collect()
    }

    /// Return all events involving the given object.
    pub fn events_for_object(&self, id: ObjectId) -> Vec<&Event> {
        self.events.iter().filter(|e| e.kind.involves(id)).collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_query() {
        let mut log = EventLog::new(0);
        let id = ObjectId(7);
        log.push(Event::new(
            1,
            EventKind::Damaged { id, amount: 10.0 },
            "hit",
        ));
        assert_eq!(log.len(), 1);
        assert_eq!(log.events_at_frame(1).len(), 1);
        assert_eq!(log.events_for_object(id).len(), 1);
        assert!(log.events_for_object(ObjectId(8)).is_empty());
    }

    #[test]
    fn capacity_trims_oldest() {
        let mut log = EventLog::new(2);
        let id = ObjectId(1);
        for frame in 0..5 {
            log.push(Event::new(
                frame,
                EventKind::Healed { id, amount: 1.0 },
                "pulse",
            ));
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[0].frame, 3);
        assert_eq!(log.events()[1].frame, 4);
    }
}
