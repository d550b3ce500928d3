//! Narrative event log.
//!
//! The engine appends one [`GameEvent`] per observable occurrence. Entries
//! carry a coarse [`EventCategory`] tag so a front end can style them; the
//! core never formats colors or markup.

/// Coarse classification of an event for presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EventCategory {
    /// Session start and other neutral notices.
    Info,
    /// The player moved.
    Move,
    /// A move was refused by a wall; no turn was consumed.
    Blocked,
    /// A player attack missed, or an attack command found no target.
    AttackMiss,
    AttackHit,
    AttackCrit,
    /// An enemy was defeated.
    Kill,
    ItemPickup,
    /// An enemy attacked the player (hit or miss).
    EnemyAttack,
    /// An enemy could not find a free cell to move to.
    EnemyFootsteps,
    /// The player was defeated.
    Defeat,
}

/// One entry of the event log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameEvent {
    /// Turn number during which the event happened.
    pub turn: u32,
    pub category: EventCategory,
    pub message: String,
}

impl GameEvent {
    pub fn new(turn: u32, category: EventCategory, message: impl Into<String>) -> Self {
        Self {
            turn,
            category,
            message: message.into(),
        }
    }
}

/// Append-only, unbounded sequence of events. Consumers window it themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog {
    entries: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: GameEvent) {
        self.entries.push(event);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[GameEvent] {
        &self.entries
    }

    /// Entries appended at or after `index`.
    pub fn since(&self, index: usize) -> &[GameEvent] {
        self.entries.get(index..).unwrap_or(&[])
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.entries.iter()
    }

    /// Number of entries with the given category.
    pub fn count(&self, category: EventCategory) -> usize {
        self.entries
            .iter()
            .filter(|event| event.category == category)
            .count()
    }
}
