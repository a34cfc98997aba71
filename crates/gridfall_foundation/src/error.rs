//! Error types for the Gridfall runtime.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Only fatal startup conditions and invariant violations become [`Error`]
//! values: a content set that registers two commands under one name, reuses
//! an entity id, or wires a portal twice is internally inconsistent and
//! cannot be corrected at runtime. Recoverable, user-visible conditions
//! (unknown command, unlocatable item, closed exits) are one-line notices
//! written to the output collaborator and never surface here.

use thiserror::Error;

use crate::direction::Direction;

/// Convenience alias used across all Gridfall crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Gridfall operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a duplicate-command-name error.
    #[must_use]
    pub fn duplicate_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateCommand { name: name.into() })
    }

    /// Creates an invalid-command-type-name error.
    #[must_use]
    pub fn invalid_command_name(type_name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCommandName {
            type_name: type_name.into(),
        })
    }

    /// Creates a duplicate-entity-id error.
    #[must_use]
    pub fn duplicate_entity_id(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateEntityId { id: id.into() })
    }

    /// Creates an unknown-entity-id error.
    #[must_use]
    pub fn unknown_entity_id(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownEntityId { id: id.into() })
    }

    /// Creates an invalid-entity-name error.
    #[must_use]
    pub fn invalid_entity_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidEntityName { name: name.into() })
    }

    /// Creates a duplicate-room-kind error.
    #[must_use]
    pub fn duplicate_room_kind(kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateRoomKind { kind: kind.into() })
    }

    /// Creates an unknown-room-kind error.
    #[must_use]
    pub fn unknown_room_kind(kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownRoomKind { kind: kind.into() })
    }

    /// Creates a duplicate-portal error.
    #[must_use]
    pub fn duplicate_portal(room: impl Into<String>, direction: Direction) -> Self {
        Self::new(ErrorKind::DuplicatePortal {
            room: room.into(),
            direction,
        })
    }

    /// Creates an invalid-direction error.
    #[must_use]
    pub fn invalid_direction() -> Self {
        Self::new(ErrorKind::InvalidDirection)
    }

    /// Creates a start-room-rejected error.
    #[must_use]
    pub fn start_room_rejected() -> Self {
        Self::new(ErrorKind::StartRoomRejected)
    }

    /// Creates an invalid-delay error.
    #[must_use]
    pub fn invalid_delay(ms: u64) -> Self {
        Self::new(ErrorKind::InvalidDelay { ms })
    }

    /// Creates an input error.
    #[must_use]
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A command tried to register under a name already taken.
    #[error("duplicate command name: {name}")]
    DuplicateCommand {
        /// The contested (normalized) command name.
        name: String,
    },

    /// A command type name does not follow the `...Command` convention.
    #[error("invalid command type name: {type_name} (must end in 'Command')")]
    InvalidCommandName {
        /// The offending type name.
        type_name: String,
    },

    /// An entity tried to register under an id already taken.
    #[error("duplicate entity id: {id}")]
    DuplicateEntityId {
        /// The contested stable id.
        id: String,
    },

    /// An entity id change referenced an id that was never registered.
    #[error("failed to locate previously registered entity id: {id}")]
    UnknownEntityId {
        /// The missing stable id.
        id: String,
    },

    /// An entity name contains characters the tokenizer cannot round-trip.
    #[error("entity name contains invalid characters: {name}")]
    InvalidEntityName {
        /// The offending name.
        name: String,
    },

    /// A singleton room kind was instantiated twice.
    #[error("the room kind '{kind}' already exists")]
    DuplicateRoomKind {
        /// The contested kind identifier.
        kind: String,
    },

    /// A room kind was requested that was never built.
    #[error("unknown room kind: {kind}")]
    UnknownRoomKind {
        /// The missing kind identifier.
        kind: String,
    },

    /// A room already has a portal for the given direction.
    #[error("there is already a portal set for the direction {direction} in '{room}'")]
    DuplicatePortal {
        /// The room's display name.
        room: String,
        /// The contested direction.
        direction: Direction,
    },

    /// A portal was registered for the `None` sentinel direction.
    #[error("a portal cannot be registered for the None direction")]
    InvalidDirection,

    /// The player failed to enter the start room; the game cannot begin.
    #[error("player failed to enter the start room")]
    StartRoomRejected,

    /// An authored pacing delay is below the minimum.
    #[error("delay durations under 50 ms are not allowed: {ms}")]
    InvalidDelay {
        /// The rejected duration in milliseconds.
        ms: u64,
    },

    /// Reading user input failed.
    #[error("input error: {0}")]
    Input(String),

    /// Internal invariant violation (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
