//! Error types for the client, its transport and its configuration.

use thiserror::Error;

/// Failures reading from or writing to the game server channel.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON on the wire: {0}")]
    Json(#[from] serde_json::Error),

    #[error("server closed the channel before the game ended")]
    Closed,
}

/// A message parsed as JSON but did not have the expected shape.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("message has no `message` object")]
    MissingBody,

    #[error("setup message is missing `{0}`")]
    MissingField(&'static str),

    #[error("malformed `{field}`: {source}")]
    Malformed {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected {0} signal")]
    UnexpectedSignal(&'static str),
}

/// The world collected during setup cannot support a game.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("no boundary object received during setup")]
    MissingBoundary,

    #[error("boundary object {0} has no position points")]
    EmptyBoundary(String),

    #[error("tank {0} is not present in the world after setup")]
    TankNotFound(String),
}

/// Problems loading or validating a policy configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid `{field}`: {value} ({reason})")]
    Invalid {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Anything that stops the client loop.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("initialization failed: {0}")]
    Init(#[from] InitError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
