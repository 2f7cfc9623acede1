//! Message boundary with the game server
//!
//! The server speaks one JSON document per line. Setup and turn payloads
//! are JSON objects wrapped in a `message` field; the two sentinels are
//! bare JSON strings. Everything is validated into typed structs here so
//! the engine never touches raw JSON.

use std::collections::BTreeMap;
use std::io::{BufRead, StdinLock, Stdout, Write};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::consts::{END_INIT_SIGNAL, END_SIGNAL};
use crate::engine::{GameObject, ObjectId};
use crate::error::{ProtocolError, TransportError};

pub use crate::engine::Response;

/// One inbound line
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// A regular message, still untyped
    Message(Value),
    /// Setup is over, turns follow
    EndInit,
    /// Game over
    End,
}

impl Inbound {
    pub fn parse(line: &str) -> Result<Self, TransportError> {
        let value: Value = serde_json::from_str(line)?;
        Ok(match value {
            Value::String(s) if s == END_INIT_SIGNAL => Inbound::EndInit,
            Value::String(s) if s == END_SIGNAL => Inbound::End,
            other => Inbound::Message(other),
        })
    }
}

/// Our tank and the enemy's
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TankIds {
    pub own: ObjectId,
    pub enemy: ObjectId,
}

/// Payload of a setup-phase message
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetupMessage {
    #[serde(default, rename = "your-tank-id")]
    pub your_tank_id: Option<ObjectId>,
    #[serde(default, rename = "enemy-tank-id")]
    pub enemy_tank_id: Option<ObjectId>,
    /// Raw records, parsed one by one in [`SetupMessage::objects`]
    #[serde(default)]
    pub updated_objects: BTreeMap<ObjectId, Value>,
}

impl SetupMessage {
    pub fn from_message(message: Value) -> Result<Self, ProtocolError> {
        unwrap_body(message)
    }

    /// Tank identities, required in the first setup message
    pub fn tank_ids(&self) -> Result<TankIds, ProtocolError> {
        let own = self
            .your_tank_id
            .clone()
            .ok_or(ProtocolError::MissingField("your-tank-id"))?;
        let enemy = self
            .enemy_tank_id
            .clone()
            .ok_or(ProtocolError::MissingField("enemy-tank-id"))?;
        Ok(TankIds { own, enemy })
    }

    /// Objects that parsed; bad records are logged and dropped
    pub fn objects(self) -> Vec<(ObjectId, GameObject)> {
        parse_objects(self.updated_objects)
    }
}

/// Payload of a turn message
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TurnSnapshot {
    #[serde(default)]
    pub deleted_objects: Vec<ObjectId>,
    /// Raw records, parsed one by one in [`TurnSnapshot::into_parts`]
    #[serde(default)]
    pub updated_objects: BTreeMap<ObjectId, Value>,
}

impl TurnSnapshot {
    pub fn from_message(message: Value) -> Result<Self, ProtocolError> {
        unwrap_body(message)
    }

    /// Deleted ids plus the updates that parsed
    ///
    /// A bad record only loses itself; the rest of the turn still applies.
    pub fn into_parts(self) -> (Vec<ObjectId>, Vec<(ObjectId, GameObject)>) {
        (self.deleted_objects, parse_objects(self.updated_objects))
    }
}

fn parse_objects(raw: BTreeMap<ObjectId, Value>) -> Vec<(ObjectId, GameObject)> {
    raw.into_iter()
        .filter_map(|(id, value)| match serde_json::from_value(value) {
            Ok(object) => Some((id, object)),
            Err(err) => {
                log::warn!("skipping unreadable object {id}: {err}");
                None
            }
        })
        .collect()
}

fn unwrap_body<T: DeserializeOwned>(message: Value) -> Result<T, ProtocolError> {
    let body = match message {
        Value::Object(mut outer) => outer.remove("message"),
        _ => None,
    };
    match body {
        Some(body @ Value::Object(_)) => serde_json::from_value(body)
            .map_err(|source| ProtocolError::Malformed {
                field: "message",
                source,
            }),
        _ => Err(ProtocolError::MissingBody),
    }
}

/// Channel to the game server
///
/// `read_message` blocks until the next line arrives; there is no timeout.
pub trait Transport {
    fn read_message(&mut self) -> Result<Inbound, TransportError>;
    fn post_message(&mut self, response: &Response) -> Result<(), TransportError>;
}

/// Line-delimited JSON over any reader/writer pair
pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> LineTransport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl LineTransport<StdinLock<'static>, Stdout> {
    /// The server talks to us over stdin/stdout
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Transport for LineTransport<R, W> {
    fn read_message(&mut self) -> Result<Inbound, TransportError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(TransportError::Closed);
            }
            let trimmed = self.line.trim();
            if !trimmed.is_empty() {
                return Inbound::parse(trimmed);
            }
        }
    }

    fn post_message(&mut self, response: &Response) -> Result<(), TransportError> {
        serde_json::to_writer(&mut self.writer, response)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
