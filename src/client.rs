//! Lockstep game loop
//!
//! Setup: read the tank identities, then collect objects until END_INIT.
//! Turns: read a snapshot, apply it, decide, answer; stop on END.

use crate::comms::{Inbound, Response, SetupMessage, Transport, TurnSnapshot};
use crate::engine::{Session, World, decide};
use crate::error::{ProtocolError, Result, TransportError};
use crate::settings::PolicyConfig;

/// Result of handling one inbound turn message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A response was posted
    Played,
    /// The turn payload was unusable; an empty response was posted
    Skipped,
    /// The server ended the game
    GameOver,
}

/// A connected client: transport plus game session
pub struct Client<T> {
    transport: T,
    session: Session,
}

impl<T: Transport> Client<T> {
    /// Run the setup handshake and build the session
    pub fn connect(mut transport: T, config: PolicyConfig) -> Result<Self> {
        let first = match transport.read_message()? {
            Inbound::Message(message) => SetupMessage::from_message(message)?,
            Inbound::EndInit => return Err(ProtocolError::UnexpectedSignal("END_INIT").into()),
            Inbound::End => return Err(ProtocolError::UnexpectedSignal("END").into()),
        };
        let ids = first.tank_ids()?;
        log::info!("Playing as {} against {}", ids.own, ids.enemy);

        let mut world = World::new();
        world.insert_all(first.objects());

        loop {
            match transport.read_message()? {
                Inbound::EndInit => break,
                Inbound::End => return Err(ProtocolError::UnexpectedSignal("END").into()),
                Inbound::Message(message) => {
                    let setup = SetupMessage::from_message(message)?;
                    world.insert_all(setup.objects());
                }
            }
        }

        if world.is_empty() {
            log::warn!("setup delivered no objects");
        }
        let session = Session::initialize(config, ids.own, ids.enemy, world)?;
        Ok(Self { transport, session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Handle the next inbound message
    ///
    /// Malformed turn payloads are logged and answered with an empty
    /// response so the game can continue.
    pub fn play_turn(&mut self) -> Result<TurnOutcome> {
        loop {
            let message = match self.transport.read_message() {
                Ok(Inbound::Message(message)) => message,
                Ok(Inbound::End) => return Ok(TurnOutcome::GameOver),
                Ok(Inbound::EndInit) => {
                    log::warn!("ignoring END_INIT received mid-game");
                    continue;
                }
                Err(TransportError::Json(err)) => {
                    log::warn!("turn {}: unreadable line: {err}", self.session.turn + 1);
                    self.transport.post_message(&Response::default())?;
                    return Ok(TurnOutcome::Skipped);
                }
                Err(err) => return Err(err.into()),
            };

            let snapshot = match TurnSnapshot::from_message(message) {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    log::warn!("turn {}: skipping malformed snapshot: {err}", self.session.turn + 1);
                    self.transport.post_message(&Response::default())?;
                    return Ok(TurnOutcome::Skipped);
                }
            };

            let (deleted, updated) = snapshot.into_parts();
            self.session.world.apply_snapshot(&deleted, updated);
            let response = decide(&mut self.session);
            if response.is_empty() {
                log::debug!("turn {}: no action", self.session.turn);
            }
            self.transport.post_message(&response)?;
            return Ok(TurnOutcome::Played);
        }
    }

    /// Play until the server ends the game; returns the number of turns answered
    pub fn run(&mut self) -> Result<u64> {
        let mut answered = 0;
        loop {
            match self.play_turn()? {
                TurnOutcome::GameOver => break,
                TurnOutcome::Played | TurnOutcome::Skipped => answered += 1,
            }
        }
        log::info!("Game over after {answered} turns");
        Ok(answered)
    }
}
