//! Tank Pilot - a decision-making client for a turn-based tank battle game
//!
//! Core modules:
//! - `engine`: World model, situational analysis and the per-turn decision policy
//! - `geometry`: Distance/heading helpers shared by the engine
//! - `comms`: Typed message boundary and the line-delimited JSON transport
//! - `client`: Lockstep game loop (setup, turns, shutdown)
//! - `settings`: Tunable policy parameters

pub mod client;
pub mod comms;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod settings;

pub use client::Client;
pub use comms::{LineTransport, Response, Transport};
pub use engine::{Session, decide};
pub use error::{ClientError, ConfigError, InitError, ProtocolError, TransportError};
pub use settings::PolicyConfig;

/// Policy defaults
pub mod consts {
    /// Enemy distance at or below which the tank shoots and circles instead of travelling
    pub const ENGAGEMENT_TOLERANCE: f64 = 200.0;
    /// Half-width of the square window scanned around the tank
    pub const PROXIMITY_WINDOW: f64 = 40.0;
    /// Distance from a map edge considered unsafe
    pub const BOUNDARY_MARGIN: f64 = 100.0;
    /// Powerups closer than this to a map edge are ignored
    pub const POWERUP_INSET: f64 = 20.0;
    /// A powerup is worth a detour when no farther than this multiple of the enemy distance
    pub const POWERUP_RANGE_FACTOR: f64 = 3.0;

    /// Sentinel line closing the setup phase
    pub const END_INIT_SIGNAL: &str = "END_INIT";
    /// Sentinel line closing the game
    pub const END_SIGNAL: &str = "END";
}
