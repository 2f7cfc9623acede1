//! Decision engine
//!
//! Pure per-turn logic with no I/O: the world model is fed snapshots,
//! the analyzers derive this turn's facts, and the policy turns them into
//! one response. Object iteration is always in id order.

pub mod boundary;
pub mod object;
pub mod policy;
pub mod proximity;
pub mod session;
pub mod world;

pub use boundary::{BoundaryVerdict, Extents, check_boundary};
pub use object::{GameObject, ObjectId, ObjectType, Position};
pub use policy::{DecisionState, Response, TurnContext, decide};
pub use proximity::{NearbyObject, Obstacles, classify, find_nearby_powerup, scan};
pub use session::Session;
pub use world::{MapSize, World};
