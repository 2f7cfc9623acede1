//! Everything the client owns for the lifetime of one game

use super::object::ObjectId;
use super::policy::DecisionState;
use super::world::{MapSize, World};
use crate::error::InitError;
use crate::settings::PolicyConfig;

/// Game session: world view, tank identities, map size and policy memory
#[derive(Debug, Clone)]
pub struct Session {
    pub config: PolicyConfig,
    /// Our tank
    pub tank_id: ObjectId,
    pub enemy_id: ObjectId,
    pub world: World,
    /// Fixed once setup completes
    pub map_size: MapSize,
    pub decision: DecisionState,
    /// Turns decided so far
    pub turn: u64,
}

impl Session {
    /// Build a session from the world collected during setup
    ///
    /// Fails when the world has no usable boundary or either tank is missing.
    pub fn initialize(
        config: PolicyConfig,
        tank_id: ObjectId,
        enemy_id: ObjectId,
        world: World,
    ) -> Result<Self, InitError> {
        let map_size = world.map_size()?;

        for id in [&tank_id, &enemy_id] {
            if !world.contains(id) {
                return Err(InitError::TankNotFound(id.clone()));
            }
        }

        log::info!(
            "Session ready: tank={} enemy={} objects={} map={}x{}",
            tank_id,
            enemy_id,
            world.len(),
            map_size.width,
            map_size.height
        );

        Ok(Self {
            config,
            tank_id,
            enemy_id,
            world,
            map_size,
            decision: DecisionState::default(),
            turn: 0,
        })
    }
}
