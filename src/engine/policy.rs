//! Per-turn decision policy
//!
//! Shooting and movement are decided independently and merged into one
//! [`Response`]:
//!
//! - Shoot: the first destructible wall in the scan window, otherwise the
//!   enemy when it is within engagement range and no solid wall is nearby.
//! - Move: in priority order, unstick towards the map centre, retreat from
//!   an edge, travel (powerup or enemy), or circle the enemy.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::boundary::{BoundaryVerdict, Extents, check_boundary};
use super::proximity::{NearbyObject, Obstacles, classify, find_nearby_powerup, scan};
use super::session::Session;
use crate::geometry::{angle, distance, mean_angle, normalize_degrees, tangent_angle};
use crate::settings::PolicyConfig;

/// Action sent back to the server for one turn
///
/// Any subset of fields may be set; the policy never sets both `move`
/// and `path`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Turret heading in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoot: Option<f64>,
    /// Hull heading in degrees
    #[serde(default, rename = "move", skip_serializing_if = "Option::is_none")]
    pub move_angle: Option<f64>,
    /// Point for the server to path-find towards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<DVec2>,
}

impl Response {
    pub fn is_empty(&self) -> bool {
        self.shoot.is_none() && self.move_angle.is_none() && self.path.is_none()
    }
}

/// What the policy remembers between turns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionState {
    /// Own position last turn (stuck detection)
    pub last_position: Option<DVec2>,
    /// Enemy distance last turn (is the gap closing?)
    pub last_enemy_distance: Option<f64>,
    /// Last `move` heading in effect; cleared when steering by `path`
    pub last_move_angle: Option<f64>,
}

/// Situational facts for the current turn
#[derive(Debug, Clone)]
pub struct TurnContext<'a> {
    pub own: DVec2,
    pub enemy: DVec2,
    pub enemy_distance: f64,
    pub enemy_angle: f64,
    pub extents: Extents,
    pub verdict: BoundaryVerdict,
    pub nearby: Vec<NearbyObject<'a>>,
    pub obstacles: Obstacles<'a>,
}

impl<'a> TurnContext<'a> {
    /// Collect this turn's facts, `None` if a tank or the boundary is missing
    pub fn gather(session: &'a Session) -> Option<Self> {
        let world = &session.world;
        let config = &session.config;

        let Some(own) = world.position_of(&session.tank_id) else {
            log::warn!("turn {}: own tank {} not in world", session.turn, session.tank_id);
            return None;
        };
        let Some(enemy) = world.position_of(&session.enemy_id) else {
            log::warn!("turn {}: enemy tank {} not in world", session.turn, session.enemy_id);
            return None;
        };
        let Some(extents) = world.boundary_extents() else {
            log::warn!("turn {}: no boundary object in world", session.turn);
            return None;
        };

        let (enemy_distance, _, _) = distance(own, enemy);
        let nearby = scan(world, own, config.proximity_window, &session.tank_id);
        let obstacles = classify(&nearby);

        Some(Self {
            own,
            enemy,
            enemy_distance,
            enemy_angle: angle(own, enemy),
            extents,
            verdict: check_boundary(own, &extents, config.boundary_margin),
            nearby,
            obstacles,
        })
    }
}

/// Decide this turn's action and update the session's memory
///
/// A turn where either tank or the boundary cannot be found produces an
/// empty response and leaves the memory untouched.
pub fn decide(session: &mut Session) -> Response {
    session.turn += 1;

    let (response, own, enemy_distance) = {
        let Some(ctx) = TurnContext::gather(session) else {
            return Response::default();
        };
        let response = compose(&ctx, &session.decision, &session.config);
        log::debug!(
            "turn {}: own={} enemy_dist={:.1} verdict={:?} nearby={} -> {:?}",
            session.turn,
            ctx.own,
            ctx.enemy_distance,
            ctx.verdict,
            ctx.nearby.len(),
            response
        );
        (response, ctx.own, ctx.enemy_distance)
    };

    let memory = &mut session.decision;
    if response.move_angle.is_some() {
        memory.last_move_angle = response.move_angle;
    } else if response.path.is_some() {
        memory.last_move_angle = None;
    }
    memory.last_enemy_distance = Some(enemy_distance);
    memory.last_position = Some(own);

    response
}

fn compose(ctx: &TurnContext<'_>, memory: &DecisionState, config: &PolicyConfig) -> Response {
    let mut response = Response::default();

    if let Some(wall) = ctx.obstacles.destructible.first() {
        response.shoot = Some(angle(ctx.own, wall.position));
    } else if !ctx.obstacles.solid_wall && ctx.enemy_distance <= config.engagement_tolerance {
        response.shoot = Some(ctx.enemy_angle);
    }

    let center = ctx.extents.center();
    if memory.last_position == Some(ctx.own) {
        // No progress since last turn
        response.move_angle = Some(angle(ctx.own, center));
    } else if !ctx.verdict.is_safe() {
        if let Some(edge) = ctx.verdict.edge_angle() {
            log::debug!("too close to the {edge:.0}° edge, retreating");
        }
        response.path = Some(center);
    } else if ctx.enemy_distance > config.engagement_tolerance {
        response.path = Some(find_nearby_powerup(
            &ctx.nearby,
            ctx.own,
            ctx.enemy,
            &ctx.extents,
            config.powerup_inset,
            config.powerup_range_factor,
        ));
    } else {
        response.move_angle = circle(ctx, memory);
    }

    response
}

/// Strafe around the enemy
///
/// Starts along the tangent; afterwards, while the enemy is not pulling
/// away, steers halfway between the tangent and the enemy. When the gap is
/// growing no new heading is issued and the previous one stays in effect.
fn circle(ctx: &TurnContext<'_>, memory: &DecisionState) -> Option<f64> {
    let tangent = tangent_angle(ctx.own, ctx.enemy);

    if memory.last_move_angle.is_none() {
        return Some(tangent);
    }

    match memory.last_enemy_distance {
        Some(last) if ctx.enemy_distance <= last => {
            Some(normalize_degrees(mean_angle(ctx.enemy_angle, tangent).round()))
        }
        _ => None,
    }
}
