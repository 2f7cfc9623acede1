//! Nearby-object scan around the controlled tank

use glam::DVec2;

use super::boundary::Extents;
use super::object::{GameObject, ObjectType};
use super::world::World;
use crate::geometry::distance;

/// An object found inside the scan window
#[derive(Debug, Clone, Copy)]
pub struct NearbyObject<'a> {
    pub id: &'a str,
    pub object: &'a GameObject,
    pub position: DVec2,
}

/// Obstacles among the nearby objects
#[derive(Debug, Clone, Default)]
pub struct Obstacles<'a> {
    /// Walls that can be shot away, in scan order
    pub destructible: Vec<NearbyObject<'a>>,
    /// At least one solid wall is nearby
    pub solid_wall: bool,
}

/// Objects strictly inside the square of half-width `window` around `center`
///
/// Boundary geometry, polygon objects and the object with id `exclude`
/// (normally our own tank) are never reported.
pub fn scan<'a>(world: &'a World, center: DVec2, window: f64, exclude: &str) -> Vec<NearbyObject<'a>> {
    world
        .iter()
        .filter(|(id, obj)| id.as_str() != exclude && !obj.kind.is_boundary())
        .filter_map(|(id, obj)| {
            let position = obj.point()?;
            let offset = (position - center).abs();
            (offset.x < window && offset.y < window).then_some(NearbyObject {
                id: id.as_str(),
                object: obj,
                position,
            })
        })
        .collect()
}

/// Split nearby objects into destructible walls and the solid-wall flag
pub fn classify<'a>(nearby: &[NearbyObject<'a>]) -> Obstacles<'a> {
    let mut obstacles = Obstacles::default();
    for item in nearby {
        match item.object.kind {
            ObjectType::DestructibleWall => obstacles.destructible.push(*item),
            ObjectType::Wall => obstacles.solid_wall = true,
            _ => {}
        }
    }
    obstacles
}

/// Travel target: the first worthwhile nearby powerup, else the enemy
///
/// A powerup counts only if it lies strictly inside the extents shrunk by
/// `inset`. The first such powerup is taken when its distance is at most
/// `range_factor` times the enemy distance; otherwise the enemy position
/// is returned.
pub fn find_nearby_powerup(
    nearby: &[NearbyObject<'_>],
    own: DVec2,
    enemy: DVec2,
    extents: &Extents,
    inset: f64,
    range_factor: f64,
) -> DVec2 {
    let candidate = nearby
        .iter()
        .filter(|item| item.object.kind == ObjectType::Powerup)
        .find(|item| extents.contains_inset(item.position, inset));

    let Some(powerup) = candidate else {
        return enemy;
    };

    let (powerup_dist, _, _) = distance(own, powerup.position);
    let (enemy_dist, _, _) = distance(own, enemy);
    if powerup_dist <= enemy_dist * range_factor {
        log::debug!("detouring to powerup {} at {}", powerup.id, powerup.position);
        powerup.position
    } else {
        enemy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::object::Position;

    fn world_with(objects: Vec<(&str, GameObject)>) -> World {
        let mut world = World::new();
        world.insert_all(objects.into_iter().map(|(id, o)| (id.to_string(), o)));
        world
    }

    fn extents() -> Extents {
        Extents::new(DVec2::ZERO, DVec2::new(1000.0, 1000.0))
    }

    #[test]
    fn test_window_is_strict() {
        let world = world_with(vec![
            ("me", GameObject::at(ObjectType::Tank, 500.0, 500.0)),
            ("in", GameObject::at(ObjectType::Wall, 539.0, 500.0)),
            ("out", GameObject::at(ObjectType::Wall, 541.0, 500.0)),
            ("edge", GameObject::at(ObjectType::Wall, 500.0, 460.0)),
        ]);
        let nearby = scan(&world, DVec2::new(500.0, 500.0), 40.0, "me");
        let ids: Vec<_> = nearby.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["in"]);
    }

    #[test]
    fn test_boundaries_never_nearby() {
        let world = world_with(vec![
            ("a-edge", GameObject::at(ObjectType::Boundary, 10.0, 10.0)),
            (
                "b-closing",
                GameObject::new(
                    ObjectType::ClosingBoundary,
                    Position::Polygon(vec![DVec2::new(10.0, 10.0)]),
                ),
            ),
            ("c-wall", GameObject::at(ObjectType::DestructibleWall, 15.0, 10.0)),
        ]);
        let nearby = scan(&world, DVec2::new(10.0, 10.0), 40.0, "me");
        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].id, "c-wall");
    }

    #[test]
    fn test_classify() {
        let world = world_with(vec![
            ("d1", GameObject::at(ObjectType::DestructibleWall, 10.0, 0.0)),
            ("d2", GameObject::at(ObjectType::DestructibleWall, -10.0, 0.0)),
            ("w", GameObject::at(ObjectType::Wall, 0.0, 10.0)),
            ("p", GameObject::at(ObjectType::Powerup, 0.0, -10.0)),
        ]);
        let nearby = scan(&world, DVec2::ZERO, 40.0, "me");
        let obstacles = classify(&nearby);
        let ids: Vec<_> = obstacles.destructible.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["d1", "d2"]);
        assert!(obstacles.solid_wall);
    }

    #[test]
    fn test_powerup_within_range() {
        let world = world_with(vec![("p", GameObject::at(ObjectType::Powerup, 520.0, 500.0))]);
        let own = DVec2::new(500.0, 500.0);
        let enemy = DVec2::new(800.0, 500.0);
        let nearby = scan(&world, own, 40.0, "me");
        let target = find_nearby_powerup(&nearby, own, enemy, &extents(), 20.0, 3.0);
        assert_eq!(target, DVec2::new(520.0, 500.0));
    }

    #[test]
    fn test_powerup_too_far_falls_back_to_enemy() {
        let world = world_with(vec![("p", GameObject::at(ObjectType::Powerup, 530.0, 500.0))]);
        let own = DVec2::new(500.0, 500.0);
        // Enemy only 5 away: 30 > 3 * 5
        let enemy = DVec2::new(505.0, 500.0);
        let nearby = scan(&world, own, 40.0, "me");
        let target = find_nearby_powerup(&nearby, own, enemy, &extents(), 20.0, 3.0);
        assert_eq!(target, enemy);
    }

    #[test]
    fn test_powerup_near_edge_ignored() {
        let world = world_with(vec![("p", GameObject::at(ObjectType::Powerup, 15.0, 500.0))]);
        let own = DVec2::new(30.0, 500.0);
        let enemy = DVec2::new(600.0, 500.0);
        let nearby = scan(&world, own, 40.0, "me");
        assert_eq!(nearby.len(), 1);
        let target = find_nearby_powerup(&nearby, own, enemy, &extents(), 20.0, 3.0);
        assert_eq!(target, enemy);
    }

    #[test]
    fn test_no_powerup_targets_enemy() {
        let enemy = DVec2::new(10.0, 10.0);
        let target = find_nearby_powerup(&[], DVec2::ZERO, enemy, &extents(), 20.0, 3.0);
        assert_eq!(target, enemy);
    }
}
