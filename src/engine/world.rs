//! Authoritative view of the map, built from setup and turn snapshots
//!
//! Objects are kept in id order so that every scan over the world visits
//! them in the same sequence from run to run.

use std::collections::BTreeMap;

use glam::DVec2;

use super::boundary::Extents;
use super::object::{GameObject, ObjectId, ObjectType};
use crate::error::InitError;

/// Map dimensions fixed at initialization (largest boundary X and Y)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSize {
    pub width: f64,
    pub height: f64,
}

/// Every object the client currently knows about
#[derive(Debug, Clone, Default)]
pub struct World {
    objects: BTreeMap<ObjectId, GameObject>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace objects wholesale (setup phase)
    pub fn insert_all<I>(&mut self, updated: I)
    where
        I: IntoIterator<Item = (ObjectId, GameObject)>,
    {
        self.objects.extend(updated);
    }

    /// Apply one turn: deletions first, then updates
    ///
    /// Deleting an unknown id is a no-op. An id that is both deleted and
    /// updated in the same turn ends up present with the new record.
    pub fn apply_snapshot<I>(&mut self, deleted: &[ObjectId], updated: I)
    where
        I: IntoIterator<Item = (ObjectId, GameObject)>,
    {
        for id in deleted {
            if self.objects.remove(id).is_none() {
                log::trace!("delete for unknown object {id}");
            }
        }
        self.insert_all(updated);
    }

    pub fn get(&self, id: &str) -> Option<&GameObject> {
        self.objects.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.objects.contains_key(id)
    }

    /// Point position of an object, if it exists and is not a polygon
    pub fn position_of(&self, id: &str) -> Option<DVec2> {
        self.get(id).and_then(GameObject::point)
    }

    /// All objects in id order
    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &GameObject)> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects tagged as the fixed map boundary
    pub fn boundaries(&self) -> impl Iterator<Item = (&ObjectId, &GameObject)> {
        self.iter().filter(|(_, obj)| obj.kind == ObjectType::Boundary)
    }

    /// Bounding box of every boundary vertex, `None` if there is no boundary
    pub fn boundary_extents(&self) -> Option<Extents> {
        Extents::from_points(
            self.boundaries()
                .flat_map(|(_, obj)| obj.position.points().iter().copied()),
        )
    }

    /// Map width and height from the boundary objects seen during setup
    pub fn map_size(&self) -> Result<MapSize, InitError> {
        let mut found = false;
        let mut size = MapSize {
            width: f64::NEG_INFINITY,
            height: f64::NEG_INFINITY,
        };

        for (id, obj) in self.boundaries() {
            let points = obj.position.points();
            if points.is_empty() {
                return Err(InitError::EmptyBoundary(id.clone()));
            }
            for p in points {
                size.width = size.width.max(p.x);
                size.height = size.height.max(p.y);
            }
            found = true;
        }

        if found {
            Ok(size)
        } else {
            Err(InitError::MissingBoundary)
        }
    }
}
