//! Game object records as reported by the server

use glam::DVec2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned object identifier
pub type ObjectId = String;

/// Object type tag (the numeric `type` field on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ObjectType {
    Tank,
    Bullet,
    Wall,
    DestructibleWall,
    Boundary,
    /// Shrinking play area, reported alongside the fixed boundary
    ClosingBoundary,
    Powerup,
    /// Any tag this client does not know about
    Unknown(i64),
}

impl From<i64> for ObjectType {
    fn from(tag: i64) -> Self {
        match tag {
            1 => ObjectType::Tank,
            2 => ObjectType::Bullet,
            3 => ObjectType::Wall,
            4 => ObjectType::DestructibleWall,
            5 => ObjectType::Boundary,
            6 => ObjectType::ClosingBoundary,
            7 => ObjectType::Powerup,
            other => ObjectType::Unknown(other),
        }
    }
}

impl From<ObjectType> for i64 {
    fn from(kind: ObjectType) -> Self {
        match kind {
            ObjectType::Tank => 1,
            ObjectType::Bullet => 2,
            ObjectType::Wall => 3,
            ObjectType::DestructibleWall => 4,
            ObjectType::Boundary => 5,
            ObjectType::ClosingBoundary => 6,
            ObjectType::Powerup => 7,
            ObjectType::Unknown(tag) => tag,
        }
    }
}

impl ObjectType {
    /// Map-edge geometry rather than an obstacle or item
    pub fn is_boundary(self) -> bool {
        matches!(self, ObjectType::Boundary | ObjectType::ClosingBoundary)
    }
}

/// Where an object is: a single point, or a polygon for boundaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Position {
    Point(DVec2),
    Polygon(Vec<DVec2>),
}

impl Position {
    pub fn point(&self) -> Option<DVec2> {
        match self {
            Position::Point(p) => Some(*p),
            Position::Polygon(_) => None,
        }
    }

    /// All vertices (a point counts as one)
    pub fn points(&self) -> &[DVec2] {
        match self {
            Position::Point(p) => std::slice::from_ref(p),
            Position::Polygon(points) => points,
        }
    }
}

/// A single object on the map
///
/// Fields this client does not interpret (hp, velocity, powerup kind, ...)
/// are kept untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    #[serde(rename = "type")]
    pub kind: ObjectType,
    pub position: Position,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GameObject {
    pub fn new(kind: ObjectType, position: Position) -> Self {
        Self {
            kind,
            position,
            extra: Map::new(),
        }
    }

    pub fn at(kind: ObjectType, x: f64, y: f64) -> Self {
        Self::new(kind, Position::Point(DVec2::new(x, y)))
    }

    /// Point position, `None` for polygon objects
    #[inline]
    pub fn point(&self) -> Option<DVec2> {
        self.position.point()
    }
}
