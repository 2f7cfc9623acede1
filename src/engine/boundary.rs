//! Map extents and edge-proximity checks

use glam::DVec2;

/// Axis-aligned bounding box of the boundary geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub low: DVec2,
    pub high: DVec2,
}

impl Extents {
    pub fn new(low: DVec2, high: DVec2) -> Self {
        Self { low, high }
    }

    /// Bounding box of a set of points, `None` when empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec2>,
    {
        points.into_iter().fold(None, |acc, p| match acc {
            None => Some(Self::new(p, p)),
            Some(e) => Some(Self::new(e.low.min(p), e.high.max(p))),
        })
    }

    /// Midpoint of the extents
    #[inline]
    pub fn center(&self) -> DVec2 {
        (self.low + self.high) / 2.0
    }

    /// Whether `point` lies strictly inside the extents shrunk by `inset` on every side
    pub fn contains_inset(&self, point: DVec2, inset: f64) -> bool {
        point.x > self.low.x + inset
            && point.x < self.high.x - inset
            && point.y > self.low.y + inset
            && point.y < self.high.y - inset
    }
}

/// Outcome of the edge check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryVerdict {
    Safe,
    /// Too close to the low-X edge
    West,
    /// Too close to the high-X edge
    East,
    /// Too close to the low-Y edge
    South,
    /// Too close to the high-Y edge
    North,
}

impl BoundaryVerdict {
    pub fn is_safe(self) -> bool {
        self == BoundaryVerdict::Safe
    }

    /// Canonical heading of the offending edge, `None` when safe
    pub fn edge_angle(self) -> Option<f64> {
        match self {
            BoundaryVerdict::Safe => None,
            BoundaryVerdict::West => Some(180.0),
            BoundaryVerdict::East => Some(0.0),
            BoundaryVerdict::South => Some(90.0),
            BoundaryVerdict::North => Some(270.0),
        }
    }
}

/// Check `position` against each edge, X axis first
///
/// Only the first violation is reported, so a tank in a corner gets the
/// west/east verdict.
pub fn check_boundary(position: DVec2, extents: &Extents, margin: f64) -> BoundaryVerdict {
    if position.x - margin < extents.low.x {
        BoundaryVerdict::West
    } else if position.x + margin > extents.high.x {
        BoundaryVerdict::East
    } else if position.y - margin < extents.low.y {
        BoundaryVerdict::South
    } else if position.y + margin > extents.high.y {
        BoundaryVerdict::North
    } else {
        BoundaryVerdict::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Extents {
        Extents::new(DVec2::ZERO, DVec2::new(1000.0, 1000.0))
    }

    #[test]
    fn test_from_points() {
        let e = Extents::from_points([
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 600.0),
            DVec2::new(900.0, 600.0),
            DVec2::new(900.0, 0.0),
        ])
        .unwrap();
        assert_eq!(e.low, DVec2::ZERO);
        assert_eq!(e.high, DVec2::new(900.0, 600.0));
        assert_eq!(e.center(), DVec2::new(450.0, 300.0));
        assert!(Extents::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_near_low_corner_is_west() {
        let verdict = check_boundary(DVec2::new(50.0, 50.0), &square(), 100.0);
        assert_eq!(verdict, BoundaryVerdict::West);
        assert_eq!(verdict.edge_angle(), Some(180.0));
    }

    #[test]
    fn test_each_edge() {
        let e = square();
        assert_eq!(check_boundary(DVec2::new(950.0, 500.0), &e, 100.0), BoundaryVerdict::East);
        assert_eq!(check_boundary(DVec2::new(500.0, 20.0), &e, 100.0), BoundaryVerdict::South);
        assert_eq!(check_boundary(DVec2::new(500.0, 990.0), &e, 100.0), BoundaryVerdict::North);
        assert_eq!(check_boundary(DVec2::new(500.0, 500.0), &e, 100.0), BoundaryVerdict::Safe);
    }

    #[test]
    fn test_corner_reports_x_axis() {
        let e = square();
        assert_eq!(check_boundary(DVec2::new(980.0, 980.0), &e, 100.0), BoundaryVerdict::East);
        assert_eq!(check_boundary(DVec2::new(10.0, 990.0), &e, 100.0), BoundaryVerdict::West);
    }

    #[test]
    fn test_exact_margin_is_safe() {
        // Strict comparison: sitting exactly `margin` away is fine
        let verdict = check_boundary(DVec2::new(100.0, 900.0), &square(), 100.0);
        assert!(verdict.is_safe());
        assert_eq!(verdict.edge_angle(), None);
    }

    #[test]
    fn test_contains_inset() {
        let e = square();
        assert!(e.contains_inset(DVec2::new(21.0, 500.0), 20.0));
        assert!(!e.contains_inset(DVec2::new(20.0, 500.0), 20.0));
        assert!(!e.contains_inset(DVec2::new(500.0, 985.0), 20.0));
    }
}
