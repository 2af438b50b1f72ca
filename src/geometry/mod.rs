use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    squared_euclidean(x1, y1, x2, y2).sqrt()
}

/// Squared Euclidean distance
pub fn squared_euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    (x1 - x2).powi(2) + (y1 - y2).powi(2)
}


/// 2D Point
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_3_4_5() {
        assert_eq!(euclidean(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(squared_euclidean(0.0, 0.0, 3.0, 4.0), 25.0);
    }

    #[test]
    fn test_point_distance_is_symmetric() {
        let a = Point::new(-2.0, 1.0);
        let b = Point::from((4.0, 0.0));
        assert_eq!(a.distance(&b), b.distance(&a));
        assert_eq!(a.distance(&a), 0.0);
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_point_json() {
        let point = Point::new(1.5, -2.0);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
        assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), point);
    }
}
