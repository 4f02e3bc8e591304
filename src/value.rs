//! The tagged union of one point or many points
//!
//! Encoded as a record with a `type` field holding the tag and a `value` field holding the payload:
//!
//! ```json
//! { "type": "single",   "value": { "x": 1.0, "y": 2.0 } }
//! { "type": "multiple", "value": [ { "x": 1.0, "y": 2.0 }, { "x": 3.0, "y": 4.0 } ] }
//! ```
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geometry::Point;

/// Either exactly one point or an ordered sequence of points
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Single(Point),

    /// Order is meaningful and duplicates are kept, i.e. a path or a polygon's vertices.
    Multiple(Vec<Point>),
}

/// The discriminant of a [`Value`] without its payload
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Single,
    Multiple,
}

impl Tag {
    /// The tag's string as it appears in the `type` field
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tag::Single => "single",
            Tag::Multiple => "multiple",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    #[inline]
    pub fn single(point: Point) -> Self {
        Value::Single(point)
    }

    #[inline]
    pub fn multiple(points: impl IntoIterator<Item = Point>) -> Self {
        Value::Multiple(points.into_iter().collect())
    }

    pub fn tag(&self) -> Tag {
        match self {
            Value::Single(_) => Tag::Single,
            Value::Multiple(_) => Tag::Multiple,
        }
    }

    pub fn as_single(&self) -> Option<&Point> {
        match self {
            Value::Single(point) => Some(point),
            Value::Multiple(_) => None,
        }
    }

    pub fn as_multiple(&self) -> Option<&[Point]> {
        match self {
            Value::Single(_) => None,
            Value::Multiple(points) => Some(points),
        }
    }

    /// View the payload as a slice regardless of the variant
    ///
    /// A [`Value::Single`] yields a slice of length one.
    pub fn points(&self) -> &[Point] {
        match self {
            Value::Single(point) => std::slice::from_ref(point),
            Value::Multiple(points) => points,
        }
    }

    pub fn into_points(self) -> Vec<Point> {
        match self {
            Value::Single(point) => vec![point],
            Value::Multiple(points) => points,
        }
    }

    /// Number of points in the payload
    pub fn len(&self) -> usize {
        self.points().len()
    }

    /// Only an empty [`Value::Multiple`] is empty
    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }
}

impl From<Point> for Value {
    fn from(point: Point) -> Self {
        Value::Single(point)
    }
}

impl From<Vec<Point>> for Value {
    fn from(points: Vec<Point>) -> Self {
        Value::Multiple(points)
    }
}

impl TryFrom<Value> for Point {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Single(point) => Ok(point),
            Value::Multiple(_) => Err(Error::WrongVariant {
                expected: Tag::Single,
                found: Tag::Multiple,
            }),
        }
    }
}

impl TryFrom<Value> for Vec<Point> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Single(_) => Err(Error::WrongVariant {
                expected: Tag::Multiple,
                found: Tag::Single,
            }),
            Value::Multiple(points) => Ok(points),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::geometry::Point;
    use crate::value::{Tag, Value};

    static POINTS: [Point; 4] = [
        Point::new(0.0, 0.0),
        Point::new(12.3, 4.56),
        Point::new(-1.3, -3.7),
        Point::new(12.3, 4.56),
    ];

    #[test]
    fn single() {
        for p in POINTS {
            let value = Value::single(p);
            assert_eq!(Tag::Single, value.tag());
            assert_eq!(Some(&p), value.as_single());
            assert_eq!(None, value.as_multiple());
            assert_eq!(value, Value::from(p));
        }
    }

    #[test]
    fn multiple_keeps_order_and_duplicates() {
        for n in [0, 1, POINTS.len()] {
            let value = Value::multiple(POINTS[..n].iter().copied());
            assert_eq!(Tag::Multiple, value.tag());
            assert_eq!(Some(&POINTS[..n]), value.as_multiple());
            assert_eq!(None, value.as_single());
            assert_eq!(value, Value::from(POINTS[..n].to_vec()));
        }
    }

    #[test]
    fn discriminate() {
        let values = [
            Value::single(POINTS[1]),
            Value::multiple(POINTS),
            Value::multiple([]),
        ];
        for value in values {
            let recovered = match &value {
                Value::Single(point) => Value::Single(*point),
                Value::Multiple(points) => Value::Multiple(points.clone()),
            };
            assert_eq!(value, recovered);
        }
    }

    #[test]
    fn points_view() {
        let single = Value::single(POINTS[2]);
        assert_eq!(&POINTS[2..3], single.points());
        assert_eq!(1, single.len());
        assert!(!single.is_empty());
        assert_eq!(vec![POINTS[2]], single.into_points());

        let multiple = Value::multiple(POINTS);
        assert_eq!(&POINTS[..], multiple.points());
        assert_eq!(POINTS.len(), multiple.len());
        assert_eq!(POINTS.to_vec(), multiple.into_points());

        let empty = Value::multiple([]);
        assert!(empty.is_empty());
        assert_eq!(0, empty.len());
    }

    #[test]
    fn try_from() {
        let point: Point = Value::single(POINTS[1]).try_into().unwrap();
        assert_eq!(POINTS[1], point);

        let points: Vec<Point> = Value::multiple(POINTS).try_into().unwrap();
        assert_eq!(POINTS.to_vec(), points);

        assert!(matches!(
            Point::try_from(Value::multiple(POINTS)),
            Err(Error::WrongVariant {
                expected: Tag::Single,
                found: Tag::Multiple
            })
        ));
        assert!(matches!(
            Vec::<Point>::try_from(Value::single(POINTS[0])),
            Err(Error::WrongVariant {
                expected: Tag::Multiple,
                found: Tag::Single
            })
        ));
    }

    #[test]
    fn tag_strings() {
        assert_eq!("single", Tag::Single.as_str());
        assert_eq!("multiple", Tag::Multiple.to_string());
        assert_eq!(
            "Expected a single value, got a multiple one",
            Error::WrongVariant {
                expected: Tag::Single,
                found: Tag::Multiple
            }
            .to_string()
        );
    }
}
