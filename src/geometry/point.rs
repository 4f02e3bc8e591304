use std::fmt;

use nalgebra::Vector2;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::{self, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A coordinate in a 2D plane
///
/// Neither coordinate is constrained, `NaN` and infinities are valid values.
/// Human readable formats (i.e. json) have no number for them though, so serializing such a point
/// into one fails instead of writing `null`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() && !(self.x.is_finite() && self.y.is_finite()) {
            return Err(<S::Error as ser::Error>::custom(format!(
                "non finite coordinate in point ({}, {})",
                self.x, self.y
            )));
        }

        let mut point = serializer.serialize_struct("Point", 2)?;
        point.serialize_field("x", &self.x)?;
        point.serialize_field("y", &self.y)?;
        point.end()
    }
}

/// Only accepts the `{ "x": .., "y": .. }` record, a bare `[x, y]` sequence is rejected.
impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            X,
            Y,
            #[serde(other)]
            Ignored,
        }

        struct PointVisitor;
        impl<'de> Visitor<'de> for PointVisitor {
            type Value = Point;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a point record with the fields `x` and `y`")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Point, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut x = None;
                let mut y = None;
                while let Some(field) = map.next_key()? {
                    match field {
                        Field::X if x.is_some() => return Err(de::Error::duplicate_field("x")),
                        Field::Y if y.is_some() => return Err(de::Error::duplicate_field("y")),
                        Field::X => x = Some(map.next_value()?),
                        Field::Y => y = Some(map.next_value()?),
                        Field::Ignored => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                let x = x.ok_or_else(|| de::Error::missing_field("x"))?;
                let y = y.ok_or_else(|| de::Error::missing_field("y"))?;
                Ok(Point { x, y })
            }
        }

        deserializer.deserialize_struct("Point", &["x", "y"], PointVisitor)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(vector: Vector2<f64>) -> Self {
        Point::new(vector.x, vector.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(Point { x, y }: Point) -> Self {
        Vector2::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(Point { x, y }: Point) -> Self {
        (x, y)
    }
}
