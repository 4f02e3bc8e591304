//! A 2D point and the tagged union of one point or many points
//!
//! ```
//! use tagged_points::{Point, Value};
//!
//! let value = Value::multiple([Point::new(0.0, 0.0), Point::new(1.0, 2.0)]);
//! match &value {
//!     Value::Single(point) => println!("one point at {point:?}"),
//!     Value::Multiple(points) => println!("{} points", points.len()),
//! }
//! assert_eq!("multiple", value.tag().as_str());
//! ```

pub mod error;
pub mod formats;
pub mod geometry;
pub mod value;

pub use error::{Error, Result};
pub use geometry::Point;
pub use value::{Tag, Value};
