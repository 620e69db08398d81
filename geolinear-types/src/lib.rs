//! Geometry model for curve linearization.
//!
//! This crate contains the geometries that the `geolinear` crate consumes and produces: points and point sequences,
//! curve segments (arcs, circles, arc strings, cubic splines and so on), curves and rings, surfaces, solids and
//! aggregates of these. All the types are plain immutable values.
//!
//! New geometries created during linearization are assembled by a [`GeometryFactory`].

mod crs;
pub use crs::Crs;

mod point;
pub use point::{Point, PrecisionModel};

pub mod points;
pub use points::Points;

pub mod segment;
pub use segment::Segment;

pub mod curve_segment;
pub use curve_segment::*;

pub mod curve;
pub use curve::*;

mod surface;
pub use surface::*;

mod solid;
pub use solid::Solid;

mod multi;
pub use multi::*;

mod geometry;
pub use geometry::Geometry;

pub mod geometry_type;
pub use geometry_type::*;

pub mod factory;
pub use factory::{DefaultGeometryFactory, GeometryFactory};

pub mod error;
pub use error::GeometryError;
