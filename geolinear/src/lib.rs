//! Linearization of curved geometries.
//!
//! Arcs, circles, arc strings, cubic splines and geodesic strings are converted into sequences of straight segments.
//! Curves, rings, surfaces and aggregates made of such segments are rebuilt with linear segments only, keeping their
//! type, identifier and coordinate system.
//!
//! The number of points of every curved element is controlled by a [`LinearizationCriterion`]: either a fixed number
//! of points, or the largest allowed distance between the polyline and the true curve.
//!
//! The main entry points are:
//! * [`CurveLinearizer`] for single segments, curves and rings;
//! * [`SurfaceLinearizer`] for polygons and planar patched surfaces;
//! * [`GeometryLinearizer`] for any geometry, including aggregates.
//!
//! All of them are stateless, so one instance can be shared between threads. Geometries that are already linear are
//! returned as [`std::borrow::Cow::Borrowed`].

pub mod criterion;
pub use criterion::LinearizationCriterion;

pub mod curve;
pub use curve::CurveLinearizer;

pub mod surface;
pub use surface::SurfaceLinearizer;

pub mod geometry;
pub use geometry::GeometryLinearizer;

pub mod orient;
pub use orient::Orientation;

pub mod error;
pub use error::LinearizationError;
