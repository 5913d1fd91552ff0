// This module defines the geometry types produced by the shapefile decoders.
// It includes `Coordinates`, `RingGeometry`, `LineStringGeometry`, `PolygonGeometry`
// and their multi-geometry counterparts. These types implement shared traits like `GeometryTrait`,
// `SingleGeometryTrait` and `CompositeGeometryTrait` to provide consistent behavior across
// geometry types, including validation, area and bounds calculation.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_polygon;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_polygon::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
