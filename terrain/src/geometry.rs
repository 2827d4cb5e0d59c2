use glam::{DQuat, DVec3};

use crate::error::{Result, TerrainError};
use crate::grid::HeightGrid;

/// Flat plane. `size.z` is 0 for a true plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub position: DVec3,
    pub orientation: DQuat,
    pub size: DVec3,
}

/// Heightfield draped over a `size.x` × `size.y` footprint, scaled vertically
/// by `size.z`, sitting on a solid slab `base_thickness` deep.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    pub position: DVec3,
    pub orientation: DQuat,
    pub size: DVec3,
    pub base_thickness: f64,
    pub heights: HeightGrid,
}

/// One static primitive of a terrain.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Plane(Plane),
    Heightmap(Heightmap),
}

impl Geometry {
    pub fn position(&self) -> DVec3 {
        match self {
            Geometry::Plane(p) => p.position,
            Geometry::Heightmap(h) => h.position,
        }
    }

    pub fn orientation(&self) -> DQuat {
        match self {
            Geometry::Plane(p) => p.orientation,
            Geometry::Heightmap(h) => h.orientation,
        }
    }

    pub fn size(&self) -> DVec3 {
        match self {
            Geometry::Plane(p) => p.size,
            Geometry::Heightmap(h) => h.size,
        }
    }

    pub fn as_plane(&self) -> Option<&Plane> {
        match self {
            Geometry::Plane(p) => Some(p),
            Geometry::Heightmap(_) => None,
        }
    }

    pub fn as_heightmap(&self) -> Option<&Heightmap> {
        match self {
            Geometry::Heightmap(h) => Some(h),
            Geometry::Plane(_) => None,
        }
    }
}

impl From<Plane> for Geometry {
    fn from(p: Plane) -> Self {
        Geometry::Plane(p)
    }
}

impl From<Heightmap> for Geometry {
    fn from(h: Heightmap) -> Self {
        Geometry::Heightmap(h)
    }
}

/// Static terrain handed to a simulation scene, one body per primitive.
///
/// Always holds at least one primitive and cannot be changed after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    static_geometry: Vec<Geometry>,
}

impl Terrain {
    pub fn new(static_geometry: Vec<Geometry>) -> Result<Self> {
        if static_geometry.is_empty() {
            return Err(TerrainError::InvalidArgument(
                "terrain needs at least one geometry primitive".to_string(),
            ));
        }
        for g in &static_geometry {
            let size = g.size();
            if !size.is_finite() || size.min_element() < 0.0 {
                return Err(TerrainError::InvalidArgument(format!(
                    "geometry size must be finite and non-negative, got {size}"
                )));
            }
            if let Geometry::Heightmap(h) = g {
                if !(h.base_thickness.is_finite() && h.base_thickness > 0.0) {
                    return Err(TerrainError::InvalidArgument(format!(
                        "heightmap base thickness must be positive, got {}",
                        h.base_thickness
                    )));
                }
            }
        }
        Ok(Self { static_geometry })
    }

    pub fn static_geometry(&self) -> &[Geometry] {
        &self.static_geometry
    }

    pub fn len(&self) -> usize {
        self.static_geometry.len()
    }

    // Always false once constructed
    pub fn is_empty(&self) -> bool {
        self.static_geometry.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
        self.static_geometry.iter()
    }

    pub fn heightmaps(&self) -> impl Iterator<Item = &Heightmap> {
        self.static_geometry.iter().filter_map(Geometry::as_heightmap)
    }

    pub fn into_geometry(self) -> Vec<Geometry> {
        self.static_geometry
    }
}

impl<'a> IntoIterator for &'a Terrain {
    type Item = &'a Geometry;
    type IntoIter = std::slice::Iter<'a, Geometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.static_geometry.iter()
    }
}
