/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::path::{Path, PathBuf};

use gdal::spatial_ref::{CoordTransform, SpatialRef};
use gdal::Dataset;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use wt_common::geo::GeoPoint;

use crate::errors::{op_failed, Result};
use crate::horn::{calculate_slope_aspect, Neighborhood};

/// Fallback resolution used when no LIDAR tile covers a point, matching the
/// 30 m nationwide DEM product.
pub const FALLBACK_RESOLUTION_M: f64 = 30.0;
pub const DEFAULT_SAMPLE_RADIUS_M: f64 = 30.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemTag {
    /// A true DEM: slopes/aspects derived from it are trustworthy.
    Dem,
    /// A hillshade derivative: fine for visualization, not for slope math.
    Hillshade,
}

#[derive(Clone, Debug)]
pub struct TileBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl TileBounds {
    fn contains_strict(&self, x: f64, y: f64) -> bool {
        x > self.min_x && x < self.max_x && y > self.min_y && y < self.max_y
    }
}

/// A single raster tile, discovered once at startup and never mutated.
pub struct DemTile {
    pub path: PathBuf,
    pub tag: DemTag,
    pub resolution_m: f64,
    pub srs_wkt: String,
    pub bounds: TileBounds,
}

impl DemTile {
    fn open(path: &Path, tag: DemTag) -> Result<Self> {
        let dataset = Dataset::open(path)?;
        let geo_transform = dataset.geo_transform()?;
        let (width, height) = dataset.raster_size();
        let srs = dataset.spatial_ref()?;
        let resolution_m = geo_transform[1].abs();

        let min_x = geo_transform[0];
        let max_y = geo_transform[3];
        let max_x = min_x + width as f64 * geo_transform[1];
        let min_y = max_y + height as f64 * geo_transform[5];

        Ok(DemTile {
            path: path.to_path_buf(),
            tag,
            resolution_m,
            srs_wkt: srs.to_wkt()?,
            bounds: TileBounds {
                min_x: min_x.min(max_x),
                min_y: min_y.min(max_y),
                max_x: min_x.max(max_x),
                max_y: min_y.max(max_y),
            },
        })
    }

    /// Transforms a geographic (lon, lat) into this tile's CRS and reports
    /// whether it falls strictly inside the tile bounds.
    fn covers(&self, point: &GeoPoint) -> Result<bool> {
        let geo_srs = SpatialRef::from_epsg(4326)?;
        let tile_srs = SpatialRef::from_wkt(&self.srs_wkt)?;
        let transform = CoordTransform::new(&geo_srs, &tile_srs)?;
        let mut xs = [point.lon];
        let mut ys = [point.lat];
        let mut zs = [0.0];
        transform.transform_coords(&mut xs, &mut ys, &mut zs)?;
        Ok(self.bounds.contains_strict(xs[0], ys[0]))
    }

    /// `pixel_radius` is the caller's sampling half-width (§ Point extraction
    /// algorithm): a point too close to the raster edge to support that
    /// radius is rejected as edge-of-coverage even though Horn's method
    /// itself only ever reads the inner 3x3 neighborhood.
    fn read_neighborhood(
        &self,
        center_row: isize,
        center_col: isize,
        pixel_radius: isize,
    ) -> Result<Option<(Neighborhood, bool)>> {
        let dataset = Dataset::open(&self.path)?;
        let band = dataset.rasterband(1)?;
        let (width, height) = dataset.raster_size();
        let on_border = center_row - pixel_radius < 0
            || center_col - pixel_radius < 0
            || center_row + pixel_radius >= height as isize
            || center_col + pixel_radius >= width as isize;
        if on_border {
            return Ok(None);
        }
        let buf = band.read_as::<f64>(
            (center_col as isize - 1, center_row as isize - 1),
            (3, 3),
            (3, 3),
            None,
        )?;
        let data = buf.data();
        let mut win = [[0.0; 3]; 3];
        for r in 0..3 {
            for c in 0..3 {
                win[r][c] = data[r * 3 + c];
            }
        }
        Ok(Some((win, false)))
    }
}

/// Per-point terrain state produced by the extractor; `coverage_flag=false`
/// means the caller must degrade gracefully rather than trust these fields.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct TerrainPoint {
    pub slope_deg: f64,
    pub aspect_deg: f64,
    pub elevation_m: f64,
    pub resolution_m: f64,
    pub source_tag: DemTag,
    pub accurate_slopes_flag: bool,
    pub coverage_flag: bool,
}

impl TerrainPoint {
    pub fn uncovered() -> Self {
        TerrainPoint {
            slope_deg: 0.0,
            aspect_deg: 0.0,
            elevation_m: 0.0,
            resolution_m: FALLBACK_RESOLUTION_M,
            source_tag: DemTag::Hillshade,
            accurate_slopes_flag: false,
            coverage_flag: false,
        }
    }
}

/// Process-wide, read-only index of discovered DEM tiles. DEM tiles are
/// always tried before hillshade tiles.
pub struct DemRegistry {
    dem_tiles: Vec<DemTile>,
    hillshade_tiles: Vec<DemTile>,
}

impl DemRegistry {
    /// Scans the given directories for raster files, partitioning them by a
    /// filename tag: files containing "DEM" are accurate; files containing
    /// "HILSHD" or "HILLSHADE" are visualization-only fallbacks.
    pub fn discover(dirs: &[PathBuf]) -> Result<Self> {
        let mut dem_tiles = Vec::new();
        let mut hillshade_tiles = Vec::new();

        for dir in dirs {
            let pattern = format!("{}/**/*.tif", dir.display());
            for entry in glob::glob(&pattern).map_err(|e| op_failed(e.to_string()))? {
                let path = match entry {
                    Ok(p) => p,
                    Err(e) => {
                        warn!("skipping unreadable DEM directory entry: {e}");
                        continue;
                    }
                };
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                let tag = if name.to_uppercase().contains("HILSHD")
                    || name.to_uppercase().contains("HILLSHADE")
                {
                    DemTag::Hillshade
                } else {
                    DemTag::Dem
                };
                match DemTile::open(&path, tag) {
                    Ok(tile) => {
                        debug!("discovered DEM tile {} ({:?})", path.display(), tag);
                        match tag {
                            DemTag::Dem => dem_tiles.push(tile),
                            DemTag::Hillshade => hillshade_tiles.push(tile),
                        }
                    }
                    Err(e) => warn!("skipping unreadable tile {}: {e}", path.display()),
                }
            }
        }

        info!(
            "DEM registry: {} DEM tiles, {} hillshade tiles",
            dem_tiles.len(),
            hillshade_tiles.len()
        );

        Ok(DemRegistry { dem_tiles, hillshade_tiles })
    }

    pub fn empty() -> Self {
        DemRegistry { dem_tiles: Vec::new(), hillshade_tiles: Vec::new() }
    }

    fn find_covering_tile(&self, point: &GeoPoint) -> Option<&DemTile> {
        self.dem_tiles
            .iter()
            .chain(self.hillshade_tiles.iter())
            .find(|t| t.covers(point).unwrap_or(false))
    }

    /// Extracts a single point's terrain state using the best covering tile,
    /// or `coverage_flag=false` if none covers it. Errors from an individual
    /// tile are logged and that tile is skipped, not the whole registry.
    pub fn extract_point(&self, point: &GeoPoint, sample_radius_m: f64) -> TerrainPoint {
        let Some(tile) = self.find_covering_tile(point) else {
            return TerrainPoint::uncovered();
        };

        let pixel_radius = (sample_radius_m / tile.resolution_m).max(3.0) as isize;

        let dataset = match Dataset::open(&tile.path) {
            Ok(d) => d,
            Err(e) => {
                warn!("failed to reopen tile {}: {e}", tile.path.display());
                return TerrainPoint::uncovered();
            }
        };
        let geo_transform = match dataset.geo_transform() {
            Ok(gt) => gt,
            Err(_) => return TerrainPoint::uncovered(),
        };
        // invert the affine transform to find the pixel containing `point`
        let inv_det = geo_transform[1] * geo_transform[5] - geo_transform[2] * geo_transform[4];
        if inv_det.abs() < f64::EPSILON {
            return TerrainPoint::uncovered();
        }
        let dx = point.lon - geo_transform[0];
        let dy = point.lat - geo_transform[3];
        let col = ((geo_transform[5] * dx - geo_transform[2] * dy) / inv_det) as isize;
        let row = ((-geo_transform[4] * dx + geo_transform[1] * dy) / inv_det) as isize;

        match tile.read_neighborhood(row, col, pixel_radius) {
            Ok(Some((win, _))) => {
                let elevation_m = win[1][1];
                let sa = calculate_slope_aspect(&win, tile.resolution_m);
                TerrainPoint {
                    slope_deg: sa.slope_deg,
                    aspect_deg: sa.aspect_deg,
                    elevation_m,
                    resolution_m: tile.resolution_m,
                    source_tag: tile.tag,
                    accurate_slopes_flag: tile.tag == DemTag::Dem,
                    coverage_flag: true,
                }
            }
            Ok(None) => TerrainPoint {
                // edge-of-raster: degraded but valid, per the edge policy
                slope_deg: 0.0,
                aspect_deg: 0.0,
                elevation_m: 0.0,
                resolution_m: tile.resolution_m,
                source_tag: tile.tag,
                accurate_slopes_flag: tile.tag == DemTag::Dem,
                coverage_flag: true,
            },
            Err(e) => {
                warn!("tile read failed for {}: {e}", tile.path.display());
                TerrainPoint::uncovered()
            }
        }
    }

    /// Batch extraction, the hot path for evaluating many candidate points
    /// in one pass. Iterates in insertion order and keys the result by a
    /// canonical "lat,lon" string at 6-decimal precision.
    pub fn batch_extract(
        &self,
        points: &[GeoPoint],
        sample_radius_m: f64,
    ) -> Vec<(String, TerrainPoint)> {
        let mut out = Vec::with_capacity(points.len());
        let mut covered = 0usize;
        for p in points {
            let tp = self.extract_point(p, sample_radius_m);
            if tp.coverage_flag {
                covered += 1;
            }
            out.push((format!("{:.6},{:.6}", p.lat, p.lon), tp));
        }
        info!(
            "batch_extract: {}/{} points covered ({:.0}%)",
            covered,
            points.len(),
            100.0 * covered as f64 / points.len().max(1) as f64
        );
        out
    }

    pub fn coverage_ratio(&self, points: &[GeoPoint], sample_radius_m: f64) -> f64 {
        if points.is_empty() {
            return 0.0;
        }
        let covered = points
            .iter()
            .filter(|p| self.extract_point(p, sample_radius_m).coverage_flag)
            .count();
        covered as f64 / points.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncovered_point_has_coverage_false() {
        let registry = DemRegistry::empty();
        let p = GeoPoint::new(43.3127, -73.2271).unwrap();
        let tp = registry.extract_point(&p, DEFAULT_SAMPLE_RADIUS_M);
        assert!(!tp.coverage_flag);
    }

    #[test]
    fn batch_extract_keys_are_canonical_and_ordered() {
        let registry = DemRegistry::empty();
        let pts = vec![
            GeoPoint::new(43.1, -73.1).unwrap(),
            GeoPoint::new(43.2, -73.2).unwrap(),
        ];
        let out = registry.batch_extract(&pts, DEFAULT_SAMPLE_RADIUS_M);
        assert_eq!(out[0].0, "43.100000,-73.100000");
        assert_eq!(out[1].0, "43.200000,-73.200000");
    }
}
