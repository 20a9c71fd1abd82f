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

//! Score formulas: travel, bedding, and feeding grids on a 0-5 internal
//! scale (published at 0-10 by doubling), plus the composited "combined
//! primary" layer used to pick the main stand site.

use wt_common::grid::{Grid, GRID_SIDE};

use crate::landcover::{extract_cell_features, LandCoverGrid};

/// Per-cell terrain summary, as produced by the Terrain Extractor for each
/// grid cell plus the road distance supplied by the roads/trails provider
/// (fallback >= 500 m, per spec §6).
#[derive(Copy, Clone, Debug)]
pub struct CellTerrain {
    pub slope_deg: f64,
    pub aspect_deg: f64,
    pub road_distance_m: f64,
}

/// The security score feeding the stand/points multipliers is an opaque
/// 0-100 external input (see SPEC_FULL.md / DESIGN.md Open Question): its
/// own formula is not specified upstream, only its multiplier semantics.
#[derive(Copy, Clone, Debug)]
pub struct SecurityAnalysis {
    pub overall_security_score: f64,
    pub access_pressure_pct: f64,
    pub road_proximity_pct: f64,
    pub trail_proximity_pct: f64,
}

impl SecurityAnalysis {
    pub fn unknown() -> Self {
        SecurityAnalysis {
            overall_security_score: 50.0,
            access_pressure_pct: 50.0,
            road_proximity_pct: 50.0,
            trail_proximity_pct: 50.0,
        }
    }

    /// `[0.8, 1.2]`, linear in the security score.
    pub fn stand_multiplier(&self) -> f64 {
        0.8 + (self.overall_security_score / 100.0 * 0.4)
    }
}

pub struct ScoreGrid {
    pub travel: Grid,
    pub bedding: Grid,
    pub feeding: Grid,
}

fn travel_cell(mask_features: &crate::landcover::CellFeatures, mask: &crate::landcover::LandCoverMask) -> f64 {
    let mut score = 2.0;
    if mask.creek_bottom || mask.bluff_pinch {
        score += 1.5;
    }
    if mask.agricultural_edge {
        score += 0.5;
    }
    score += mask_features.drainage_density;
    score += mask_features.ridge_connectivity;
    if mask_features.visibility_limitation > 0.8 {
        score -= 1.0;
    }
    score.clamp(0.0, 5.0)
}

fn bedding_cell(mask_features: &crate::landcover::CellFeatures, terrain: &CellTerrain) -> f64 {
    let mut score = mask_features.canopy_closure_pct / 100.0 * 2.0
        + mask_features.escape_cover_density_pct / 100.0 * 2.0;
    if (5.0..=20.0).contains(&terrain.slope_deg) {
        score += 1.0;
    }
    if (135.0..=225.0).contains(&terrain.aspect_deg) {
        score += 1.0;
    }
    if terrain.road_distance_m > 200.0 {
        score += 0.5;
    }
    if mask_features.visibility_limitation > 0.95 {
        score = score.min(2.0);
    }
    score.clamp(0.0, 5.0)
}

fn feeding_cell(
    mask: &crate::landcover::LandCoverMask,
    terrain: &CellTerrain,
    distance_to_bedding_m: Option<f64>,
) -> f64 {
    let mut score = 0.0;
    if mask.agricultural_edge || mask.crop_field {
        score += 2.0;
    }
    if mask.forest {
        score += 0.5;
    }
    if (3.0..=15.0).contains(&terrain.slope_deg) {
        score += 1.0;
    }
    if let Some(d) = distance_to_bedding_m {
        if (100.0..=400.0).contains(&d) {
            score += 1.0;
        }
    }
    score.clamp(0.0, 5.0)
}

/// Builds the travel/bedding/feeding grids from land cover and per-cell
/// terrain. `bedding_center` is used only for the feeding layer's
/// "walking band" bonus and may be `None` on the first pass.
pub fn build_score_grid(
    land_cover: &LandCoverGrid,
    terrain: &[[CellTerrain; GRID_SIDE]; GRID_SIDE],
    cell_distance_to_bedding_m: Option<&[[f64; GRID_SIDE]; GRID_SIDE]>,
) -> ScoreGrid {
    let mut travel = Grid::zeroed();
    let mut bedding = Grid::zeroed();
    let mut feeding = Grid::zeroed();

    for row in 0..GRID_SIDE {
        for col in 0..GRID_SIDE {
            let mask = land_cover.at(row, col);
            let features = extract_cell_features(&mask);
            let t = terrain[row][col];

            travel.set(row, col, travel_cell(&features, &mask));
            bedding.set(row, col, bedding_cell(&features, &t));
            let dist = cell_distance_to_bedding_m.map(|g| g[row][col]);
            feeding.set(row, col, feeding_cell(&mask, &t, dist));
        }
    }

    ScoreGrid { travel, bedding, feeding }
}

/// `travel*0.5 + bedding*0.3 + feeding*0.2`, scaled by the security
/// multiplier and, when thermals are active, a thermal bonus.
pub fn combined_primary(
    grid: &ScoreGrid,
    security: &SecurityAnalysis,
    thermal_active: bool,
    thermal_strength_0_10: f64,
) -> Grid {
    let base = grid
        .travel
        .combine(&grid.bedding, |t, b| t * 0.5 + b * 0.3)
        .combine(&grid.feeding, |tb, f| tb + f * 0.2);

    let security_multiplier = security.stand_multiplier();
    let thermal_bonus = if thermal_active { 1.0 + thermal_strength_0_10 / 20.0 } else { 1.0 };

    base.map(|v| v * security_multiplier * thermal_bonus)
}

/// Publishes an internal 0-5 score as the external 0-10 scale.
pub fn publish_score(raw: f64) -> f64 {
    (raw * 2.0).min(10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landcover::{LandCoverGrid, LandCoverMask};

    fn flat_terrain() -> [[CellTerrain; GRID_SIDE]; GRID_SIDE] {
        [[CellTerrain { slope_deg: 10.0, aspect_deg: 180.0, road_distance_m: 300.0 }; GRID_SIDE]; GRID_SIDE]
    }

    #[test]
    fn all_zero_land_cover_still_yields_bounded_scores() {
        let land_cover = LandCoverGrid::fallback();
        let terrain = flat_terrain();
        let grid = build_score_grid(&land_cover, &terrain, None);
        for (_, _, v) in grid.travel.iter_cells() {
            assert!((0.0..=5.0).contains(&v));
        }
    }

    #[test]
    fn combined_primary_respects_security_multiplier_bounds() {
        let land_cover = LandCoverGrid::fallback();
        let terrain = flat_terrain();
        let grid = build_score_grid(&land_cover, &terrain, None);
        let weak = combined_primary(&grid, &SecurityAnalysis { overall_security_score: 0.0, ..SecurityAnalysis::unknown() }, false, 0.0);
        let strong = combined_primary(&grid, &SecurityAnalysis { overall_security_score: 100.0, ..SecurityAnalysis::unknown() }, false, 0.0);
        for ((_, _, w), (_, _, s)) in weak.iter_cells().zip(strong.iter_cells()) {
            assert!(s >= w);
        }
    }

    #[test]
    fn publish_score_never_exceeds_ten() {
        assert_eq!(publish_score(10.0), 10.0);
        assert_eq!(publish_score(3.0), 6.0);
    }

    #[test]
    fn south_facing_moderate_slope_increases_bedding_score() {
        let mut land_cover_cells = [[LandCoverMask::default(); GRID_SIDE]; GRID_SIDE];
        land_cover_cells[0][0] = LandCoverMask { deep_forest: true, ..Default::default() };
        let land_cover = LandCoverGrid::from_cells(land_cover_cells);

        let mut terrain = flat_terrain();
        terrain[0][0] = CellTerrain { slope_deg: 12.0, aspect_deg: 180.0, road_distance_m: 300.0 };
        terrain[1][1] = CellTerrain { slope_deg: 40.0, aspect_deg: 0.0, road_distance_m: 50.0 };

        let grid = build_score_grid(&land_cover, &terrain, None);
        assert!(grid.bedding.get(0, 0) > grid.bedding.get(1, 1));
    }
}
