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

use serde::{Deserialize, Serialize};
use wt_common::grid::GRID_SIDE;

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct LandCoverMask {
    pub forest: bool,
    pub deep_forest: bool,
    pub conifer_dense: bool,
    pub swamp: bool,
    pub water: bool,
    pub creek_bottom: bool,
    pub ridge_top: bool,
    pub bluff_pinch: bool,
    pub agricultural_edge: bool,
    pub crop_field: bool,
}

impl LandCoverMask {
    fn true_count(&self) -> u32 {
        [
            self.forest, self.deep_forest, self.conifer_dense, self.swamp, self.water,
            self.creek_bottom, self.ridge_top, self.bluff_pinch, self.agricultural_edge,
            self.crop_field,
        ]
        .iter()
        .filter(|b| **b)
        .count() as u32
    }
}

/// A `GRID_SIDE` x `GRID_SIDE` grid of per-cell land-cover masks, keyed the
/// same way as the score grid. Every cell has an explicit fallback (all
/// categories false) when the provider has no coverage there.
#[derive(Clone, Debug)]
pub struct LandCoverGrid {
    cells: [[LandCoverMask; GRID_SIDE]; GRID_SIDE],
}

impl LandCoverGrid {
    pub fn fallback() -> Self {
        LandCoverGrid { cells: [[LandCoverMask::default(); GRID_SIDE]; GRID_SIDE] }
    }

    pub fn from_cells(cells: [[LandCoverMask; GRID_SIDE]; GRID_SIDE]) -> Self {
        LandCoverGrid { cells }
    }

    pub fn at(&self, row: usize, col: usize) -> LandCoverMask {
        self.cells[row][col]
    }
}

/// Per-cell feature extraction. Every feature has an explicit clamped
/// fallback value so the absence of any one land-cover category never
/// propagates a NaN or an unbounded score.
pub struct CellFeatures {
    pub canopy_closure_pct: f64,
    pub escape_cover_density_pct: f64,
    pub visibility_limitation: f64,
    pub cover_diversity: f64,
    pub drainage_density: f64,
    pub ridge_connectivity: f64,
    pub trail_density: f64,
}

pub fn extract_cell_features(mask: &LandCoverMask) -> CellFeatures {
    let canopy_closure_pct = if mask.deep_forest {
        85.0
    } else if mask.conifer_dense {
        75.0
    } else if mask.forest {
        60.0
    } else {
        25.0
    }
    .clamp(10.0, 95.0);

    let escape_cover_density_pct = if mask.deep_forest || mask.conifer_dense {
        80.0
    } else if mask.forest {
        50.0
    } else {
        25.0
    }
    .clamp(20.0, 95.0);

    let visibility_limitation = if mask.deep_forest || mask.conifer_dense {
        0.85
    } else if mask.forest {
        0.5
    } else {
        0.15
    }
    .clamp(0.1, 0.95);

    let cover_diversity = (mask.true_count() as f64 * 0.8).clamp(1.0, 5.0);

    let drainage_density = if mask.creek_bottom || mask.swamp { 0.8 } else { 0.2 };
    let ridge_connectivity = if mask.ridge_top { 0.9 } else { 0.3 };
    let trail_density = if mask.bluff_pinch { 0.6 } else { 0.3 };

    CellFeatures {
        canopy_closure_pct,
        escape_cover_density_pct,
        visibility_limitation,
        cover_diversity,
        drainage_density,
        ridge_connectivity,
        trail_density,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_cover_raises_canopy_closure_and_visibility_limitation() {
        let mask = LandCoverMask { deep_forest: true, ..Default::default() };
        let f = extract_cell_features(&mask);
        assert!(f.canopy_closure_pct > 80.0);
        assert!(f.visibility_limitation > 0.8);
    }

    #[test]
    fn absent_land_cover_still_produces_a_bounded_fallback() {
        let mask = LandCoverMask::default();
        let f = extract_cell_features(&mask);
        assert!((10.0..=95.0).contains(&f.canopy_closure_pct));
        assert!((0.1..=0.95).contains(&f.visibility_limitation));
    }
}
