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

//! Land-cover masks, per-cell feature extraction, and the travel/bedding/
//! feeding score grids consumed by the Points Generator.

pub mod errors;
pub mod landcover;
pub mod scores;

pub use landcover::{extract_cell_features, CellFeatures, LandCoverGrid, LandCoverMask};
pub use scores::{build_score_grid, combined_primary, publish_score, CellTerrain, ScoreGrid, SecurityAnalysis};
