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

//! Converts high-resolution LIDAR DEM tiles into per-point slope, aspect,
//! and elevation using Horn's method, with a batch mode for evaluating many
//! candidate points in one pass.

pub mod dem;
pub mod errors;
pub mod horn;

pub use dem::{DemRegistry, DemTag, DemTile, TerrainPoint, DEFAULT_SAMPLE_RADIUS_M, FALLBACK_RESOLUTION_M};
pub use errors::TerrainError;
