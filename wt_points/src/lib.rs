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

//! Turns the travel/bedding/feeding score grids into the twelve ranked
//! locations (3 stand sites, 3 bedding zones, 3 feeding sites, 3 camera
//! placements) returned to the caller.

pub mod errors;
pub mod generator;
pub mod types;

pub use errors::PointsError;
pub use generator::{
    generate_bedding_sites, generate_camera_placements, generate_feeding_sites, generate_stand_sites, MIN_DIST_M,
};
pub use types::{OptimizedPoint, PointBucket};
