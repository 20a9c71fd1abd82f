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

//! Shared value types for the deer-movement prediction pipeline: geographic
//! points, the bearing newtype, local-time handling, the fixed-size score
//! grid, and the error taxonomy every other `wt_*` crate converts into.

pub mod bearing;
pub mod errors;
pub mod geo;
pub mod grid;
pub mod time;

pub use bearing::Bearing;
pub use errors::{PredictionError, Result};
pub use geo::GeoPoint;
pub use time::{HuntingPressureLevel, LocalDateTime, Season};
