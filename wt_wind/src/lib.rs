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

//! Fuses prevailing wind with terrain-driven thermal wind into an effective
//! wind vector, scent cone, and location-specific advantages.

pub mod analyzer;
pub mod errors;
pub mod field;

pub use analyzer::{analyze_location, analyze_wind_field, recommendations, LocationType, LocationWindAnalysis};
pub use field::{ThermalDirectionTag, ThermalState, WindField};
