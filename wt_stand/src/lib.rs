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

//! Places evening/morning/all-day stands relative to a bedding anchor under
//! crosswind, thermal, or terrain-dominant regimes, and validates scent.

pub mod calculator;
pub mod errors;
pub mod types;

pub use calculator::{
    calculate_allday_stand, calculate_evening_stand, calculate_morning_stand, validate_scent,
    TerrainContext, WindContext, STRONG_WIND_MPH, WIND_THRESHOLD_MPH,
};
pub use types::{StandPosition, StandStrategy, ThermalInput};
