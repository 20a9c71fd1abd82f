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

//! Scans an hourly weather forecast for cold-front-aligned, thermally
//! stable windows and couples them back to stand recommendations.

pub mod errors;
pub mod scan;
pub mod types;

pub use errors::HuntWindowError;
pub use scan::{scan_all, scan_profile};
pub use types::{
    ForecastHour, HuntWindow, PreferredWind, StandProfile, StandWindStatus, ThermalAnalysis,
    ThermalPhase, TriggerTag, DEFAULT_TOLERANCE_DEG,
};
