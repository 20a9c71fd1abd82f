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

//! Activity level, movement direction, and weather/pressure/season
//! modifiers layered over the raw prediction.

pub mod errors;
pub mod overlay;

pub use overlay::{
    activity_level, enhanced_confidence, hunting_recommendations, mature_buck_general_notes,
    movement_direction, pressure_response, seasonal_food_notes, weather_triggers, ActivityLevel,
    PressureResponse, WeatherInfluence, WeatherSnapshot,
};
