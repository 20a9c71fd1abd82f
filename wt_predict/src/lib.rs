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

//! Orchestrates the terrain, wind, biology, score-map, points, stand, hunt-
//! window, and context crates into one whitetail movement prediction per
//! request.

pub mod collaborators;
pub mod config;
pub mod orchestrator;
pub mod request;
pub mod response;
pub mod thermal;

pub use collaborators::Collaborators;
pub use config::{load_config, PredictionConfig};
pub use orchestrator::predict;
pub use request::PredictionRequest;
pub use response::PredictionResponse;
