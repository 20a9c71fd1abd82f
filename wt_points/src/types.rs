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
use std::collections::BTreeMap;
use wt_common::geo::GeoPoint;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizedPoint {
    pub location: GeoPoint,
    pub score_0_10: f64,
    pub description: String,
    pub strategy: String,
    pub optimal_time_tags: Vec<String>,
    pub confidence_0_1: f64,
    pub data_source_tags: Vec<String>,
    pub extra_attributes: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PointBucket {
    pub points: Vec<OptimizedPoint>,
}
