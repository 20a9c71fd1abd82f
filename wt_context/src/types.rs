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

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HuntingContext {
    ActiveHunt,
    EndOfDay,
    PostHunt,
    PreHunt,
    PlanningMode,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionContext {
    StayPut,
    LastChance,
    PackOut,
    ScoutMode,
    PlanTomorrow,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LegalHours {
    pub earliest: String,
    pub latest: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CurrentStatus {
    pub is_legal_light: bool,
    pub time_remaining_minutes: f64,
    pub hours_to_next_hunt: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContextRecommendations {
    pub primary: String,
    pub secondary: String,
    pub specific_actions: Vec<String>,
    pub timing: String,
}

/// The full "what to do right now" block, per spec §4.8.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContextOverride {
    pub context: HuntingContext,
    pub action: ActionContext,
    pub legal_hours: LegalHours,
    pub current_status: CurrentStatus,
    pub recommendations: ContextRecommendations,
}
