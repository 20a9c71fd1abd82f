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

//! Legal-light awareness and the "what should the hunter do right now"
//! state machine that overrides the generic prediction with situational
//! guidance.

pub mod analyzer;
pub mod errors;
pub mod sun;
pub mod types;

pub use analyzer::analyze;
pub use errors::ContextError;
pub use sun::{legal_hunting_window_minutes, sunrise_sunset_minutes};
pub use types::{ActionContext, ContextOverride, ContextRecommendations, CurrentStatus, HuntingContext, LegalHours};
