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
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PredictionError>;

/// Shared error taxonomy for the whole pipeline. Component crates define their
/// own narrower error enums and convert into this one at the orchestrator
/// boundary via `#[from]`.
#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("invalid input: {0}")]
    InputInvalid(String),

    #[error("no terrain coverage for point")]
    NoTerrainCoverage,

    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("forecast unavailable: {0}")]
    ForecastUnavailable(String),

    #[error("no valid stand profiles")]
    StandProfilesEmpty,

    #[error("internal invariant violated: {0}")]
    InternalInvariantViolated(String),

    #[error("IO error {0}")]
    IOError(#[from] std::io::Error),

    #[error("JSON error {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("RON error {0}")]
    RonError(#[from] ron::error::Error),
}

pub fn input_invalid(msg: impl ToString) -> PredictionError {
    PredictionError::InputInvalid(msg.to_string())
}

pub fn invariant_violated(msg: impl ToString) -> PredictionError {
    PredictionError::InternalInvariantViolated(msg.to_string())
}

#[macro_export]
macro_rules! invariant {
    ($cond:expr, $fmt:literal $(, $arg:expr )* ) => {
        if !$cond {
            return Err($crate::errors::invariant_violated(format!($fmt $(, $arg)*)));
        }
    };
}
