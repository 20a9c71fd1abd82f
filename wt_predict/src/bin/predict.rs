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

//! Reads one `PredictionRequest` as JSON from stdin, runs the pipeline with
//! an all-fallback collaborator set, and writes the `PredictionResponse` as
//! JSON to stdout.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use wt_predict::{load_config, predict, Collaborators, PredictionRequest};
use wt_terrain::DemRegistry;

#[derive(Parser, Debug)]
#[command(version, about, long_about = "Vermont whitetail movement prediction engine")]
struct Args {
    /// Path to the RON process configuration file.
    #[arg(short, long, default_value = "wt_predict.ron")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = match load_config(&args.config) {
        Ok(c) => c,
        Err(e) => {
            error!("failed to load configuration: {e}");
            return ExitCode::from(1);
        }
    };

    let mut raw_request = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut raw_request) {
        error!("failed to read request from stdin: {e}");
        return ExitCode::from(1);
    }

    let request: PredictionRequest = match serde_json::from_str(&raw_request) {
        Ok(r) => r,
        Err(e) => {
            error!("malformed request JSON: {e}");
            return ExitCode::from(1);
        }
    };

    let dem = match DemRegistry::discover(&config.dem_directories) {
        Ok(registry) => registry,
        Err(e) => {
            error!("DEM discovery failed, continuing with no coverage: {e}");
            DemRegistry::empty()
        }
    };

    let collaborators = Collaborators::fallback_only();

    match predict(&request, &config, &dem, &collaborators).await {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("failed to serialize response: {e}");
                ExitCode::from(1)
            }
        },
        Err(e) => {
            error!("prediction failed: {e}");
            ExitCode::from(1)
        }
    }
}
