use super::{AppConfig, AppError};
use crate::server;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use serde::Serialize;
use serde_json::json;
use smartroute_core::model::store::ModelStoreError;
use smartroute_core::model::traffic::model_source::{ModelTrafficSource, ModelTrafficSourceConfig};
use smartroute_core::model::traffic::TrafficSourceConfig;
use smartroute_core::util::datetime_ops;
use std::path::Path;
use std::sync::Arc;

/// Smart Route Optimization System: selects the best driving route between two places
/// using predicted traffic.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SmartRouteApp {
    #[command(subcommand)]
    pub op: SmartRouteOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum SmartRouteOperation {
    /// run the route optimization HTTP service
    Serve {
        /// TOML configuration file. if not provided, defaults and SMARTROUTE__*
        /// environment variables are used.
        #[arg(short, long)]
        config_file: Option<String>,
    },
    /// find the best route between two places and print it as JSON
    Optimize {
        #[arg(short, long)]
        config_file: Option<String>,
        /// starting location, an address or "lat,lng"
        #[arg(long, allow_hyphen_values(true))]
        origin: String,
        /// end location, an address or "lat,lng"
        #[arg(long, allow_hyphen_values(true))]
        destination: String,
        /// RFC 3339 or YYYY-MM-DDTHH:MM:SS local time. defaults to now.
        #[arg(long)]
        departure_time: Option<String>,
    },
    /// predict traffic intensity at a location and print it as JSON
    Predict {
        #[arg(short, long)]
        config_file: Option<String>,
        #[arg(long, allow_hyphen_values(true))]
        latitude: f64,
        #[arg(long, allow_hyphen_values(true))]
        longitude: f64,
        /// RFC 3339 or YYYY-MM-DDTHH:MM:SS local time. defaults to now.
        #[arg(long)]
        time: Option<String>,
    },
    /// train a traffic model from a CSV of observations and add it to the model store
    Train {
        #[arg(short, long)]
        config_file: Option<String>,
        /// CSV with columns timestamp,latitude,longitude,intensity
        #[arg(short, long)]
        training_file: String,
        /// name to store the model under. defaults to the configured model name.
        #[arg(short, long)]
        model_name: Option<String>,
    },
    /// manage trained models in the model store
    Models {
        #[arg(short, long)]
        config_file: Option<String>,
        #[command(subcommand)]
        op: ModelsOperation,
    },
    /// print the default configuration as TOML
    DefaultConfig,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ModelsOperation {
    /// list stored models
    List,
    /// remove a stored model
    Delete { name: String },
}

impl SmartRouteOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            SmartRouteOperation::Serve { config_file } => {
                let config = load_config(config_file)?;
                let optimizer = Arc::new(config.build_optimizer()?);
                server::serve(&config.server, optimizer)
            }
            SmartRouteOperation::Optimize {
                config_file,
                origin,
                destination,
                departure_time,
            } => {
                let config = load_config(config_file)?;
                let departure_time = parse_time(departure_time.as_deref())?;
                let optimizer = config.build_optimizer()?;
                let route = optimizer.optimize(origin, destination, departure_time)?;
                print_json(&route)
            }
            SmartRouteOperation::Predict {
                config_file,
                latitude,
                longitude,
                time,
            } => {
                let config = load_config(config_file)?;
                let time = parse_time(time.as_deref())?.unwrap_or_else(datetime_ops::now);
                let source = config.build_traffic_source()?;
                source.ensure_ready()?;
                let prediction = crate::optimizer::TrafficPrediction::predict(
                    source.as_ref(),
                    *latitude,
                    *longitude,
                    &time,
                )?;
                print_json(&prediction)
            }
            SmartRouteOperation::Train {
                config_file,
                training_file,
                model_name,
            } => {
                let config = load_config(config_file)?;
                let store = config.model_store()?;
                let mut model_config = match &config.traffic {
                    TrafficSourceConfig::Model(model_config) => model_config.clone(),
                    TrafficSourceConfig::RuleBased(_) => ModelTrafficSourceConfig::default(),
                };
                if let Some(name) = model_name {
                    model_config.model_name = name.clone();
                }
                let name = model_config.model_name.clone();
                let source = ModelTrafficSource::new(model_config, store.clone());
                let model = source.train(training_file)?;
                let path = store.model_path(&name)?;
                print_json(&json!({
                    "model_name": name,
                    "path": path,
                    "cells": model.cells().len(),
                    "observations": model.observation_count(),
                }))
            }
            SmartRouteOperation::Models { config_file, op } => {
                let config = load_config(config_file)?;
                let store = config.model_store()?;
                match op {
                    ModelsOperation::List => {
                        let models = store.list()?;
                        if models.is_empty() {
                            log::info!("no models in {}", store.directory().display());
                        }
                        let listing = models
                            .iter()
                            .map(|(name, path)| format!("{name}\t{}", path.display()))
                            .join("\n");
                        println!("{listing}");
                        Ok(())
                    }
                    ModelsOperation::Delete { name } => {
                        if !store.delete(name)? {
                            return Err(ModelStoreError::NotFound(name.clone()).into());
                        }
                        Ok(())
                    }
                }
            }
            SmartRouteOperation::DefaultConfig => {
                println!("{}", AppConfig::default().to_toml()?);
                Ok(())
            }
        }
    }
}

fn load_config(config_file: &Option<String>) -> Result<AppConfig, AppError> {
    AppConfig::load(config_file.as_deref().map(Path::new))
}

fn parse_time(
    value: Option<&str>,
) -> Result<Option<chrono::DateTime<chrono::FixedOffset>>, AppError> {
    value
        .map(datetime_ops::parse_departure_time)
        .transpose()
        .map_err(AppError::InvalidUserInput)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let output = serde_json::to_string_pretty(value).map_err(|e| AppError::Output(e.to_string()))?;
    println!("{output}");
    Ok(())
}
