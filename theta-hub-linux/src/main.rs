/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

mod bus;
mod config;

use crate::bus::LoggingBusDriver;
use crate::config::{Config, ConfigError, OutputMode, SensorConfig};
use clap::Parser;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use theta_hub::{HubError, SensorData, SubscriptionToken, ThetaHub};
use thiserror::Error;
use tracing::{error, info, warn};

const HUB_NAME: &str = "theta-hub-linux";

#[derive(Parser)]
#[command()]
struct RunnerArgs {
    #[arg(short, long, value_name = "FILE")]
    config: String,
}

#[derive(Debug, Error)]
enum RunnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Hub(#[from] HubError),
    #[error("unable to listen for shutdown signal: {0}")]
    Signal(#[source] std::io::Error),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), RunnerError> {
    let _ = tracing_subscriber::fmt::try_init();

    info!("Started {HUB_NAME}");

    let args = RunnerArgs::parse();
    let config = Config::load(&args.config).map_err(|err| {
        error!(error = err.as_label(), "{err}");
        err
    })?;

    let hub = ThetaHub::with_config(HUB_NAME, config.hub.clone(), Arc::new(LoggingBusDriver));
    install_consumer(&hub, config.output);

    // Handlers stay registered for as long as these tokens live.
    let mut tokens: Vec<SubscriptionToken> = config
        .sensors
        .iter()
        .map(|sensor| add_simulated_sensor(&hub, sensor))
        .collect();
    tokens.extend(
        config
            .echo_topics
            .iter()
            .map(|topic| hub.add_write_handler(topic, |data, emit| emit.emit(data.clone()))),
    );

    hub.init().map_err(|err| {
        error!(error = err.as_label(), "{err}");
        err
    })?;

    for data in config.writes.iter().cloned() {
        let summary = hub.write(data);
        if summary.handlers_invoked == 0 {
            warn!("scripted write had no handler");
        }
    }

    run_tick_loop(&hub, &config).await?;

    drop(tokens);
    info!("Stopped {HUB_NAME}");
    Ok(())
}

fn install_consumer(hub: &ThetaHub, output: OutputMode) {
    match output {
        OutputMode::Log => hub.when_data_available(|data| info!(%data, "data available")),
        OutputMode::Json => hub.when_data_available(|data| match serde_json::to_string(data) {
            Ok(line) => println!("{line}"),
            Err(err) => warn!("unable to serialize {data}: {err}"),
        }),
    }
}

fn add_simulated_sensor(hub: &ThetaHub, sensor: &SensorConfig) -> SubscriptionToken {
    let name = sensor.name.clone();
    let values = sensor.values.clone();
    let cursor = AtomicUsize::new(0);
    hub.add_read_handler(move |emit| {
        let index = cursor.fetch_add(1, Ordering::Relaxed) % values.len().max(1);
        if let Some(value) = values.get(index) {
            emit.emit(SensorData::new(name.as_str(), value.as_str()));
        }
    })
}

async fn run_tick_loop(hub: &ThetaHub, config: &Config) -> Result<(), RunnerError> {
    let mut interval = tokio::time::interval(Duration::from_millis(config.tick_interval_ms));
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut ticks: u64 = 0;
    loop {
        if config.tick_count.is_some_and(|limit| ticks >= limit) {
            info!(ticks, "tick count reached");
            return Ok(());
        }
        tokio::select! {
            _ = interval.tick() => {
                hub.tick();
                ticks += 1;
            }
            signal = &mut shutdown => {
                signal.map_err(RunnerError::Signal)?;
                info!(ticks, "shutdown requested");
                return Ok(());
            }
        }
    }
}
