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

use crate::error::DriverError;

///
/// [`BusDriver`] is the hardware collaborator a [`ThetaHub`][crate::ThetaHub] brings up
/// on its first successful [`init`][crate::ThetaHub::init].
///
/// The hub calls [`begin`](BusDriver::begin) at most once per successful bring-up and never
/// retries a failed one; retry policy, if any, belongs to the driver or to the caller of `init()`.
///
/// # Examples
///
/// ```
/// use theta_hub::{BusDriver, DriverError};
///
/// struct I2cBus;
///
/// impl BusDriver for I2cBus {
///     fn begin(&self, sda_pin: u8, scl_pin: u8) -> Result<(), DriverError> {
///         println!("bringing up bus on sda={sda_pin} scl={scl_pin}");
///         Ok(())
///     }
/// }
/// ```
pub trait BusDriver: Send + Sync + 'static {
    /// Performs one-time bus bring-up with the configured data/clock lines.
    fn begin(&self, sda_pin: u8, scl_pin: u8) -> Result<(), DriverError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
