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

//! Structured logging vocabulary shared by the hub layers.
//!
//! Every `tracing` event emitted by this crate carries an `event` field taken from
//! [`events`] and a `component` field naming the emitting layer, so log pipelines can
//! filter on stable keys instead of message text.

pub mod events;
pub mod fields;
