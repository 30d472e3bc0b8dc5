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

//! Protocol-level value model: node identity, variants, status codes,
//! attributes and the request shapes served by the dispatcher.

pub mod attribute;
pub mod node_id;
pub mod request;
pub mod status;
pub mod value;

pub use attribute::{AccessLevel, AttributeId};
pub use node_id::{Identifier, NodeId, NodeIdScheme};
pub use request::{CallRequest, ReadValueId, TimestampsToReturn, WriteValue};
pub use status::StatusCode;
pub use value::{DataTypeId, DataValue, ValueRank, Variant};
