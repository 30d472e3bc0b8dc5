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

//! Request shapes served by the dispatcher. Results always preserve request
//! order 1:1.

use crate::types::attribute::AttributeId;
use crate::types::node_id::NodeId;
use crate::types::value::{DataValue, Variant};

/// Which timestamps an attribute read should return.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimestampsToReturn {
    Source,
    Server,
    Both,
    Neither,
}

/// One entry of a batch read.
///
/// Everything served here is a scalar in its default encoding, so a
/// populated index range or data encoding is rejected per entry.
#[derive(Clone, Debug)]
pub struct ReadValueId {
    pub node_id: NodeId,
    pub attribute_id: AttributeId,
    pub index_range: Option<String>,
    pub data_encoding: Option<String>,
}

impl ReadValueId {
    /// Shorthand for reading the Value attribute of a node.
    pub fn value_of(node_id: NodeId) -> Self {
        Self {
            node_id,
            attribute_id: AttributeId::Value,
            index_range: None,
            data_encoding: None,
        }
    }
}

/// One entry of a batch write.
#[derive(Clone, Debug)]
pub struct WriteValue {
    pub node_id: NodeId,
    pub attribute_id: AttributeId,
    pub value: DataValue,
    pub index_range: Option<String>,
}

impl WriteValue {
    /// Shorthand for writing the Value attribute of a node.
    pub fn value(node_id: NodeId, value: Variant) -> Self {
        Self {
            node_id,
            attribute_id: AttributeId::Value,
            value: DataValue::new(value),
            index_range: None,
        }
    }
}

/// A method invocation request.
#[derive(Clone, Debug)]
pub struct CallRequest {
    pub method_id: NodeId,
    pub arguments: Vec<Variant>,
}
