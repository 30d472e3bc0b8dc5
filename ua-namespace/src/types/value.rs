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

//! Typed values and the value-with-status-and-timestamps carrier.

use crate::types::status::StatusCode;
use chrono::{DateTime, Utc};
use std::fmt;

/// Declared data type of a variable node or method argument.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DataTypeId {
    Boolean,
    Int32,
    Double,
    String,
}

impl DataTypeId {
    /// Default value a variable of this type holds before the first write.
    pub fn default_value(self) -> Variant {
        match self {
            DataTypeId::Boolean => Variant::Boolean(false),
            DataTypeId::Int32 => Variant::Int32(0),
            DataTypeId::Double => Variant::Double(0.0),
            DataTypeId::String => Variant::String(String::new()),
        }
    }
}

impl fmt::Display for DataTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataTypeId::Boolean => "Boolean",
            DataTypeId::Int32 => "Int32",
            DataTypeId::Double => "Double",
            DataTypeId::String => "String",
        };
        f.write_str(name)
    }
}

/// Rank of a variable value. Everything in this namespace is scalar.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueRank {
    Scalar,
    Array,
}

impl ValueRank {
    /// Wire encoding: -1 for scalar, 1 for a one-dimensional array.
    pub fn as_i32(self) -> i32 {
        match self {
            ValueRank::Scalar => -1,
            ValueRank::Array => 1,
        }
    }
}

/// A dynamically typed scalar value.
#[derive(Clone, Debug, PartialEq)]
pub enum Variant {
    Boolean(bool),
    Int32(i32),
    Double(f64),
    String(String),
}

impl Variant {
    pub fn data_type(&self) -> DataTypeId {
        match self {
            Variant::Boolean(_) => DataTypeId::Boolean,
            Variant::Int32(_) => DataTypeId::Int32,
            Variant::Double(_) => DataTypeId::Double,
            Variant::String(_) => DataTypeId::String,
        }
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Variant::Boolean(value)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Variant::Int32(value)
    }
}

impl From<f64> for Variant {
    fn from(value: f64) -> Self {
        Variant::Double(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::String(value.to_string())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::String(value)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Boolean(value) => write!(f, "{value}"),
            Variant::Int32(value) => write!(f, "{value}"),
            Variant::Double(value) => write!(f, "{value}"),
            Variant::String(value) => f.write_str(value),
        }
    }
}

/// A value together with its status code and timestamps, as produced by an
/// attribute read and stored inside variable nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct DataValue {
    pub value: Option<Variant>,
    pub status: StatusCode,
    pub source_timestamp: Option<DateTime<Utc>>,
    pub server_timestamp: Option<DateTime<Utc>>,
}

impl DataValue {
    /// A good value stamped with the current time.
    pub fn new(value: Variant) -> Self {
        let now = Utc::now();
        Self {
            value: Some(value),
            status: StatusCode::Good,
            source_timestamp: Some(now),
            server_timestamp: Some(now),
        }
    }

    /// A value-less slot carrying only a status code.
    pub fn from_status(status: StatusCode) -> Self {
        Self {
            value: None,
            status,
            source_timestamp: None,
            server_timestamp: None,
        }
    }
}
