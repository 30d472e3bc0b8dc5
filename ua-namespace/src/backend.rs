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

//! Seam to the external measurement backend: the asset/measurement-point
//! model the builder consumes and the control entry point the remote-control
//! method delegates to.

use crate::address_space::node::Node;
use crate::types::status::StatusCode;
use crate::types::value::Variant;
use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock, Weak};

/// Declared access right of a measurement point.
///
/// `Unspecified` marks definitions whose raw right was outside the
/// recognized set; the access policy resolves it to no access.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessRight {
    Read,
    Write,
    Both,
    Unspecified,
}

/// Base unit of measure of a measurement point.
///
/// `NoUoM` is the sentinel for two-state points that carry no unit at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnitOfMeasure {
    NoUoM,
    Celsius,
    Metre,
    Second,
    Ampere,
    Volt,
    Watt,
    Bar,
    Percent,
}

impl UnitOfMeasure {
    pub fn name(self) -> &'static str {
        match self {
            UnitOfMeasure::NoUoM => "NoUoM",
            UnitOfMeasure::Celsius => "Celsius",
            UnitOfMeasure::Metre => "Metre",
            UnitOfMeasure::Second => "Second",
            UnitOfMeasure::Ampere => "Ampere",
            UnitOfMeasure::Volt => "Volt",
            UnitOfMeasure::Watt => "Watt",
            UnitOfMeasure::Bar => "Bar",
            UnitOfMeasure::Percent => "Percent",
        }
    }

    /// Short unit code: the first character of the unit name.
    pub fn symbol(self) -> String {
        self.name().chars().take(1).collect()
    }
}

/// A single measurement point owned by the backend.
///
/// The builder fills the variable-node slot with a weak back-reference so
/// backend pushes can target the node; the registry stays the sole owner of
/// node lifetime.
pub struct MeasurementPoint {
    id: u32,
    name: String,
    unit: UnitOfMeasure,
    access_right: AccessRight,
    variable_node: RwLock<Option<Weak<Node>>>,
}

impl MeasurementPoint {
    pub fn new(id: u32, name: impl Into<String>, unit: UnitOfMeasure, access_right: AccessRight) -> Self {
        Self {
            id,
            name: name.into(),
            unit,
            access_right,
            variable_node: RwLock::new(None),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> UnitOfMeasure {
        self.unit
    }

    pub fn access_right(&self) -> AccessRight {
        self.access_right
    }

    /// Records the variable node created for this point. Called once by the
    /// builder; a later call replaces the link.
    pub fn bind_variable_node(&self, node: &Arc<Node>) {
        let mut slot = self
            .variable_node
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::downgrade(node));
    }

    /// The variable node bound to this point, if it is still alive.
    pub fn variable_node(&self) -> Option<Arc<Node>> {
        self.variable_node
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(Weak::upgrade)
    }

    /// Pushes a live value into the bound variable node.
    ///
    /// Backend pushes bypass the role policy but go through the same typed,
    /// per-node write discipline as client writes.
    pub fn push_value(&self, value: Variant) -> Result<(), StatusCode> {
        let node = self
            .variable_node()
            .ok_or(StatusCode::BadNodeIdUnknown)?;
        node.set_value(value)
    }
}

/// An asset with its ordered list of measurement points.
pub struct Asset {
    name: String,
    measurement_points: Vec<Arc<MeasurementPoint>>,
}

impl Asset {
    pub fn new(name: impl Into<String>, measurement_points: Vec<Arc<MeasurementPoint>>) -> Self {
        Self {
            name: name.into(),
            measurement_points,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn measurement_points(&self) -> &[Arc<MeasurementPoint>] {
        &self.measurement_points
    }
}

/// The backend that owns live values, asset topology and playback control.
#[async_trait]
pub trait PlayerBackend: Send + Sync {
    /// Asset topology the address space is built from.
    fn assets(&self) -> Vec<Arc<Asset>>;

    /// Executes a domain command code (1=Play, 5=Pause, 6=Stop, 7=Loop).
    /// Code semantics are owned entirely by the backend.
    async fn execute_command(&self, command: i32) -> Result<(), StatusCode>;

    /// Hands the backend the run-state variable node so it can push
    /// run-state text into it.
    fn bind_run_state_node(&self, node: Arc<Node>);
}

#[cfg(test)]
mod tests {
    use super::{AccessRight, MeasurementPoint, UnitOfMeasure};
    use crate::address_space::node::Node;
    use crate::types::attribute::AccessLevel;
    use crate::types::node_id::NodeId;
    use crate::types::status::StatusCode;
    use crate::types::value::{DataTypeId, Variant};
    use std::sync::Arc;

    #[test]
    fn unit_symbol_is_first_character_of_name() {
        assert_eq!(UnitOfMeasure::Celsius.symbol(), "C");
        assert_eq!(UnitOfMeasure::Percent.symbol(), "P");
        assert_eq!(UnitOfMeasure::NoUoM.symbol(), "N");
    }

    #[test]
    fn push_value_without_bound_node_reports_unknown_node() {
        let point =
            MeasurementPoint::new(1, "Running", UnitOfMeasure::NoUoM, AccessRight::Read);

        assert_eq!(
            point.push_value(Variant::Boolean(true)),
            Err(StatusCode::BadNodeIdUnknown)
        );
    }

    #[test]
    fn push_value_targets_bound_node() {
        let point =
            MeasurementPoint::new(1, "Running", UnitOfMeasure::NoUoM, AccessRight::Read);
        let node = Arc::new(Node::data_variable(
            NodeId::string(2, "1"),
            "Running",
            "a boolean variable node",
            DataTypeId::Boolean,
            AccessLevel::CURRENT_READ,
        ));
        point.bind_variable_node(&node);

        point
            .push_value(Variant::Boolean(true))
            .expect("push should hit the bound node");

        let stored = node.value().expect("variable node holds a value");
        assert_eq!(stored.value, Some(Variant::Boolean(true)));
    }

    #[test]
    fn dropped_node_breaks_the_weak_link() {
        let point =
            MeasurementPoint::new(1, "Running", UnitOfMeasure::NoUoM, AccessRight::Read);
        let node = Arc::new(Node::data_variable(
            NodeId::string(2, "1"),
            "Running",
            "a boolean variable node",
            DataTypeId::Boolean,
            AccessLevel::CURRENT_READ,
        ));
        point.bind_variable_node(&node);
        drop(node);

        assert!(point.variable_node().is_none());
        assert_eq!(
            point.push_value(Variant::Boolean(true)),
            Err(StatusCode::BadNodeIdUnknown)
        );
    }
}
