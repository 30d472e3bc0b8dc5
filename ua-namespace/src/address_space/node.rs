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

//! The node sum type and its attribute read/write logic.
//!
//! Node kind is decided once at build time, so the variants are a tagged
//! enum rather than runtime type inspection: folders, analog variables
//! (engineering-unit metadata attached), discrete variables (any variable
//! without engineering-unit metadata, covering both two-state booleans and
//! the string run-state node) and method nodes.
//!
//! Values and reference sets sit behind per-node locks: one writer's update
//! is never torn or partially visible to a concurrent reader, and no
//! operation spans multiple nodes.

use crate::access::Permission;
use crate::types::attribute::{AccessLevel, AttributeId};
use crate::types::node_id::NodeId;
use crate::types::request::TimestampsToReturn;
use crate::types::status::StatusCode;
use crate::types::value::{DataTypeId, DataValue, ValueRank, Variant};
use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

/// Class of an addressable node, as surfaced by the NodeClass attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeClass {
    Object,
    Variable,
    Method,
}

impl NodeClass {
    /// Wire encoding of the node class.
    pub fn as_i32(self) -> i32 {
        match self {
            NodeClass::Object => 1,
            NodeClass::Variable => 2,
            NodeClass::Method => 4,
        }
    }
}

/// Type of a directed reference edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ReferenceTypeId {
    Organizes,
    HasComponent,
}

/// A directed, typed edge from the owning node to a target node.
///
/// Inverses are never generated automatically; where protocol symmetry is
/// required the reverse edge is a separate entry on the other node.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reference {
    pub reference_type: ReferenceTypeId,
    pub target: NodeId,
    pub forward: bool,
}

/// Engineering-unit metadata of an analog variable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EuInformation {
    pub symbol: String,
    pub description: String,
}

/// Display/calibration range of an analog variable. Not a value clamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

/// Input or output argument signature of a method node.
#[derive(Clone, Debug)]
pub struct Argument {
    pub name: String,
    pub data_type: DataTypeId,
    pub value_rank: ValueRank,
    pub description: String,
}

/// Bound invocation handler of a method node.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    async fn invoke(&self, inputs: &[Variant]) -> Result<Vec<Variant>, StatusCode>;
}

/// Fields shared by every node variant.
pub struct NodeBase {
    node_id: NodeId,
    browse_name: String,
    display_name: String,
    description: String,
    references: RwLock<Vec<Reference>>,
}

impl NodeBase {
    fn new(
        node_id: NodeId,
        browse_name: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            node_id,
            browse_name: browse_name.into(),
            display_name: display_name.into(),
            description: description.into(),
            references: RwLock::new(Vec::new()),
        }
    }
}

/// Mutable value state shared by both variable variants.
pub struct VariableCore {
    data_type: DataTypeId,
    value_rank: ValueRank,
    access_level: AccessLevel,
    user_access_level: AccessLevel,
    minimum_sampling_interval: f64,
    historizing: bool,
    value: RwLock<DataValue>,
}

impl VariableCore {
    fn new(data_type: DataTypeId, access_level: AccessLevel) -> Self {
        Self {
            data_type,
            value_rank: ValueRank::Scalar,
            access_level,
            user_access_level: access_level,
            minimum_sampling_interval: 0.0,
            historizing: false,
            value: RwLock::new(DataValue::new(data_type.default_value())),
        }
    }
}

pub struct FolderNode {
    base: NodeBase,
}

pub struct AnalogVariableNode {
    base: NodeBase,
    core: VariableCore,
    engineering_units: EuInformation,
    eu_range: Range,
}

pub struct DiscreteVariableNode {
    base: NodeBase,
    core: VariableCore,
}

pub struct MethodNode {
    base: NodeBase,
    input_arguments: Vec<Argument>,
    output_arguments: Vec<Argument>,
    handler: Arc<dyn MethodHandler>,
}

impl MethodNode {
    pub fn input_arguments(&self) -> &[Argument] {
        &self.input_arguments
    }

    pub fn output_arguments(&self) -> &[Argument] {
        &self.output_arguments
    }

    pub fn handler(&self) -> Arc<dyn MethodHandler> {
        self.handler.clone()
    }
}

/// An addressable entity in the address space.
pub enum Node {
    Folder(FolderNode),
    AnalogVariable(AnalogVariableNode),
    DiscreteVariable(DiscreteVariableNode),
    Method(MethodNode),
}

impl Node {
    pub fn folder(node_id: NodeId, name: impl Into<String>) -> Self {
        let name = name.into();
        Node::Folder(FolderNode {
            base: NodeBase::new(node_id, name.clone(), name, ""),
        })
    }

    pub fn analog_variable(
        node_id: NodeId,
        name: impl Into<String>,
        description: impl Into<String>,
        access_level: AccessLevel,
        engineering_units: EuInformation,
        eu_range: Range,
    ) -> Self {
        let name = name.into();
        Node::AnalogVariable(AnalogVariableNode {
            base: NodeBase::new(node_id, name.clone(), name, description),
            core: VariableCore::new(DataTypeId::Double, access_level),
            engineering_units,
            eu_range,
        })
    }

    /// A variable without engineering-unit metadata: two-state booleans and
    /// plain status variables such as the string run-state node.
    pub fn data_variable(
        node_id: NodeId,
        name: impl Into<String>,
        description: impl Into<String>,
        data_type: DataTypeId,
        access_level: AccessLevel,
    ) -> Self {
        let name = name.into();
        Node::DiscreteVariable(DiscreteVariableNode {
            base: NodeBase::new(node_id, name.clone(), name, description),
            core: VariableCore::new(data_type, access_level),
        })
    }

    pub fn method(
        node_id: NodeId,
        browse_name: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        input_arguments: Vec<Argument>,
        output_arguments: Vec<Argument>,
        handler: Arc<dyn MethodHandler>,
    ) -> Self {
        Node::Method(MethodNode {
            base: NodeBase::new(node_id, browse_name, display_name, description),
            input_arguments,
            output_arguments,
            handler,
        })
    }

    fn base(&self) -> &NodeBase {
        match self {
            Node::Folder(node) => &node.base,
            Node::AnalogVariable(node) => &node.base,
            Node::DiscreteVariable(node) => &node.base,
            Node::Method(node) => &node.base,
        }
    }

    fn variable_core(&self) -> Option<&VariableCore> {
        match self {
            Node::AnalogVariable(node) => Some(&node.core),
            Node::DiscreteVariable(node) => Some(&node.core),
            Node::Folder(_) | Node::Method(_) => None,
        }
    }

    pub fn node_id(&self) -> &NodeId {
        &self.base().node_id
    }

    pub fn node_class(&self) -> NodeClass {
        match self {
            Node::Folder(_) => NodeClass::Object,
            Node::AnalogVariable(_) | Node::DiscreteVariable(_) => NodeClass::Variable,
            Node::Method(_) => NodeClass::Method,
        }
    }

    pub fn browse_name(&self) -> &str {
        &self.base().browse_name
    }

    pub fn display_name(&self) -> &str {
        &self.base().display_name
    }

    pub fn description(&self) -> &str {
        &self.base().description
    }

    pub fn data_type(&self) -> Option<DataTypeId> {
        self.variable_core().map(|core| core.data_type)
    }

    pub fn access_level(&self) -> Option<AccessLevel> {
        self.variable_core().map(|core| core.access_level)
    }

    pub fn engineering_units(&self) -> Option<&EuInformation> {
        match self {
            Node::AnalogVariable(node) => Some(&node.engineering_units),
            _ => None,
        }
    }

    pub fn eu_range(&self) -> Option<Range> {
        match self {
            Node::AnalogVariable(node) => Some(node.eu_range),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodNode> {
        match self {
            Node::Method(node) => Some(node),
            _ => None,
        }
    }

    /// Snapshot of the node's outgoing reference set.
    pub fn references(&self) -> Vec<Reference> {
        self.base()
            .references
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Appends one directed reference edge. No inverse is generated.
    pub fn add_reference(&self, reference: Reference) {
        self.base()
            .references
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(reference);
    }

    /// Current stored value of a variable node.
    pub fn value(&self) -> Option<DataValue> {
        self.variable_core().map(|core| {
            core.value
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        })
    }

    /// Backend push path: stores a typed value without consulting the role
    /// policy, through the same per-node lock as client writes.
    pub fn set_value(&self, value: Variant) -> Result<(), StatusCode> {
        let core = self.variable_core().ok_or(StatusCode::BadNotWritable)?;
        if value.data_type() != core.data_type {
            return Err(StatusCode::BadTypeMismatch);
        }
        let mut stored = core
            .value
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *stored = DataValue::new(value);
        Ok(())
    }

    /// Reads one attribute, honoring the caller's resolved permission, the
    /// timestamp policy and the (scalar-only) index range.
    pub fn read_attribute(
        &self,
        permission: Permission,
        attribute_id: AttributeId,
        timestamps: TimestampsToReturn,
        index_range: Option<&str>,
    ) -> DataValue {
        if !permission.allows_read() {
            return DataValue::from_status(StatusCode::BadUserAccessDenied);
        }
        if index_range.is_some() {
            return DataValue::from_status(StatusCode::BadIndexRangeInvalid);
        }

        let result = match attribute_id {
            AttributeId::NodeId => {
                DataValue::new(Variant::String(self.node_id().to_string()))
            }
            AttributeId::NodeClass => {
                DataValue::new(Variant::Int32(self.node_class().as_i32()))
            }
            AttributeId::BrowseName => {
                DataValue::new(Variant::String(self.browse_name().to_string()))
            }
            AttributeId::DisplayName => {
                DataValue::new(Variant::String(self.display_name().to_string()))
            }
            AttributeId::Description => {
                DataValue::new(Variant::String(self.description().to_string()))
            }
            AttributeId::Value => return self.read_value(timestamps),
            AttributeId::DataType => match self.variable_core() {
                Some(core) => DataValue::new(Variant::String(core.data_type.to_string())),
                None => DataValue::from_status(StatusCode::BadAttributeIdInvalid),
            },
            AttributeId::ValueRank => match self.variable_core() {
                Some(core) => DataValue::new(Variant::Int32(core.value_rank.as_i32())),
                None => DataValue::from_status(StatusCode::BadAttributeIdInvalid),
            },
            AttributeId::AccessLevel => match self.variable_core() {
                Some(core) => {
                    DataValue::new(Variant::Int32(i32::from(core.access_level.bits())))
                }
                None => DataValue::from_status(StatusCode::BadAttributeIdInvalid),
            },
            AttributeId::UserAccessLevel => match self.variable_core() {
                Some(core) => {
                    DataValue::new(Variant::Int32(i32::from(core.user_access_level.bits())))
                }
                None => DataValue::from_status(StatusCode::BadAttributeIdInvalid),
            },
            AttributeId::MinimumSamplingInterval => match self.variable_core() {
                Some(core) => {
                    DataValue::new(Variant::Double(core.minimum_sampling_interval))
                }
                None => DataValue::from_status(StatusCode::BadAttributeIdInvalid),
            },
            AttributeId::Historizing => match self.variable_core() {
                Some(core) => DataValue::new(Variant::Boolean(core.historizing)),
                None => DataValue::from_status(StatusCode::BadAttributeIdInvalid),
            },
            AttributeId::Executable | AttributeId::UserExecutable => match self {
                Node::Method(_) => DataValue::new(Variant::Boolean(true)),
                _ => DataValue::from_status(StatusCode::BadAttributeIdInvalid),
            },
        };

        apply_timestamps(result, timestamps)
    }

    fn read_value(&self, timestamps: TimestampsToReturn) -> DataValue {
        let Some(core) = self.variable_core() else {
            return DataValue::from_status(StatusCode::BadAttributeIdInvalid);
        };
        if !core.access_level.contains(AccessLevel::CURRENT_READ) {
            return DataValue::from_status(StatusCode::BadNotReadable);
        }
        let stored = core
            .value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        apply_timestamps(stored, timestamps)
    }

    /// Writes one attribute. Only the Value attribute of a variable node is
    /// writable; the caller's permission and the node's static access level
    /// both have to allow it.
    pub fn write_attribute(
        &self,
        permission: Permission,
        attribute_id: AttributeId,
        value: &DataValue,
        index_range: Option<&str>,
    ) -> Result<(), StatusCode> {
        if attribute_id != AttributeId::Value {
            return Err(StatusCode::BadNotWritable);
        }
        let core = self.variable_core().ok_or(StatusCode::BadNotWritable)?;
        if !permission.allows_write() {
            return Err(StatusCode::BadUserAccessDenied);
        }
        if !core.access_level.contains(AccessLevel::CURRENT_WRITE) {
            return Err(StatusCode::BadNotWritable);
        }
        if index_range.is_some() {
            return Err(StatusCode::BadIndexRangeInvalid);
        }
        let variant = value.value.as_ref().ok_or(StatusCode::BadTypeMismatch)?;
        if variant.data_type() != core.data_type {
            return Err(StatusCode::BadTypeMismatch);
        }

        let mut stored = core
            .value
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *stored = DataValue::new(variant.clone());
        Ok(())
    }
}

fn apply_timestamps(mut data_value: DataValue, timestamps: TimestampsToReturn) -> DataValue {
    match timestamps {
        TimestampsToReturn::Both => {}
        TimestampsToReturn::Source => data_value.server_timestamp = None,
        TimestampsToReturn::Server => data_value.source_timestamp = None,
        TimestampsToReturn::Neither => {
            data_value.source_timestamp = None;
            data_value.server_timestamp = None;
        }
    }
    data_value
}
