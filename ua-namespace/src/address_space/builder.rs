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

//! One-shot construction of the node tree from the backend's asset list.
//!
//! Runs strictly single-threaded and completes before the registry is shared
//! with request handling. Construction failures are logged and never abort
//! the build: a node that could not be linked into the containment hierarchy
//! stays reachable by direct node id.

use crate::access::access_right_to_level;
use crate::address_space::node::{EuInformation, Node, Range, Reference, ReferenceTypeId};
use crate::address_space::registry::{AddressSpaceError, NodeRegistry};
use crate::backend::{MeasurementPoint, PlayerBackend, UnitOfMeasure};
use crate::method::RemoteControlMethod;
use crate::observability::events;
use crate::types::attribute::AccessLevel;
use crate::types::node_id::{self, well_known, NodeId, NodeIdScheme};
use crate::types::value::DataTypeId;
use std::sync::Arc;
use tracing::{debug, error, info};

const COMPONENT: &str = "address_space_builder";

/// Display/calibration range attached to every analog variable node.
const DISPLAY_RANGE: Range = Range {
    low: 0.0,
    high: 20.0,
};

/// Builds the full node tree once at startup.
pub struct AddressSpaceBuilder {
    registry: Arc<NodeRegistry>,
    scheme: NodeIdScheme,
}

impl AddressSpaceBuilder {
    pub fn new(registry: Arc<NodeRegistry>, scheme: NodeIdScheme) -> Self {
        Self { registry, scheme }
    }

    /// Populates the registry from the backend's assets and returns the
    /// ordered list of created variable nodes for external iteration.
    pub fn build(&self, backend: &Arc<dyn PlayerBackend>) -> Vec<Arc<Node>> {
        info!(
            event = events::ADDRESS_SPACE_BUILD_START,
            component = COMPONENT,
            namespace_index = self.scheme.namespace_index(),
            "building address space"
        );

        let mut variable_nodes = Vec::new();
        let root_id = self.scheme.folder_id(well_known::ASSETS_FOLDER);
        let root = match self
            .registry
            .insert(Node::folder(root_id.clone(), well_known::ASSETS_FOLDER))
        {
            Ok(node) => {
                self.link_under_objects_container(&root_id);
                Some(node)
            }
            Err(err) => {
                error!(
                    event = events::NODE_REGISTER_FAILED,
                    component = COMPONENT,
                    node_id = %root_id,
                    err = %err,
                    "registering the assets root folder failed"
                );
                None
            }
        };

        for asset in backend.assets() {
            let folder_id = self.scheme.asset_folder_id(asset.name());
            let asset_folder = match self
                .registry
                .insert(Node::folder(folder_id.clone(), asset.name()))
            {
                Ok(node) => node,
                Err(err) => {
                    error!(
                        event = events::NODE_REGISTER_FAILED,
                        component = COMPONENT,
                        node_id = %folder_id,
                        err = %err,
                        "registering an asset folder failed, skipping its points"
                    );
                    continue;
                }
            };
            if let Some(root) = root.as_ref() {
                root.add_reference(Reference {
                    reference_type: ReferenceTypeId::Organizes,
                    target: folder_id,
                    forward: true,
                });
            }

            for point in asset.measurement_points() {
                match self.build_measurement_node(&asset_folder, point) {
                    Ok(node) => variable_nodes.push(node),
                    Err(err) => {
                        error!(
                            event = events::NODE_REGISTER_FAILED,
                            component = COMPONENT,
                            measurement_point_id = point.id(),
                            err = %err,
                            "registering a measurement-point node failed"
                        );
                    }
                }
            }
        }

        self.build_control_nodes(backend);

        info!(
            event = events::ADDRESS_SPACE_BUILD_OK,
            component = COMPONENT,
            node_count = self.registry.len(),
            variable_count = variable_nodes.len(),
            "address space built"
        );
        variable_nodes
    }

    /// Creates one variable node for a measurement point, branched on its
    /// unit of measure, and binds it back into the point.
    fn build_measurement_node(
        &self,
        asset_folder: &Arc<Node>,
        point: &Arc<MeasurementPoint>,
    ) -> Result<Arc<Node>, AddressSpaceError> {
        let node_id = self.scheme.variable_id(point.id());
        let node = if point.unit() == UnitOfMeasure::NoUoM {
            // Two-state points stay sensor-only regardless of the declared
            // access right.
            Node::data_variable(
                node_id,
                point.name(),
                "a boolean variable node",
                DataTypeId::Boolean,
                AccessLevel::CURRENT_READ,
            )
        } else {
            Node::analog_variable(
                node_id,
                point.name(),
                "an analog variable node",
                access_right_to_level(point.access_right()),
                EuInformation {
                    symbol: point.unit().symbol(),
                    description: point.unit().name().to_string(),
                },
                DISPLAY_RANGE,
            )
        };

        let node = self.registry.insert(node)?;
        point.bind_variable_node(&node);
        asset_folder.add_reference(Reference {
            reference_type: ReferenceTypeId::Organizes,
            target: node.node_id().clone(),
            forward: true,
        });
        Ok(node)
    }

    /// Creates the control folder with the remote-control method node and
    /// the run-state status variable.
    fn build_control_nodes(&self, backend: &Arc<dyn PlayerBackend>) {
        let folder_id = self.scheme.well_known_id(well_known::PLAYER_CONTROL);
        let folder = match self
            .registry
            .insert(Node::folder(folder_id.clone(), well_known::PLAYER_CONTROL))
        {
            Ok(node) => node,
            Err(err) => {
                error!(
                    event = events::NODE_REGISTER_FAILED,
                    component = COMPONENT,
                    node_id = %folder_id,
                    err = %err,
                    "registering the control folder failed"
                );
                return;
            }
        };
        self.link_under_objects_container(&folder_id);

        let method_id = self.scheme.well_known_id(well_known::REMOTE_CONTROL_METHOD);
        let method = Node::method(
            method_id.clone(),
            well_known::REMOTE_CONTROL_BROWSE_NAME,
            well_known::REMOTE_CONTROL_BROWSE_NAME,
            "Remote control for this player: input '1' => Play, '5' => Pause, \
             '6' => Stop, '7' => Endlessly loop input file",
            RemoteControlMethod::input_arguments(),
            RemoteControlMethod::output_arguments(),
            Arc::new(RemoteControlMethod::new(backend.clone())),
        );
        match self.registry.insert(method) {
            Ok(method) => {
                // Folder and method reference each other as two explicit
                // entries, forward and reverse.
                folder.add_reference(Reference {
                    reference_type: ReferenceTypeId::HasComponent,
                    target: method_id,
                    forward: true,
                });
                method.add_reference(Reference {
                    reference_type: ReferenceTypeId::HasComponent,
                    target: folder_id,
                    forward: false,
                });
            }
            Err(err) => {
                error!(
                    event = events::NODE_REGISTER_FAILED,
                    component = COMPONENT,
                    node_id = %method_id,
                    err = %err,
                    "registering the remote-control method node failed"
                );
            }
        }

        let run_state_id = self.scheme.well_known_id(well_known::RUN_STATE);
        match self.registry.insert(Node::data_variable(
            run_state_id.clone(),
            "RunState",
            "current run state of the player",
            DataTypeId::String,
            AccessLevel::READ_WRITE,
        )) {
            Ok(node) => {
                folder.add_reference(Reference {
                    reference_type: ReferenceTypeId::Organizes,
                    target: run_state_id.clone(),
                    forward: true,
                });
                backend.bind_run_state_node(node);
                debug!(
                    event = events::RUN_STATE_BOUND,
                    component = COMPONENT,
                    node_id = %run_state_id,
                    "run-state node handed to the backend"
                );
            }
            Err(err) => {
                error!(
                    event = events::NODE_REGISTER_FAILED,
                    component = COMPONENT,
                    node_id = %run_state_id,
                    err = %err,
                    "registering the run-state node failed"
                );
            }
        }
    }

    /// Links a top-level folder under the server's Objects container.
    /// Failure is logged and tolerated: the folder stays reachable by id.
    fn link_under_objects_container(&self, child: &NodeId) {
        if let Err(err) = self.registry.add_reference(
            &node_id::objects_folder(),
            ReferenceTypeId::Organizes,
            child.clone(),
            true,
        ) {
            error!(
                event = events::NODE_LINK_FAILED,
                component = COMPONENT,
                node_id = %child,
                err = %err,
                "adding reference under the objects container failed"
            );
        }
    }
}
