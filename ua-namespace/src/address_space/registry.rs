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

//! The authoritative store of all address-space nodes, keyed by node id.
//!
//! Created once at namespace construction, torn down with the server, and
//! passed by reference to every component that needs lookup. Populated
//! single-threaded by the builder, then shared read-mostly for the process
//! lifetime; nodes are never deleted during normal operation.

use crate::address_space::node::{Node, Reference, ReferenceTypeId};
use crate::types::node_id::NodeId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressSpaceError {
    #[error("node id already registered: {0}")]
    DuplicateNodeId(NodeId),
    #[error("node id not found: {0}")]
    NodeNotFound(NodeId),
}

#[derive(Default)]
pub struct NodeRegistry {
    nodes: RwLock<HashMap<NodeId, Arc<Node>>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node under its own id and returns the shared handle.
    ///
    /// A duplicate id is an invariant violation and never silently
    /// overwrites the registered node.
    pub fn insert(&self, node: Node) -> Result<Arc<Node>, AddressSpaceError> {
        let node = Arc::new(node);
        let node_id = node.node_id().clone();
        let mut nodes = self.nodes.write().unwrap_or_else(PoisonError::into_inner);
        if nodes.contains_key(&node_id) {
            return Err(AddressSpaceError::DuplicateNodeId(node_id));
        }
        nodes.insert(node_id, node.clone());
        Ok(node)
    }

    pub fn get(&self, node_id: &NodeId) -> Option<Arc<Node>> {
        self.nodes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(node_id)
            .cloned()
    }

    /// Adds one directed, typed reference edge to the `from` node.
    ///
    /// The registry never generates inverses; callers needing symmetry add
    /// the reverse edge as a separate entry on the target node.
    pub fn add_reference(
        &self,
        from: &NodeId,
        reference_type: ReferenceTypeId,
        to: NodeId,
        forward: bool,
    ) -> Result<(), AddressSpaceError> {
        let node = self
            .get(from)
            .ok_or_else(|| AddressSpaceError::NodeNotFound(from.clone()))?;
        node.add_reference(Reference {
            reference_type,
            target: to,
            forward,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
