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

//! Node identity and the deterministic addressing scheme of this namespace.

use std::fmt;

/// Identifier payload of a [`NodeId`].
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Identifier {
    Numeric(u32),
    String(String),
}

/// Unique identifier of a node, scoped to a namespace index.
///
/// Equality and hashing cover both the namespace index and the identifier
/// payload; the registry uses `NodeId` as its sole key.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NodeId {
    pub namespace: u16,
    pub identifier: Identifier,
}

impl NodeId {
    pub fn numeric(namespace: u16, value: u32) -> Self {
        Self {
            namespace,
            identifier: Identifier::Numeric(value),
        }
    }

    pub fn string(namespace: u16, value: impl Into<String>) -> Self {
        Self {
            namespace,
            identifier: Identifier::String(value.into()),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.identifier {
            Identifier::Numeric(value) => write!(f, "ns={};i={}", self.namespace, value),
            Identifier::String(value) => write!(f, "ns={};s={}", self.namespace, value),
        }
    }
}

/// Numeric identifier of the server-wide Objects container in namespace 0.
const OBJECTS_FOLDER_ID: u32 = 85;

/// The well-known Objects container every top-level folder hangs under.
pub fn objects_folder() -> NodeId {
    NodeId::numeric(0, OBJECTS_FOLDER_ID)
}

/// Well-known string identifiers inside this namespace.
pub mod well_known {
    /// Root folder that holds one sub-folder per asset.
    pub const ASSETS_FOLDER: &str = "Assets";
    /// Folder that holds the remote-control method and run-state variable.
    pub const PLAYER_CONTROL: &str = "PlayerControl";
    /// The remote-control method node.
    pub const REMOTE_CONTROL_METHOD: &str = "Player/remote-control(x)";
    /// Browse name of the remote-control method node.
    pub const REMOTE_CONTROL_BROWSE_NAME: &str = "remote-control(x)";
    /// The run-state status variable node.
    pub const RUN_STATE: &str = "Player/RunState";
}

/// Deterministic mapping from domain identifiers to node identifiers.
///
/// Same inputs always yield the same id, and the variants cannot collide for
/// valid distinct inputs: folder names carry no separator, asset folder ids
/// end in a separator, variable ids are pure decimal strings. Malformed
/// inputs are a caller contract violation, there are no error paths here.
#[derive(Clone, Copy, Debug)]
pub struct NodeIdScheme {
    namespace_index: u16,
}

impl NodeIdScheme {
    pub fn new(namespace_index: u16) -> Self {
        Self { namespace_index }
    }

    pub fn namespace_index(&self) -> u16 {
        self.namespace_index
    }

    /// Id of a top-level folder such as `Assets` or `PlayerControl`.
    pub fn folder_id(&self, name: &str) -> NodeId {
        NodeId::string(self.namespace_index, name)
    }

    /// Id of a per-asset folder: `Assets/<assetName>/`.
    ///
    /// The trailing separator is part of the identifier.
    pub fn asset_folder_id(&self, asset_name: &str) -> NodeId {
        NodeId::string(
            self.namespace_index,
            format!("{}/{}/", well_known::ASSETS_FOLDER, asset_name),
        )
    }

    /// Id of a measurement-point variable node: the decimal point id.
    pub fn variable_id(&self, measurement_point_id: u32) -> NodeId {
        NodeId::string(self.namespace_index, measurement_point_id.to_string())
    }

    /// Id of a well-known node, see [`well_known`].
    pub fn well_known_id(&self, label: &str) -> NodeId {
        NodeId::string(self.namespace_index, label)
    }
}
