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

//! The address space itself: node model, registry and one-shot builder.

pub mod builder;
pub mod node;
pub mod registry;

pub use builder::AddressSpaceBuilder;
pub use node::{
    Argument, EuInformation, MethodHandler, Node, NodeClass, Range, Reference, ReferenceTypeId,
};
pub use registry::{AddressSpaceError, NodeRegistry};
