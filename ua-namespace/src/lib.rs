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

//! # ua-namespace
//!
//! `ua-namespace` builds an OPC UA-style address space from a measurement
//! backend's asset definitions and serves browse/read/write/call requests
//! against it, with role-based access control and pass-through subscription
//! lifecycle forwarding.
//!
//! Typical usage is API-first and remains centered on [`PlayerNamespace`]:
//! implement [`PlayerBackend`] and [`SubscriptionModel`], construct the
//! namespace once, and dispatch requests against it.
//!
//! ```
//! use std::sync::Arc;
//! use ua_namespace::{
//!     AccessContext, NodeId, PlayerNamespace, ReadValueId, TimestampsToReturn, Variant,
//!     WriteValue,
//! };
//!
//! # pub mod mock_backend {
//! #     use std::sync::Arc;
//! #     use async_trait::async_trait;
//! #     use ua_namespace::address_space::Node;
//! #     use ua_namespace::{
//! #         AccessRight, Asset, DataItem, MeasurementPoint, MonitoredItem, PlayerBackend,
//! #         StatusCode, SubscriptionModel, UnitOfMeasure,
//! #     };
//! #
//! #     pub struct MockBackend;
//! #
//! #     #[async_trait]
//! #     impl PlayerBackend for MockBackend {
//! #         fn assets(&self) -> Vec<Arc<Asset>> {
//! #             vec![Arc::new(Asset::new(
//! #                 "Pump1",
//! #                 vec![Arc::new(MeasurementPoint::new(
//! #                     11,
//! #                     "Temp",
//! #                     UnitOfMeasure::Celsius,
//! #                     AccessRight::Both,
//! #                 ))],
//! #             ))]
//! #         }
//! #         async fn execute_command(&self, _command: i32) -> Result<(), StatusCode> {
//! #             Ok(())
//! #         }
//! #         fn bind_run_state_node(&self, _node: Arc<Node>) {}
//! #     }
//! #
//! #     pub struct MockSubscriptionModel;
//! #
//! #     #[async_trait]
//! #     impl SubscriptionModel for MockSubscriptionModel {
//! #         async fn on_data_items_created(&self, _items: &[DataItem]) {}
//! #         async fn on_data_items_modified(&self, _items: &[DataItem]) {}
//! #         async fn on_data_items_deleted(&self, _items: &[DataItem]) {}
//! #         async fn on_monitoring_mode_changed(&self, _items: &[MonitoredItem]) {}
//! #     }
//! # }
//!
//! let namespace = PlayerNamespace::new(
//!     2,
//!     Arc::new(mock_backend::MockBackend),
//!     Arc::new(mock_backend::MockSubscriptionModel),
//! );
//!
//! let admin = AccessContext::with_identity("admin");
//!
//! let references = namespace.browse(&NodeId::string(2, "Assets")).unwrap();
//! assert_eq!(references.len(), 1);
//!
//! let statuses = namespace.write(
//!     &admin,
//!     &[WriteValue::value(NodeId::string(2, "11"), Variant::Double(4.5))],
//! );
//! assert!(statuses[0].is_good());
//!
//! let results = namespace.read(
//!     &admin,
//!     TimestampsToReturn::Both,
//!     &[ReadValueId::value_of(NodeId::string(2, "11"))],
//! );
//! assert_eq!(results[0].value, Some(Variant::Double(4.5)));
//! ```
//!
//! ## Internal architecture map
//!
//! - Value model: node identity, variants, status codes and request shapes
//! - Address space: node sum type, id-keyed registry and one-shot builder
//! - Access policy: identity-to-permission mapping and access-level derivation
//! - Facade: batch dispatch, method invocation and subscription forwarding
//! - Simulation: background value-flip driver for boolean variables
//!
//! ## Observability model
//!
//! The crate uses `tracing` for logs/events.
//! Library code emits events/spans and does not unconditionally initialize a
//! global subscriber. Binaries and tests are responsible for one-time
//! `tracing_subscriber` initialization at process boundaries.

mod access;
pub use access::{access_right_to_level, role_to_permission, AccessContext, Permission};

mod backend;
pub use backend::{AccessRight, Asset, MeasurementPoint, PlayerBackend, UnitOfMeasure};

pub mod address_space;
pub use address_space::{MethodHandler, Node};

mod method;
pub use method::RemoteControlMethod;

mod namespace;
pub use namespace::{PlayerNamespace, NAMESPACE_URI};

#[doc(hidden)]
pub mod observability;

mod simulation;
pub use simulation::ValueFlipSimulator;

mod subscription;
pub use subscription::{DataItem, MonitoredItem, MonitoringMode, SubscriptionModel};

pub mod types;
pub use types::{
    AccessLevel, AttributeId, CallRequest, DataTypeId, DataValue, NodeId, ReadValueId, StatusCode,
    TimestampsToReturn, ValueRank, Variant, WriteValue,
};
