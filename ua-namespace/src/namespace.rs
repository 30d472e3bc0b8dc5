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

//! The namespace facade: owns the registry, builds the address space once at
//! construction and serves browse/read/write/call requests against it for
//! the server's lifetime. Subscription lifecycle notifications pass through
//! to the external engine unchanged.

use crate::access::{role_to_permission, AccessContext};
use crate::address_space::builder::AddressSpaceBuilder;
use crate::address_space::node::{MethodHandler, Node, Reference};
use crate::address_space::registry::NodeRegistry;
use crate::backend::PlayerBackend;
use crate::observability::events;
use crate::subscription::{DataItem, MonitoredItem, SubscriptionModel};
use crate::types::node_id::{self, NodeId, NodeIdScheme};
use crate::types::request::{CallRequest, ReadValueId, TimestampsToReturn, WriteValue};
use crate::types::status::StatusCode;
use crate::types::value::{DataValue, Variant};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const COMPONENT: &str = "player_namespace";

/// URI governing this namespace.
pub const NAMESPACE_URI: &str = "urn:measurement-player:address-space";

/// The address-space namespace of the measurement player.
///
/// Construction runs the builder to completion before the instance is
/// handed out, so every request sees the fully built tree. Requests may
/// then execute concurrently from independent caller tasks; values are
/// guarded per node.
pub struct PlayerNamespace {
    namespace_index: u16,
    registry: Arc<NodeRegistry>,
    subscription_model: Arc<dyn SubscriptionModel>,
    variable_nodes: Vec<Arc<Node>>,
}

impl PlayerNamespace {
    /// Builds the full address space from the backend's assets.
    pub fn new(
        namespace_index: u16,
        backend: Arc<dyn PlayerBackend>,
        subscription_model: Arc<dyn SubscriptionModel>,
    ) -> Self {
        let registry = Arc::new(NodeRegistry::new());
        // Seed the server-wide Objects container so top-level folders have
        // something to hang under.
        if let Err(err) = registry.insert(Node::folder(node_id::objects_folder(), "Objects")) {
            error!(
                event = events::NODE_REGISTER_FAILED,
                component = COMPONENT,
                err = %err,
                "seeding the objects container failed"
            );
        }

        let scheme = NodeIdScheme::new(namespace_index);
        let builder = AddressSpaceBuilder::new(registry.clone(), scheme);
        let variable_nodes = builder.build(&backend);

        Self {
            namespace_index,
            registry,
            subscription_model,
            variable_nodes,
        }
    }

    pub fn namespace_index(&self) -> u16 {
        self.namespace_index
    }

    pub fn namespace_uri(&self) -> &'static str {
        NAMESPACE_URI
    }

    pub fn registry(&self) -> &Arc<NodeRegistry> {
        &self.registry
    }

    /// All variable nodes created by the builder, in creation order, for
    /// external iteration by a value-update driver.
    pub fn variable_nodes(&self) -> &[Arc<Node>] {
        &self.variable_nodes
    }

    /// Returns the full outgoing reference set of a node.
    pub fn browse(&self, node_id: &NodeId) -> Result<Vec<Reference>, StatusCode> {
        match self.registry.get(node_id) {
            Some(node) => Ok(node.references()),
            None => {
                debug!(
                    event = events::BROWSE_UNKNOWN_NODE,
                    component = COMPONENT,
                    node_id = %node_id,
                    "browse of an unknown node"
                );
                Err(StatusCode::BadNodeIdUnknown)
            }
        }
    }

    /// Serves a batch read. Results preserve request order 1:1; an unknown
    /// node id yields a value slot carrying `Bad_NodeIdUnknown` and never
    /// aborts sibling requests.
    pub fn read(
        &self,
        context: &AccessContext,
        timestamps: TimestampsToReturn,
        read_value_ids: &[ReadValueId],
    ) -> Vec<DataValue> {
        let permission = role_to_permission(context.identity());
        let mut results = Vec::with_capacity(read_value_ids.len());

        for read_value_id in read_value_ids {
            match self.registry.get(&read_value_id.node_id) {
                Some(node) => {
                    if read_value_id.data_encoding.is_some() {
                        results.push(DataValue::from_status(StatusCode::BadDataEncodingInvalid));
                        continue;
                    }
                    results.push(node.read_attribute(
                        permission,
                        read_value_id.attribute_id,
                        timestamps,
                        read_value_id.index_range.as_deref(),
                    ));
                }
                None => {
                    debug!(
                        event = events::READ_UNKNOWN_NODE,
                        component = COMPONENT,
                        node_id = %read_value_id.node_id,
                        "read of an unknown node"
                    );
                    results.push(DataValue::from_status(StatusCode::BadNodeIdUnknown));
                }
            }
        }
        results
    }

    /// Serves a batch write. Results preserve request order 1:1; node-level
    /// failures are propagated verbatim as status codes.
    pub fn write(&self, context: &AccessContext, write_values: &[WriteValue]) -> Vec<StatusCode> {
        let permission = role_to_permission(context.identity());
        let mut results = Vec::with_capacity(write_values.len());

        for write_value in write_values {
            let status = match self.registry.get(&write_value.node_id) {
                Some(node) => {
                    match node.write_attribute(
                        permission,
                        write_value.attribute_id,
                        &write_value.value,
                        write_value.index_range.as_deref(),
                    ) {
                        Ok(()) => {
                            info!(
                                event = events::WRITE_OK,
                                component = COMPONENT,
                                node_id = %write_value.node_id,
                                attribute = %write_value.attribute_id,
                                value = %format_value(&write_value.value),
                                "wrote value"
                            );
                            StatusCode::Good
                        }
                        Err(status) => {
                            warn!(
                                event = events::WRITE_FAILED,
                                component = COMPONENT,
                                node_id = %write_value.node_id,
                                attribute = %write_value.attribute_id,
                                status = %status,
                                "write rejected"
                            );
                            status
                        }
                    }
                }
                None => {
                    debug!(
                        event = events::WRITE_UNKNOWN_NODE,
                        component = COMPONENT,
                        node_id = %write_value.node_id,
                        "write to an unknown node"
                    );
                    StatusCode::BadNodeIdUnknown
                }
            };
            results.push(status);
        }
        results
    }

    /// The invocation handler bound to a method node, if the id addresses
    /// one.
    pub fn method_handler(&self, method_id: &NodeId) -> Option<Arc<dyn MethodHandler>> {
        self.registry
            .get(method_id)
            .and_then(|node| node.as_method().map(|method| method.handler()))
    }

    /// Invokes a method node. Invocation mutates backend state, so it
    /// requires write permission.
    pub async fn call(
        &self,
        context: &AccessContext,
        request: &CallRequest,
    ) -> Result<Vec<Variant>, StatusCode> {
        let node = self
            .registry
            .get(&request.method_id)
            .ok_or(StatusCode::BadNodeIdUnknown)?;
        let method = node.as_method().ok_or(StatusCode::BadMethodInvalid)?;
        if !role_to_permission(context.identity()).allows_write() {
            return Err(StatusCode::BadUserAccessDenied);
        }
        method.handler().invoke(&request.arguments).await
    }

    pub async fn on_data_items_created(&self, items: &[DataItem]) {
        debug!(
            event = events::SUBSCRIPTION_ITEMS_CREATED,
            component = COMPONENT,
            item_count = items.len(),
            "forwarding created items"
        );
        self.subscription_model.on_data_items_created(items).await;
    }

    pub async fn on_data_items_modified(&self, items: &[DataItem]) {
        debug!(
            event = events::SUBSCRIPTION_ITEMS_MODIFIED,
            component = COMPONENT,
            item_count = items.len(),
            "forwarding modified items"
        );
        self.subscription_model.on_data_items_modified(items).await;
    }

    pub async fn on_data_items_deleted(&self, items: &[DataItem]) {
        debug!(
            event = events::SUBSCRIPTION_ITEMS_DELETED,
            component = COMPONENT,
            item_count = items.len(),
            "forwarding deleted items"
        );
        self.subscription_model.on_data_items_deleted(items).await;
    }

    pub async fn on_monitoring_mode_changed(&self, items: &[MonitoredItem]) {
        debug!(
            event = events::SUBSCRIPTION_MODE_CHANGED,
            component = COMPONENT,
            item_count = items.len(),
            "forwarding monitoring-mode changes"
        );
        self.subscription_model
            .on_monitoring_mode_changed(items)
            .await;
    }
}

fn format_value(data_value: &DataValue) -> String {
    data_value
        .value
        .as_ref()
        .map(Variant::to_string)
        .unwrap_or_else(|| "none".to_string())
}

#[cfg(test)]
mod tests {
    use super::PlayerNamespace;
    use crate::access::AccessContext;
    use crate::address_space::node::Node;
    use crate::backend::{AccessRight, Asset, MeasurementPoint, PlayerBackend, UnitOfMeasure};
    use crate::subscription::{DataItem, MonitoredItem, SubscriptionModel};
    use crate::types::node_id::{well_known, NodeId};
    use crate::types::request::{CallRequest, ReadValueId, TimestampsToReturn, WriteValue};
    use crate::types::status::StatusCode;
    use crate::types::value::Variant;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct StubBackend {
        commands: Mutex<Vec<i32>>,
    }

    #[async_trait]
    impl PlayerBackend for StubBackend {
        fn assets(&self) -> Vec<Arc<Asset>> {
            vec![Arc::new(Asset::new(
                "Pump1",
                vec![
                    Arc::new(MeasurementPoint::new(
                        10,
                        "Running",
                        UnitOfMeasure::NoUoM,
                        AccessRight::Read,
                    )),
                    Arc::new(MeasurementPoint::new(
                        11,
                        "Temp",
                        UnitOfMeasure::Celsius,
                        AccessRight::Both,
                    )),
                ],
            ))]
        }

        async fn execute_command(&self, command: i32) -> Result<(), StatusCode> {
            self.commands.lock().expect("lock poisoned").push(command);
            Ok(())
        }

        fn bind_run_state_node(&self, _node: Arc<Node>) {}
    }

    #[derive(Default)]
    struct CountingSubscriptionModel {
        created: AtomicUsize,
        modified: AtomicUsize,
        deleted: AtomicUsize,
        mode_changed: AtomicUsize,
    }

    #[async_trait]
    impl SubscriptionModel for CountingSubscriptionModel {
        async fn on_data_items_created(&self, items: &[DataItem]) {
            self.created.fetch_add(items.len(), Ordering::Relaxed);
        }

        async fn on_data_items_modified(&self, items: &[DataItem]) {
            self.modified.fetch_add(items.len(), Ordering::Relaxed);
        }

        async fn on_data_items_deleted(&self, items: &[DataItem]) {
            self.deleted.fetch_add(items.len(), Ordering::Relaxed);
        }

        async fn on_monitoring_mode_changed(&self, items: &[MonitoredItem]) {
            self.mode_changed.fetch_add(items.len(), Ordering::Relaxed);
        }
    }

    fn build_namespace() -> (PlayerNamespace, Arc<StubBackend>, Arc<CountingSubscriptionModel>) {
        let backend = Arc::new(StubBackend::default());
        let subscription_model = Arc::new(CountingSubscriptionModel::default());
        let namespace =
            PlayerNamespace::new(2, backend.clone(), subscription_model.clone());
        (namespace, backend, subscription_model)
    }

    #[test]
    fn browse_of_unknown_node_fails_with_node_id_unknown() {
        let (namespace, _, _) = build_namespace();

        let result = namespace.browse(&NodeId::string(2, "999"));

        assert_eq!(result.err(), Some(StatusCode::BadNodeIdUnknown));
    }

    #[test]
    fn batch_read_preserves_order_with_unknown_ids_interleaved() {
        let (namespace, _, _) = build_namespace();
        let context = AccessContext::with_identity("user");

        let results = namespace.read(
            &context,
            TimestampsToReturn::Both,
            &[
                ReadValueId::value_of(NodeId::string(2, "10")),
                ReadValueId::value_of(NodeId::string(2, "999")),
                ReadValueId::value_of(NodeId::string(2, "11")),
            ],
        );

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].value, Some(Variant::Boolean(false)));
        assert_eq!(results[1].status, StatusCode::BadNodeIdUnknown);
        assert_eq!(results[2].value, Some(Variant::Double(0.0)));
    }

    #[test]
    fn requested_data_encoding_is_rejected_per_entry() {
        let (namespace, _, _) = build_namespace();
        let user = AccessContext::with_identity("user");

        let mut encoded = ReadValueId::value_of(NodeId::string(2, "11"));
        encoded.data_encoding = Some("Default XML".to_string());
        let results = namespace.read(
            &user,
            TimestampsToReturn::Both,
            &[encoded, ReadValueId::value_of(NodeId::string(2, "11"))],
        );

        assert_eq!(results[0].status, StatusCode::BadDataEncodingInvalid);
        assert_eq!(results[1].value, Some(Variant::Double(0.0)));
    }

    #[test]
    fn authorized_write_is_good_and_visible_to_the_next_read() {
        let (namespace, _, _) = build_namespace();
        let admin = AccessContext::with_identity("admin");

        let statuses = namespace.write(
            &admin,
            &[WriteValue::value(
                NodeId::string(2, "11"),
                Variant::Double(18.25),
            )],
        );
        assert_eq!(statuses, vec![StatusCode::Good]);

        let results = namespace.read(
            &admin,
            TimestampsToReturn::Both,
            &[ReadValueId::value_of(NodeId::string(2, "11"))],
        );
        assert_eq!(results[0].value, Some(Variant::Double(18.25)));
    }

    #[test]
    fn write_statuses_preserve_order_and_propagate_node_errors() {
        let (namespace, _, _) = build_namespace();
        let admin = AccessContext::with_identity("admin");

        let statuses = namespace.write(
            &admin,
            &[
                WriteValue::value(NodeId::string(2, "10"), Variant::Boolean(true)),
                WriteValue::value(NodeId::string(2, "999"), Variant::Double(1.0)),
                WriteValue::value(NodeId::string(2, "11"), Variant::Boolean(true)),
                WriteValue::value(NodeId::string(2, "11"), Variant::Double(2.0)),
            ],
        );

        assert_eq!(
            statuses,
            vec![
                StatusCode::BadNotWritable,
                StatusCode::BadNodeIdUnknown,
                StatusCode::BadTypeMismatch,
                StatusCode::Good,
            ]
        );
    }

    #[test]
    fn method_handler_is_exposed_only_for_method_nodes() {
        let (namespace, _, _) = build_namespace();

        assert!(namespace
            .method_handler(&NodeId::string(2, well_known::REMOTE_CONTROL_METHOD))
            .is_some());
        assert!(namespace
            .method_handler(&NodeId::string(2, "10"))
            .is_none());
        assert!(namespace
            .method_handler(&NodeId::string(2, "999"))
            .is_none());
    }

    #[tokio::test]
    async fn call_requires_write_permission() {
        let (namespace, backend, _) = build_namespace();
        let request = CallRequest {
            method_id: NodeId::string(2, well_known::REMOTE_CONTROL_METHOD),
            arguments: vec![Variant::Int32(1)],
        };

        let denied = namespace
            .call(&AccessContext::with_identity("user"), &request)
            .await;
        assert_eq!(denied, Err(StatusCode::BadUserAccessDenied));

        let allowed = namespace
            .call(&AccessContext::with_identity("admin"), &request)
            .await;
        assert_eq!(allowed, Ok(Vec::new()));
        assert_eq!(*backend.commands.lock().expect("lock poisoned"), vec![1]);
    }

    #[tokio::test]
    async fn call_on_a_variable_node_is_invalid() {
        let (namespace, _, _) = build_namespace();

        let result = namespace
            .call(
                &AccessContext::with_identity("admin"),
                &CallRequest {
                    method_id: NodeId::string(2, "10"),
                    arguments: vec![Variant::Int32(1)],
                },
            )
            .await;

        assert_eq!(result, Err(StatusCode::BadMethodInvalid));
    }

    #[tokio::test]
    async fn lifecycle_notifications_pass_through_unchanged() {
        let (namespace, _, subscription_model) = build_namespace();
        let items = vec![
            DataItem {
                id: 1,
                node_id: NodeId::string(2, "10"),
                sampling_interval: 250.0,
            },
            DataItem {
                id: 2,
                node_id: NodeId::string(2, "11"),
                sampling_interval: 500.0,
            },
        ];

        namespace.on_data_items_created(&items).await;
        namespace.on_data_items_modified(&items[..1]).await;
        namespace.on_data_items_deleted(&items).await;
        namespace
            .on_monitoring_mode_changed(&[MonitoredItem {
                id: 1,
                node_id: NodeId::string(2, "10"),
                monitoring_mode: crate::subscription::MonitoringMode::Reporting,
            }])
            .await;

        assert_eq!(subscription_model.created.load(Ordering::Relaxed), 2);
        assert_eq!(subscription_model.modified.load(Ordering::Relaxed), 1);
        assert_eq!(subscription_model.deleted.load(Ordering::Relaxed), 2);
        assert_eq!(subscription_model.mode_changed.load(Ordering::Relaxed), 1);
    }
}
