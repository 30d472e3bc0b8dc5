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

use async_trait::async_trait;
use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex, Once};
use ua_namespace::{
    AccessRight, Asset, DataItem, MeasurementPoint, MonitoredItem, Node, PlayerBackend,
    PlayerNamespace, StatusCode, SubscriptionModel, UnitOfMeasure,
};

static INIT_LOGGING: Once = Once::new();

pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Backend over a fixed asset list that records every command and the nodes
/// bound to it.
pub struct TestBackend {
    assets: Vec<Arc<Asset>>,
    pub commands: Mutex<Vec<i32>>,
    pub run_state_node: Mutex<Option<Arc<Node>>>,
}

impl TestBackend {
    pub fn new(assets: Vec<Arc<Asset>>) -> Self {
        Self {
            assets,
            commands: Mutex::new(Vec::new()),
            run_state_node: Mutex::new(None),
        }
    }

    /// One pump asset with a read-only two-state point (id 10) and a
    /// read-write temperature point (id 11).
    pub fn pump_scenario() -> Self {
        Self::new(vec![Arc::new(Asset::new(
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
        ))])
    }
}

#[async_trait]
impl PlayerBackend for TestBackend {
    fn assets(&self) -> Vec<Arc<Asset>> {
        self.assets.clone()
    }

    async fn execute_command(&self, command: i32) -> Result<(), StatusCode> {
        self.commands
            .lock()
            .expect("lock poisoned")
            .push(command);
        Ok(())
    }

    fn bind_run_state_node(&self, node: Arc<Node>) {
        *self.run_state_node.lock().expect("lock poisoned") = Some(node);
    }
}

#[derive(Default)]
pub struct RecordingSubscriptionModel {
    pub created: AtomicUsize,
    pub modified: AtomicUsize,
    pub deleted: AtomicUsize,
    pub mode_changed: AtomicUsize,
}

#[async_trait]
impl SubscriptionModel for RecordingSubscriptionModel {
    async fn on_data_items_created(&self, items: &[DataItem]) {
        self.created
            .fetch_add(items.len(), std::sync::atomic::Ordering::Relaxed);
    }

    async fn on_data_items_modified(&self, items: &[DataItem]) {
        self.modified
            .fetch_add(items.len(), std::sync::atomic::Ordering::Relaxed);
    }

    async fn on_data_items_deleted(&self, items: &[DataItem]) {
        self.deleted
            .fetch_add(items.len(), std::sync::atomic::Ordering::Relaxed);
    }

    async fn on_monitoring_mode_changed(&self, items: &[MonitoredItem]) {
        self.mode_changed
            .fetch_add(items.len(), std::sync::atomic::Ordering::Relaxed);
    }
}

pub fn make_pump_namespace() -> (
    PlayerNamespace,
    Arc<TestBackend>,
    Arc<RecordingSubscriptionModel>,
) {
    init_logging();
    let backend = Arc::new(TestBackend::pump_scenario());
    let subscription_model = Arc::new(RecordingSubscriptionModel::default());
    let namespace = PlayerNamespace::new(2, backend.clone(), subscription_model.clone());
    (namespace, backend, subscription_model)
}
