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

//! Seam to the external subscription engine. The namespace forwards item
//! lifecycle notifications unchanged and holds no subscription state itself.

use crate::types::node_id::NodeId;
use async_trait::async_trait;

/// Monitoring mode of a monitored item.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MonitoringMode {
    Disabled,
    Sampling,
    Reporting,
}

/// A sampled item created against a variable node.
#[derive(Clone, Debug)]
pub struct DataItem {
    pub id: u32,
    pub node_id: NodeId,
    pub sampling_interval: f64,
}

/// A monitored item whose monitoring mode changed.
#[derive(Clone, Debug)]
pub struct MonitoredItem {
    pub id: u32,
    pub node_id: NodeId,
    pub monitoring_mode: MonitoringMode,
}

/// The external engine that samples node values and emits notifications.
#[async_trait]
pub trait SubscriptionModel: Send + Sync {
    async fn on_data_items_created(&self, items: &[DataItem]);

    async fn on_data_items_modified(&self, items: &[DataItem]);

    async fn on_data_items_deleted(&self, items: &[DataItem]);

    async fn on_monitoring_mode_changed(&self, items: &[MonitoredItem]);
}
