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

//! Background driver that toggles a boolean variable at a fixed period, for
//! exercising the address space without a live data source.

use crate::address_space::node::Node;
use crate::observability::events;
use crate::types::value::Variant;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const COMPONENT: &str = "value_flip_simulator";

/// Flips the value of one boolean variable node on a fixed period until
/// stopped. Dropping the simulator also stops the task: the loop exits when
/// the shutdown sender goes away.
pub struct ValueFlipSimulator {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl ValueFlipSimulator {
    pub fn spawn(node: Arc<Node>, period: Duration) -> Self {
        let (shutdown, mut rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick fires immediately; skip it so the node keeps its
            // initial value for a full period.
            interval.tick().await;
            let mut state = false;
            loop {
                tokio::select! {
                    changed = rx.changed() => {
                        if changed.is_err() || *rx.borrow() {
                            break;
                        }
                    }
                    _ = interval.tick() => {
                        state = !state;
                        match node.set_value(Variant::Boolean(state)) {
                            Ok(()) => {
                                debug!(
                                    event = events::SIM_FLIP,
                                    component = COMPONENT,
                                    node_id = %node.node_id(),
                                    value = state,
                                    "flipped value"
                                );
                            }
                            Err(status) => {
                                warn!(
                                    event = events::SIM_FLIP_FAILED,
                                    component = COMPONENT,
                                    node_id = %node.node_id(),
                                    status = %status,
                                    "flip rejected"
                                );
                            }
                        }
                    }
                }
            }
            info!(
                event = events::SIM_STOPPED,
                component = COMPONENT,
                node_id = %node.node_id(),
                "simulation stopped"
            );
        });
        Self { shutdown, handle }
    }

    /// Signals the task to stop and waits for it to finish.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
    }
}
