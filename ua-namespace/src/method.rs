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

//! Adapter that binds the remote-control method node to the backend's
//! control entry point. It only marshals arguments; command semantics belong
//! entirely to the backend.

use crate::address_space::node::{Argument, MethodHandler};
use crate::backend::PlayerBackend;
use crate::observability::events;
use crate::types::status::StatusCode;
use crate::types::value::{DataTypeId, ValueRank, Variant};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

const COMPONENT: &str = "remote_control_method";

pub struct RemoteControlMethod {
    backend: Arc<dyn PlayerBackend>,
}

impl RemoteControlMethod {
    pub fn new(backend: Arc<dyn PlayerBackend>) -> Self {
        Self { backend }
    }

    /// One integer command code; the documented codes are pass-through.
    pub fn input_arguments() -> Vec<Argument> {
        vec![Argument {
            name: "command".to_string(),
            data_type: DataTypeId::Int32,
            value_rank: ValueRank::Scalar,
            description: "1=Play, 5=Pause, 6=Stop, 7=Loop".to_string(),
        }]
    }

    /// Nothing beyond invocation success or failure.
    pub fn output_arguments() -> Vec<Argument> {
        Vec::new()
    }
}

#[async_trait]
impl MethodHandler for RemoteControlMethod {
    async fn invoke(&self, inputs: &[Variant]) -> Result<Vec<Variant>, StatusCode> {
        let Some(first) = inputs.first() else {
            warn!(
                event = events::METHOD_INVOKE_FAILED,
                component = COMPONENT,
                status = %StatusCode::BadArgumentsMissing,
                "remote-control invocation without a command argument"
            );
            return Err(StatusCode::BadArgumentsMissing);
        };
        let Variant::Int32(command) = first else {
            warn!(
                event = events::METHOD_INVOKE_FAILED,
                component = COMPONENT,
                status = %StatusCode::BadInvalidArgument,
                "remote-control invocation with a non-integer command argument"
            );
            return Err(StatusCode::BadInvalidArgument);
        };

        debug!(
            event = events::METHOD_INVOKE_START,
            component = COMPONENT,
            command = *command,
            "delegating command to the backend"
        );
        self.backend.execute_command(*command).await?;
        debug!(
            event = events::METHOD_INVOKE_OK,
            component = COMPONENT,
            command = *command,
            "command executed"
        );
        Ok(Vec::new())
    }
}
