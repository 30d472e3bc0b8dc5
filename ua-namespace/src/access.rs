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

//! Access policy: the dynamic identity-to-permission mapping consulted on
//! every request, and the static access-right-to-level derivation applied
//! once at build time. Effective access is the intersection of both.

use crate::backend::AccessRight;
use crate::observability::events;
use crate::types::attribute::AccessLevel;
use tracing::warn;

const COMPONENT: &str = "access_policy";

/// Caller identity attached to a browse/read/write/call request.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccessContext {
    identity: Option<String>,
}

impl AccessContext {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn with_identity(identity: impl Into<String>) -> Self {
        Self {
            identity: Some(identity.into()),
        }
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }
}

/// Dynamic, identity-derived capability resolved per request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Permission {
    ReadWrite,
    ReadOnly,
    None,
}

impl Permission {
    pub fn allows_read(self) -> bool {
        !matches!(self, Permission::None)
    }

    pub fn allows_write(self) -> bool {
        matches!(self, Permission::ReadWrite)
    }
}

/// Maps a caller identity to a permission level.
///
/// Exact string match on the recognized identities; everything else,
/// including anonymous and empty identities, is denied.
pub fn role_to_permission(identity: Option<&str>) -> Permission {
    match identity {
        Some("admin") => Permission::ReadWrite,
        Some("user") => Permission::ReadOnly,
        _ => Permission::None,
    }
}

/// Derives a node's static access level from a measurement point's declared
/// access right.
///
/// An unspecified right is a data-quality problem in the source definitions:
/// it resolves to the empty set and is logged, never escalated.
pub fn access_right_to_level(access_right: AccessRight) -> AccessLevel {
    match access_right {
        AccessRight::Read => AccessLevel::CURRENT_READ,
        AccessRight::Write => AccessLevel::CURRENT_WRITE,
        AccessRight::Both => AccessLevel::READ_WRITE,
        AccessRight::Unspecified => {
            warn!(
                event = events::ACCESS_RIGHT_UNRECOGNIZED,
                component = COMPONENT,
                "no valid access right declared, granting no access"
            );
            AccessLevel::NONE
        }
    }
}
