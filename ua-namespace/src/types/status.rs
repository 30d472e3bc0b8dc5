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

//! Status codes surfaced per request by the dispatcher and node attribute
//! logic. A bad code never aborts processing of sibling requests.

use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StatusCode {
    Good,
    /// The node id was not found in the registry.
    BadNodeIdUnknown,
    /// The requested attribute does not exist on this node class.
    BadAttributeIdInvalid,
    /// The resolved identity lacks permission for the operation.
    BadUserAccessDenied,
    /// The node's access level does not include current-read.
    BadNotReadable,
    /// The node's access level does not include current-write, or the
    /// attribute is not writable at all.
    BadNotWritable,
    /// The written value does not match the declared data type or rank.
    BadTypeMismatch,
    /// An index range was supplied for a scalar value.
    BadIndexRangeInvalid,
    /// A data encoding was requested; values here carry no alternate
    /// encodings.
    BadDataEncodingInvalid,
    /// A method invocation is missing its required input argument.
    BadArgumentsMissing,
    /// A method input argument carries the wrong type.
    BadInvalidArgument,
    /// The addressed node is not a method node.
    BadMethodInvalid,
}

impl StatusCode {
    pub fn is_good(self) -> bool {
        self == StatusCode::Good
    }

    pub fn name(self) -> &'static str {
        match self {
            StatusCode::Good => "Good",
            StatusCode::BadNodeIdUnknown => "Bad_NodeIdUnknown",
            StatusCode::BadAttributeIdInvalid => "Bad_AttributeIdInvalid",
            StatusCode::BadUserAccessDenied => "Bad_UserAccessDenied",
            StatusCode::BadNotReadable => "Bad_NotReadable",
            StatusCode::BadNotWritable => "Bad_NotWritable",
            StatusCode::BadTypeMismatch => "Bad_TypeMismatch",
            StatusCode::BadIndexRangeInvalid => "Bad_IndexRangeInvalid",
            StatusCode::BadDataEncodingInvalid => "Bad_DataEncodingInvalid",
            StatusCode::BadArgumentsMissing => "Bad_ArgumentsMissing",
            StatusCode::BadInvalidArgument => "Bad_InvalidArgument",
            StatusCode::BadMethodInvalid => "Bad_MethodInvalid",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
