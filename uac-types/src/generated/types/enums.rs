// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Simple enumerated DataTypes used by the service and attribute model.

#[allow(unused)]
mod opcua {
    pub use crate as types;
}

/// Direction of a `Browse` traversal relative to a node (Part 4, 7.3).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum BrowseDirection {
    /// Follow forward references.
    #[default]
    Forward = 0,
    /// Follow inverse references.
    Inverse = 1,
    /// Follow both forward and inverse references.
    Both = 2,
}

/// Classification of a node in the address space (Part 3, 5.2.2).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum NodeClass {
    /// No classification.
    #[default]
    Unspecified = 0,
    /// Object node.
    Object = 1,
    /// Variable node.
    Variable = 2,
    /// Method node.
    Method = 4,
    /// Object type node.
    ObjectType = 8,
    /// Variable type node.
    VariableType = 16,
    /// Reference type node.
    ReferenceType = 32,
    /// Data type node.
    DataType = 64,
    /// View node.
    View = 128,
}

/// The security mode applied to messages on a secure channel (Part 4, 7.15).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum MessageSecurityMode {
    /// Invalid / not yet negotiated.
    #[default]
    Invalid = 0,
    /// No security is applied.
    None = 1,
    /// Messages are signed but not encrypted.
    Sign = 2,
    /// Messages are signed and encrypted.
    SignAndEncrypt = 3,
}

/// The kind of identity token a session is activated with (Part 4, 7.41).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum UserTokenType {
    /// No identity token is required.
    #[default]
    Anonymous = 0,
    /// A username / password token.
    UserName = 1,
    /// An X.509 certificate token.
    Certificate = 2,
    /// A WS-Security issued token.
    IssuedToken = 3,
}

/// Whether a monitored item reports, samples but doesn't report, or is disabled (Part 4, 7.20).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum MonitoringMode {
    /// Values are not sampled.
    #[default]
    Disabled = 0,
    /// Values are sampled but not reported.
    Sampling = 1,
    /// Values are sampled and reported.
    Reporting = 2,
}

/// Which timestamps a read or monitored item should return (Part 4, 7.38).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum TimestampsToReturn {
    /// Only the source timestamp.
    #[default]
    Source = 0,
    /// Only the server timestamp.
    Server = 1,
    /// Both timestamps.
    Both = 2,
    /// Neither timestamp.
    Neither = 3,
    /// Invalid value, used to reject malformed requests.
    Invalid = 4,
}

/// The kind of update performed by a `HistoryUpdate` call (Part 11, 6.8.3).
///
/// `Default` is implemented in `impls.rs`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum HistoryUpdateType {
    /// Invalid / not specified.
    Invalid = 0,
    /// Insert values that do not already exist.
    Insert = 1,
    /// Replace existing values.
    Replace = 2,
    /// Update by inserting or replacing.
    Update = 3,
    /// Remove existing values.
    Delete = 4,
}

/// Criteria for matching identities in a role permission (Part 3, 4.8.2).
///
/// `Default` is implemented in `impls.rs`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum IdentityCriteriaType {
    /// No criteria.
    UserName = 0,
    /// Thumbprint of an X.509 certificate.
    Thumbprint = 1,
    /// Role.
    Role = 2,
    /// Group id.
    GroupId = 3,
    /// Anonymous.
    Anonymous = 4,
    /// Authenticated user.
    AuthenticatedUser = 5,
}

/// Whether an application is a client, server, or both (Part 4, 7.1).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum ApplicationType {
    /// A server application.
    #[default]
    Server = 0,
    /// A client application.
    Client = 1,
    /// Both client and server.
    ClientAndServer = 2,
    /// A discovery server.
    DiscoveryServer = 3,
}

/// Whether an `OpenSecureChannel` call issues a new channel or renews one (Part 4, 5.5.2).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum SecurityTokenRequestType {
    /// Issue a brand new secure channel.
    #[default]
    Issue = 0,
    /// Renew the token of an existing secure channel.
    Renew = 1,
}

/// Whether a history update replaces data before, after, or around a bound (Part 11, 6.8.3).
///
/// `Default` is implemented in `impls.rs`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum PerformUpdateType {
    /// Insert values that do not already exist.
    Insert = 1,
    /// Replace existing values.
    Replace = 2,
    /// Update by inserting or replacing.
    Update = 3,
    /// Remove existing values.
    Remove = 4,
}

/// The deadband calculation used by a data change filter (Part 8, 6.2).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum DeadbandType {
    /// No deadband is applied.
    #[default]
    None = 0,
    /// An absolute deadband.
    Absolute = 1,
    /// A percentage-of-range deadband.
    Percent = 2,
}

/// What must change for a data change notification to fire (Part 4, 7.17.2).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum DataChangeTrigger {
    /// Only the status changing triggers a notification.
    Status = 0,
    /// The status or value changing triggers a notification.
    #[default]
    StatusValue = 1,
    /// The status, value, or timestamp changing triggers a notification.
    StatusValueTimestamp = 2,
}

/// Operators usable inside a `ContentFilterElement` (Part 4, 7.4.4).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum FilterOperator {
    /// Logical equality.
    #[default]
    Equals = 0,
    /// `IsNull` test.
    IsNull = 1,
    /// Greater-than comparison.
    GreaterThan = 2,
    /// Less-than comparison.
    LessThan = 3,
    /// Greater-than-or-equal comparison.
    GreaterThanOrEqual = 4,
    /// Less-than-or-equal comparison.
    LessThanOrEqual = 5,
    /// Substring pattern match.
    Like = 6,
    /// Logical negation.
    Not = 7,
    /// Inclusive range test.
    Between = 8,
    /// Membership test against a list of operands.
    InList = 9,
    /// Logical conjunction.
    And = 10,
    /// Logical disjunction.
    Or = 11,
    /// Cast to another data type.
    Cast = 12,
    /// Subtype-of test.
    InView = 13,
    /// Bitwise and.
    BitwiseAnd = 16,
    /// Bitwise or.
    BitwiseOr = 17,
}

/// Shape of a structured data type's encoding (Part 3, 8.52).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[derive(uac_macros::BinaryEncodable, uac_macros::BinaryDecodable, uac_macros::UaEnum)]
#[repr(i32)]
pub enum StructureType {
    /// A structure with no optional or subtyped fields.
    #[default]
    Structure = 0,
    /// A structure with optional fields.
    StructureWithOptionalFields = 1,
    /// A union, where only one field is present at a time.
    Union = 2,
    /// A structure that may carry subtyped field values.
    StructureWithSubtypedValues = 3,
    /// A union that may carry subtyped field values.
    UnionWithSubtypedValues = 4,
}
