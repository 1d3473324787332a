// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The [`StatusCode`] type, a 32-bit result code returned from every service call
//! and carried inline in headers, diagnostics and data values.
//!
//! Part 4, 7.34 describes the bit layout: the top two bits give the severity
//! (`00` Good, `01` Uncertain, `10`/`11` Bad), the next 14 bits are a sub-code
//! and the low 16 bits are reserved for flags that only matter for data value
//! quality, not for service results.

use std::{
    fmt,
    io::{Read, Write},
};

use crate::{
    encoding::{BinaryDecodable, BinaryEncodable, EncodingResult},
    read_u32, write_u32, Context,
};

const SEVERITY_MASK: u32 = 0xC000_0000;
const SEVERITY_UNCERTAIN: u32 = 0x4000_0000;
const SEVERITY_BAD: u32 = 0x8000_0000;

/// A 32-bit OPC UA result code.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, crate::UaNullable)]
pub struct StatusCode(pub u32);

macro_rules! status_codes {
    ($($name:ident = $value:expr),* $(,)?) => {
        impl StatusCode {
            $(
                #[allow(missing_docs)]
                pub const $name: StatusCode = StatusCode($value);
            )*

            /// Human readable name for well-known codes, falling back to the raw value.
            pub fn name(&self) -> std::borrow::Cow<'static, str> {
                match self.0 {
                    $($value => std::borrow::Cow::Borrowed(stringify!($name)),)*
                    other => std::borrow::Cow::Owned(format!("0x{other:08X}")),
                }
            }
        }
    };
}

status_codes! {
    Good = 0x0000_0000,
    GoodCallAgain = 0x0090_0000,
    GoodNoData = 0x00A5_0000,
    GoodMoreData = 0x00A6_0000,
    Uncertain = 0x4000_0000,
    UncertainNoCommunicationLastUsableValue = 0x4080_0000,
    UncertainInitialValue = 0x40920000,
    Bad = 0x8000_0000,
    BadUnexpectedError = 0x8001_0000,
    BadInternalError = 0x8002_0000,
    BadOutOfMemory = 0x8003_0000,
    BadNotImplemented = 0x8004_0000,
    BadCommunicationError = 0x8005_0000,
    BadTimeout = 0x800A_0000,
    BadServerHalted = 0x800E_0000,
    BadTcpInternalError = 0x800D_0000,
    BadTcpEndpointUrlInvalid = 0x8089_0000,
    BadTcpMessageTooLarge = 0x8012_0000,
    BadNoValue = 0x8010_0000,
    BadInvalidArgument = 0x8013_0000,
    BadConnectionRejected = 0x8014_0000,
    BadDisconnect = 0x8015_0000,
    BadConnectionClosed = 0x8016_0000,
    BadNothingToDo = 0x8018_0000,
    BadTooManyOperations = 0x8019_0000,
    BadRequestTooLarge = 0x80B8_0000,
    BadResponseTooLarge = 0x80B9_0000,
    BadDataEncodingInvalid = 0x8038_0000,
    BadDecodingError = 0x8007_0000,
    BadEncodingError = 0x8008_0000,
    BadEncodingLimitsExceeded = 0x8009_0000,
    BadRequestHeaderInvalid = 0x802A_0000,
    BadRequestInterrupted = 0x8029_0000,
    BadRequestCancelledByClient = 0x804D_0000,
    BadSecureChannelClosed = 0x8037_0000,
    BadSecureChannelIdInvalid = 0x8026_0000,
    BadSecureChannelTokenUnknown = 0x8035_0000,
    BadSecurityChecksFailed = 0x8130_0000,
    BadSecurityPolicyRejected = 0x8100_0000,
    BadSequenceNumberInvalid = 0x802C_0000,
    BadSequenceNumberUnknown = 0x8047_0000,
    BadCertificateInvalid = 0x8024_0000,
    BadCertificateHostNameInvalid = 0x8154_0000,
    BadCertificateUriInvalid = 0x8155_0000,
    BadCertificateTimeInvalid = 0x8152_0000,
    BadCertificateUntrusted = 0x8158_0000,
    BadCertificateRevoked = 0x815A_0000,
    BadNoValidCertificates = 0x80E1_0000,
    BadNonceInvalid = 0x8032_0000,
    BadIdentityTokenInvalid = 0x8034_0000,
    BadIdentityTokenRejected = 0x8042_0000,
    BadUserAccessDenied = 0x801F_0000,
    BadSessionIdInvalid = 0x8027_0000,
    BadSessionClosed = 0x8028_0000,
    BadSessionNotActivated = 0x802B_0000,
    BadSubscriptionIdInvalid = 0x8033_0000,
    BadNodeIdInvalid = 0x8039_0000,
    BadNodeIdUnknown = 0x803A_0000,
    BadNoMatch = 0x8053_0000,
    BadTypeMismatch = 0x8054_0000,
    BadMethodInvalid = 0x8055_0000,
    BadArgumentsMissing = 0x8056_0000,
    BadTooManySubscriptions = 0x8059_0000,
    BadTooManyPublishRequests = 0x805A_0000,
    BadNoSubscription = 0x805B_0000,
    BadMessageNotAvailable = 0x805D_0000,
    BadMaxAgeInvalid = 0x826A_0000,
    BadMonitoringModeInvalid = 0x8061_0000,
    BadMonitoredItemIdInvalid = 0x8062_0000,
    BadMonitoredItemFilterInvalid = 0x8064_0000,
    BadFilterOperandInvalid = 0x8070_0000,
    BadContinuationPointInvalid = 0x8078_0000,
    BadNoContinuationPoints = 0x8079_0000,
    BadBrowseDirectionInvalid = 0x8080_0000,
    BadIndexRangeInvalid = 0x80AB_0000,
    BadIndexRangeNoData = 0x80AC_0000,
    BadViewIdUnknown = 0x8083_0000,
    BadWriteNotSupported = 0x80E6_0000,
    BadNotConnected = 0x80AD_0000,
    BadShutdown = 0x80AE_0000,
    BadServerNotConnected = 0x80AF_0000,
    BadInvalidState = 0x80AA_0000,
    BadUnknownResponse = 0x80B0_0000,
    BadAggregateListMismatch = 0x80D3_0000,
    BadDeadbandFilterInvalid = 0x80DA_0000,
    BadIndexRangeDataMismatch = 0x80E20000,
    BadResourceUnavailable = 0x8006_0000,
    BadNoCommunication = 0x8031_0000,
    BadTooManySessions = 0x8030_0000,
    BadTcpServerTooBusy = 0x800F_0000,
    BadTcpSecureChannelUnknown = 0x8011_0000,
    BadTcpNotEnoughResources = 0x800C_0000,
    BadDeviceFailure = 0x808B_0000,
    BadSensorFailure = 0x808C_0000,
    BadEndOfStream = 0x8088_0000,
    BadMaxConnectionsReached = 0x80DB_0000,
}

impl StatusCode {
    /// Returns `true` if the severity bits indicate success.
    pub fn is_good(&self) -> bool {
        self.0 & SEVERITY_MASK == 0
    }

    /// Returns `true` if the severity bits indicate an uncertain result.
    pub fn is_uncertain(&self) -> bool {
        self.0 & SEVERITY_MASK == SEVERITY_UNCERTAIN
    }

    /// Returns `true` if the severity bits indicate failure.
    pub fn is_bad(&self) -> bool {
        self.0 & SEVERITY_MASK == SEVERITY_BAD
    }

    /// The subcode with quality flags masked out, as used for comparisons
    /// against the well-known constants above.
    pub fn code(&self) -> u32 {
        self.0 & 0xFFFF_0000
    }

    /// Returns `Ok(())` if the code is good, otherwise returns the code as an error.
    pub fn check_good(self) -> Result<(), StatusCode> {
        if self.is_good() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:08X})", self.name(), self.0)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<u32> for StatusCode {
    fn from(value: u32) -> Self {
        StatusCode(value)
    }
}

impl From<StatusCode> for u32 {
    fn from(value: StatusCode) -> Self {
        value.0
    }
}

impl From<StatusCode> for std::io::Error {
    fn from(value: StatusCode) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, value.to_string())
    }
}

impl std::error::Error for StatusCode {}

impl BinaryEncodable for StatusCode {
    fn byte_len(&self, _ctx: &Context<'_>) -> usize {
        4
    }

    fn encode<S: Write + ?Sized>(&self, stream: &mut S, _ctx: &Context<'_>) -> EncodingResult<()> {
        write_u32(stream, self.0)
    }
}

impl BinaryDecodable for StatusCode {
    fn decode<S: Read + ?Sized>(stream: &mut S, _ctx: &Context<'_>) -> EncodingResult<Self> {
        Ok(StatusCode(read_u32(stream)?))
    }
}
