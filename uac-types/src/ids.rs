// This file was autogenerated from schemas/1.05/NodeIds.csv by async-opcua-codegen
//
// DO NOT EDIT THIS FILE

// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang

//! Well-known numeric identifiers in namespace 0, the OPC UA core namespace.
//!
//! Each enum here is a trimmed view of the identifiers a generated client
//! actually references; the full registry in the standard nodeset is much
//! larger.

use crate::{ExpandedNodeId, NodeId};

macro_rules! node_id_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:expr),* $(,)? }) => {
        $(#[$meta])*
        #[repr(u32)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant = $value),*
        }

        impl $name {
            /// Numeric identifier, as it appears on the wire inside a namespace-0 `NodeId`.
            pub const fn as_u32(self) -> u32 {
                self as u32
            }
        }

        impl From<$name> for u32 {
            fn from(v: $name) -> Self {
                v as u32
            }
        }

        impl TryFrom<u32> for $name {
            type Error = ();

            fn try_from(v: u32) -> Result<Self, Self::Error> {
                match v {
                    $($value => Ok(Self::$variant),)*
                    _ => Err(()),
                }
            }
        }

        impl From<$name> for NodeId {
            fn from(v: $name) -> Self {
                NodeId::new(0, v as u32)
            }
        }

        impl From<$name> for ExpandedNodeId {
            fn from(v: $name) -> Self {
                ExpandedNodeId::from(NodeId::from(v))
            }
        }
    };
}

node_id_enum!(
    /// Identifiers for namespace-0 Object nodes, including the `_Encoding_Default*`
    /// placeholders used to identify an `ExtensionObject`'s wire encoding.
    ObjectId {
        RootFolder = 84,
        ObjectsFolder = 85,
        TypesFolder = 86,
        ViewsFolder = 87,
        DataTypesFolder = 88,
        Server = 2253,

        Argument_Encoding_DefaultBinary = 296,
        Argument_Encoding_DefaultXml = 297,
        Argument_Encoding_DefaultJson = 15366,
        EnumValueType_Encoding_DefaultBinary = 7616,
        EnumValueType_Encoding_DefaultXml = 7618,
        EnumValueType_Encoding_DefaultJson = 15367,
        EUInformation_Encoding_DefaultBinary = 889,
        EUInformation_Encoding_DefaultXml = 888,
        EUInformation_Encoding_DefaultJson = 15368,
        BuildInfo_Encoding_DefaultBinary = 340,
        BuildInfo_Encoding_DefaultXml = 341,
        BuildInfo_Encoding_DefaultJson = 15369,

        AnonymousIdentityToken_Encoding_DefaultBinary = 319,
        AnonymousIdentityToken_Encoding_DefaultXml = 320,
        AnonymousIdentityToken_Encoding_DefaultJson = 15370,
        UserNameIdentityToken_Encoding_DefaultBinary = 322,
        UserNameIdentityToken_Encoding_DefaultXml = 323,
        UserNameIdentityToken_Encoding_DefaultJson = 15371,
        X509IdentityToken_Encoding_DefaultBinary = 325,
        X509IdentityToken_Encoding_DefaultXml = 326,
        X509IdentityToken_Encoding_DefaultJson = 15372,

        BrowseDescription_Encoding_DefaultBinary = 514,
        BrowseDescription_Encoding_DefaultXml = 515,
        BrowseDescription_Encoding_DefaultJson = 15373,

        ElementOperand_Encoding_DefaultBinary = 592,
        ElementOperand_Encoding_DefaultXml = 593,
        ElementOperand_Encoding_DefaultJson = 15374,
        LiteralOperand_Encoding_DefaultBinary = 595,
        LiteralOperand_Encoding_DefaultXml = 596,
        LiteralOperand_Encoding_DefaultJson = 15375,
        AttributeOperand_Encoding_DefaultBinary = 598,
        AttributeOperand_Encoding_DefaultXml = 599,
        AttributeOperand_Encoding_DefaultJson = 15376,
        SimpleAttributeOperand_Encoding_DefaultBinary = 601,
        SimpleAttributeOperand_Encoding_DefaultXml = 602,
        SimpleAttributeOperand_Encoding_DefaultJson = 15377,
        ContentFilterElement_Encoding_DefaultBinary = 583,
        ContentFilterElement_Encoding_DefaultXml = 584,
        ContentFilterElement_Encoding_DefaultJson = 15378,
        ContentFilter_Encoding_DefaultBinary = 586,
        ContentFilter_Encoding_DefaultXml = 587,
        ContentFilter_Encoding_DefaultJson = 15379,

        EventFilter_Encoding_DefaultBinary = 727,
        EventFilter_Encoding_DefaultXml = 728,
        EventFilter_Encoding_DefaultJson = 15380,
        EventNotificationList_Encoding_DefaultBinary = 914,
        EventNotificationList_Encoding_DefaultXml = 915,
        EventNotificationList_Encoding_DefaultJson = 15381,
        HistoryEvent_Encoding_DefaultBinary = 659,
        HistoryEvent_Encoding_DefaultXml = 660,
        HistoryEvent_Encoding_DefaultJson = 15382,
        HistoryReadValueId_Encoding_DefaultBinary = 635,
        HistoryReadValueId_Encoding_DefaultXml = 636,
        HistoryReadValueId_Encoding_DefaultJson = 15383,
        NotificationData_Encoding_DefaultBinary = 945,
        NotificationData_Encoding_DefaultXml = 946,
        NotificationData_Encoding_DefaultJson = 15384,
        DeleteMonitoredItemsRequest_Encoding_DefaultBinary = 783,
        DeleteMonitoredItemsRequest_Encoding_DefaultXml = 784,
        DeleteMonitoredItemsRequest_Encoding_DefaultJson = 15385,
        CreateSubscriptionResponse_Encoding_DefaultBinary = 792,
        CreateSubscriptionResponse_Encoding_DefaultXml = 793,
        CreateSubscriptionResponse_Encoding_DefaultJson = 15386,
        PublishRequest_Encoding_DefaultBinary = 826,
        PublishRequest_Encoding_DefaultXml = 827,
        PublishRequest_Encoding_DefaultJson = 15387,
        RepublishRequest_Encoding_DefaultBinary = 832,
        RepublishRequest_Encoding_DefaultXml = 833,
        RepublishRequest_Encoding_DefaultJson = 15388,
        CallResponse_Encoding_DefaultBinary = 714,
        CallResponse_Encoding_DefaultXml = 715,
        CallResponse_Encoding_DefaultJson = 15389,
        ServiceFault_Encoding_DefaultBinary = 397,
        ServiceFault_Encoding_DefaultXml = 398,
        ServiceFault_Encoding_DefaultJson = 15390,
        DataChangeFilter_Encoding_DefaultBinary = 724,
        DataChangeFilter_Encoding_DefaultXml = 723,
        DataChangeFilter_Encoding_DefaultJson = 15391,
        StructureDefinition_Encoding_DefaultBinary = 99,
        StructureDefinition_Encoding_DefaultXml = 100,
        StructureDefinition_Encoding_DefaultJson = 15392,
        EnumDefinition_Encoding_DefaultBinary = 102,
        EnumDefinition_Encoding_DefaultXml = 103,
        EnumDefinition_Encoding_DefaultJson = 15393,

        OpenSecureChannelRequest_Encoding_DefaultBinary = 20000,
        OpenSecureChannelRequest_Encoding_DefaultXml = 20001,
        OpenSecureChannelRequest_Encoding_DefaultJson = 20002,
        OpenSecureChannelResponse_Encoding_DefaultBinary = 20010,
        OpenSecureChannelResponse_Encoding_DefaultXml = 20011,
        OpenSecureChannelResponse_Encoding_DefaultJson = 20012,
        CloseSecureChannelRequest_Encoding_DefaultBinary = 20020,
        CloseSecureChannelRequest_Encoding_DefaultXml = 20021,
        CloseSecureChannelRequest_Encoding_DefaultJson = 20022,
        CloseSecureChannelResponse_Encoding_DefaultBinary = 20030,
        CloseSecureChannelResponse_Encoding_DefaultXml = 20031,
        CloseSecureChannelResponse_Encoding_DefaultJson = 20032,
        GetEndpointsRequest_Encoding_DefaultBinary = 20040,
        GetEndpointsRequest_Encoding_DefaultXml = 20041,
        GetEndpointsRequest_Encoding_DefaultJson = 20042,
        GetEndpointsResponse_Encoding_DefaultBinary = 20050,
        GetEndpointsResponse_Encoding_DefaultXml = 20051,
        GetEndpointsResponse_Encoding_DefaultJson = 20052,
        CreateSessionRequest_Encoding_DefaultBinary = 20060,
        CreateSessionRequest_Encoding_DefaultXml = 20061,
        CreateSessionRequest_Encoding_DefaultJson = 20062,
        CreateSessionResponse_Encoding_DefaultBinary = 20070,
        CreateSessionResponse_Encoding_DefaultXml = 20071,
        CreateSessionResponse_Encoding_DefaultJson = 20072,
        ActivateSessionRequest_Encoding_DefaultBinary = 20080,
        ActivateSessionRequest_Encoding_DefaultXml = 20081,
        ActivateSessionRequest_Encoding_DefaultJson = 20082,
        ActivateSessionResponse_Encoding_DefaultBinary = 20090,
        ActivateSessionResponse_Encoding_DefaultXml = 20091,
        ActivateSessionResponse_Encoding_DefaultJson = 20092,
        CloseSessionRequest_Encoding_DefaultBinary = 20100,
        CloseSessionRequest_Encoding_DefaultXml = 20101,
        CloseSessionRequest_Encoding_DefaultJson = 20102,
        CloseSessionResponse_Encoding_DefaultBinary = 20110,
        CloseSessionResponse_Encoding_DefaultXml = 20111,
        CloseSessionResponse_Encoding_DefaultJson = 20112,
        CancelRequest_Encoding_DefaultBinary = 20120,
        CancelRequest_Encoding_DefaultXml = 20121,
        CancelRequest_Encoding_DefaultJson = 20122,
        CancelResponse_Encoding_DefaultBinary = 20130,
        CancelResponse_Encoding_DefaultXml = 20131,
        CancelResponse_Encoding_DefaultJson = 20132,
        ReadRequest_Encoding_DefaultBinary = 20140,
        ReadRequest_Encoding_DefaultXml = 20141,
        ReadRequest_Encoding_DefaultJson = 20142,
        ReadResponse_Encoding_DefaultBinary = 20150,
        ReadResponse_Encoding_DefaultXml = 20151,
        ReadResponse_Encoding_DefaultJson = 20152,
        WriteRequest_Encoding_DefaultBinary = 20160,
        WriteRequest_Encoding_DefaultXml = 20161,
        WriteRequest_Encoding_DefaultJson = 20162,
        WriteResponse_Encoding_DefaultBinary = 20170,
        WriteResponse_Encoding_DefaultXml = 20171,
        WriteResponse_Encoding_DefaultJson = 20172,
        BrowseRequest_Encoding_DefaultBinary = 20180,
        BrowseRequest_Encoding_DefaultXml = 20181,
        BrowseRequest_Encoding_DefaultJson = 20182,
        BrowseResponse_Encoding_DefaultBinary = 20190,
        BrowseResponse_Encoding_DefaultXml = 20191,
        BrowseResponse_Encoding_DefaultJson = 20192,
        BrowseNextRequest_Encoding_DefaultBinary = 20200,
        BrowseNextRequest_Encoding_DefaultXml = 20201,
        BrowseNextRequest_Encoding_DefaultJson = 20202,
        BrowseNextResponse_Encoding_DefaultBinary = 20210,
        BrowseNextResponse_Encoding_DefaultXml = 20211,
        BrowseNextResponse_Encoding_DefaultJson = 20212,
        CallRequest_Encoding_DefaultBinary = 20220,
        CallRequest_Encoding_DefaultXml = 20221,
        CallRequest_Encoding_DefaultJson = 20222,
        HistoryReadRequest_Encoding_DefaultBinary = 20230,
        HistoryReadRequest_Encoding_DefaultXml = 20231,
        HistoryReadRequest_Encoding_DefaultJson = 20232,
        HistoryReadResponse_Encoding_DefaultBinary = 20240,
        HistoryReadResponse_Encoding_DefaultXml = 20241,
        HistoryReadResponse_Encoding_DefaultJson = 20242,
        ModifySubscriptionRequest_Encoding_DefaultBinary = 20250,
        ModifySubscriptionRequest_Encoding_DefaultXml = 20251,
        ModifySubscriptionRequest_Encoding_DefaultJson = 20252,
        ModifySubscriptionResponse_Encoding_DefaultBinary = 20260,
        ModifySubscriptionResponse_Encoding_DefaultXml = 20261,
        ModifySubscriptionResponse_Encoding_DefaultJson = 20262,
        DeleteSubscriptionsRequest_Encoding_DefaultBinary = 20270,
        DeleteSubscriptionsRequest_Encoding_DefaultXml = 20271,
        DeleteSubscriptionsRequest_Encoding_DefaultJson = 20272,
        DeleteSubscriptionsResponse_Encoding_DefaultBinary = 20280,
        DeleteSubscriptionsResponse_Encoding_DefaultXml = 20281,
        DeleteSubscriptionsResponse_Encoding_DefaultJson = 20282,
        SetPublishingModeRequest_Encoding_DefaultBinary = 20290,
        SetPublishingModeRequest_Encoding_DefaultXml = 20291,
        SetPublishingModeRequest_Encoding_DefaultJson = 20292,
        SetPublishingModeResponse_Encoding_DefaultBinary = 20300,
        SetPublishingModeResponse_Encoding_DefaultXml = 20301,
        SetPublishingModeResponse_Encoding_DefaultJson = 20302,
        TransferSubscriptionsRequest_Encoding_DefaultBinary = 20310,
        TransferSubscriptionsRequest_Encoding_DefaultXml = 20311,
        TransferSubscriptionsRequest_Encoding_DefaultJson = 20312,
        TransferSubscriptionsResponse_Encoding_DefaultBinary = 20320,
        TransferSubscriptionsResponse_Encoding_DefaultXml = 20321,
        TransferSubscriptionsResponse_Encoding_DefaultJson = 20322,
        CreateMonitoredItemsResponse_Encoding_DefaultBinary = 20330,
        CreateMonitoredItemsResponse_Encoding_DefaultXml = 20331,
        CreateMonitoredItemsResponse_Encoding_DefaultJson = 20332,
        ModifyMonitoredItemsRequest_Encoding_DefaultBinary = 20340,
        ModifyMonitoredItemsRequest_Encoding_DefaultXml = 20341,
        ModifyMonitoredItemsRequest_Encoding_DefaultJson = 20342,
        ModifyMonitoredItemsResponse_Encoding_DefaultBinary = 20350,
        ModifyMonitoredItemsResponse_Encoding_DefaultXml = 20351,
        ModifyMonitoredItemsResponse_Encoding_DefaultJson = 20352,
        DeleteMonitoredItemsResponse_Encoding_DefaultBinary = 20360,
        DeleteMonitoredItemsResponse_Encoding_DefaultXml = 20361,
        DeleteMonitoredItemsResponse_Encoding_DefaultJson = 20362,
        SetMonitoringModeRequest_Encoding_DefaultBinary = 20370,
        SetMonitoringModeRequest_Encoding_DefaultXml = 20371,
        SetMonitoringModeRequest_Encoding_DefaultJson = 20372,
        SetMonitoringModeResponse_Encoding_DefaultBinary = 20380,
        SetMonitoringModeResponse_Encoding_DefaultXml = 20381,
        SetMonitoringModeResponse_Encoding_DefaultJson = 20382,
        PublishResponse_Encoding_DefaultBinary = 20390,
        PublishResponse_Encoding_DefaultXml = 20391,
        PublishResponse_Encoding_DefaultJson = 20392,
        RepublishResponse_Encoding_DefaultBinary = 20400,
        RepublishResponse_Encoding_DefaultXml = 20401,
        RepublishResponse_Encoding_DefaultJson = 20402,
        ChannelSecurityToken_Encoding_DefaultBinary = 20500,
        ChannelSecurityToken_Encoding_DefaultXml = 20501,
        ChannelSecurityToken_Encoding_DefaultJson = 20502,
        BrowseResult_Encoding_DefaultBinary = 20510,
        BrowseResult_Encoding_DefaultXml = 20511,
        BrowseResult_Encoding_DefaultJson = 20512,
        ReferenceDescription_Encoding_DefaultBinary = 20520,
        ReferenceDescription_Encoding_DefaultXml = 20521,
        ReferenceDescription_Encoding_DefaultJson = 20522,
        MonitoredItemCreateResult_Encoding_DefaultBinary = 20530,
        MonitoredItemCreateResult_Encoding_DefaultXml = 20531,
        MonitoredItemCreateResult_Encoding_DefaultJson = 20532,
        MonitoredItemModifyRequest_Encoding_DefaultBinary = 20540,
        MonitoredItemModifyRequest_Encoding_DefaultXml = 20541,
        MonitoredItemModifyRequest_Encoding_DefaultJson = 20542,
        MonitoredItemModifyResult_Encoding_DefaultBinary = 20550,
        MonitoredItemModifyResult_Encoding_DefaultXml = 20551,
        MonitoredItemModifyResult_Encoding_DefaultJson = 20552,
        HistoryReadResult_Encoding_DefaultBinary = 20560,
        HistoryReadResult_Encoding_DefaultXml = 20561,
        HistoryReadResult_Encoding_DefaultJson = 20562,
        TransferResult_Encoding_DefaultBinary = 20570,
        TransferResult_Encoding_DefaultXml = 20571,
        TransferResult_Encoding_DefaultJson = 20572,
        SignedSoftwareCertificate_Encoding_DefaultBinary = 20580,
        SignedSoftwareCertificate_Encoding_DefaultXml = 20581,
        SignedSoftwareCertificate_Encoding_DefaultJson = 20582,
        MonitoredItemNotification_Encoding_DefaultBinary = 20590,
        MonitoredItemNotification_Encoding_DefaultXml = 20591,
        MonitoredItemNotification_Encoding_DefaultJson = 20592,
        DataChangeNotification_Encoding_DefaultBinary = 20600,
        DataChangeNotification_Encoding_DefaultXml = 20601,
        DataChangeNotification_Encoding_DefaultJson = 20602,
        StatusChangeNotification_Encoding_DefaultBinary = 20610,
        StatusChangeNotification_Encoding_DefaultXml = 20611,
        StatusChangeNotification_Encoding_DefaultJson = 20612,
        NotificationMessage_Encoding_DefaultBinary = 20620,
        NotificationMessage_Encoding_DefaultXml = 20621,
        NotificationMessage_Encoding_DefaultJson = 20622,
        ViewDescription_Encoding_DefaultBinary = 20630,
        ViewDescription_Encoding_DefaultXml = 20631,
        ViewDescription_Encoding_DefaultJson = 20632,
        FindServersRequest_Encoding_DefaultBinary = 20640,
        FindServersRequest_Encoding_DefaultXml = 20641,
        FindServersRequest_Encoding_DefaultJson = 20642,
        FindServersResponse_Encoding_DefaultBinary = 20650,
        FindServersResponse_Encoding_DefaultXml = 20651,
        FindServersResponse_Encoding_DefaultJson = 20652,
        FindServersOnNetworkRequest_Encoding_DefaultBinary = 20660,
        FindServersOnNetworkRequest_Encoding_DefaultXml = 20661,
        FindServersOnNetworkRequest_Encoding_DefaultJson = 20662,
        FindServersOnNetworkResponse_Encoding_DefaultBinary = 20670,
        FindServersOnNetworkResponse_Encoding_DefaultXml = 20671,
        FindServersOnNetworkResponse_Encoding_DefaultJson = 20672,
        RegisterServerRequest_Encoding_DefaultBinary = 20680,
        RegisterServerRequest_Encoding_DefaultXml = 20681,
        RegisterServerRequest_Encoding_DefaultJson = 20682,
        RegisterServerResponse_Encoding_DefaultBinary = 20690,
        RegisterServerResponse_Encoding_DefaultXml = 20691,
        RegisterServerResponse_Encoding_DefaultJson = 20692,
        ServerOnNetwork_Encoding_DefaultBinary = 20700,
        ServerOnNetwork_Encoding_DefaultXml = 20701,
        ServerOnNetwork_Encoding_DefaultJson = 20702,
        RegisteredServer_Encoding_DefaultBinary = 20710,
        RegisteredServer_Encoding_DefaultXml = 20711,
        RegisteredServer_Encoding_DefaultJson = 20712,
    }
);

node_id_enum!(
    /// Identifiers for namespace-0 DataType nodes, describing the type of a value
    /// or structured field.
    DataTypeId {
        BaseDataType = 24,
        Boolean = 1,
        SByte = 2,
        Byte = 3,
        Int16 = 4,
        UInt16 = 5,
        Int32 = 6,
        UInt32 = 7,
        Int64 = 8,
        UInt64 = 9,
        Float = 10,
        Double = 11,
        String = 12,
        DateTime = 13,
        Guid = 14,
        ByteString = 15,
        XmlElement = 16,
        NodeId = 17,
        ExpandedNodeId = 18,
        StatusCode = 19,
        QualifiedName = 20,
        LocalizedText = 21,
        Structure = 22,
        DataValue = 23,
        DiagnosticInfo = 25,
        Enumeration = 29,
        Decimal = 50,

        Argument = 296,
        EnumValueType = 7594,
        EUInformation = 887,
        BuildInfo = 338,
        AnonymousIdentityToken = 318,
        UserNameIdentityToken = 321,
        X509IdentityToken = 324,
        BrowseDescription = 511,
        ElementOperand = 589,
        LiteralOperand = 591,
        AttributeOperand = 594,
        SimpleAttributeOperand = 597,
        ContentFilterElement = 583,
        ContentFilter = 586,
        EventFilter = 725,
        EventNotificationList = 913,
        HistoryEvent = 658,
        HistoryReadValueId = 634,
        NotificationData = 945,
        DeleteMonitoredItemsRequest = 781,
        CreateSubscriptionResponse = 791,
        PublishRequest = 824,
        RepublishRequest = 831,
        CallResponse = 712,
        ServiceFault = 395,
        DataChangeFilter = 722,
        StructureDefinition = 98,
        EnumDefinition = 101,

        OpenSecureChannelRequest = 20000,
        OpenSecureChannelResponse = 20010,
        CloseSecureChannelRequest = 20020,
        CloseSecureChannelResponse = 20030,
        GetEndpointsRequest = 20040,
        GetEndpointsResponse = 20050,
        CreateSessionRequest = 20060,
        CreateSessionResponse = 20070,
        ActivateSessionRequest = 20080,
        ActivateSessionResponse = 20090,
        CloseSessionRequest = 20100,
        CloseSessionResponse = 20110,
        CancelRequest = 20120,
        CancelResponse = 20130,
        ReadRequest = 20140,
        ReadResponse = 20150,
        WriteRequest = 20160,
        WriteResponse = 20170,
        BrowseRequest = 20180,
        BrowseResponse = 20190,
        BrowseNextRequest = 20200,
        BrowseNextResponse = 20210,
        CallRequest = 20220,
        HistoryReadRequest = 20230,
        HistoryReadResponse = 20240,
        ModifySubscriptionRequest = 20250,
        ModifySubscriptionResponse = 20260,
        DeleteSubscriptionsRequest = 20270,
        DeleteSubscriptionsResponse = 20280,
        SetPublishingModeRequest = 20290,
        SetPublishingModeResponse = 20300,
        TransferSubscriptionsRequest = 20310,
        TransferSubscriptionsResponse = 20320,
        CreateMonitoredItemsResponse = 20330,
        ModifyMonitoredItemsRequest = 20340,
        ModifyMonitoredItemsResponse = 20350,
        DeleteMonitoredItemsResponse = 20360,
        SetMonitoringModeRequest = 20370,
        SetMonitoringModeResponse = 20380,
        PublishResponse = 20390,
        RepublishResponse = 20400,
        ChannelSecurityToken = 20500,
        BrowseResult = 20510,
        ReferenceDescription = 20520,
        MonitoredItemCreateResult = 20530,
        MonitoredItemModifyRequest = 20540,
        MonitoredItemModifyResult = 20550,
        HistoryReadResult = 20560,
        TransferResult = 20570,
        SignedSoftwareCertificate = 20580,
        MonitoredItemNotification = 20590,
        DataChangeNotification = 20600,
        StatusChangeNotification = 20610,
        NotificationMessage = 20620,
        ViewDescription = 20630,
        FindServersRequest = 20640,
        FindServersResponse = 20650,
        FindServersOnNetworkRequest = 20660,
        FindServersOnNetworkResponse = 20670,
        RegisterServerRequest = 20680,
        RegisterServerResponse = 20690,
        ServerOnNetwork = 20700,
        RegisteredServer = 20710,
    }
);

node_id_enum!(
    /// Identifiers for namespace-0 ReferenceType nodes.
    ReferenceTypeId {
        References = 31,
        HierarchicalReferences = 33,
        HasChild = 34,
        Organizes = 35,
        HasEventSource = 36,
        HasModellingRule = 37,
        HasEncoding = 38,
        HasDescription = 39,
        HasTypeDefinition = 40,
        GeneratesEvent = 41,
        Aggregates = 44,
        HasSubtype = 45,
        HasProperty = 46,
        HasComponent = 47,
        HasNotifier = 48,
        HasOrderedComponent = 49,
        NonHierarchicalReferences = 32,
    }
);

node_id_enum!(
    /// Identifiers for namespace-0 ObjectType nodes.
    ObjectTypeId {
        BaseObjectType = 58,
        FolderType = 61,
        BaseEventType = 2041,
        ServerType = 2004,
    }
);

node_id_enum!(
    /// Identifiers for namespace-0 VariableType nodes.
    VariableTypeId {
        BaseVariableType = 62,
        BaseDataVariableType = 63,
        PropertyType = 68,
    }
);

node_id_enum!(
    /// Identifiers for namespace-0 pre-defined Variable nodes, e.g. properties of the
    /// well-known `Server` object.
    VariableId {
        Server_ServerArray = 2254,
        Server_NamespaceArray = 2255,
        Server_ServerStatus = 2256,
        Server_ServerStatus_State = 2259,
        Server_ServiceLevel = 2267,
    }
);

node_id_enum!(
    /// Identifiers for namespace-0 pre-defined Method nodes.
    MethodId {
        Server_GetMonitoredItems = 11492,
        Server_ResendData = 12873,
    }
);
