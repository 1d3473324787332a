// This file was autogenerated from schemas/1.05/Opc.Ua.NodeSet2.Services.xml by async-opcua-codegen
//
// DO NOT EDIT THIS FILE

//! Generated types and the type loader that resolves their wire encoding ids.

pub mod types;

use std::sync::LazyLock;

use crate::{
    binary_decode_to_enc, ids::DataTypeId, ids::ObjectId, Context, DynEncodable, EncodingResult,
    Error, NodeId, TypeLoader, TypeLoaderInstance, TypeLoaderPriority,
};

macro_rules! register {
    ($inst:ident, $data_type:ident, $binary:ident, $typ:path) => {
        $inst.add_binary_type(
            DataTypeId::$data_type as u32,
            ObjectId::$binary as u32,
            binary_decode_to_enc::<$typ>,
        );
    };
}

static TYPES: LazyLock<TypeLoaderInstance> = LazyLock::new(|| {
    let mut inst = TypeLoaderInstance::new();
    register!(inst, Argument, Argument_Encoding_DefaultBinary, crate::Argument);
    register!(
        inst,
        AnonymousIdentityToken,
        AnonymousIdentityToken_Encoding_DefaultBinary,
        types::AnonymousIdentityToken
    );
    register!(
        inst,
        AttributeOperand,
        AttributeOperand_Encoding_DefaultBinary,
        types::AttributeOperand
    );
    register!(
        inst,
        BrowseDescription,
        BrowseDescription_Encoding_DefaultBinary,
        types::BrowseDescription
    );
    register!(inst, BuildInfo, BuildInfo_Encoding_DefaultBinary, types::BuildInfo);
    register!(
        inst,
        CallResponse,
        CallResponse_Encoding_DefaultBinary,
        types::CallResponse
    );
    register!(
        inst,
        ContentFilterElement,
        ContentFilterElement_Encoding_DefaultBinary,
        types::ContentFilterElement
    );
    register!(
        inst,
        ContentFilter,
        ContentFilter_Encoding_DefaultBinary,
        types::ContentFilter
    );
    register!(
        inst,
        CreateSubscriptionResponse,
        CreateSubscriptionResponse_Encoding_DefaultBinary,
        types::CreateSubscriptionResponse
    );
    register!(
        inst,
        DataChangeFilter,
        DataChangeFilter_Encoding_DefaultBinary,
        types::DataChangeFilter
    );
    register!(
        inst,
        DeleteMonitoredItemsRequest,
        DeleteMonitoredItemsRequest_Encoding_DefaultBinary,
        types::DeleteMonitoredItemsRequest
    );
    register!(
        inst,
        StructureDefinition,
        StructureDefinition_Encoding_DefaultBinary,
        types::StructureDefinition
    );
    register!(
        inst,
        EnumDefinition,
        EnumDefinition_Encoding_DefaultBinary,
        types::EnumDefinition
    );
    register!(
        inst,
        ElementOperand,
        ElementOperand_Encoding_DefaultBinary,
        types::ElementOperand
    );
    register!(
        inst,
        EnumValueType,
        EnumValueType_Encoding_DefaultBinary,
        types::EnumValueType
    );
    register!(
        inst,
        EUInformation,
        EUInformation_Encoding_DefaultBinary,
        types::EUInformation
    );
    register!(
        inst,
        EventFilter,
        EventFilter_Encoding_DefaultBinary,
        types::EventFilter
    );
    register!(
        inst,
        EventNotificationList,
        EventNotificationList_Encoding_DefaultBinary,
        types::EventNotificationList
    );
    register!(
        inst,
        HistoryEvent,
        HistoryEvent_Encoding_DefaultBinary,
        types::HistoryEvent
    );
    register!(
        inst,
        HistoryReadValueId,
        HistoryReadValueId_Encoding_DefaultBinary,
        types::HistoryReadValueId
    );
    register!(
        inst,
        LiteralOperand,
        LiteralOperand_Encoding_DefaultBinary,
        types::LiteralOperand
    );
    register!(
        inst,
        NotificationData,
        NotificationData_Encoding_DefaultBinary,
        types::NotificationData
    );
    register!(
        inst,
        PublishRequest,
        PublishRequest_Encoding_DefaultBinary,
        types::PublishRequest
    );
    register!(
        inst,
        RepublishRequest,
        RepublishRequest_Encoding_DefaultBinary,
        types::RepublishRequest
    );
    register!(
        inst,
        ServiceFault,
        ServiceFault_Encoding_DefaultBinary,
        types::ServiceFault
    );
    register!(
        inst,
        SimpleAttributeOperand,
        SimpleAttributeOperand_Encoding_DefaultBinary,
        types::SimpleAttributeOperand
    );
    register!(
        inst,
        UserNameIdentityToken,
        UserNameIdentityToken_Encoding_DefaultBinary,
        types::UserNameIdentityToken
    );
    register!(
        inst,
        X509IdentityToken,
        X509IdentityToken_Encoding_DefaultBinary,
        types::X509IdentityToken
    );
    register!(inst, OpenSecureChannelRequest, OpenSecureChannelRequest_Encoding_DefaultBinary, types::OpenSecureChannelRequest);
    register!(inst, OpenSecureChannelResponse, OpenSecureChannelResponse_Encoding_DefaultBinary, types::OpenSecureChannelResponse);
    register!(inst, CloseSecureChannelRequest, CloseSecureChannelRequest_Encoding_DefaultBinary, types::CloseSecureChannelRequest);
    register!(inst, CloseSecureChannelResponse, CloseSecureChannelResponse_Encoding_DefaultBinary, types::CloseSecureChannelResponse);
    register!(inst, GetEndpointsRequest, GetEndpointsRequest_Encoding_DefaultBinary, types::GetEndpointsRequest);
    register!(inst, GetEndpointsResponse, GetEndpointsResponse_Encoding_DefaultBinary, types::GetEndpointsResponse);
    register!(inst, CreateSessionRequest, CreateSessionRequest_Encoding_DefaultBinary, types::CreateSessionRequest);
    register!(inst, CreateSessionResponse, CreateSessionResponse_Encoding_DefaultBinary, types::CreateSessionResponse);
    register!(inst, ActivateSessionRequest, ActivateSessionRequest_Encoding_DefaultBinary, types::ActivateSessionRequest);
    register!(inst, ActivateSessionResponse, ActivateSessionResponse_Encoding_DefaultBinary, types::ActivateSessionResponse);
    register!(inst, CloseSessionRequest, CloseSessionRequest_Encoding_DefaultBinary, types::CloseSessionRequest);
    register!(inst, CloseSessionResponse, CloseSessionResponse_Encoding_DefaultBinary, types::CloseSessionResponse);
    register!(inst, CancelRequest, CancelRequest_Encoding_DefaultBinary, types::CancelRequest);
    register!(inst, CancelResponse, CancelResponse_Encoding_DefaultBinary, types::CancelResponse);
    register!(inst, ReadRequest, ReadRequest_Encoding_DefaultBinary, types::ReadRequest);
    register!(inst, ReadResponse, ReadResponse_Encoding_DefaultBinary, types::ReadResponse);
    register!(inst, WriteRequest, WriteRequest_Encoding_DefaultBinary, types::WriteRequest);
    register!(inst, WriteResponse, WriteResponse_Encoding_DefaultBinary, types::WriteResponse);
    register!(inst, BrowseRequest, BrowseRequest_Encoding_DefaultBinary, types::BrowseRequest);
    register!(inst, BrowseResponse, BrowseResponse_Encoding_DefaultBinary, types::BrowseResponse);
    register!(inst, BrowseNextRequest, BrowseNextRequest_Encoding_DefaultBinary, types::BrowseNextRequest);
    register!(inst, BrowseNextResponse, BrowseNextResponse_Encoding_DefaultBinary, types::BrowseNextResponse);
    register!(inst, CallRequest, CallRequest_Encoding_DefaultBinary, types::CallRequest);
    register!(inst, HistoryReadRequest, HistoryReadRequest_Encoding_DefaultBinary, types::HistoryReadRequest);
    register!(inst, HistoryReadResponse, HistoryReadResponse_Encoding_DefaultBinary, types::HistoryReadResponse);
    register!(inst, ModifySubscriptionRequest, ModifySubscriptionRequest_Encoding_DefaultBinary, types::ModifySubscriptionRequest);
    register!(inst, ModifySubscriptionResponse, ModifySubscriptionResponse_Encoding_DefaultBinary, types::ModifySubscriptionResponse);
    register!(inst, DeleteSubscriptionsRequest, DeleteSubscriptionsRequest_Encoding_DefaultBinary, types::DeleteSubscriptionsRequest);
    register!(inst, DeleteSubscriptionsResponse, DeleteSubscriptionsResponse_Encoding_DefaultBinary, types::DeleteSubscriptionsResponse);
    register!(inst, SetPublishingModeRequest, SetPublishingModeRequest_Encoding_DefaultBinary, types::SetPublishingModeRequest);
    register!(inst, SetPublishingModeResponse, SetPublishingModeResponse_Encoding_DefaultBinary, types::SetPublishingModeResponse);
    register!(inst, TransferSubscriptionsRequest, TransferSubscriptionsRequest_Encoding_DefaultBinary, types::TransferSubscriptionsRequest);
    register!(inst, TransferSubscriptionsResponse, TransferSubscriptionsResponse_Encoding_DefaultBinary, types::TransferSubscriptionsResponse);
    register!(inst, CreateMonitoredItemsResponse, CreateMonitoredItemsResponse_Encoding_DefaultBinary, types::CreateMonitoredItemsResponse);
    register!(inst, ModifyMonitoredItemsRequest, ModifyMonitoredItemsRequest_Encoding_DefaultBinary, types::ModifyMonitoredItemsRequest);
    register!(inst, ModifyMonitoredItemsResponse, ModifyMonitoredItemsResponse_Encoding_DefaultBinary, types::ModifyMonitoredItemsResponse);
    register!(inst, DeleteMonitoredItemsResponse, DeleteMonitoredItemsResponse_Encoding_DefaultBinary, types::DeleteMonitoredItemsResponse);
    register!(inst, SetMonitoringModeRequest, SetMonitoringModeRequest_Encoding_DefaultBinary, types::SetMonitoringModeRequest);
    register!(inst, SetMonitoringModeResponse, SetMonitoringModeResponse_Encoding_DefaultBinary, types::SetMonitoringModeResponse);
    register!(inst, PublishResponse, PublishResponse_Encoding_DefaultBinary, types::PublishResponse);
    register!(inst, RepublishResponse, RepublishResponse_Encoding_DefaultBinary, types::RepublishResponse);
    register!(inst, ChannelSecurityToken, ChannelSecurityToken_Encoding_DefaultBinary, types::ChannelSecurityToken);
    register!(inst, BrowseResult, BrowseResult_Encoding_DefaultBinary, types::BrowseResult);
    register!(inst, ReferenceDescription, ReferenceDescription_Encoding_DefaultBinary, types::ReferenceDescription);
    register!(inst, MonitoredItemCreateResult, MonitoredItemCreateResult_Encoding_DefaultBinary, types::MonitoredItemCreateResult);
    register!(inst, MonitoredItemModifyRequest, MonitoredItemModifyRequest_Encoding_DefaultBinary, types::MonitoredItemModifyRequest);
    register!(inst, MonitoredItemModifyResult, MonitoredItemModifyResult_Encoding_DefaultBinary, types::MonitoredItemModifyResult);
    register!(inst, HistoryReadResult, HistoryReadResult_Encoding_DefaultBinary, types::HistoryReadResult);
    register!(inst, TransferResult, TransferResult_Encoding_DefaultBinary, types::TransferResult);
    register!(inst, SignedSoftwareCertificate, SignedSoftwareCertificate_Encoding_DefaultBinary, types::SignedSoftwareCertificate);
    register!(inst, MonitoredItemNotification, MonitoredItemNotification_Encoding_DefaultBinary, types::MonitoredItemNotification);
    register!(inst, DataChangeNotification, DataChangeNotification_Encoding_DefaultBinary, types::DataChangeNotification);
    register!(inst, StatusChangeNotification, StatusChangeNotification_Encoding_DefaultBinary, types::StatusChangeNotification);
    register!(inst, NotificationMessage, NotificationMessage_Encoding_DefaultBinary, types::NotificationMessage);
    register!(inst, ViewDescription, ViewDescription_Encoding_DefaultBinary, types::ViewDescription);
    inst
});

/// Type loader for every type generated from the core (namespace 0) nodeset.
#[derive(Debug, Clone, Copy)]
pub struct GeneratedTypeLoader;

impl TypeLoader for GeneratedTypeLoader {
    fn load_from_binary(
        &self,
        node_id: &NodeId,
        stream: &mut dyn std::io::Read,
        ctx: &Context<'_>,
    ) -> Option<EncodingResult<Box<dyn DynEncodable>>> {
        if node_id.namespace != 0 {
            return None;
        }
        let Some(num_id) = node_id.as_u32() else {
            return Some(Err(Error::decoding(
                "Unsupported encoding ID. Only numeric encoding IDs are currently supported",
            )));
        };
        TYPES.decode_binary(num_id, stream, ctx)
    }

    fn priority(&self) -> TypeLoaderPriority {
        TypeLoaderPriority::Core
    }
}
