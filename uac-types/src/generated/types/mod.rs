// This file was autogenerated from schemas/1.05/Opc.Ua.NodeSet2.Services.xml by async-opcua-codegen
//
// DO NOT EDIT THIS FILE

//! Generated leaf and message types for the core (namespace 0) type system.

mod anonymous_identity_token;
mod application_description;
mod attribute_operand;
mod browse_description;
mod build_info;
mod call_method_request;
mod call_method_result;
mod call_response;
mod content_filter;
mod create_subscription_response;
mod data_change_filter;
mod delete_monitored_items_request;
mod element_operand;
mod endpoint_description;
mod enum_definition;
mod enum_field;
mod enum_value_type;
mod enums;
mod eu_information;
mod event_field_list;
mod event_filter;
mod event_notification_list;
mod history_event;
mod history_event_field_list;
mod history_read_value_id;
mod literal_operand;
mod monitored_item_create_request;
mod monitoring_parameters;
mod notification_data;
mod publish_request;
mod read_value_id;
mod republish_request;
mod service_counter_data_type;
mod service_fault;
mod signature_data;
mod simple_attribute_operand;
mod structure_definition;
mod structure_field;
mod subscription_acknowledgement;
mod user_name_identity_token;
mod user_token_policy;
mod write_value;
mod activate_session_request;
mod activate_session_response;
mod browse_next_request;
mod browse_next_response;
mod browse_request;
mod browse_response;
mod browse_result;
mod call_request;
mod cancel_request;
mod cancel_response;
mod channel_security_token;
mod close_secure_channel_request;
mod close_secure_channel_response;
mod close_session_request;
mod close_session_response;
mod create_monitored_items_response;
mod create_session_request;
mod create_session_response;
mod create_subscription_request;
mod data_change_notification;
mod delete_subscriptions_request;
mod delete_subscriptions_response;
mod delete_monitored_items_response;
mod get_endpoints_request;
mod get_endpoints_response;
mod history_read_request;
mod history_read_response;
mod history_read_result;
mod modify_monitored_items_request;
mod modify_monitored_items_response;
mod modify_subscription_request;
mod modify_subscription_response;
mod monitored_item_create_result;
mod monitored_item_modify_request;
mod monitored_item_modify_result;
mod monitored_item_notification;
mod notification_message;
mod open_secure_channel_request;
mod open_secure_channel_response;
mod publish_response;
mod read_request;
mod read_response;
mod reference_description;
mod republish_response;
mod set_monitoring_mode_request;
mod set_monitoring_mode_response;
mod set_publishing_mode_request;
mod set_publishing_mode_response;
mod signed_software_certificate;
mod status_change_notification;
mod transfer_result;
mod transfer_subscriptions_request;
mod transfer_subscriptions_response;
mod view_description;
mod write_request;
mod write_response;
mod x_509_identity_token;
mod find_servers_request;
mod find_servers_response;
mod find_servers_on_network_request;
mod find_servers_on_network_response;
mod register_server_request;
mod register_server_response;
mod registered_server;
mod server_on_network;

pub use anonymous_identity_token::AnonymousIdentityToken;
pub use application_description::ApplicationDescription;
pub use attribute_operand::AttributeOperand;
pub use browse_description::BrowseDescription;
pub use build_info::BuildInfo;
pub use call_method_request::CallMethodRequest;
pub use call_method_result::CallMethodResult;
pub use call_response::CallResponse;
pub use content_filter::{ContentFilter, ContentFilterElement};
pub use create_subscription_response::CreateSubscriptionResponse;
pub use data_change_filter::DataChangeFilter;
pub use delete_monitored_items_request::DeleteMonitoredItemsRequest;
pub use element_operand::ElementOperand;
pub use endpoint_description::EndpointDescription;
pub use enum_definition::EnumDefinition;
pub use enum_field::EnumField;
pub use enum_value_type::EnumValueType;
pub use enums::{
    ApplicationType, BrowseDirection, DataChangeTrigger, DeadbandType, FilterOperator,
    HistoryUpdateType, IdentityCriteriaType, MessageSecurityMode, MonitoringMode, NodeClass,
    PerformUpdateType, SecurityTokenRequestType, StructureType, TimestampsToReturn, UserTokenType,
};
pub use eu_information::EUInformation;
pub use event_field_list::EventFieldList;
pub use event_filter::EventFilter;
pub use event_notification_list::EventNotificationList;
pub use history_event::HistoryEvent;
pub use history_event_field_list::HistoryEventFieldList;
pub use history_read_value_id::HistoryReadValueId;
pub use literal_operand::LiteralOperand;
pub use monitored_item_create_request::MonitoredItemCreateRequest;
pub use monitoring_parameters::MonitoringParameters;
pub use notification_data::NotificationData;
pub use publish_request::PublishRequest;
pub use read_value_id::ReadValueId;
pub use republish_request::RepublishRequest;
pub use service_counter_data_type::ServiceCounterDataType;
pub use service_fault::ServiceFault;
pub use signature_data::SignatureData;
pub use simple_attribute_operand::SimpleAttributeOperand;
pub use structure_definition::StructureDefinition;
pub use structure_field::StructureField;
pub use subscription_acknowledgement::SubscriptionAcknowledgement;
pub use user_name_identity_token::UserNameIdentityToken;
pub use user_token_policy::UserTokenPolicy;
pub use write_value::WriteValue;
pub use activate_session_request::ActivateSessionRequest;
pub use activate_session_response::ActivateSessionResponse;
pub use browse_next_request::BrowseNextRequest;
pub use browse_next_response::BrowseNextResponse;
pub use browse_request::BrowseRequest;
pub use browse_response::BrowseResponse;
pub use browse_result::BrowseResult;
pub use call_request::CallRequest;
pub use cancel_request::CancelRequest;
pub use cancel_response::CancelResponse;
pub use channel_security_token::ChannelSecurityToken;
pub use close_secure_channel_request::CloseSecureChannelRequest;
pub use close_secure_channel_response::CloseSecureChannelResponse;
pub use close_session_request::CloseSessionRequest;
pub use close_session_response::CloseSessionResponse;
pub use create_monitored_items_response::CreateMonitoredItemsResponse;
pub use create_session_request::CreateSessionRequest;
pub use create_session_response::CreateSessionResponse;
pub use create_subscription_request::CreateSubscriptionRequest;
pub use data_change_notification::DataChangeNotification;
pub use delete_subscriptions_request::DeleteSubscriptionsRequest;
pub use delete_subscriptions_response::DeleteSubscriptionsResponse;
pub use delete_monitored_items_response::DeleteMonitoredItemsResponse;
pub use get_endpoints_request::GetEndpointsRequest;
pub use get_endpoints_response::GetEndpointsResponse;
pub use history_read_request::HistoryReadRequest;
pub use history_read_response::HistoryReadResponse;
pub use history_read_result::HistoryReadResult;
pub use modify_monitored_items_request::ModifyMonitoredItemsRequest;
pub use modify_monitored_items_response::ModifyMonitoredItemsResponse;
pub use modify_subscription_request::ModifySubscriptionRequest;
pub use modify_subscription_response::ModifySubscriptionResponse;
pub use monitored_item_create_result::MonitoredItemCreateResult;
pub use monitored_item_modify_request::MonitoredItemModifyRequest;
pub use monitored_item_modify_result::MonitoredItemModifyResult;
pub use monitored_item_notification::MonitoredItemNotification;
pub use notification_message::NotificationMessage;
pub use open_secure_channel_request::OpenSecureChannelRequest;
pub use open_secure_channel_response::OpenSecureChannelResponse;
pub use publish_response::PublishResponse;
pub use read_request::ReadRequest;
pub use read_response::ReadResponse;
pub use reference_description::ReferenceDescription;
pub use republish_response::RepublishResponse;
pub use set_monitoring_mode_request::SetMonitoringModeRequest;
pub use set_monitoring_mode_response::SetMonitoringModeResponse;
pub use set_publishing_mode_request::SetPublishingModeRequest;
pub use set_publishing_mode_response::SetPublishingModeResponse;
pub use signed_software_certificate::SignedSoftwareCertificate;
pub use status_change_notification::StatusChangeNotification;
pub use transfer_result::TransferResult;
pub use transfer_subscriptions_request::TransferSubscriptionsRequest;
pub use transfer_subscriptions_response::TransferSubscriptionsResponse;
pub use view_description::ViewDescription;
pub use write_request::WriteRequest;
pub use write_response::WriteResponse;
pub use x_509_identity_token::X509IdentityToken;
pub use find_servers_request::FindServersRequest;
pub use find_servers_response::FindServersResponse;
pub use find_servers_on_network_request::FindServersOnNetworkRequest;
pub use find_servers_on_network_response::FindServersOnNetworkResponse;
pub use register_server_request::RegisterServerRequest;
pub use register_server_response::RegisterServerResponse;
pub use registered_server::RegisteredServer;
pub use server_on_network::ServerOnNetwork;
