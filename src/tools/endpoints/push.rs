use crate::core::tool::ParamType;
use crate::models::{DeviceDetails, PushChannelSubscription, PushPublish};
use crate::tools::endpoint::Endpoint;

const DEVICE_ID: &str = "Device's ID.";

fn device_details_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .field("id", ParamType::String, false, "Unique identifier for the device.")
        .field(
            "clientId",
            ParamType::String,
            false,
            "Optional trusted client identifier for the device.",
        )
        .field(
            "formFactor",
            ParamType::String,
            false,
            "Form factor of the push device: phone, tablet, desktop, tv, watch, car, embedded or other.",
        )
        .field(
            "metadata",
            ParamType::Object,
            false,
            "Optional metadata object for this device.",
        )
        .field(
            "platform",
            ParamType::String,
            false,
            "Platform of the push device: ios, android or browser.",
        )
        .field(
            "push",
            ParamType::Object,
            false,
            "Push recipient details and state for the device.",
        )
        .field(
            "deviceSecret",
            ParamType::String,
            false,
            "Secret value for the device.",
        )
        .body::<DeviceDetails>()
        .returns::<DeviceDetails>()
}

fn subscription_filters(endpoint: Endpoint) -> Endpoint {
    endpoint
        .query(
            "channel",
            ParamType::String,
            "Filter to restrict to subscriptions associated with that channel.",
        )
        .query(
            "deviceId",
            ParamType::String,
            "Filter to restrict to subscriptions associated with that deviceId.",
        )
        .query(
            "clientId",
            ParamType::String,
            "Filter to restrict to subscriptions associated with that clientId.",
        )
}

pub fn unregister_all_push_devices() -> Endpoint {
    Endpoint::delete(
        "delete_push_deviceRegistrations",
        "/push/deviceRegistrations",
        "Unregister matching devices for push notifications",
    )
    .query(
        "deviceId",
        ParamType::String,
        "Optional filter to restrict to devices associated with that deviceId.",
    )
    .query(
        "clientId",
        ParamType::String,
        "Optional filter to restrict to devices associated with that clientId.",
    )
}

pub fn get_registered_push_devices() -> Endpoint {
    Endpoint::get(
        "get_push_deviceRegistrations",
        "/push/deviceRegistrations",
        "List devices registered for receiving push notifications",
    )
    .query(
        "deviceId",
        ParamType::String,
        "Optional filter to restrict to devices associated with that deviceId.",
    )
    .query(
        "clientId",
        ParamType::String,
        "Optional filter to restrict to devices associated with that clientId.",
    )
    .query(
        "limit",
        ParamType::Number,
        "The maximum number of records to return.",
    )
    .returns::<serde_json::Value>()
}

pub fn register_push_device() -> Endpoint {
    device_details_fields(Endpoint::post(
        "post_push_deviceRegistrations",
        "/push/deviceRegistrations",
        "Register a device for receiving push notifications",
    ))
}

pub fn subscribe_push_device_to_channel() -> Endpoint {
    Endpoint::post(
        "post_push_channelSubscriptions",
        "/push/channelSubscriptions",
        "Subscribe a device to a channel",
    )
    .field("channel", ParamType::String, false, "Channel name.")
    .field(
        "deviceId",
        ParamType::String,
        false,
        "Must be set when clientId is empty, cannot be used with clientId.",
    )
    .field(
        "clientId",
        ParamType::String,
        false,
        "Must be set when deviceId is empty, cannot be used with deviceId.",
    )
    .body::<PushChannelSubscription>()
    .returns::<PushChannelSubscription>()
}

pub fn delete_push_device_details() -> Endpoint {
    subscription_filters(Endpoint::delete(
        "delete_push_channelSubscriptions",
        "/push/channelSubscriptions",
        "Delete a registered device's update token",
    ))
}

pub fn get_push_subscriptions_on_channels() -> Endpoint {
    subscription_filters(Endpoint::get(
        "get_push_channelSubscriptions",
        "/push/channelSubscriptions",
        "List channel subscriptions",
    ))
    .query(
        "concatFilters",
        ParamType::Boolean,
        "Whether the filters are combined with OR instead of AND.",
    )
    .returns::<serde_json::Value>()
}

pub fn get_channels_with_push_subscribers() -> Endpoint {
    Endpoint::get(
        "get_push_channels",
        "/push/channels",
        "List all channels with at least one subscribed device",
    )
    .returns::<serde_json::Value>()
}

pub fn publish_push_notification_to_devices() -> Endpoint {
    Endpoint::post(
        "post_push_publish",
        "/push/publish",
        "Publish a push notification to device(s)",
    )
    .field(
        "recipient",
        ParamType::Object,
        true,
        "Push recipient details: a clientId, deviceId or transport-specific token.",
    )
    .field(
        "notification",
        ParamType::Object,
        false,
        "Notification title, body, icon, sound and collapse key.",
    )
    .field(
        "data",
        ParamType::Object,
        false,
        "Arbitrary key-value string-to-string payload.",
    )
    .field("apns", ParamType::Object, false, "APNs-specific overrides.")
    .field("fcm", ParamType::Object, false, "FCM-specific overrides.")
    .field("web", ParamType::Object, false, "Web push overrides.")
    .body::<PushPublish>()
}

pub fn unregister_push_device() -> Endpoint {
    Endpoint::delete(
        "delete_push_deviceRegistrations_device_id",
        "/push/deviceRegistrations/{device_id}",
        "Unregister a single device for push notifications",
    )
    .path_param("device_id", DEVICE_ID)
}

pub fn get_push_device_details() -> Endpoint {
    Endpoint::get(
        "get_push_deviceRegistrations_device_id",
        "/push/deviceRegistrations/{device_id}",
        "Get a device registration",
    )
    .path_param("device_id", DEVICE_ID)
    .returns::<DeviceDetails>()
}

pub fn patch_push_device_details() -> Endpoint {
    device_details_fields(
        Endpoint::patch(
            "patch_push_deviceRegistrations_device_id",
            "/push/deviceRegistrations/{device_id}",
            "Update a device registration",
        )
        .path_param("device_id", DEVICE_ID),
    )
}

pub fn put_push_device_details() -> Endpoint {
    device_details_fields(
        Endpoint::put(
            "put_push_deviceRegistrations_device_id",
            "/push/deviceRegistrations/{device_id}",
            "Update a device registration",
        )
        .path_param("device_id", DEVICE_ID),
    )
}

pub fn update_push_device_details() -> Endpoint {
    Endpoint::get(
        "get_push_deviceRegistrations_device_id_resetUpdateToken",
        "/push/deviceRegistrations/{device_id}/resetUpdateToken",
        "Reset a registered device's update token",
    )
    .path_param("device_id", DEVICE_ID)
    .returns::<serde_json::Value>()
}
