use super::CHANNEL_ID;
use crate::core::tool::ParamType;
use crate::models::Message;
use crate::tools::endpoint::Endpoint;

pub fn publish_messages_to_channel() -> Endpoint {
    Endpoint::post(
        "post_channels_channel_id_messages",
        "/channels/{channel_id}/messages",
        "Publish a message to a channel",
    )
    .path_param("channel_id", CHANNEL_ID)
    .field(
        "timestamp",
        ParamType::Number,
        false,
        "Timestamp when the message was received, as milliseconds since the epoch.",
    )
    .field(
        "clientId",
        ParamType::String,
        false,
        "The client ID of the publisher of this message.",
    )
    .field(
        "connectionId",
        ParamType::String,
        false,
        "The connection ID of the publisher of this message.",
    )
    .field(
        "data",
        ParamType::String,
        false,
        "The string encoded payload, with the encoding specified below.",
    )
    .field(
        "encoding",
        ParamType::String,
        false,
        "Remaining transformations not applied to the data payload. Typically empty.",
    )
    .field(
        "extras",
        ParamType::Object,
        false,
        "Extras object. Currently only allows for the push extra.",
    )
    .field(
        "id",
        ParamType::String,
        false,
        "A unique ID that can be specified by the publisher for idempotent publishing.",
    )
    .field("name", ParamType::String, false, "The event name, if provided.")
    .body::<Message>()
    .returns::<serde_json::Value>()
}
