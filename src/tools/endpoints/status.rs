use super::CHANNEL_ID;
use crate::core::tool::ParamType;
use crate::models::ChannelDetails;
use crate::tools::endpoint::Endpoint;

pub fn get_metadata_of_all_channels() -> Endpoint {
    Endpoint::get(
        "get_channels",
        "/channels",
        "Enumerate all active channels of the application",
    )
    .query("limit", ParamType::Number, "")
    .query(
        "prefix",
        ParamType::String,
        "Optionally limits the query to only those channels whose name starts with the given prefix",
    )
    .query(
        "by",
        ParamType::String,
        "optionally specifies whether to return just channel names (by=id) or ChannelDetails (by=value)",
    )
    .returns::<serde_json::Value>()
}

pub fn get_presence_of_channel() -> Endpoint {
    Endpoint::get(
        "get_channels_channel_id_presence",
        "/channels/{channel_id}/presence",
        "Get presence of a channel",
    )
    .path_param("channel_id", CHANNEL_ID)
    .query(
        "clientId",
        ParamType::String,
        "Optional filter to restrict members present with that clientId",
    )
    .query(
        "connectionId",
        ParamType::String,
        "Optional filter to restrict members present with that connectionId",
    )
    .query("limit", ParamType::Number, "")
    .returns::<serde_json::Value>()
}

pub fn get_metadata_of_channel() -> Endpoint {
    Endpoint::get(
        "get_channels_channel_id",
        "/channels/{channel_id}",
        "Get metadata of a channel",
    )
    .path_param("channel_id", CHANNEL_ID)
    .returns::<ChannelDetails>()
}
