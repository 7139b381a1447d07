use super::CHANNEL_ID;
use crate::core::tool::ParamType;
use crate::tools::endpoint::Endpoint;

fn paginated(endpoint: Endpoint) -> Endpoint {
    endpoint
        .query("start", ParamType::String, "")
        .query("limit", ParamType::Number, "")
        .query("end", ParamType::String, "")
        .query("direction", ParamType::String, "")
}

pub fn get_messages_by_channel() -> Endpoint {
    paginated(
        Endpoint::get(
            "get_channels_channel_id_messages",
            "/channels/{channel_id}/messages",
            "Get message history for a channel",
        )
        .path_param("channel_id", CHANNEL_ID),
    )
    .returns::<serde_json::Value>()
}

pub fn get_presence_history_of_channel() -> Endpoint {
    paginated(
        Endpoint::get(
            "get_channels_channel_id_presence_history",
            "/channels/{channel_id}/presence/history",
            "Get presence history of a channel",
        )
        .path_param("channel_id", CHANNEL_ID),
    )
    .returns::<serde_json::Value>()
}
