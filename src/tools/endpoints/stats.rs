use crate::core::tool::ParamType;
use crate::tools::endpoint::Endpoint;

pub fn get_time() -> Endpoint {
    Endpoint::get("get_time", "/time", "Get the service time")
}

pub fn get_stats() -> Endpoint {
    Endpoint::get(
        "get_stats",
        "/stats",
        "Retrieve usage statistics for an application",
    )
    .query("start", ParamType::String, "")
    .query("limit", ParamType::Number, "")
    .query("end", ParamType::String, "")
    .query("direction", ParamType::String, "")
    .query(
        "unit",
        ParamType::String,
        "Specifies the unit of aggregation in the returned results.",
    )
    .returns::<serde_json::Value>()
}
