use crate::core::tool::ParamType;
use crate::models::{TokenDetails, TokenRequest};
use crate::tools::endpoint::Endpoint;

pub fn request_access_token() -> Endpoint {
    Endpoint::post(
        "post_keys_keyName_requestToken",
        "/keys/{keyName}/requestToken",
        "Request an access token",
    )
    .path_param(
        "keyName",
        "The key name comprises of the app ID and key ID of an API key.",
    )
    .field(
        "capability",
        ParamType::String,
        false,
        "JSON-encoded capability map for the requested token.",
    )
    .field(
        "clientId",
        ParamType::String,
        false,
        "The client ID to associate with the token.",
    )
    .field(
        "mac",
        ParamType::String,
        false,
        "HMAC of the token request, signed with the key secret.",
    )
    .field("nonce", ParamType::String, false, "Unique nonce for this request.")
    .field(
        "timestamp",
        ParamType::Number,
        false,
        "Time of the request, as milliseconds since the epoch.",
    )
    .field(
        "ttl",
        ParamType::Number,
        false,
        "Requested time to live for the token, in milliseconds.",
    )
    .body::<TokenRequest>()
    .returns::<TokenDetails>()
}
