//! Declarative table of the platform's REST operations, one module per API
//! area.

mod authentication;
mod history;
mod publishing;
mod push;
mod stats;
mod status;

use crate::tools::endpoint::Endpoint;

const CHANNEL_ID: &str = "The channel's ID.";

/// Every endpoint, in the order the registry advertises them.
pub fn all() -> Vec<Endpoint> {
    vec![
        stats::get_time(),
        status::get_metadata_of_all_channels(),
        status::get_presence_of_channel(),
        push::unregister_all_push_devices(),
        push::get_registered_push_devices(),
        push::register_push_device(),
        stats::get_stats(),
        history::get_messages_by_channel(),
        publishing::publish_messages_to_channel(),
        push::subscribe_push_device_to_channel(),
        push::delete_push_device_details(),
        push::get_push_subscriptions_on_channels(),
        push::get_channels_with_push_subscribers(),
        push::publish_push_notification_to_devices(),
        status::get_metadata_of_channel(),
        history::get_presence_history_of_channel(),
        authentication::request_access_token(),
        push::unregister_push_device(),
        push::get_push_device_details(),
        push::patch_push_device_details(),
        push::put_push_device_details(),
        push::update_push_device_details(),
    ]
}
