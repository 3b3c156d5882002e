use crate::appliance::dto::*;
use crate::topic::Topic;

pub const USAGE_REQUEST_TOPIC: Topic<UsageRequest> = Topic::new("Usage/request");
