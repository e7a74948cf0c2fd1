use photo_location_core::{GeoLocation, UpdateOutcome, UpdateRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Incoming method call envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// Reply to a method call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "result", rename_all = "camelCase")]
pub enum MethodResponse {
    Success(Value),
    /// The method name is not handled by this channel
    NotImplemented,
}

impl MethodResponse {
    /// Boolean payload of a `Success` reply
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Success(value) => value.as_bool(),
            Self::NotImplemented => None,
        }
    }
}

impl From<UpdateOutcome> for MethodResponse {
    fn from(outcome: UpdateOutcome) -> Self {
        Self::Success(Value::Bool(outcome.is_success()))
    }
}

/// `updatePhotoLocation` arguments
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePhotoLocationArgs {
    pub local_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<UpdatePhotoLocationArgs> for UpdateRequest {
    fn from(args: UpdatePhotoLocationArgs) -> Self {
        UpdateRequest::new(args.local_id, GeoLocation::new(args.latitude, args.longitude))
    }
}
