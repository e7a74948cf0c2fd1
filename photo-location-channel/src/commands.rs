use photo_location_core::UpdateRequest;

use crate::models::{MethodCall, UpdatePhotoLocationArgs};
use crate::{Error, METHOD_UPDATE_PHOTO_LOCATION, Result};

/// 解析方法调用
///
/// Unknown method names are reported as such, never as a failed update.
pub(crate) fn parse_update_request(call: &MethodCall) -> Result<UpdateRequest> {
    if call.method != METHOD_UPDATE_PHOTO_LOCATION {
        return Err(Error::UnknownOperation(call.method.clone()));
    }

    let args: UpdatePhotoLocationArgs = serde_json::from_value(call.arguments.clone())
        .map_err(|e| Error::InvalidArguments(e.to_string()))?;

    Ok(args.into())
}
