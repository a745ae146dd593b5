//! Response Envelopes
//!
//! List endpoints answer `{ "data": [...], "success": true }`; some servers
//! answer with the bare array, which is read as a successful envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Vec<T>,
    pub success: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Wrapped(Envelope<T>),
    Bare(Vec<T>),
}

impl<T: DeserializeOwned> Envelope<T> {
    pub fn decode(body: &str) -> ApiResult<Self> {
        let parsed: ListBody<T> = serde_json::from_str(body)?;
        Ok(match parsed {
            ListBody::Wrapped(envelope) => envelope,
            ListBody::Bare(data) => Envelope {
                data,
                success: true,
            },
        })
    }

    /// Records of a successful envelope
    pub fn into_data(self) -> ApiResult<Vec<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected(
                "Server reported an unsuccessful response".to_string(),
            ))
        }
    }
}

/// Body of DELETE responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Class;

    #[test]
    fn test_wrapped_and_bare_decode_alike() {
        let wrapped = Envelope::<Class>::decode(
            r#"{"data":[{"id":1,"name":"5А"},{"id":2,"name":"5Б"}],"success":true}"#,
        )
        .unwrap();
        let bare = Envelope::<Class>::decode(r#"[{"id":1,"name":"5А"},{"id":2,"name":"5Б"}]"#)
            .unwrap();
        assert_eq!(wrapped, bare);
        assert_eq!(wrapped.into_data().unwrap().len(), 2);
    }

    #[test]
    fn test_unsuccessful_envelope_is_error() {
        let envelope = Envelope::<Class>::decode(r#"{"data":[],"success":false}"#).unwrap();
        assert!(matches!(envelope.into_data(), Err(ApiError::Rejected(_))));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let result = Envelope::<Class>::decode(r#"{"rows":[]}"#);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
