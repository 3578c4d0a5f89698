use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::ValidationError;
use crate::domain::value_objects::ReplayId;

/// A submission that has passed the shape checks done at the boundary:
/// exactly one payload part, within the size ceiling.
///
/// Whether the payload is well-formed JSON is decided by the upload use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySubmission {
    payload: Bytes,
}

impl ReplaySubmission {
    pub fn from_parts(mut parts: Vec<Bytes>, max_bytes: usize) -> Result<Self, ValidationError> {
        if parts.len() != 1 {
            return Err(ValidationError::Multiplicity(parts.len()));
        }

        let payload = parts.remove(0);
        if payload.len() > max_bytes {
            return Err(ValidationError::TooLarge {
                size: payload.len(),
                max: max_bytes,
            });
        }

        Ok(Self { payload })
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// Response for a successful upload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub id: ReplayId,
}

/// Response listing every known replay id
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReplayListResponse {
    pub uploads: Vec<ReplayId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_part_is_accepted() {
        let submission =
            ReplaySubmission::from_parts(vec![Bytes::from_static(b"{}")], 1024).unwrap();
        assert_eq!(submission.payload(), b"{}");
    }

    #[test]
    fn test_zero_parts_is_rejected() {
        let err = ReplaySubmission::from_parts(vec![], 1024).unwrap_err();
        assert_eq!(err, ValidationError::Multiplicity(0));
    }

    #[test]
    fn test_two_parts_are_rejected() {
        let parts = vec![Bytes::from_static(b"{}"), Bytes::from_static(b"[]")];
        let err = ReplaySubmission::from_parts(parts, 1024).unwrap_err();
        assert_eq!(err, ValidationError::Multiplicity(2));
    }

    #[test]
    fn test_oversized_part_is_rejected() {
        let parts = vec![Bytes::from(vec![b' '; 11])];
        let err = ReplaySubmission::from_parts(parts, 10).unwrap_err();
        assert_eq!(err, ValidationError::TooLarge { size: 11, max: 10 });
    }

    #[test]
    fn test_list_response_shape() {
        let id = ReplayId::new();
        let json = serde_json::to_value(ReplayListResponse { uploads: vec![id] }).unwrap();
        assert_eq!(json["uploads"][0], id.to_string());
    }
}
