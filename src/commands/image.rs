//! Image Commands
//!
//! Listing the images stored on the companion server.

use crate::context::ApiConfig;
use crate::error::ApiError;
use crate::models::ImageRecord;
use super::{send, LedRequest};

pub async fn list_images(config: &ApiConfig) -> Result<Vec<ImageRecord>, ApiError> {
    let response = send(LedRequest::list_images(config)).await?;
    let body = response.text().await?;
    decode_image_list(&body)
}

/// Parse the `/image/` payload, keeping the server's order.
pub fn decode_image_list(body: &str) -> Result<Vec<ImageRecord>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_keeps_server_order() {
        let records = decode_image_list(r#"[{"name":"b.png"},{"name":"a.png"},{"name":"c.png"}]"#).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b.png", "a.png", "c.png"]);
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let records = decode_image_list(r#"[{"name":"a.png","size":1024,"mtime":1600000000}]"#).unwrap();
        assert_eq!(records, vec![ImageRecord::new("a.png")]);
    }

    #[test]
    fn test_decode_empty_list() {
        assert_eq!(decode_image_list("[]").unwrap(), Vec::<ImageRecord>::new());
    }

    #[test]
    fn test_decode_rejects_non_list() {
        assert!(matches!(decode_image_list("<html>oops</html>"), Err(ApiError::Decode(_))));
        assert!(matches!(decode_image_list(r#"{"name":"a.png"}"#), Err(ApiError::Decode(_))));
        assert!(matches!(decode_image_list(r#"[{"title":"a.png"}]"#), Err(ApiError::Decode(_))));
    }
}
