//! Request Descriptions
//!
//! Every call the panel makes, as plain data: method, URL and body.
//! Building is pure; only `super::send` touches the browser.

use crate::context::ApiConfig;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    /// Text fields sent as `FormData`
    Form(Vec<(&'static str, String)>),
    /// A single file part, filename taken from the file itself
    File { field: &'static str, file: web_sys::File },
}

impl RequestBody {
    /// Text fields of a form body, empty for other bodies
    #[cfg(test)]
    pub fn form_fields(&self) -> &[(&'static str, String)] {
        match self {
            RequestBody::Form(fields) => fields,
            _ => &[],
        }
    }

    pub fn into_form_data(self) -> Result<Option<web_sys::FormData>, ApiError> {
        let form = match self {
            RequestBody::Empty => return Ok(None),
            RequestBody::Form(fields) => {
                let form = web_sys::FormData::new().map_err(ApiError::from_js)?;
                for (key, value) in &fields {
                    form.set_with_str(key, value).map_err(ApiError::from_js)?;
                }
                form
            }
            RequestBody::File { field, file } => {
                let form = web_sys::FormData::new().map_err(ApiError::from_js)?;
                form.set_with_blob_and_filename(field, &file, &file.name())
                    .map_err(ApiError::from_js)?;
                form
            }
        };
        Ok(Some(form))
    }
}

#[derive(Debug, Clone)]
pub struct LedRequest {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
}

impl LedRequest {
    fn post(url: String, body: RequestBody) -> Self {
        Self { method: Method::Post, url, body }
    }

    pub fn list_images(config: &ApiConfig) -> Self {
        Self { method: Method::Get, url: config.url("/image/"), body: RequestBody::Empty }
    }

    pub fn clear(config: &ApiConfig) -> Self {
        Self::post(config.url("/led/clear"), RequestBody::Empty)
    }

    pub fn upload(config: &ApiConfig, file: web_sys::File) -> Self {
        Self::post(config.url("/led/upload"), RequestBody::File { field: "file", file })
    }

    pub fn download(config: &ApiConfig, url: &str) -> Self {
        Self::post(
            config.url("/led/download"),
            RequestBody::Form(vec![("url", url.to_string())]),
        )
    }

    /// Offsets are forwarded as typed; the server rejects malformed ones.
    pub fn display(config: &ApiConfig, name: &str, x: &str, y: &str) -> Self {
        Self::post(
            config.named_url("/led/display/", name),
            RequestBody::Form(vec![("x", x.to_string()), ("y", y.to_string())]),
        )
    }

    pub fn delete(config: &ApiConfig, name: &str) -> Self {
        Self::post(config.named_url("/led/delete/", name), RequestBody::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(request: &LedRequest) -> Vec<(&str, &str)> {
        request.body.form_fields().iter().map(|(k, v)| (*k, v.as_str())).collect()
    }

    #[test]
    fn test_list_is_get() {
        let request = LedRequest::list_images(&ApiConfig::default());
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "/image/");
        assert!(matches!(request.body, RequestBody::Empty));
    }

    #[test]
    fn test_display_posts_offsets_verbatim() {
        let request = LedRequest::display(&ApiConfig::default(), "a.png", "10", "-5");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "/led/display/a.png");
        assert_eq!(fields(&request), vec![("x", "10"), ("y", "-5")]);
    }

    #[test]
    fn test_display_does_not_validate_offsets() {
        let request = LedRequest::display(&ApiConfig::default(), "a.png", "", "abc");
        assert_eq!(fields(&request), vec![("x", ""), ("y", "abc")]);
    }

    #[test]
    fn test_delete_has_no_body() {
        let request = LedRequest::delete(&ApiConfig::new("http://ledpi:5000"), "foo.png");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://ledpi:5000/led/delete/foo.png");
        assert!(matches!(request.body, RequestBody::Empty));
    }

    #[test]
    fn test_clear_and_download() {
        let config = ApiConfig::default();
        let clear = LedRequest::clear(&config);
        assert_eq!(clear.url, "/led/clear");
        assert!(clear.body.form_fields().is_empty());

        let download = LedRequest::download(&config, "http://example.com/cat.png");
        assert_eq!(download.url, "/led/download");
        assert_eq!(fields(&download), vec![("url", "http://example.com/cat.png")]);
    }
}
