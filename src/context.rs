//! Application Context
//!
//! Server location shared with every component via Leptos Context API.

use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// `<meta name="ledweb-api-base" content="http://ledpi.local:5000">` overrides the origin
const BASE_META_SELECTOR: &str = "meta[name=\"ledweb-api-base\"]";

/// Characters that would split or terminate a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Where the companion server lives. Empty base = same origin as the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from the page's meta tag, falling back to same origin.
    pub fn from_document() -> Self {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(BASE_META_SELECTOR).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"))
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute (or origin-relative) URL for a server path starting with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL for a route that ends with an image name
    pub fn named_url(&self, prefix: &str, name: &str) -> String {
        format!("{}{}{}", self.base_url, prefix, encode_segment(name))
    }

    /// Preview source for a stored image
    pub fn image_url(&self, name: &str) -> String {
        self.named_url("/image/", name)
    }
}

pub fn encode_segment(name: &str) -> String {
    utf8_percent_encode(name, SEGMENT).to_string()
}

/// Get the server config from context
pub fn use_api_config() -> ApiConfig {
    expect_context::<ApiConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        let config = ApiConfig::default();
        assert_eq!(config.url("/image/"), "/image/");
        assert_eq!(config.image_url("a.png"), "/image/a.png");
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = ApiConfig::new(" http://ledpi.local:5000/ ");
        assert_eq!(config.base_url(), "http://ledpi.local:5000");
        assert_eq!(config.url("/led/clear"), "http://ledpi.local:5000/led/clear");
    }

    #[test]
    fn test_plain_names_are_untouched() {
        assert_eq!(encode_segment("cat_01.png"), "cat_01.png");
        assert_eq!(encode_segment("a-b.png"), "a-b.png");
    }

    #[test]
    fn test_names_cannot_escape_their_segment() {
        assert_eq!(encode_segment("my cat.png"), "my%20cat.png");
        assert_eq!(encode_segment("../x?.png"), "..%2Fx%3F.png");
        assert_eq!(encode_segment("100%.png"), "100%25.png");
    }
}
