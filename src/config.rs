//! Endpoint Configuration
//!
//! Where the like endpoints live. Defaults to same-origin relative paths.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::LikeTarget;

/// Page meta tag that overrides the API base
pub const API_BASE_META: &str = "like-api-base";

/// Characters escaped inside one path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
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

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeConfig {
    /// Prefix for endpoint paths, without trailing slash. Empty = same origin.
    pub api_base: String,
}

impl LikeConfig {
    pub fn with_api_base(base: &str) -> Self {
        Self {
            api_base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `<meta name="like-api-base" content="...">` if the page has one
    pub fn from_document(document: &web_sys::Document) -> Self {
        let selector = format!("meta[name='{}']", API_BASE_META);
        let content = document
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"));
        Self::from_meta_content(content.as_deref())
    }

    /// Missing or blank meta content keeps the same-origin default
    fn from_meta_content(content: Option<&str>) -> Self {
        content.map(Self::with_api_base).unwrap_or_default()
    }

    /// `/like-post/{id}` or `/like-comment/{id}` under the configured base
    pub fn endpoint_url(&self, target: &LikeTarget) -> String {
        format!(
            "{}/{}/{}",
            self.api_base,
            target.endpoint(),
            utf8_percent_encode(target.id().as_str(), PATH_SEGMENT)
        )
    }
}
