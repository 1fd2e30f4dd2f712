//! Frontend Models
//!
//! Like targets, the server's toggle response, and the page keys derived from them.

use std::fmt;

use serde::Deserialize;

use crate::error::ToggleFailed;

/// Opaque post/comment identifier as it appears in URLs and element ids
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetId(String);

impl TargetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TargetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u32> for TargetId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Post,
    Comment,
}

impl TargetKind {
    /// Word used in user-facing messages
    pub fn noun(self) -> &'static str {
        match self {
            TargetKind::Post => "post",
            TargetKind::Comment => "comment",
        }
    }

    pub fn failure_message(self) -> String {
        format!("Could not like {}.", self.noun())
    }

    fn endpoint(self) -> &'static str {
        match self {
            TargetKind::Post => "like-post",
            TargetKind::Comment => "like-comment",
        }
    }

    fn count_prefix(self) -> &'static str {
        match self {
            TargetKind::Post => "likes-count-",
            TargetKind::Comment => "comment-likes-count-",
        }
    }

    fn icon_prefix(self) -> &'static str {
        match self {
            TargetKind::Post => "like-button-",
            TargetKind::Comment => "comment-like-button-",
        }
    }
}

/// A post or comment that can be liked
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LikeTarget {
    Post(TargetId),
    Comment(TargetId),
}

impl LikeTarget {
    pub fn post(id: impl Into<TargetId>) -> Self {
        LikeTarget::Post(id.into())
    }

    pub fn comment(id: impl Into<TargetId>) -> Self {
        LikeTarget::Comment(id.into())
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            LikeTarget::Post(_) => TargetKind::Post,
            LikeTarget::Comment(_) => TargetKind::Comment,
        }
    }

    pub fn id(&self) -> &TargetId {
        match self {
            LikeTarget::Post(id) | LikeTarget::Comment(id) => id,
        }
    }

    /// Endpoint name without leading slash, e.g. `like-post`
    pub fn endpoint(&self) -> &'static str {
        self.kind().endpoint()
    }

    /// Element id of the count display, e.g. `likes-count-42`
    pub fn count_element_id(&self) -> String {
        format!("{}{}", self.kind().count_prefix(), self.id())
    }

    /// Element id of the heart icon, e.g. `comment-like-button-c9`
    pub fn icon_element_id(&self) -> String {
        format!("{}{}", self.kind().icon_prefix(), self.id())
    }

    /// Inverse of [`LikeTarget::icon_element_id`]
    pub fn from_icon_element_id(element_id: &str) -> Option<Self> {
        // `comment-like-button-` ends with `like-button-`, so check comments first
        let (kind, rest) = if let Some(rest) = element_id.strip_prefix(TargetKind::Comment.icon_prefix()) {
            (TargetKind::Comment, rest)
        } else if let Some(rest) = element_id.strip_prefix(TargetKind::Post.icon_prefix()) {
            (TargetKind::Post, rest)
        } else {
            return None;
        };
        if rest.is_empty() {
            return None;
        }
        Some(match kind {
            TargetKind::Post => LikeTarget::post(rest),
            TargetKind::Comment => LikeTarget::comment(rest),
        })
    }
}

impl fmt::Display for LikeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind().noun(), self.id())
    }
}

/// Server result of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LikeResponse {
    pub likes: u64,
    pub liked: bool,
}

impl LikeResponse {
    pub fn from_json(body: &str) -> Result<Self, ToggleFailed> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Font Awesome heart classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartIcon {
    Filled,
    Outline,
}

impl HeartIcon {
    pub fn for_liked(liked: bool) -> Self {
        if liked { HeartIcon::Filled } else { HeartIcon::Outline }
    }

    pub fn class(self) -> &'static str {
        match self {
            HeartIcon::Filled => "fa-solid fa-heart",
            HeartIcon::Outline => "fa-regular fa-heart",
        }
    }

    /// Reads the liked state back from a rendered class attribute
    pub fn is_filled_class(class: &str) -> bool {
        class.split_whitespace().any(|c| c == "fa-solid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids() {
        let post = LikeTarget::post(42u32);
        assert_eq!(post.count_element_id(), "likes-count-42");
        assert_eq!(post.icon_element_id(), "like-button-42");

        let comment = LikeTarget::comment("c9");
        assert_eq!(comment.count_element_id(), "comment-likes-count-c9");
        assert_eq!(comment.icon_element_id(), "comment-like-button-c9");
    }

    #[test]
    fn test_icon_id_parses_back() {
        for target in [LikeTarget::post(7u32), LikeTarget::comment("c9"), LikeTarget::post("slug-with-dash")] {
            let parsed = LikeTarget::from_icon_element_id(&target.icon_element_id());
            assert_eq!(parsed, Some(target));
        }
    }

    #[test]
    fn test_comment_icon_is_never_a_post() {
        assert_eq!(
            LikeTarget::from_icon_element_id("comment-like-button-3"),
            Some(LikeTarget::comment(3u32))
        );
        assert_eq!(LikeTarget::from_icon_element_id("like-button-"), None);
        assert_eq!(LikeTarget::from_icon_element_id("likes-count-3"), None);
    }

    #[test]
    fn test_failure_messages_differ() {
        let post = TargetKind::Post.failure_message();
        let comment = TargetKind::Comment.failure_message();
        assert_eq!(post, "Could not like post.");
        assert_eq!(comment, "Could not like comment.");
        assert_ne!(post, comment);
    }

    #[test]
    fn test_parse_response() {
        let resp = LikeResponse::from_json(r#"{"likes": 7, "liked": true}"#).unwrap();
        assert_eq!(resp, LikeResponse { likes: 7, liked: true });

        // extra fields are ignored
        let resp = LikeResponse::from_json(r#"{"likes": 0, "liked": false, "extra": 1}"#).unwrap();
        assert_eq!(resp, LikeResponse { likes: 0, liked: false });
    }

    #[test]
    fn test_parse_response_rejects_bad_bodies() {
        assert!(LikeResponse::from_json("<html>404</html>").is_err());
        assert!(LikeResponse::from_json(r#"{"likes": -1, "liked": true}"#).is_err());
        assert!(LikeResponse::from_json(r#"{"likes": 3}"#).is_err());
        assert!(LikeResponse::from_json(r#"{"likes": 3, "liked": "yes"}"#).is_err());
    }

    #[test]
    fn test_parse_response_large_count() {
        let resp = LikeResponse::from_json(r#"{"likes": 5000000000, "liked": false}"#).unwrap();
        assert_eq!(resp.likes, 5_000_000_000);
    }

    #[test]
    fn test_heart_classes() {
        assert_eq!(HeartIcon::for_liked(true).class(), "fa-solid fa-heart");
        assert_eq!(HeartIcon::for_liked(false).class(), "fa-regular fa-heart");
        assert!(HeartIcon::is_filled_class("fa-solid fa-heart"));
        assert!(!HeartIcon::is_filled_class("fa-regular fa-heart"));
        assert!(!HeartIcon::is_filled_class("fa-solidish"));
    }
}
