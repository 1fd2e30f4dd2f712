//! Like Commands
//!
//! Frontend bindings for the post/comment like toggle endpoints.

use async_trait::async_trait;

use crate::config::LikeConfig;
use crate::error::ToggleFailed;
use crate::models::{LikeResponse, LikeTarget};
use super::post_empty;

/// Sends one toggle request for a target
#[async_trait(?Send)]
pub trait LikeApi {
    async fn toggle(&self, target: &LikeTarget) -> Result<LikeResponse, ToggleFailed>;
}

/// `POST /like-post/{id}` and `POST /like-comment/{id}` over `fetch`
#[derive(Debug, Clone, Default)]
pub struct HttpLikeApi {
    config: LikeConfig,
}

impl HttpLikeApi {
    pub fn new(config: LikeConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl LikeApi for HttpLikeApi {
    async fn toggle(&self, target: &LikeTarget) -> Result<LikeResponse, ToggleFailed> {
        let body = post_empty(&self.config.endpoint_url(target)).await?;
        LikeResponse::from_json(&body)
    }
}

