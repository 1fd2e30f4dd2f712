//! Like Toggle Handler
//!
//! One click = one request, then either render the server's answer or notify.

use crate::binding::{BindingTable, LikeBinding};
use crate::commands::LikeApi;
use crate::error::ToggleFailed;
use crate::models::{LikeResponse, LikeTarget};
use crate::notify::Notifier;

pub struct LikeToggleHandler<A, N> {
    api: A,
    notifier: N,
    bindings: BindingTable,
}

impl<A: LikeApi, N: Notifier> LikeToggleHandler<A, N> {
    pub fn new(api: A, notifier: N, bindings: BindingTable) -> Self {
        Self { api, notifier, bindings }
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Fire-and-forget entry point for click handlers
    pub async fn toggle_like(&self, target: LikeTarget) {
        match self.request(&target).await {
            Ok((binding, response)) => binding.apply(&response),
            Err(e) => self.notifier.notify_failure(&target, &e),
        }
    }

    async fn request(&self, target: &LikeTarget) -> Result<(LikeBinding, LikeResponse), ToggleFailed> {
        let response = self.api.toggle(target).await?;
        // the page lookup happens after the request, so an unbound target still hits the server
        let binding = self
            .bindings
            .get(target)
            .ok_or_else(|| ToggleFailed::new(format!("no like controls for {} on this page", target)))?;
        Ok((binding, response))
    }
}
