//! Failure Notification
//!
//! The single user-visible message shown when a toggle fails.

use crate::error::ToggleFailed;
use crate::models::LikeTarget;

pub trait Notifier {
    fn notify_failure(&self, target: &LikeTarget, error: &ToggleFailed);
}

/// Blocking `window.alert`, the way the blog page always reported it
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify_failure(&self, target: &LikeTarget, error: &ToggleFailed) {
        web_sys::console::warn_1(&format!("[LIKE] {}: {}", target, error).into());
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(&target.kind().failure_message());
        }
    }
}
