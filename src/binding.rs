//! Like Binding Table
//!
//! Typed mapping from a like target to the reactive state behind its
//! count display and heart icon. Filled once when the page is bound.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use leptos::prelude::*;

use crate::models::{HeartIcon, LikeResponse, LikeTarget};

/// Reactive handles for one target's count and icon
#[derive(Clone, Copy)]
pub struct LikeBinding {
    pub likes: RwSignal<u64>,
    pub liked: RwSignal<bool>,
}

impl LikeBinding {
    pub fn new(likes: u64, liked: bool) -> Self {
        Self {
            likes: RwSignal::new(likes),
            liked: RwSignal::new(liked),
        }
    }

    /// Text for the count element
    pub fn count_text(&self) -> String {
        self.likes.get().to_string()
    }

    /// Class attribute for the icon element
    pub fn icon_class(&self) -> &'static str {
        HeartIcon::for_liked(self.liked.get()).class()
    }

    /// Overwrite both handles with the server's answer
    pub fn apply(&self, response: &LikeResponse) {
        self.likes.set(response.likes);
        self.liked.set(response.liked);
    }
}

#[derive(Clone, Default)]
pub struct BindingTable {
    bindings: HashMap<LikeTarget, LikeBinding>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target. The first binding for a target stays; returns false
    /// when the target was already bound.
    pub fn bind(&mut self, target: LikeTarget, binding: LikeBinding) -> bool {
        match self.bindings.entry(target) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(binding);
                true
            }
        }
    }

    pub fn get(&self, target: &LikeTarget) -> Option<LikeBinding> {
        self.bindings.get(target).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
