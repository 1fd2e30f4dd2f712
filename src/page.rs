//! Page Binding
//!
//! Attaches to the like controls the server rendered: builds the binding
//! table, renders binding state into the existing elements, and wires clicks.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::binding::{BindingTable, LikeBinding};
use crate::commands::LikeApi;
use crate::handler::LikeToggleHandler;
use crate::models::{HeartIcon, LikeTarget};
use crate::notify::Notifier;

/// Matches post and comment heart icons
const ICON_SELECTOR: &str = "[id^='like-button-'], [id^='comment-like-button-']";

/// Bound controls found on the page
pub struct PageControls {
    pub table: BindingTable,
    icons: Vec<(LikeTarget, Element)>,
}

impl PageControls {
    /// Register a click listener on every bound icon
    pub fn attach_listeners<A, N>(&self, handler: Rc<LikeToggleHandler<A, N>>)
    where
        A: LikeApi + 'static,
        N: Notifier + 'static,
    {
        for (target, icon) in &self.icons {
            let handler = handler.clone();
            let target = target.clone();
            let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
                let handler = handler.clone();
                let target = target.clone();
                spawn_local(async move {
                    handler.toggle_like(target).await;
                });
            });
            let _ = icon.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();
        }
    }
}

/// Write access to one bound element
pub trait LikeElement {
    fn set_text(&self, text: &str);
    fn set_class(&self, class: &str);
}

impl LikeElement for Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_class(&self, class: &str) {
        let _ = self.set_attribute("class", class);
    }
}

/// Scan the document and bind every icon that has a matching count element
pub fn bind_page(document: &Document) -> PageControls {
    let mut table = BindingTable::new();
    let mut icons = Vec::new();

    let nodes = match document.query_selector_all(ICON_SELECTOR) {
        Ok(nodes) => nodes,
        Err(e) => {
            web_sys::console::error_1(&format!("[LIKE] Icon query failed: {:?}", e).into());
            return PageControls { table, icons };
        }
    };

    for i in 0..nodes.length() {
        let Some(icon) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(target) = LikeTarget::from_icon_element_id(&icon.id()) else {
            continue;
        };
        // first icon in document order wins, like getElementById
        if table.get(&target).is_some() {
            web_sys::console::warn_1(&format!("[LIKE] Duplicate icon for {}, skipping", target).into());
            continue;
        }
        let Some(count) = document.get_element_by_id(&target.count_element_id()) else {
            web_sys::console::warn_1(&format!("[LIKE] No count element for {}, skipping", target).into());
            continue;
        };

        let (likes, liked) = seed_state(count.text_content().as_deref(), icon.get_attribute("class").as_deref());
        let binding = LikeBinding::new(likes, liked);
        render_into(binding, count, icon.clone());

        table.bind(target.clone(), binding);
        icons.push((target, icon));
    }

    web_sys::console::log_1(&format!("[LIKE] Bound {} like controls", table.len()).into());
    PageControls { table, icons }
}

/// Keep the count text and icon class in step with the binding once it changes
fn render_into<E: LikeElement + 'static>(binding: LikeBinding, count: E, icon: E) {
    Effect::new(move |prev: Option<()>| sync_count(prev, &binding, &count));
    Effect::new(move |prev: Option<()>| sync_icon(prev, &binding, &icon));
}

/// One effect run for the count element. Reads the signal on every run so the
/// effect stays subscribed, but leaves the server-rendered text alone on the first.
fn sync_count<E: LikeElement>(prev: Option<()>, binding: &LikeBinding, count: &E) {
    let text = binding.count_text();
    if let Some(text) = after_first_run(prev, text) {
        count.set_text(&text);
    }
}

fn sync_icon<E: LikeElement>(prev: Option<()>, binding: &LikeBinding, icon: &E) {
    let class = binding.icon_class();
    if let Some(class) = after_first_run(prev, class) {
        icon.set_class(class);
    }
}

/// `None` on an effect's initial run, the value afterwards
fn after_first_run<T>(prev: Option<()>, value: T) -> Option<T> {
    prev.map(|_| value)
}

/// Initial state from what the server rendered
fn seed_state(count_text: Option<&str>, icon_class: Option<&str>) -> (u64, bool) {
    let likes = count_text
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(0);
    let liked = icon_class.map(HeartIcon::is_filled_class).unwrap_or(false);
    (likes, liked)
}
