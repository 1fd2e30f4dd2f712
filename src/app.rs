//! Blog Likes App
//!
//! Root component. Binds the server-rendered like controls; renders no markup itself.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::HttpLikeApi;
use crate::config::LikeConfig;
use crate::handler::LikeToggleHandler;
use crate::notify::AlertNotifier;
use crate::page;

#[component]
pub fn App() -> impl IntoView {
    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        web_sys::console::error_1(&"[APP] No document, like controls left unbound".into());
        return;
    };

    let config = LikeConfig::from_document(&document);
    web_sys::console::log_1(&format!("[APP] Like API base: {:?}", config.api_base).into());

    let controls = page::bind_page(&document);
    let handler = Rc::new(LikeToggleHandler::new(
        HttpLikeApi::new(config),
        AlertNotifier,
        controls.table.clone(),
    ));
    controls.attach_listeners(handler);
}
