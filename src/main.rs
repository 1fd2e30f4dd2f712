#![allow(warnings)]
//! Blog Likes Frontend Entry Point

mod models;
mod error;
mod config;
mod commands;
mod binding;
mod notify;
mod handler;
mod page;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
