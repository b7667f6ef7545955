#![allow(warnings)]
//! Portfolio Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controllers;
mod error;
mod fallback;
mod models;
mod render;
mod scroll;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_2(
        &"%c👋 Hello! Welcome to my portfolio.".into(),
        &"color: #0066ff; font-size: 20px; font-weight: bold;".into(),
    );
    web_sys::console::log_2(
        &"%cFeel free to explore the code and reach out if you have any questions!".into(),
        &"color: #9ca3af; font-size: 14px;".into(),
    );
    mount_to_body(App);
}
