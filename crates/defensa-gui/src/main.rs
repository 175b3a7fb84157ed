//! Defensa Desk - desktop client for the university defense record-keeping
//! backend: account registration and approval, student and professor records
//! with filtered search, and the reference-data lookups behind them.
//!
//! Built with Iced using the Elm architecture (State, Message, Update, View).

mod app;
mod component;
mod message;
mod service;
mod settings;
mod state;
mod theme;
mod view;

use iced::Size;
use iced::window;

use app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Defensa Desk");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(1100.0, 720.0),
            min_size: Some(Size::new(900.0, 600.0)),
            ..Default::default()
        })
        .run()
}
