#![allow(non_snake_case)]

pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod theme;
pub mod views;
#[cfg(feature = "desktop")]
pub mod window;

use dioxus::prelude::*;
use state::DashboardStateProvider;
use views::dashboard::Dashboard;

pub fn App() -> Element {
    rsx! {
        DashboardStateProvider { Dashboard {} }
    }
}

/// Loads settings, installs the log subscriber and opens the dashboard window.
#[cfg(feature = "desktop")]
pub fn run_app() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    dotenvy::dotenv().ok();

    let loaded = config::Settings::new();
    let log_level = loaded
        .as_ref()
        .map(|s| s.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("mpox_dashboard={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            config::Settings::default()
        }
    };
    let desktop_config = window::desktop_config(&settings);
    if !config::install_settings(settings) {
        tracing::warn!("Settings were already resolved; startup settings ignored");
    }

    LaunchBuilder::new().with_cfg(desktop_config).launch(App);
}
