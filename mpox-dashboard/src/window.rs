use crate::config::Settings;
use crate::data::DASHBOARD_TITLE;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

pub fn desktop_config(settings: &Settings) -> Config {
    Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(DASHBOARD_TITLE)
                .with_inner_size(LogicalSize::new(
                    settings.window.width,
                    settings.window.height,
                ))
                .with_resizable(true),
        )
        .with_menu(None)
}
