use crate::theme::CARD_STYLE;
use dioxus::prelude::*;

#[component]
pub fn SummaryCard(title: String, value: String) -> Element {
    rsx! {
        div { style: CARD_STYLE,
            h3 { "{title}" }
            p { "{value}" }
        }
    }
}
