use crate::components::{CaseTable, SummaryCard};
use crate::data::DASHBOARD_TITLE;
use crate::state::{DashboardState, DisplayState};
use crate::theme::{CARDS_STYLE, PAGE_STYLE, WARNING_STYLE};
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<DashboardState>();
    let display = (state.display)();

    rsx! {
        DashboardView { state: display }
    }
}

/// Pure rendering of a [`DisplayState`].
#[component]
pub fn DashboardView(state: DisplayState) -> Element {
    let total = state.total();
    let status = state.status_label();
    let warning = state.error_message.clone().unwrap_or_default();

    rsx! {
        div { style: PAGE_STYLE,
            h1 { "{DASHBOARD_TITLE}" }

            if state.has_warning() {
                p { style: WARNING_STYLE, "{warning}" }
            }

            div { style: CARDS_STYLE,
                SummaryCard { title: "Total", value: "{total}" }
                SummaryCard { title: "Status", value: "{status}" }
            }

            CaseTable { rows: state.rows.clone() }
        }
    }
}
