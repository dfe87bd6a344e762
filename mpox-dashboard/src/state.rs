use crate::data::{get_fallback_cases, STATUS_FALLBACK, STATUS_REAL_DATA};
use crate::error::AppError;
use crate::models::{total_cases, LoadPhase, RegionCaseCount};
use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Everything the dashboard view renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayState {
    pub rows: Vec<RegionCaseCount>,
    pub error_message: Option<String>,
    pub phase: LoadPhase,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u64 {
        total_cases(&self.rows)
    }

    pub fn has_warning(&self) -> bool {
        self.error_message.as_deref().is_some_and(|m| !m.is_empty())
    }

    pub fn status_label(&self) -> &'static str {
        if self.has_warning() {
            STATUS_FALLBACK
        } else {
            STATUS_REAL_DATA
        }
    }

    pub fn begin_loading(&mut self) {
        if self.phase == LoadPhase::Idle {
            self.phase = LoadPhase::Loading;
        }
    }

    /// Applies the outcome of the mount's fetch. This is the only place the
    /// rows and the warning are written; a second completion is ignored.
    pub fn resolve(&mut self, outcome: Result<(), AppError>) {
        if self.phase.is_terminal() {
            tracing::debug!("Dashboard already resolved as {:?}", self.phase);
            return;
        }

        match outcome {
            Ok(()) => {
                self.error_message = None;
                self.phase = LoadPhase::Loaded;
            }
            Err(e) => {
                tracing::warn!("OpenDataSUS unavailable, showing bundled data: {}", e);
                self.error_message = Some(e.user_friendly_message());
                self.phase = LoadPhase::LoadedWithWarning;
            }
        }
        self.rows = get_fallback_cases();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Generation counter guarding the display state against completions from a
/// fetch that belongs to an unmounted (or superseded) view.
#[derive(Debug, Clone, Default)]
pub struct FetchGeneration(Arc<AtomicU64>);

impl FetchGeneration {
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}

#[derive(Clone, Copy)]
pub struct DashboardState {
    pub display: Signal<DisplayState>,
}

#[component]
pub fn DashboardStateProvider(children: Element) -> Element {
    let display = crate::hooks::use_dashboard();
    use_context_provider(|| DashboardState { display });

    rsx! {
        {children}
    }
}
