use crate::error::AppError;
use crate::services::{DataService, ProductionDataService};
use crate::state::{DisplayState, FetchGeneration};
use dioxus::prelude::*;

pub fn use_dashboard() -> Signal<DisplayState> {
    let data_service = use_hook(|| ProductionDataService);
    use_dashboard_internal(data_service)
}

pub fn use_dashboard_with_service<S: DataService>(service: S) -> Signal<DisplayState> {
    use_dashboard_internal(service)
}

/// Issues the single fetch for this mount and resolves the display state
/// from its outcome.
fn use_dashboard_internal<S: DataService>(data_service: S) -> Signal<DisplayState> {
    let mut display = use_signal(DisplayState::new);
    let generation = use_hook(FetchGeneration::default);

    let dropped = generation.clone();
    use_drop(move || dropped.invalidate());

    use_future(move || {
        let service = data_service.clone();
        let generation = generation.clone();
        async move {
            display.write().begin_loading();

            if let Some(outcome) = load_for_generation(&service, &generation).await {
                display.write().resolve(outcome);
            }
        }
    });

    display
}

/// Runs [`load_data`] under a fresh ticket. Returns `None` when the
/// generation moved on while the request was in flight, in which case the
/// outcome must not reach the display state.
pub async fn load_for_generation<S: DataService>(
    service: &S,
    generation: &FetchGeneration,
) -> Option<Result<(), AppError>> {
    let ticket = generation.begin();
    let outcome = load_data(service).await;

    if generation.is_current(ticket) {
        Some(outcome)
    } else {
        tracing::debug!("Discarding result of a superseded dashboard fetch");
        None
    }
}

/// One best-effort check of the remote API. The payload is discarded; only
/// the envelope's success flag decides the outcome.
pub async fn load_data<S: DataService>(service: &S) -> Result<(), AppError> {
    let envelope = service.search_packages().await?;
    if !envelope.success {
        return Err(AppError::Unsuccessful);
    }
    Ok(())
}
