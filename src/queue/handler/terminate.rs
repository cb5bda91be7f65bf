use dioxus_logger::tracing;

use super::{HandlerOutcome, TaskHandler};

impl TaskHandler {
    pub(super) fn handle_terminate(&self) -> HandlerOutcome {
        tracing::debug!("Queue consumer terminating");
        HandlerOutcome::Terminate
    }
}
