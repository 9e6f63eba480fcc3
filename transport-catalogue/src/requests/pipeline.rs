//! The build and serve phases.

use tracing::{debug, info};

use super::{
    MakeBaseRequest, ProcessRequests, RequestError, RequestHandler, StatResponse, build_catalogue,
};
use crate::render::RenderSettings;
use crate::router::TransportRouter;
use crate::snapshot::SnapshotStore;
use crate::state::TransportState;

/// Build the catalogue and router from `request` and write the snapshot.
///
/// Returns the state that was written.
pub fn make_base(request: MakeBaseRequest) -> Result<TransportState, RequestError> {
    let catalogue = build_catalogue(&request.base_requests)?;

    let router = match request.routing_settings {
        Some(settings) => Some(TransportRouter::build(&catalogue, settings)?),
        None => {
            debug!("no routing settings, skipping router");
            None
        }
    };

    let state = TransportState::new(
        catalogue,
        RenderSettings::from(request.render_settings),
        router,
    );
    SnapshotStore::new(request.serialization_settings).save(&state)?;
    Ok(state)
}

/// Load the snapshot named in `request` and answer its stat requests in order.
pub fn process_requests(request: ProcessRequests) -> Result<Vec<StatResponse>, RequestError> {
    let state = SnapshotStore::new(request.serialization_settings).load()?;
    let handler = RequestHandler::new(&state);

    let responses: Vec<StatResponse> = request
        .stat_requests
        .iter()
        .map(|r| handler.respond(r))
        .collect();
    info!(answered = responses.len(), "stat requests processed");
    Ok(responses)
}
