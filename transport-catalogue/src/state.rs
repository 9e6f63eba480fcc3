//! Everything the serve phase needs, bundled.

use crate::catalogue::TransportCatalogue;
use crate::render::RenderSettings;
use crate::router::TransportRouter;

/// The catalogue plus the settings and router built from it.
///
/// Produced by the build phase and by loading a snapshot. The router is
/// optional; without it, route queries cannot be answered.
#[derive(Debug, Clone, Default)]
pub struct TransportState {
    pub catalogue: TransportCatalogue,
    pub render_settings: RenderSettings,
    pub router: Option<TransportRouter>,
}

impl TransportState {
    pub fn new(
        catalogue: TransportCatalogue,
        render_settings: RenderSettings,
        router: Option<TransportRouter>,
    ) -> Self {
        Self {
            catalogue,
            render_settings,
            router,
        }
    }
}
