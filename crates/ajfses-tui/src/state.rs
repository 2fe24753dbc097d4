//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── regions: RegionTree   (page + overlay regions, pointer routing)
//! │   ├── page: PageRegions     (header, body, footer)
//! │   ├── logo: LogoState       (header crossfade)
//! │   ├── session: SessionSnapshot
//! │   └── endpoint: Endpoint
//! └── overlay: OverlayController (status overlay)
//! ```
//!
//! The overlay lives beside `TuiState` so its handlers can borrow the region
//! tree while mutating the controller.

use ajfses_core::api::Endpoint;
use ajfses_core::config::Config;

use crate::common::{RegionId, RegionTree};
use crate::logo::LogoState;
use crate::overlays::{OverlayController, OverlayRegions, OverlayRequest, OverlayTiming};
use crate::session::SessionSnapshot;

/// What the console is running for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleMode {
    /// Interactive dashboard; runs until the user quits.
    Dashboard,
    /// Shows one status overlay and quits once it has closed.
    Notify(OverlayRequest),
}

/// Page regions under the console root.
#[derive(Debug, Clone, Copy)]
pub struct PageRegions {
    pub root: RegionId,
    pub header: RegionId,
    pub body: RegionId,
    pub footer: RegionId,
}

pub struct AppState {
    pub tui: TuiState,
    pub overlay: OverlayController,
}

impl AppState {
    pub fn new(
        config: &Config,
        mode: ConsoleMode,
        logo: LogoState,
        session: SessionSnapshot,
        endpoint: Endpoint,
    ) -> Self {
        let mut regions = RegionTree::new();
        let root = regions.add_root("console");
        let page = PageRegions {
            root,
            header: regions.add_child(root, "page.header"),
            body: regions.add_child(root, "page.body"),
            footer: regions.add_child(root, "page.footer"),
        };
        // Mounted after the page so it stacks above it.
        let overlay_regions = OverlayRegions::mount(&mut regions, root);
        let overlay = OverlayController::new(
            &regions,
            overlay_regions,
            OverlayTiming::from(&config.overlay),
        );

        Self {
            tui: TuiState {
                should_quit: false,
                mode,
                regions,
                page,
                logo,
                session,
                endpoint,
            },
            overlay,
        }
    }
}

pub struct TuiState {
    pub should_quit: bool,
    pub mode: ConsoleMode,
    pub regions: RegionTree,
    pub page: PageRegions,
    pub logo: LogoState,
    pub session: SessionSnapshot,
    pub endpoint: Endpoint,
}

impl TuiState {
    pub fn is_notify(&self) -> bool {
        matches!(self.mode, ConsoleMode::Notify(_))
    }
}
