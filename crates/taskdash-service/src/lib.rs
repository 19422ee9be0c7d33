//! Build orchestration and live-refresh serving for taskdash.

pub mod live;
pub mod server;
pub mod site;
pub mod watch;

pub use site::{build_site, BuildError, BuildReport, BuildVersion};
pub use taskdash_render::RenderMode;

/// Serve mode renders with the polling script; one-shot builds do not.
pub fn render_mode(serve: bool) -> RenderMode {
    if serve {
        RenderMode::LiveRefresh
    } else {
        RenderMode::Static
    }
}
