use tracing::{error, info};

use taskdash_core::config::{ServeOptions, SitePaths};
use taskdash_render::RenderMode;

use crate::server::{bind, serve, ServeError};
use crate::site::{build_site, BuildVersion};
use crate::watch::{subscribe, ChangeBatch, DebouncePolicy, WatchTarget};

/// Rebuilds after a change batch. Failures are logged and the previous pages stay in place.
pub async fn rebuild(paths: &SitePaths, version: &BuildVersion, batch: &ChangeBatch) {
    info!(changed = batch.paths.len(), "change detected, rebuilding");
    let paths = paths.clone();
    let version = version.clone();
    let result = tokio::task::spawn_blocking(move || {
        build_site(&paths, RenderMode::LiveRefresh, &version)
    })
    .await;
    match result {
        Ok(Ok(report)) => info!(version = report.version, "rebuilt; browser will refresh"),
        Ok(Err(err)) => error!(error = %err, "rebuild failed"),
        Err(err) => error!(error = %err, "rebuild task panicked"),
    }
}

/// Serves the output directory and rebuilds on input changes until Ctrl+C.
/// The caller is expected to have run the initial build.
pub async fn serve_and_watch(
    paths: SitePaths,
    options: ServeOptions,
    version: BuildVersion,
) -> Result<(), ServeError> {
    let listener = bind(options.port).await?;
    let targets = [
        WatchTarget::file(&paths.tasks_file),
        WatchTarget::tree(&paths.notes_dir),
    ];
    let mut changes = subscribe(&targets, DebouncePolicy::new(options.debounce))?;
    info!("watching for changes (press Ctrl+C to stop)");

    let server = serve(listener, paths.output_dir.clone(), version.clone());
    let watcher = async {
        while let Some(batch) = changes.next().await {
            rebuild(&paths, &version, &batch).await;
        }
    };

    tokio::select! {
        result = server => result,
        _ = watcher => Ok(()),
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down");
            Ok(())
        }
    }
}
