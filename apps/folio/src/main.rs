use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio::{data_source_for, App, BootPhase, Config, FileThemeStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    let source = data_source_for(&config.data_path);
    let theme_store = FileThemeStore::new(config.theme_store_path.clone());
    let output_path = config.output_path.clone();

    let mut app = App::bootstrap(config, source.as_ref(), Box::new(theme_store)).await;
    app.shutdown();

    if let Some(dir) = output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    tokio::fs::write(&output_path, app.page().to_html())
        .await
        .with_context(|| format!("writing {}", output_path.display()))?;
    info!(path = %output_path.display(), renders = app.render_count(), "Page written");

    if app.phase() == BootPhase::Error {
        bail!("resume data could not be loaded from {}", app.config().data_path);
    }
    Ok(())
}
