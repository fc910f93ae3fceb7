use frustumview_render::RenderError;

/// Errors from building or updating a frustum visual.
#[derive(Debug, thiserror::Error)]
pub enum VisualError {
    #[error("missing required option `{0}`")]
    MissingOption(&'static str),
    #[error("host scene is borrowed elsewhere")]
    HostBusy,
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors from loading a frustum config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
