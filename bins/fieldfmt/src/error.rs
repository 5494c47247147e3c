use fieldfmt_api::error::PluginError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("config ({context}): {detail}")]
    Config { context: &'static str, detail: String },

    #[error("plugin: {0}")]
    Plugin(#[from] PluginError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
