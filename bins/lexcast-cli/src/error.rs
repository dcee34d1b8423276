#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("config ({context}): {detail}")]
    Config { context: &'static str, detail: String },

    #[error(transparent)]
    Conversion(#[from] lexcast::ConversionError),

    #[error(transparent)]
    Access(#[from] lexcast::ValueAccessError),

    #[error("fallback: {0}")]
    Fallback(lexcast::ConversionError),

    #[error("demo: {failed} of {total} steps failed or disagreed")]
    DemoFailed { failed: usize, total: usize },

    #[error("batch: {absent} of {total} lines could not be converted")]
    BatchIncomplete { absent: usize, total: usize },

    #[error("output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
