use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("invalid vocabulary pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("failed to read source: {0}")]
    Input(#[from] clap_stdin::StdinError),
}
