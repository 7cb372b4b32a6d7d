use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while loading or plotting an analog capture.
/// All of them terminate the CLI apps with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("could not read capture file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("line {line}: field {field} {value:?} is not a number")]
    InvalidField {
        line: usize,
        field: usize,
        value: String,
    },
    #[error("line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("capture file {} contains no samples", .path.display())]
    EmptyCapture { path: PathBuf },
    #[error("failed to render plot: {0}")]
    Plot(String),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for CaptureError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        CaptureError::Plot(format!("{}", value))
    }
}
