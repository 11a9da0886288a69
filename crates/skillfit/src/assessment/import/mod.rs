mod parser;

use super::answers::AnswerSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supported answer file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFormat {
    Json,
    Csv,
}

impl AnswerFormat {
    /// Picks the format from a `.json` or `.csv` extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnsupportedFormat(PathBuf),
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answer file: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer CSV data: {}", err),
            AnswerImportError::Json(err) => write!(f, "invalid answer JSON data: {}", err),
            AnswerImportError::UnsupportedFormat(path) => write!(
                f,
                "unsupported answer file '{}': expected a .json or .csv extension",
                path.display()
            ),
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::Json(err) => Some(err),
            AnswerImportError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for AnswerImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Loads recorded answers from JSON or CSV files.
pub struct AnswerImporter;

impl AnswerImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AnswerSet, AnswerImportError> {
        let path = path.as_ref();
        let format = AnswerFormat::from_path(path)
            .ok_or_else(|| AnswerImportError::UnsupportedFormat(path.to_path_buf()))?;
        let file = std::fs::File::open(path)?;
        let answers = Self::from_reader(file, format)?;
        debug!(path = %path.display(), answers = answers.len(), "answers imported");
        Ok(answers)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: AnswerFormat,
    ) -> Result<AnswerSet, AnswerImportError> {
        let answers = match format {
            AnswerFormat::Json => parser::parse_json(reader)?,
            AnswerFormat::Csv => parser::parse_csv(reader)?,
        };
        Ok(answers)
    }
}
