use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsError {
    #[error("failed to set JavaScript grammar on parser")]
    LanguageSet,

    #[error("failed to parse source code")]
    ParseFailed,

    #[error("syntax error at line {line}, column {column}")]
    SyntaxError { line: usize, column: usize },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
