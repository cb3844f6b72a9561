use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheetoError {
    #[error("Can't find sheet '{name}' at path [{}]", root.display())]
    SheetNotFound { name: String, root: PathBuf },

    #[error(
        "Sheet name clash: '{name}' resolves to both {} and {}",
        first.display(),
        second.display()
    )]
    NameClash {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, CheetoError>;
