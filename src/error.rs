use thiserror::Error;

/// Error type returned by milkcat-rs public APIs.
#[derive(Debug, Error)]
pub enum MilkcatError {
    /// Dynamic library could not be loaded.
    #[error("failed to load library: {0}")]
    LibraryLoad(String),
    /// Required symbol could not be resolved from the library.
    #[error("failed to load symbol: {0}")]
    SymbolLoad(String),
    /// Rust string contained an interior `NUL` byte for C interop.
    #[error("string contains NUL byte: {0}")]
    NulByte(#[from] std::ffi::NulError),
    /// User-provided arguments were invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Model data could not be loaded.
    #[error("failed to load model: {0}")]
    ModelLoad(String),
    /// The engine could not assemble the requested pipeline.
    #[error("failed to construct pipeline: {0}")]
    PipelineConstruction(String),
    /// The engine rejected a user dictionary.
    #[error("user dictionary rejected: {0}")]
    UserDictionary(String),
    /// Other error reported by the MilkCat C API.
    #[error("milkcat api error: {0}")]
    Api(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MilkcatError>;
