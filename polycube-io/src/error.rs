use polycube_core::CoreError;

#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error("could not read problem file {path:?}: {source}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse problem file {path:?}: {source}")]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("lockcount must be at least 1, got {0}")]
    InvalidLockcount(u32),

    #[error(transparent)]
    Core(#[from] CoreError),
}
