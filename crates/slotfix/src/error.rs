use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every variant is fatal: the run stops and the file is left as it was
/// unless the failure happened while writing it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A `courses`, `groups` or `time_slots` field is absent or has the wrong shape.
    #[error("expected {expected} at {location}")]
    Structure {
        location: String,
        expected: &'static str,
    },

    #[error("could not encode document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn structure(location: impl Into<String>, expected: &'static str) -> Self {
        Self::Structure {
            location: location.into(),
            expected,
        }
    }
}
