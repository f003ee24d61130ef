use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn io(key: &str, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.to_string(),
            source,
        }
    }

    pub fn serialize(key: &str, source: serde_json::Error) -> Self {
        StoreError::Serialize {
            key: key.to_string(),
            source,
        }
    }
}
