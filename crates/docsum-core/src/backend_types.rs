use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Object storage backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    S3,
    Local,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s3" => Ok(StorageBackend::S3),
            "local" => Ok(StorageBackend::Local),
            _ => Err(anyhow::anyhow!("Invalid storage backend: {}", s)),
        }
    }
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StorageBackend::S3 => write!(f, "s3"),
            StorageBackend::Local => write!(f, "local"),
        }
    }
}

/// Work queue backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueBackend {
    Sqs,
    /// In-process queue, for local development only. Messages do not survive a restart.
    Memory,
}

impl FromStr for QueueBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqs" => Ok(QueueBackend::Sqs),
            "memory" => Ok(QueueBackend::Memory),
            _ => Err(anyhow::anyhow!("Invalid queue backend: {}", s)),
        }
    }
}

impl Display for QueueBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            QueueBackend::Sqs => write!(f, "sqs"),
            QueueBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Result store backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStoreBackend {
    Dynamodb,
    Memory,
}

impl FromStr for ResultStoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dynamodb" => Ok(ResultStoreBackend::Dynamodb),
            "memory" => Ok(ResultStoreBackend::Memory),
            _ => Err(anyhow::anyhow!("Invalid result store backend: {}", s)),
        }
    }
}

impl Display for ResultStoreBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ResultStoreBackend::Dynamodb => write!(f, "dynamodb"),
            ResultStoreBackend::Memory => write!(f, "memory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backends_case_insensitive() {
        assert_eq!("S3".parse::<StorageBackend>().unwrap(), StorageBackend::S3);
        assert_eq!("local".parse::<StorageBackend>().unwrap(), StorageBackend::Local);
        assert_eq!("SQS".parse::<QueueBackend>().unwrap(), QueueBackend::Sqs);
        assert_eq!(
            "DynamoDB".parse::<ResultStoreBackend>().unwrap(),
            ResultStoreBackend::Dynamodb
        );
    }

    #[test]
    fn test_parse_unknown_backend() {
        assert!("nfs".parse::<StorageBackend>().is_err());
        assert!("kafka".parse::<QueueBackend>().is_err());
        assert!("postgres".parse::<ResultStoreBackend>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for backend in [QueueBackend::Sqs, QueueBackend::Memory] {
            assert_eq!(backend.to_string().parse::<QueueBackend>().unwrap(), backend);
        }
    }
}
