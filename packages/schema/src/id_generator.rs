use crate::element::ElementId;
use crate::schema::PageId;
use chrono::{DateTime, Utc};
use crc32fast::Hasher;

fn crc32_hex(input: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Generate a schema ID from its name and creation time using CRC32
pub fn get_schema_id(name: &str, created_at: DateTime<Utc>) -> String {
    let nanos = created_at.timestamp_nanos_opt().unwrap_or_default();
    format!("form-{}", crc32_hex(&format!("{}@{}", name, nanos)))
}

/// Sequential ID generator for the elements and pages of one editor session
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // CRC32 of the session source
    count: u32,   // Sequential counter
}

impl IdGenerator {
    pub fn new(source: &str) -> Self {
        Self {
            seed: crc32_hex(source),
            count: 0,
        }
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate next sequential element ID
    pub fn new_id(&mut self) -> ElementId {
        self.count += 1;
        ElementId::new(format!("{}-{}", self.seed, self.count))
    }

    /// Generate next sequential page ID
    pub fn new_page_id(&mut self) -> PageId {
        self.count += 1;
        PageId::new(format!("{}-page-{}", self.seed, self.count))
    }

    /// Get ID seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}
