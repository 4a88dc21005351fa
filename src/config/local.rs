use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const DOCUMENT_NAME: &str = "rota.json";

/// Durable key-value store backed by a single JSON document on disk.
///
/// Every `set` rewrites the document, so a completed call is a committed
/// write.
#[derive(Debug, Clone)]
pub struct LocalStore {
    base_path: String,
}

impl LocalStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn document_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(DOCUMENT_NAME)
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        let path = self.document_path();
        if !path.exists() {
            return Ok(Map::new());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<()> {
        let path = self.document_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(document)?)?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for LocalStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_document()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut document = self.read_document()?;
        document.insert(key.to_string(), value);
        self.write_document(&document)
    }
}
