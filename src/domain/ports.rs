use crate::domain::model::Weekday;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Durable key-value store for scheduler settings.
///
/// `set` must commit synchronously to a durable local store before
/// returning; whether writes are additionally mirrored to a remote store is
/// an implementation concern the rest of the application never observes.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;
    async fn set(&self, key: &str, value: serde_json::Value) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn store_path(&self) -> &str;
    fn remote_endpoint(&self) -> Option<&str>;
    fn seed_names(&self) -> &[String];
    fn default_weekday(&self) -> Weekday;
    fn default_pivot(&self) -> Option<NaiveDate>;
}
