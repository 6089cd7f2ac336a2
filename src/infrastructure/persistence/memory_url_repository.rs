//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(Default)]
struct Tables {
    /// Last id handed out. Only ever grows, so deleted ids are not reused.
    last_id: i64,
    records: BTreeMap<i64, UrlRecord>,
    ids_by_code: HashMap<String, i64>,
}

/// Process-local repository backed by ordered maps.
///
/// Every mutation runs under one write lock, so the short code check and the
/// insert are a single step and concurrent creates cannot both claim a code.
/// Data lives only as long as the process.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    tables: RwLock<Tables>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut tables = self.tables.write().await;

        if tables.ids_by_code.contains_key(&new_record.short_code) {
            return Err(AppError::duplicate_code(&new_record.short_code));
        }

        tables.last_id += 1;
        let record = UrlRecord::new(
            tables.last_id,
            new_record.short_code,
            new_record.long_url,
            Utc::now(),
            0,
        );

        tables
            .ids_by_code
            .insert(record.short_code.clone(), record.id);
        tables.records.insert(record.id, record.clone());

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.records.get(&id).cloned())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .ids_by_code
            .get(short_code)
            .and_then(|id| tables.records.get(id))
            .cloned())
    }

    async fn exists_by_code(&self, short_code: &str) -> Result<bool, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.ids_by_code.contains_key(short_code))
    }

    async fn update_long_url(
        &self,
        id: i64,
        long_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let mut tables = self.tables.write().await;

        Ok(tables.records.get_mut(&id).map(|record| {
            record.long_url = long_url.to_string();
            record.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;

        match tables.records.remove(&id) {
            Some(record) => {
                tables.ids_by_code.remove(&record.short_code);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn record_hit(&self, short_code: &str) -> Result<Option<String>, AppError> {
        let mut tables = self.tables.write().await;

        let Some(id) = tables.ids_by_code.get(short_code).copied() else {
            return Ok(None);
        };

        Ok(tables.records.get_mut(&id).map(|record| {
            record.click_count = record.click_count.saturating_add(1);
            record.long_url.clone()
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
