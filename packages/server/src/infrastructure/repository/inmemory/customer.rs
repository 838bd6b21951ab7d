//! InMemory Customer Repository 実装
//!
//! ドメイン層が定義する CustomerRepository trait の具体的な実装。
//! BTreeMap をインメモリ DB として使用します。
//!
//! BTreeMap のキー順（= ID 昇順）がストアの自然な並び順になります。
//! ID は単調増加のカウンタで採番し、削除後も再利用しません。

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    Customer, CustomerId, CustomerProfile, CustomerRepository, NamePrefix, RepositoryError,
    SearchSettings,
};

/// ストア本体（レコードと採番カウンタを 1 つのロックで保護する）
#[derive(Debug, Default)]
struct Store {
    customers: BTreeMap<CustomerId, Customer>,
    last_id: i64,
}

/// インメモリ Customer Repository 実装
///
/// テストおよび `--in-memory` 起動時に使用します。
/// プロセス終了とともにデータは失われます。
#[derive(Debug)]
pub struct InMemoryCustomerRepository {
    store: RwLock<Store>,
    settings: SearchSettings,
}

impl InMemoryCustomerRepository {
    /// 新しい InMemoryCustomerRepository を作成
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            store: RwLock::new(Store::default()),
            settings,
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn add(&self, profile: &CustomerProfile) -> Result<CustomerId, RepositoryError> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let id = CustomerId::new(store.last_id);
        store
            .customers
            .insert(id, Customer::new(id, profile.clone()));
        Ok(id)
    }

    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.customers.get(&id).cloned())
    }

    async fn search_by_name(
        &self,
        first_name: &NamePrefix,
        last_name: &NamePrefix,
    ) -> Result<Vec<Customer>, RepositoryError> {
        let store = self.store.read().await;
        let found = store
            .customers
            .values()
            .filter(|c| first_name.matches(c.first_name.as_str()))
            .filter(|c| last_name.matches(c.last_name.as_str()))
            .take(self.settings.max_results)
            .cloned()
            .collect();
        Ok(found)
    }

    async fn update(&self, customer: &Customer) -> Result<bool, RepositoryError> {
        let mut store = self.store.write().await;
        match store.customers.get_mut(&customer.id) {
            Some(existing) => {
                *existing = customer.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: CustomerId) -> Result<bool, RepositoryError> {
        let mut store = self.store.write().await;
        Ok(store.customers.remove(&id).is_some())
    }
}
