//! UseCase: 顧客の名前検索
//!
//! firstName / lastName のプレフィックスで検索する。
//! 両方とも空（未指定・空白のみ）の場合はストアに問い合わせずに拒否する。

use std::sync::Arc;

use crate::{
    domain::{Customer, CustomerRepository, NamePrefix},
    infrastructure::dto::http::SearchCustomersQuery,
};

use super::error::CustomerError;

/// 顧客検索のユースケース
pub struct SearchCustomersUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl SearchCustomersUseCase {
    /// 新しい SearchCustomersUseCase を作成
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// 検索を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Customer>)` - 一致した顧客（0 件も正常）
    /// * `Err(CustomerError::EmptySearchCriteria)` - 検索条件が両方とも空
    pub async fn execute(
        &self,
        query: SearchCustomersQuery,
    ) -> Result<Vec<Customer>, CustomerError> {
        let first_name = NamePrefix::new(query.first_name.as_deref());
        let last_name = NamePrefix::new(query.last_name.as_deref());
        if first_name.is_wildcard() && last_name.is_wildcard() {
            return Err(CustomerError::EmptySearchCriteria);
        }

        let customers = self
            .repository
            .search_by_name(&first_name, &last_name)
            .await?;
        tracing::debug!(
            "Search firstName='{}' lastName='{}' matched {} customer(s)",
            first_name.as_str(),
            last_name.as_str(),
            customers.len()
        );

        Ok(customers)
    }
}
