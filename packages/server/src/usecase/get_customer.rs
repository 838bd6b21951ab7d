//! UseCase: 顧客の取得

use std::sync::Arc;

use crate::domain::{Customer, CustomerId, CustomerRepository};

use super::error::CustomerError;

/// 顧客取得のユースケース
pub struct GetCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl GetCustomerUseCase {
    /// 新しい GetCustomerUseCase を作成
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// ID で顧客を取得
    ///
    /// 存在しない場合は `CustomerError::NotFound` を返す
    pub async fn execute(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound(id))
    }
}
