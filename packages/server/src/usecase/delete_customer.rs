//! UseCase: 顧客の削除

use std::sync::Arc;

use crate::domain::{CustomerId, CustomerRepository};

use super::error::CustomerError;

/// 顧客削除のユースケース
pub struct DeleteCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl DeleteCustomerUseCase {
    /// 新しい DeleteCustomerUseCase を作成
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// 顧客削除を実行
    ///
    /// 削除が適用されなかった場合（存在しない・競合）は `CustomerError::NotFound`
    pub async fn execute(&self, id: CustomerId) -> Result<(), CustomerError> {
        if !self.repository.delete(id).await? {
            return Err(CustomerError::NotFound(id));
        }
        Ok(())
    }
}
