//! UseCase: 顧客の更新（全置換）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateCustomerUseCase::execute() メソッド
//!
//! ### どのような状況を想定しているか
//! - 正常系：既存顧客の全項目が置き換えられる
//! - 異常系：入力値が不正（ストアは呼ばれない）
//! - 異常系：パスとボディの ID が異なる（ストアは呼ばれない）
//! - 異常系：存在しない ID（NotFound）

use std::sync::Arc;

use crate::{
    domain::{Customer, CustomerId, CustomerProfile, CustomerRepository},
    infrastructure::dto::http::CustomerDto,
};

use super::error::CustomerError;

/// 顧客更新のユースケース
pub struct UpdateCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl UpdateCustomerUseCase {
    /// 新しい UpdateCustomerUseCase を作成
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// 顧客更新を実行
    ///
    /// # Arguments
    ///
    /// * `id` - パスで指定された顧客 ID
    /// * `input` - リクエストボディ（`id` はパスの ID と一致する必要がある）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 更新成功
    /// * `Err(CustomerError)` - 検証エラー、ID 不一致、NotFound、ストアエラー
    pub async fn execute(&self, id: CustomerId, input: CustomerDto) -> Result<(), CustomerError> {
        // 1. 入力値の検証
        let profile =
            CustomerProfile::parse(input.first_name, input.last_name, input.date_of_birth)
                .map_err(CustomerError::Validation)?;

        // 2. ID の一致確認（ボディに ID がない場合も不一致）
        if input.id != Some(id.value()) {
            return Err(CustomerError::IdMismatch);
        }

        // 3. 更新（適用されなければ NotFound）
        let updated = self.repository.update(&Customer::new(id, profile)).await?;
        if !updated {
            return Err(CustomerError::NotFound(id));
        }

        Ok(())
    }
}
