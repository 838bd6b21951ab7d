//! UseCase: 顧客の新規作成
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - AddCustomerUseCase::execute() メソッド
//!
//! ### どのような状況を想定しているか
//! - 正常系：ストアが採番した ID を持つ顧客が返される
//! - 正常系：クライアントが指定した ID は無視される
//! - 異常系：必須項目の欠落・長さ超過（ストアは呼ばれない）

use std::sync::Arc;

use crate::{
    domain::{Customer, CustomerProfile, CustomerRepository},
    infrastructure::dto::http::CustomerDto,
};

use super::error::CustomerError;

/// 顧客作成のユースケース
pub struct AddCustomerUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn CustomerRepository>,
}

impl AddCustomerUseCase {
    /// 新しい AddCustomerUseCase を作成
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// 顧客作成を実行
    ///
    /// # Arguments
    ///
    /// * `input` - リクエストボディ（`id` は無視される）
    ///
    /// # Returns
    ///
    /// * `Ok(Customer)` - ストアが採番した ID を持つ作成済みの顧客
    /// * `Err(CustomerError::Validation)` - 入力値が不正
    /// * `Err(CustomerError::Repository)` - ストアに到達できない
    pub async fn execute(&self, input: CustomerDto) -> Result<Customer, CustomerError> {
        let profile =
            CustomerProfile::parse(input.first_name, input.last_name, input.date_of_birth)
                .map_err(CustomerError::Validation)?;

        let id = self.repository.add(&profile).await?;

        Ok(Customer::new(id, profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MockCustomerRepository, SearchSettings},
        infrastructure::repository::InMemoryCustomerRepository,
    };
    use chrono::NaiveDate;

    fn create_test_repository() -> Arc<InMemoryCustomerRepository> {
        Arc::new(InMemoryCustomerRepository::new(SearchSettings::new(10)))
    }

    fn input(id: Option<i64>, first: &str, last: &str) -> CustomerDto {
        CustomerDto {
            id,
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 1),
        }
    }

    #[tokio::test]
    async fn test_add_customer_success() {
        // テスト項目: 有効な入力で顧客が作成され、取得すると同じ内容が返る
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = AddCustomerUseCase::new(repository.clone());

        // when (操作):
        let created = usecase.execute(input(None, "Jane", "Smith")).await.unwrap();

        // then (期待する結果):
        let stored = repository.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored, created);
        assert_eq!(stored.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 1));
    }

    #[tokio::test]
    async fn test_add_customer_ignores_client_supplied_id() {
        // テスト項目: クライアントが指定した ID は無視される
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = AddCustomerUseCase::new(repository.clone());

        // when (操作):
        let created = usecase
            .execute(input(Some(500), "Jane", "Smith"))
            .await
            .unwrap();

        // then (期待する結果):
        assert_ne!(created.id.value(), 500);
    }

    #[tokio::test]
    async fn test_add_customer_assigns_new_ids() {
        // テスト項目: 作成するたびに未使用の ID が割り当てられる
        // given (前提条件):
        let usecase = AddCustomerUseCase::new(create_test_repository());

        // when (操作):
        let first = usecase.execute(input(None, "Jane", "Smith")).await.unwrap();
        let second = usecase.execute(input(None, "Jane", "Smith")).await.unwrap();

        // then (期待する結果):
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_add_customer_empty_first_name_is_not_persisted() {
        // テスト項目: 空の firstName は拒否され、保存もされない
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = AddCustomerUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(input(None, "", "Smith")).await;

        // then (期待する結果):
        assert!(matches!(result, Err(CustomerError::Validation(_))));
        let found = repository
            .search_by_name(
                &crate::domain::NamePrefix::new(None),
                &crate::domain::NamePrefix::new(Some("Smith")),
            )
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_add_customer_validation_does_not_touch_store() {
        // テスト項目: 検証エラー時はストアが一切呼ばれない
        // given (前提条件):
        let mut mock = MockCustomerRepository::new();
        mock.expect_add().times(0);
        let usecase = AddCustomerUseCase::new(Arc::new(mock));

        // when (操作):
        let result = usecase.execute(input(None, "Jane", &"x".repeat(101))).await;

        // then (期待する結果):
        match result {
            Err(CustomerError::Validation(violations)) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "lastName");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_add_customer_store_unavailable() {
        // テスト項目: ストアのエラーはそのまま伝播する
        // given (前提条件):
        let mut mock = MockCustomerRepository::new();
        mock.expect_add().times(1).returning(|_| {
            Err(crate::domain::RepositoryError::StoreUnavailable {
                message: "disk I/O error".to_string(),
            })
        });
        let usecase = AddCustomerUseCase::new(Arc::new(mock));

        // when (操作):
        let result = usecase.execute(input(None, "Jane", "Smith")).await;

        // then (期待する結果):
        assert!(matches!(result, Err(CustomerError::Repository(_))));
    }
}
