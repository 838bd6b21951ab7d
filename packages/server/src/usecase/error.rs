//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{CustomerId, FieldViolation, RepositoryError};

/// 顧客ユースケースのエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CustomerError {
    /// 入力値の検証エラー（ストアには到達しない）
    #[error("invalid customer: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    /// パスの ID とボディの ID が一致しない（ストアには到達しない）
    #[error("customerId and customer.id must be the same")]
    IdMismatch,

    /// 検索条件が両方とも空（ストアには到達しない）
    #[error("firstName and lastName cannot both be empty")]
    EmptySearchCriteria,

    /// 対象の顧客が存在しない、または更新・削除が適用されなかった
    #[error("customer {0} not found")]
    NotFound(CustomerId),

    /// ストアに到達できない
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
