//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。
//! 入力値の検証は全てストアへのアクセスより前に行います。

pub mod add_customer;
pub mod delete_customer;
pub mod error;
pub mod get_customer;
pub mod search_customers;
pub mod update_customer;

pub use add_customer::AddCustomerUseCase;
pub use delete_customer::DeleteCustomerUseCase;
pub use error::CustomerError;
pub use get_customer::GetCustomerUseCase;
pub use search_customers::SearchCustomersUseCase;
pub use update_customer::UpdateCustomerUseCase;
