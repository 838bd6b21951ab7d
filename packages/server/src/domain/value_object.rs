//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use super::error::ValueObjectError;

/// Maximum number of characters allowed in a first or last name.
pub const NAME_MAX_CHARS: usize = 100;

/// Customer identifier value object.
///
/// Assigned by the store when a customer is created and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Wrap a raw identifier.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for CustomerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// First or last name of a customer.
///
/// Must not be blank and must not exceed [`NAME_MAX_CHARS`] characters.
/// The value is stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName.
    ///
    /// # Arguments
    ///
    /// * `name` - The name string
    ///
    /// # Returns
    ///
    /// A Result containing the PersonName or an error if validation fails
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.trim().is_empty() {
            return Err(ValueObjectError::NameEmpty);
        }
        let len = name.chars().count();
        if len > NAME_MAX_CHARS {
            return Err(ValueObjectError::NameTooLong {
                max: NAME_MAX_CHARS,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Key used for prefix matching (trimmed, lower-cased).
    pub fn search_key(&self) -> String {
        normalize(&self.0)
    }
}

impl TryFrom<String> for PersonName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized name prefix used by the search operation.
///
/// An empty prefix is a wildcard and matches every name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePrefix(String);

impl NamePrefix {
    /// Build a prefix from raw user input. Absent input becomes a wildcard.
    pub fn new(raw: Option<&str>) -> Self {
        Self(raw.map(normalize).unwrap_or_default())
    }

    /// Whether this prefix matches everything.
    pub fn is_wildcard(&self) -> bool {
        self.0.is_empty()
    }

    /// Normalized prefix text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive starts-with test against a name.
    pub fn matches(&self, name: &str) -> bool {
        self.is_wildcard() || normalize(name).starts_with(&self.0)
    }
}

/// Per-character lowercasing: a normalized prefix stays a prefix of the
/// normalized name (no word-final `ς`).
fn normalize(value: &str) -> String {
    value.trim().chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_name_new_success() {
        // テスト項目: 有効な名前を作成できる
        // given (前提条件):
        let name = "Jane".to_string();

        // when (操作):
        let result = PersonName::new(name);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "Jane");
    }

    #[test]
    fn test_person_name_new_empty_fails() {
        // テスト項目: 空の名前は作成できない
        // when (操作):
        let result = PersonName::new("".to_string());

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::NameEmpty);
    }

    #[test]
    fn test_person_name_new_blank_fails() {
        // テスト項目: 空白のみの名前は作成できない
        // when (操作):
        let result = PersonName::new("   ".to_string());

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::NameEmpty);
    }

    #[test]
    fn test_person_name_max_length_boundary() {
        // テスト項目: 100 文字は許可され、101 文字は拒否される
        // given (前提条件):
        let exactly_max = "a".repeat(100);
        let too_long = "a".repeat(101);

        // when (操作):
        let ok = PersonName::new(exactly_max);
        let err = PersonName::new(too_long);

        // then (期待する結果):
        assert!(ok.is_ok());
        assert_eq!(
            err.unwrap_err(),
            ValueObjectError::NameTooLong {
                max: 100,
                actual: 101
            }
        );
    }

    #[test]
    fn test_person_name_length_counts_characters() {
        // テスト項目: 長さはバイト数ではなく文字数で数える
        // given (前提条件): マルチバイト文字 100 文字 (300 バイト)
        let name = "あ".repeat(100);

        // when (操作):
        let result = PersonName::new(name);

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[test]
    fn test_person_name_search_key() {
        // テスト項目: 検索キーは前後の空白を除去し小文字化される
        // given (前提条件):
        let name = PersonName::new("  Smith ".to_string()).unwrap();

        // then (期待する結果):
        assert_eq!(name.search_key(), "smith");
        assert_eq!(name.as_str(), "  Smith ");
    }

    #[test]
    fn test_name_prefix_absent_is_wildcard() {
        // テスト項目: 未指定・空白のみのプレフィックスはワイルドカードになる
        // then (期待する結果):
        assert!(NamePrefix::new(None).is_wildcard());
        assert!(NamePrefix::new(Some("  ")).is_wildcard());
        assert!(NamePrefix::new(None).matches("anything"));
    }

    #[test]
    fn test_name_prefix_matches_case_insensitively() {
        // テスト項目: プレフィックス一致は大文字小文字と前後の空白を無視する
        // given (前提条件):
        let prefix = NamePrefix::new(Some(" jO "));

        // then (期待する結果):
        assert_eq!(prefix.as_str(), "jo");
        assert!(prefix.matches("John"));
        assert!(prefix.matches("  JOANNA"));
        assert!(!prefix.matches("Jane"));
    }

    #[test]
    fn test_name_prefix_matches_greek_sigma() {
        // テスト項目: 語末のシグマを含むプレフィックスでも前方一致する
        // given (前提条件):
        let prefix = NamePrefix::new(Some("ΟΣ"));
        let name = PersonName::new("ΟΣΑ".to_string()).unwrap();

        // then (期待する結果):
        assert_eq!(prefix.as_str(), "οσ");
        assert!(prefix.matches("ΟΣΑ"));
        assert!(name.search_key().starts_with(prefix.as_str()));
    }

    #[test]
    fn test_customer_id_ordering() {
        // テスト項目: CustomerId は順序付けできる
        // given (前提条件):
        let id1 = CustomerId::new(1);
        let id2 = CustomerId::from(2);

        // then (期待する結果):
        assert!(id1 < id2);
        assert_eq!(id2.to_string(), "2");
    }
}
