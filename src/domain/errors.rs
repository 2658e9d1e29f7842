use thiserror::Error;

/// Ошибки доменного слоя (карты и колода).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Ранг или масть вне фиксированного набора значений.
    #[error("Недопустимое значение {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },

    #[error("Колода пуста")]
    EmptyDeck,
}

impl DomainError {
    pub(crate) fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        DomainError::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}
