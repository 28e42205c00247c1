use crate::error::{ChartError, ChartResult};

/// Native property name of one option.
///
/// Each configuration node lists its properties as an enum implementing this
/// trait, so the set of keys a node writes is closed and typo-free.
pub trait Key: Copy {
    fn value(self) -> &'static str;
}

/// Enumerated option values written to the tree as their key string.
pub trait EnumKey: Key + 'static {
    fn values() -> &'static [Self];

    /// Looks up the variant whose native value equals `value`.
    fn from_value(value: &str) -> Option<Self> {
        Self::values()
            .iter()
            .copied()
            .find(|candidate| candidate.value() == value)
    }
}

/// Validates a property name coming from outside the crate.
pub fn check_key(key: &str) -> ChartResult<&str> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if valid {
        Ok(key)
    } else {
        Err(ChartError::InvalidKey(key.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::check_key;

    #[test]
    fn rejects_empty_and_dotted_keys() {
        assert!(check_key("beginAtZero").is_ok());
        assert!(check_key("").is_err());
        assert!(check_key("ticks.color").is_err());
    }
}
