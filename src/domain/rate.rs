use serde::{Deserialize, Serialize};

/// An exchange rate between two currencies.
/// The stored form is always canonical: `code_from` sorts before `code_to`
/// lexicographically, and the opposite direction is derived by reciprocal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub code_from: String,
    pub code_to: String,
    pub value: f64,
}

impl Rate {
    pub fn new(code_from: impl Into<String>, code_to: impl Into<String>, value: f64) -> Self {
        Self {
            code_from: code_from.into(),
            code_to: code_to.into(),
            value,
        }
    }

    /// Returns true if the pair is already in canonical order.
    pub fn is_canonical(&self) -> bool {
        self.code_from < self.code_to
    }

    /// Convert into canonical form: if the pair was supplied in reverse
    /// order, swap the codes and replace the value with its reciprocal.
    pub fn into_canonical(mut self) -> Self {
        if self.code_from > self.code_to {
            std::mem::swap(&mut self.code_from, &mut self.code_to);
            self.value = 1.0 / self.value;
        }
        self
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} = {}", self.code_from, self.code_to, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_is_kept() {
        let rate = Rate::new("EUR", "USD", 1.08).into_canonical();
        assert_eq!(rate, Rate::new("EUR", "USD", 1.08));
    }

    #[test]
    fn test_reversed_pair_is_swapped_with_reciprocal() {
        let rate = Rate::new("USD", "RUR", 1.0 / 80.0).into_canonical();
        assert_eq!(rate.code_from, "RUR");
        assert_eq!(rate.code_to, "USD");
        assert_eq!(rate.value, 80.0);
    }

    #[test]
    fn test_is_canonical() {
        assert!(Rate::new("EUR", "USD", 1.0).is_canonical());
        assert!(!Rate::new("USD", "EUR", 1.0).is_canonical());
        // Equal codes are not canonical either; the service rejects them
        // before this question ever matters.
        assert!(!Rate::new("USD", "USD", 1.0).is_canonical());
    }
}
