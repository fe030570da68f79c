/// Thresholds and switches handed to every predicate of a rule set.
///
/// Predicates read only the fields they care about; the rest is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// Lower length bound (filename stem, commit subject line).
    pub min_len: usize,
    /// Upper length bound (filename stem, commit subject line).
    pub max_len: usize,
    /// Reject `main` and `master`.
    pub protected_main: bool,
    /// Reject `dev` and `development`.
    pub protected_dev: bool,
    /// Reject `tags`.
    pub protected_tags: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            min_len: 3,
            max_len: 256,
            protected_main: true,
            protected_dev: false,
            protected_tags: false,
        }
    }
}

impl Params {
    /// Params carrying only length bounds; protection switches keep their defaults.
    pub fn lengths(min_len: usize, max_len: usize) -> Self {
        Self {
            min_len,
            max_len,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = Params::default();
        assert_eq!((p.min_len, p.max_len), (3, 256));
        assert!(p.protected_main);
        assert!(!p.protected_dev);
        assert!(!p.protected_tags);
    }

    #[test]
    fn lengths_keeps_switches() {
        let p = Params::lengths(10, 50);
        assert_eq!((p.min_len, p.max_len), (10, 50));
        assert!(p.protected_main);
    }
}
