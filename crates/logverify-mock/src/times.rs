use std::fmt;

/// Call-count constraint for a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Times {
    Never,
    Once,
    AtLeastOnce,
    AtMostOnce,
    AtLeast(usize),
    AtMost(usize),
    Exactly(usize),
    Between(usize, usize),
}

impl Times {
    /// Whether `count` matching invocations satisfy this constraint.
    pub fn is_satisfied_by(&self, count: usize) -> bool {
        match *self {
            Times::Never => count == 0,
            Times::Once => count == 1,
            Times::AtLeastOnce => count >= 1,
            Times::AtMostOnce => count <= 1,
            Times::AtLeast(n) => count >= n,
            Times::AtMost(n) => count <= n,
            Times::Exactly(n) => count == n,
            Times::Between(lo, hi) => count >= lo && count <= hi,
        }
    }
}

impl fmt::Display for Times {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Times::Never => write!(f, "never"),
            Times::Once => write!(f, "exactly once"),
            Times::AtLeastOnce => write!(f, "at least once"),
            Times::AtMostOnce => write!(f, "at most once"),
            Times::AtLeast(n) => write!(f, "at least {n} times"),
            Times::AtMost(n) => write!(f, "at most {n} times"),
            Times::Exactly(n) => write!(f, "exactly {n} times"),
            Times::Between(lo, hi) => write!(f, "between {lo} and {hi} times"),
        }
    }
}
