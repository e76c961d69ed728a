use derive_more::{AsRef, Display};

/// Display name of an exercise.
///
/// Names are the join key between the catalog and a user's training history,
/// so comparisons against history entries go through [`Name::key`], which
/// ignores case and repeated whitespace.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");

        if collapsed.is_empty() {
            return Err(NameError::Empty);
        }

        let len = collapsed.chars().count();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(collapsed))
    }

    #[must_use]
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }

    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.key() == other.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}
