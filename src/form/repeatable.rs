/// An ordered list of text inputs the user can grow and shrink.
///
/// Entries have no identity beyond their position. The list never drops below one entry so the
/// form always shows at least one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repeatable(Vec<String>);

impl Default for Repeatable {
    fn default() -> Self {
        Self(vec![String::new()])
    }
}

impl Repeatable {
    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends an empty entry
    pub fn append(&mut self) {
        self.0.push(String::new());
    }

    /// Replaces the entry at `index`; out of range indices are ignored
    pub fn set_at(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Removes the entry at `index` unless it is the last one left
    pub fn remove_at(&mut self, index: usize) {
        if self.0.len() > 1 && index < self.0.len() {
            self.0.remove(index);
        }
    }

    /// Whether a remove button should be offered
    pub fn can_remove(&self) -> bool {
        self.0.len() > 1
    }

    /// Trimmed non-blank entries, in order
    pub fn filled(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Repeatable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries: Vec<String> = iter.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            Self::default()
        } else {
            Self(entries)
        }
    }
}
