/// Partition of a URL list into syntactically valid and invalid entries.
///
/// Both sequences keep the relative order the URLs had in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// URLs that parsed as absolute, hierarchical URLs.
    pub valid: Vec<String>,
    /// URLs that failed to parse.
    pub invalid: Vec<String>,
}

impl ValidationOutcome {
    /// Returns `true` when every input URL was valid.
    pub fn all_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}
