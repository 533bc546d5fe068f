pub mod model;

// Book defines the matching seam shared by the persistence model and the
// service-boundary DTO; search relies solely on substring containment.
pub(crate) trait Book {
    fn field_values(&self) -> [&str; 5];

    // case-insensitive containment of the term in any field; the empty term
    // matches every record
    fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.field_values().iter().any(|v| v.to_lowercase().contains(term.as_str()))
    }
}

// TODO: replace with real ISBN-10/13 checksum validation once the requirement
// is confirmed; the predicate is a documented placeholder until then.
pub(crate) fn is_valid_isbn(_isbn: &str) -> bool {
    true
}
