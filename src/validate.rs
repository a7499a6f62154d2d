//! The boolean validation predicate.

/// Checks whether a candidate is a well-formed patient ID.
///
/// A candidate is valid iff it is present, at least two characters long,
/// starts with the uppercase letter `P`, and everything after the prefix is
/// an ASCII decimal digit. Absence is an ordinary invalid input, not an
/// error, so callers holding an `Option` can pass it straight through.
///
/// The result is only accept/reject; use [`crate::PatientId::parse`] when
/// the rejection reason matters.
#[must_use]
pub fn is_valid(candidate: Option<&str>) -> bool {
    let Some(s) = candidate else {
        return false;
    };
    let mut chars = s.chars();
    if chars.next() != Some('P') {
        return false;
    }
    let mut saw_digit = false;
    for c in chars {
        if !c.is_ascii_digit() {
            return false;
        }
        saw_digit = true;
    }
    saw_digit
}
