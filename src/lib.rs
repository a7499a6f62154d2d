//! # patient-id
//!
//! Patient identifier validation and typed ID handling.
//!
//! ## Design Principles
//!
//! - Patient IDs are externally assigned; this crate never generates them
//! - The canonical representation is strict: `P` followed by ASCII digits
//! - IDs support roundtrip serialization (parse → format → parse)
//! - Validation is pure and total: every input maps to accept or reject
//!
//! ## ID Format
//!
//! A valid patient ID is the uppercase letter `P` followed by one or more
//! ASCII decimal digits:
//!
//! - `P123`
//! - `P456789`
//!
//! Nothing else is accepted: no lowercase `p`, no sign, no whitespace, no
//! digit grouping, and no non-ASCII digit glyphs.
//!
//! Two entry points cover the two caller needs:
//!
//! - [`is_valid`] — a boolean predicate for accept/reject decisions,
//!   tolerant of absent input
//! - [`PatientId::parse`] — strict parsing into a typed ID with a
//!   diagnostic [`IdError`] on rejection

mod error;
mod types;
mod validate;

pub use error::IdError;
pub use types::PatientId;
pub use validate::is_valid;
