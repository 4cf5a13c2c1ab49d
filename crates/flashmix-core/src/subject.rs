//! The closed taxonomy every flashcard is tagged with.
//!
//! The set is fixed at compile time. Free-form text (model output, database
//! columns) only ever enters the domain through [`Subject::from_model_output`]
//! or [`str::parse`], so a stored card can never carry a subject outside it.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The academic category a flashcard belongs to.
///
/// Ordering follows declaration order; the mix selector relies on it for a
/// stable group order before shuffling.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Subject {
  Mathematics,
  Physics,
  Chemistry,
  Biology,
  Other,
}

impl Subject {
  /// Every subject, in declaration order.
  pub const ALL: [Subject; 5] = [
    Subject::Mathematics,
    Subject::Physics,
    Subject::Chemistry,
    Subject::Biology,
    Subject::Other,
  ];

  /// Subjects a model may choose from, in match priority order. `Other` is
  /// the fallback and is never offered.
  pub const CLASSIFIABLE: [Subject; 4] = [
    Subject::Mathematics,
    Subject::Physics,
    Subject::Chemistry,
    Subject::Biology,
  ];

  /// Canonical name, as stored and serialised.
  pub fn as_str(self) -> &'static str {
    match self {
      Subject::Mathematics => "Mathematics",
      Subject::Physics => "Physics",
      Subject::Chemistry => "Chemistry",
      Subject::Biology => "Biology",
      Subject::Other => "Other",
    }
  }

  /// Map raw model output onto a subject.
  ///
  /// Surrounding whitespace and quote/markdown wrappers are stripped and the
  /// text is case-folded. An exact match or a prefix match (tolerating
  /// trailing punctuation or explanation) is accepted, checked in
  /// [`Subject::CLASSIFIABLE`] order. A literal `other` maps to
  /// [`Subject::Other`]. Anything else is `None`.
  pub fn from_model_output(raw: &str) -> Option<Subject> {
    let folded = raw
      .trim()
      .trim_matches(|c: char| matches!(c, '"' | '\'' | '`' | '*') || c.is_whitespace())
      .to_lowercase();

    if folded.is_empty() {
      return None;
    }

    Subject::CLASSIFIABLE
      .into_iter()
      .find(|s| folded.starts_with(&s.as_str().to_lowercase()))
      .or_else(|| folded.starts_with("other").then_some(Subject::Other))
  }
}

impl fmt::Display for Subject {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Subject {
  type Err = Error;

  /// Strict parse of a canonical name; used when decoding stored records.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Subject::ALL
      .into_iter()
      .find(|subject| subject.as_str() == s)
      .ok_or_else(|| Error::UnknownSubject(s.to_owned()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn exact_names_match_case_insensitively() {
    assert_eq!(Subject::from_model_output("Physics"), Some(Subject::Physics));
    assert_eq!(Subject::from_model_output("physics"), Some(Subject::Physics));
    assert_eq!(Subject::from_model_output("  BIOLOGY \n"), Some(Subject::Biology));
    assert_eq!(Subject::from_model_output("Other"), Some(Subject::Other));
  }

  #[test]
  fn trailing_punctuation_and_explanation_are_tolerated() {
    assert_eq!(Subject::from_model_output("Chemistry."), Some(Subject::Chemistry));
    assert_eq!(
      Subject::from_model_output("Mathematics - this is about derivatives"),
      Some(Subject::Mathematics)
    );
    assert_eq!(Subject::from_model_output("\"Physics\""), Some(Subject::Physics));
    assert_eq!(Subject::from_model_output("**Biology**"), Some(Subject::Biology));
  }

  #[test]
  fn embedded_or_unknown_names_do_not_match() {
    assert_eq!(Subject::from_model_output("The subject is Physics"), None);
    assert_eq!(Subject::from_model_output("History"), None);
    assert_eq!(Subject::from_model_output("Math"), None);
    assert_eq!(Subject::from_model_output(""), None);
    assert_eq!(Subject::from_model_output("   "), None);
  }

  #[test]
  fn strict_parse_rejects_non_canonical_names() {
    assert_eq!("Chemistry".parse::<Subject>().unwrap(), Subject::Chemistry);
    assert!(matches!(
      "chemistry".parse::<Subject>(),
      Err(Error::UnknownSubject(s)) if s == "chemistry"
    ));
  }

  #[test]
  fn serialises_as_canonical_name() {
    let json = serde_json::to_string(&Subject::Mathematics).unwrap();
    assert_eq!(json, "\"Mathematics\"");
    let back: Subject = serde_json::from_str("\"Other\"").unwrap();
    assert_eq!(back, Subject::Other);
  }
}
