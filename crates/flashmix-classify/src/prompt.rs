//! Prompt construction for subject classification.

use flashmix_core::subject::Subject;

/// A system/user message pair sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
  pub system: String,
  pub user:   String,
}

impl Prompt {
  /// Ask for exactly one subject name for a flashcard.
  pub fn for_flashcard(question: &str, answer: &str) -> Self {
    let names = Subject::CLASSIFIABLE
      .iter()
      .map(|s| s.as_str())
      .collect::<Vec<_>>()
      .join(", ");

    let system = format!(
      "You are a helpful assistant that identifies the subject of a flashcard. \
       Based on the provided question and answer, identify the most relevant \
       subject from the following list: {names}. Your response MUST be only the \
       subject name, exactly as it appears in the list. Do NOT include any other \
       text, punctuation, or explanations."
    );
    let user = format!("Question: {question}\nAnswer: {answer}");

    Self { system, user }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn system_prompt_lists_only_classifiable_subjects() {
    let prompt = Prompt::for_flashcard("q", "a");
    for subject in Subject::CLASSIFIABLE {
      assert!(prompt.system.contains(subject.as_str()));
    }
    assert!(!prompt.system.contains("Other"));
  }

  #[test]
  fn user_prompt_carries_both_sides_of_the_card() {
    let prompt = Prompt::for_flashcard("What is an atom?", "The smallest unit of matter");
    assert_eq!(prompt.user, "Question: What is an atom?\nAnswer: The smallest unit of matter");
  }
}
