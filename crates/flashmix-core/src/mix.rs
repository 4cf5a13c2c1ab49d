//! Mix selection: builds a study batch that spreads across subjects.
//!
//! Cards are grouped by subject, the group visit order is shuffled once per
//! call, and cards are taken round-robin, one per group per pass. If a student
//! has cards in `k` subjects and `limit >= k`, the first `k` cards of the
//! result cover all `k` subjects.

use std::collections::{BTreeMap, VecDeque};

use rand::{Rng, seq::SliceRandom};

use crate::{flashcard::Flashcard, subject::Subject};

/// Default batch size when a caller does not ask for one.
pub const DEFAULT_LIMIT: usize = 5;

/// Select up to `limit` cards from `cards`, maximising subject variety in the
/// prefix of the result.
///
/// Within a subject, cards keep `created_at` order (ties keep input order).
/// `rng` decides only the order in which subjects are visited; seed it to make
/// the result reproducible. An empty input or a zero limit yields an empty
/// batch.
pub fn select_mixed<R>(cards: Vec<Flashcard>, limit: usize, rng: &mut R) -> Vec<Flashcard>
where
  R: Rng + ?Sized,
{
  if limit == 0 || cards.is_empty() {
    return Vec::new();
  }

  let total = cards.len();
  let mut queues = group_by_subject(cards);
  queues.shuffle(rng);

  let mut selected = Vec::with_capacity(limit.min(total));
  while selected.len() < limit {
    let mut took_any = false;
    for queue in queues.iter_mut() {
      if selected.len() == limit {
        break;
      }
      if let Some(card) = queue.pop_front() {
        selected.push(card);
        took_any = true;
      }
    }
    if !took_any {
      break;
    }
  }

  selected
}

/// Partition into per-subject queues in [`Subject`] order, each sorted by
/// creation time.
fn group_by_subject(cards: Vec<Flashcard>) -> Vec<VecDeque<Flashcard>> {
  let mut groups: BTreeMap<Subject, Vec<Flashcard>> = BTreeMap::new();
  for card in cards {
    groups.entry(card.subject).or_default().push(card);
  }

  groups
    .into_values()
    .map(|mut group| {
      group.sort_by_key(|card| card.created_at);
      VecDeque::from(group)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use chrono::{Duration, TimeZone, Utc};
  use rand::{SeedableRng, rngs::StdRng};

  use super::*;
  use crate::flashcard::NewFlashcard;

  fn card(subject: Subject, n: i64) -> Flashcard {
    let mut card = Flashcard::create(
      NewFlashcard::new("student", &format!("{subject} question {n}"), "answer").unwrap(),
      subject,
    );
    card.created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(n);
    card
  }

  /// A: Mathematics ×3, B: Physics ×2, C: Biology ×1.
  fn three_two_one() -> Vec<Flashcard> {
    vec![
      card(Subject::Mathematics, 0),
      card(Subject::Mathematics, 1),
      card(Subject::Mathematics, 2),
      card(Subject::Physics, 3),
      card(Subject::Physics, 4),
      card(Subject::Biology, 5),
    ]
  }

  fn subjects(batch: &[Flashcard]) -> Vec<Subject> { batch.iter().map(|c| c.subject).collect() }

  #[test]
  fn empty_input_yields_empty_batch() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(select_mixed(Vec::new(), 5, &mut rng).is_empty());
  }

  #[test]
  fn zero_limit_yields_empty_batch() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(select_mixed(three_two_one(), 0, &mut rng).is_empty());
  }

  #[test]
  fn first_picks_cover_every_subject_for_any_seed() {
    for seed in 0..64 {
      let mut rng = StdRng::seed_from_u64(seed);
      let batch = select_mixed(three_two_one(), 3, &mut rng);
      assert_eq!(batch.len(), 3);
      let distinct: HashSet<_> = subjects(&batch).into_iter().collect();
      assert_eq!(distinct.len(), 3, "seed {seed}: {:?}", subjects(&batch));
    }
  }

  #[test]
  fn later_passes_stay_round_robin() {
    for seed in 0..64 {
      let mut rng = StdRng::seed_from_u64(seed);
      let batch = select_mixed(three_two_one(), 5, &mut rng);
      let picked = subjects(&batch);
      // Second pass can only draw from the two subjects that still have cards.
      let second: HashSet<_> = picked[3..5].iter().copied().collect();
      assert_eq!(
        second,
        HashSet::from([Subject::Mathematics, Subject::Physics]),
        "seed {seed}: {picked:?}"
      );
    }
  }

  #[test]
  fn limit_above_total_returns_every_card_once() {
    let cards = three_two_one();
    let ids: HashSet<_> = cards.iter().map(|c| c.id).collect();
    let mut rng = StdRng::seed_from_u64(7);
    let batch = select_mixed(cards, 50, &mut rng);
    assert_eq!(batch.len(), 6);
    let returned: HashSet<_> = batch.iter().map(|c| c.id).collect();
    assert_eq!(returned, ids);
    // Mathematics is the only subject left for the final pick.
    assert_eq!(batch[5].subject, Subject::Mathematics);
  }

  #[test]
  fn single_subject_is_a_plain_ordered_slice() {
    let cards = vec![
      card(Subject::Chemistry, 2),
      card(Subject::Chemistry, 0),
      card(Subject::Chemistry, 1),
    ];
    let mut rng = StdRng::seed_from_u64(3);
    let batch = select_mixed(cards, 2, &mut rng);
    let questions: Vec<_> = batch.iter().map(|c| c.question.as_str()).collect();
    assert_eq!(questions, ["Chemistry question 0", "Chemistry question 1"]);
  }

  #[test]
  fn within_subject_order_follows_creation_time() {
    let mut rng = StdRng::seed_from_u64(11);
    let batch = select_mixed(three_two_one(), 6, &mut rng);
    let maths: Vec<_> = batch
      .iter()
      .filter(|c| c.subject == Subject::Mathematics)
      .map(|c| c.created_at)
      .collect();
    assert!(maths.windows(2).all(|w| w[0] <= w[1]));
  }

  #[test]
  fn same_seed_gives_same_batch() {
    let cards = three_two_one();
    let a = select_mixed(cards.clone(), 4, &mut StdRng::seed_from_u64(42));
    let b = select_mixed(cards, 4, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
  }

  #[test]
  fn subject_visit_order_varies_across_seeds() {
    let firsts: HashSet<_> = (0..64)
      .map(|seed| select_mixed(three_two_one(), 1, &mut StdRng::seed_from_u64(seed))[0].subject)
      .collect();
    assert!(firsts.len() > 1);
  }
}
