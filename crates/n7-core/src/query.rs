//! Read-side projections over a [`Catalog`].
//!
//! Everything here is pure: flattened views, counts, and status records are
//! derived on demand and never stored.

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use crate::{Catalog, Error, Result};

/// A prompt annotated with the category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatPrompt {
  pub category: String,
  pub prompt:   String,
  pub notes:    Option<String>,
  pub tags:     Vec<String>,
}

/// Aggregate view reported by `/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
  pub title:       String,
  pub last_update: Option<String>,
  pub categories:  Vec<String>,
  pub total:       usize,
}

/// Every prompt in category order, then per-category order.
pub fn flatten(catalog: &Catalog) -> Vec<FlatPrompt> {
  catalog
    .categories()
    .iter()
    .flat_map(|category| {
      category.prompts.iter().map(|p| FlatPrompt {
        category: category.name.clone(),
        prompt:   p.text.clone(),
        notes:    p.notes.clone(),
        tags:     p.tags.clone(),
      })
    })
    .collect()
}

pub fn count(catalog: &Catalog) -> usize {
  catalog.categories().iter().map(|c| c.prompts.len()).sum()
}

/// Pick one prompt uniformly at random, restricted to prompts carrying `tag`
/// when one is given.
///
/// `rng` need not be cryptographically secure.
pub fn random_prompt<R>(
  catalog: &Catalog,
  tag: Option<&str>,
  rng: &mut R,
) -> Result<FlatPrompt>
where
  R: Rng + ?Sized,
{
  let mut flat = flatten(catalog);
  if let Some(tag) = tag {
    flat.retain(|p| p.tags.iter().any(|t| t == tag));
  }
  flat
    .choose(rng)
    .cloned()
    .ok_or_else(|| Error::NoMatch(tag.map(str::to_owned)))
}

pub fn status(
  catalog: &Catalog,
  title: impl Into<String>,
  last_update: Option<String>,
) -> StatusRecord {
  StatusRecord {
    title: title.into(),
    last_update,
    categories: catalog.category_names(),
    total: count(catalog),
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use rand::{SeedableRng, rngs::StdRng};

  use super::*;
  use crate::{Prompt, seed::seed};

  fn small() -> Catalog {
    let mut c = Catalog::new();
    c.push_category("b", vec![
      Prompt::new("b1").with_tags(["x"]),
      Prompt::new("b2"),
    ])
    .unwrap();
    c.push_category("a", vec![Prompt::new("a1").with_tags(["x", "y"])])
      .unwrap();
    c.push_category("empty", vec![]).unwrap();
    c
  }

  #[test]
  fn count_matches_flatten_len() {
    for catalog in [small(), seed(), Catalog::new()] {
      let per_category: usize =
        catalog.categories().iter().map(|c| c.prompts.len()).sum();
      assert_eq!(count(&catalog), per_category);
      assert_eq!(flatten(&catalog).len(), per_category);
    }
  }

  #[test]
  fn flatten_preserves_order() {
    let flat = flatten(&small());
    let order: Vec<(&str, &str)> = flat
      .iter()
      .map(|p| (p.category.as_str(), p.prompt.as_str()))
      .collect();
    assert_eq!(order, vec![("b", "b1"), ("b", "b2"), ("a", "a1")]);
  }

  #[test]
  fn flatten_carries_notes_and_tags() {
    let flat = flatten(&seed());
    assert_eq!(
      flat[0].notes.as_deref(),
      Some("Add IAM least-privilege and CloudWatch metrics.")
    );
    assert_eq!(flat[0].tags, vec!["aws", "lambda", "s3", "shadowrocket"]);
    assert_eq!(flat[1].notes, None);
  }

  #[test]
  fn random_with_tag_only_returns_matches() {
    let catalog = small();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
      let pick = random_prompt(&catalog, Some("y"), &mut rng).unwrap();
      assert_eq!(pick.prompt, "a1");
    }
  }

  #[test]
  fn random_shadowrocket_hits_exactly_two_prompts() {
    let catalog = seed();
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = HashSet::new();
    for _ in 0..200 {
      let pick = random_prompt(&catalog, Some("shadowrocket"), &mut rng).unwrap();
      assert!(pick.tags.iter().any(|t| t == "shadowrocket"));
      seen.insert(pick.prompt);
    }
    assert_eq!(seen.len(), 2);
  }

  #[test]
  fn random_without_tag_covers_catalog() {
    let catalog = small();
    let mut rng = StdRng::seed_from_u64(1);
    let seen: HashSet<String> = (0..200)
      .map(|_| random_prompt(&catalog, None, &mut rng).unwrap().prompt)
      .collect();
    assert_eq!(seen.len(), 3);
  }

  #[test]
  fn random_unknown_tag_is_no_match() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = random_prompt(&seed(), Some("does-not-exist"), &mut rng).unwrap_err();
    assert!(matches!(err, Error::NoMatch(Some(t)) if t == "does-not-exist"));
  }

  #[test]
  fn random_tag_match_is_case_sensitive() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(random_prompt(&seed(), Some("AWS"), &mut rng).is_err());
  }

  #[test]
  fn random_on_empty_catalog_is_no_match() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = random_prompt(&Catalog::new(), None, &mut rng).unwrap_err();
    assert!(matches!(err, Error::NoMatch(None)));
  }

  #[test]
  fn status_lists_categories_in_order() {
    let record = status(&seed(), "N7", Some("2024-01-01T00:00:00.000Z".into()));
    assert_eq!(record.total, 11);
    assert_eq!(record.categories.len(), 5);
    assert_eq!(record.categories[0], "Tech Automation");
    assert_eq!(record.categories[4], "Relationship / EQ");
    assert_eq!(record.last_update.as_deref(), Some("2024-01-01T00:00:00.000Z"));
  }
}
