//! Catalog and prompt records.
//!
//! A catalog is an ordered mapping from category name to a list of prompts.
//! On the wire it is a JSON object whose key order is the display order, so
//! the map is kept as a `Vec` of categories rather than a hashed map.

use std::{collections::HashSet, fmt};

use serde::{
  Deserialize, Deserializer, Serialize, Serializer,
  de::{MapAccess, Visitor},
  ser::SerializeMap,
};

use crate::{Error, Result};

// ─── Prompt ──────────────────────────────────────────────────────────────────

/// One reusable instruction text with optional notes and tags.
///
/// Stored records may carry `"tags": null` or `"notes": ""`; both decode to
/// their empty form (`[]` and `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
  #[serde(rename = "prompt")]
  pub text:  String,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub tags:  Vec<String>,
  #[serde(
    default,
    deserialize_with = "empty_as_none",
    skip_serializing_if = "Option::is_none"
  )]
  pub notes: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
  Ok(Option::<Vec<String>>::deserialize(d)?.unwrap_or_default())
}

fn empty_as_none<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
  Ok(Option::<String>::deserialize(d)?.filter(|s| !s.is_empty()))
}

impl Prompt {
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text:  text.into(),
      tags:  Vec::new(),
      notes: None,
    }
  }

  pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
    self.notes = Some(notes.into());
    self
  }

  pub fn with_tags<I, T>(mut self, tags: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<String>,
  {
    self.tags = tags.into_iter().map(Into::into).collect();
    self
  }

  /// Exact, case-sensitive tag membership.
  pub fn has_tag(&self, tag: &str) -> bool {
    self.tags.iter().any(|t| t == tag)
  }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// A named group of prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
  pub name:    String,
  pub prompts: Vec<Prompt>,
}

/// The full category → prompts mapping, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
  categories: Vec<Category>,
}

impl Catalog {
  pub fn new() -> Self { Self::default() }

  /// Build from categories known to be well-formed (the built-in seed).
  pub(crate) fn from_categories(categories: Vec<Category>) -> Self {
    Self { categories }
  }

  /// Append a category. Fails if `name` is already present.
  pub fn push_category(
    &mut self,
    name: impl Into<String>,
    prompts: Vec<Prompt>,
  ) -> Result<()> {
    let name = name.into();
    if self.get(&name).is_some() {
      return Err(Error::InvalidCatalog(format!(
        "duplicate category {name:?}"
      )));
    }
    self.categories.push(Category { name, prompts });
    Ok(())
  }

  pub fn categories(&self) -> &[Category] { &self.categories }

  pub fn category_names(&self) -> Vec<String> {
    self.categories.iter().map(|c| c.name.clone()).collect()
  }

  pub fn get(&self, name: &str) -> Option<&Category> {
    self.categories.iter().find(|c| c.name == name)
  }

  pub fn is_empty(&self) -> bool { self.categories.is_empty() }

  /// Check the invariants that the JSON shape alone cannot express:
  /// unique category names and non-blank prompt text.
  pub fn validate(&self) -> Result<()> {
    let mut seen = HashSet::new();
    for category in &self.categories {
      if !seen.insert(category.name.as_str()) {
        return Err(Error::InvalidCatalog(format!(
          "duplicate category {:?}",
          category.name
        )));
      }
      for (i, prompt) in category.prompts.iter().enumerate() {
        if prompt.text.trim().is_empty() {
          return Err(Error::InvalidCatalog(format!(
            "prompt {i} in category {:?} has empty text",
            category.name
          )));
        }
      }
    }
    Ok(())
  }

  /// Decode and validate a catalog from its stored JSON form.
  pub fn from_json(raw: &str) -> Result<Self> {
    let catalog: Catalog = serde_json::from_str(raw)
      .map_err(|e| Error::InvalidCatalog(e.to_string()))?;
    catalog.validate()?;
    Ok(catalog)
  }

  /// Encode as pretty-printed JSON, preserving category order.
  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}

// ─── Serde ───────────────────────────────────────────────────────────────────

impl Serialize for Catalog {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.categories.len()))?;
    for category in &self.categories {
      map.serialize_entry(&category.name, &category.prompts)?;
    }
    map.end()
  }
}

impl<'de> Deserialize<'de> for Catalog {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    struct CatalogVisitor;

    impl<'de> Visitor<'de> for CatalogVisitor {
      type Value = Catalog;

      fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of category name to a list of prompts")
      }

      fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Catalog, A::Error> {
        // Duplicate keys are kept here and rejected by `Catalog::validate`.
        let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, prompts)) = access.next_entry::<String, Vec<Prompt>>()? {
          categories.push(Category { name, prompts });
        }
        Ok(Catalog { categories })
      }
    }

    deserializer.deserialize_map(CatalogVisitor)
  }
}
