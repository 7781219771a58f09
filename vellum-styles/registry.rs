//! Ordered store of named style definitions.
//!
//! The registry owns the style list for one document. Resolution, stylesheet
//! generation and index building all take a registry snapshot by reference
//! and never mutate it; mutation happens only through the CRUD methods here,
//! between those calls.

use thiserror::Error;

use crate::style::{
  StyleDefinition,
  default_styles,
};

#[derive(Debug, Error)]
pub enum StyleError {
  #[error("a style with id {0:?} already exists")]
  DuplicateStyle(String),
  #[error("no style with id {0:?}")]
  UnknownStyle(String),
}

pub type Result<T> = std::result::Result<T, StyleError>;

/// Ordered collection of [`StyleDefinition`]s.
///
/// Order is preserved: the stylesheet generator emits rules in registry
/// order, so identical registries produce identical output.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRegistry {
  styles: Vec<StyleDefinition>,
}

impl Default for StyleRegistry {
  fn default() -> Self {
    Self::new()
  }
}

impl StyleRegistry {
  /// A registry seeded with the built-in default styles.
  pub fn new() -> Self {
    Self {
      styles: default_styles().to_vec(),
    }
  }

  /// A registry with no styles at all.
  pub fn empty() -> Self {
    Self { styles: Vec::new() }
  }

  /// A registry holding exactly `styles`, in the given order.
  pub fn from_styles(styles: Vec<StyleDefinition>) -> Self {
    Self { styles }
  }

  #[must_use]
  pub fn styles(&self) -> &[StyleDefinition] {
    &self.styles
  }

  #[must_use]
  pub fn get(&self, id: &str) -> Option<&StyleDefinition> {
    self.styles.iter().find(|s| s.id == id)
  }

  #[must_use]
  pub fn contains(&self, id: &str) -> bool {
    self.get(id).is_some()
  }

  /// Replaces the whole style list, e.g. when loading a document or
  /// applying a template.
  pub fn set_styles(&mut self, styles: Vec<StyleDefinition>) {
    self.styles = styles;
  }

  /// Appends a style. The id must not already be taken.
  pub fn add(&mut self, style: StyleDefinition) -> Result<()> {
    if self.contains(&style.id) {
      return Err(StyleError::DuplicateStyle(style.id));
    }
    self.styles.push(style);
    Ok(())
  }

  /// Edits the style with the given id in place.
  pub fn update(&mut self, id: &str, edit: impl FnOnce(&mut StyleDefinition)) -> Result<()> {
    let style = self
      .styles
      .iter_mut()
      .find(|s| s.id == id)
      .ok_or_else(|| StyleError::UnknownStyle(id.to_string()))?;
    edit(style);
    Ok(())
  }

  pub fn remove(&mut self, id: &str) -> Result<StyleDefinition> {
    let pos = self
      .styles
      .iter()
      .position(|s| s.id == id)
      .ok_or_else(|| StyleError::UnknownStyle(id.to_string()))?;
    Ok(self.styles.remove(pos))
  }

  /// Back to the built-in defaults.
  pub fn reset(&mut self) {
    self.styles = default_styles().to_vec();
  }

  /// The style a newly created sibling block should take after a block
  /// styled `id`, when the definition names one and it actually exists in
  /// this registry. Callers pass their registry snapshot explicitly; there
  /// is no ambient global to consult.
  #[must_use]
  pub fn next_style(&self, id: &str) -> Option<&str> {
    let next = self.get(id)?.next.as_deref()?;
    self.get(next).map(|s| s.id.as_str())
  }
}
