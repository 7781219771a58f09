//! Inheritance resolution for named styles.
//!
//! A style may be `based_on` another style; resolution walks that chain and
//! flattens it into a single definition where every visual property holds
//! the nearest-ancestor-or-self value. The `based_on` graph is user data and
//! may contain cycles; resolution guards with a visited set and degrades to
//! the raw definition instead of recursing forever.

use std::collections::HashSet;

use crate::{
  registry::StyleRegistry,
  style::{
    StyleDefinition,
    fallback_style,
  },
};

// Overlay the child's visual properties onto the resolved parent; only
// present values win.
macro_rules! overlay {
  ($base:ident, $child:ident, $($field:ident),+ $(,)?) => {
    $(
      if $child.$field.is_some() {
        $base.$field = $child.$field.clone();
      }
    )+
  };
}

/// Resolves `style_id` against `registry`, flattening its inheritance chain.
///
/// Never fails: an unknown id yields the built-in fallback style, and a
/// cyclic chain yields the raw definition of `style_id` with a logged
/// warning. Metadata (`id`, `name`, `display_name`, `description`,
/// `based_on`, `next`) always comes from the style being resolved, never
/// from an ancestor.
#[must_use]
pub fn resolve(style_id: &str, registry: &StyleRegistry) -> StyleDefinition {
  let mut visited = HashSet::new();
  resolve_inner(style_id, registry, &mut visited)
}

fn resolve_inner(
  style_id: &str,
  registry: &StyleRegistry,
  visited: &mut HashSet<String>,
) -> StyleDefinition {
  if visited.contains(style_id) {
    tracing::warn!(style = style_id, "circular style inheritance detected");
    return registry
      .get(style_id)
      .cloned()
      .unwrap_or_else(fallback_style);
  }

  let Some(style) = registry.get(style_id) else {
    return fallback_style();
  };

  let Some(parent_id) = style.based_on.as_deref() else {
    return style.clone();
  };

  visited.insert(style_id.to_string());
  let mut merged = resolve_inner(parent_id, registry, visited);

  overlay!(
    merged,
    style,
    font_family,
    font_size,
    font_weight,
    line_height,
    margin_top,
    margin_bottom,
    margin_left,
    margin_right,
    text_indent,
    text_align,
    text_transform,
    break_before,
    break_after,
    mobile_margin_left,
    mobile_margin_right,
    hyphenate,
    orphans,
    widows,
    outline_level,
    autocomplete,
  );

  // Identity is never inherited.
  merged.id = style.id.clone();
  merged.name = style.name.clone();
  merged.display_name = style.display_name.clone();
  merged.description = style.description.clone();
  merged.based_on = style.based_on.clone();
  merged.next = style.next.clone();

  merged
}
