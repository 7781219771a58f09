//! CSS generation for the editor surface.
//!
//! Every style in the registry is resolved and lowered to one rule whose
//! selector targets blocks tagged with the style id. Page-break styles get
//! an extra structural pseudo-rule that paints a dashed "Page Break" marker
//! in the editor, and mobile margin overrides are grouped under a single
//! responsive block. Output is deterministic: an unchanged registry produces
//! byte-identical CSS.

use crate::{
  registry::StyleRegistry,
  resolve::resolve,
  style::{
    BreakMode,
    StyleDefinition,
  },
};

/// Selector scope the host wraps around the editing surface.
pub const EDITOR_SCOPE: &str = ".editor";

const MOBILE_MAX_WIDTH: &str = "600px";

/// Generates the full editor stylesheet for `registry`.
#[must_use]
pub fn generate(registry: &StyleRegistry) -> String {
  let mut base = Vec::new();
  for style in registry.styles() {
    let resolved = resolve(&style.id, registry);
    if let Some(rule) = block_rule(&resolved) {
      base.push(rule);
    }
    if resolved.break_before == Some(BreakMode::Page) {
      base.push(break_marker_rule(&resolved.id, MarkerEdge::Before));
    }
    if resolved.break_after == Some(BreakMode::Page) {
      base.push(break_marker_rule(&resolved.id, MarkerEdge::After));
    }
  }

  let mobile: Vec<_> = registry
    .styles()
    .iter()
    .filter_map(|style| mobile_rule(&resolve(&style.id, registry)))
    .collect();

  format!(
    "{base}\n\n@media (max-width: {MOBILE_MAX_WIDTH}) {{\n{mobile}\n}}\n\n{static_rules}\n",
    base = base.join("\n"),
    mobile = mobile.join("\n"),
    static_rules = STATIC_RULES,
  )
}

fn selector(id: &str) -> String {
  format!("{EDITOR_SCOPE} [data-style-name=\"{id}\"]")
}

fn rule(selector: String, decls: &[String]) -> String {
  format!("{selector} {{\n  {}\n}}", decls.join("\n  "))
}

fn push(decls: &mut Vec<String>, property: &str, value: &Option<String>) {
  if let Some(value) = value {
    decls.push(format!("{property}: {value};"));
  }
}

/// The main rule for a resolved style, or `None` when the style declares no
/// visual properties at all (no empty rule bodies).
fn block_rule(s: &StyleDefinition) -> Option<String> {
  let mut decls = Vec::new();

  if let Some(family) = &s.font_family {
    // A single family name gets quoted; a family list is passed through.
    let family = if family.contains(',') {
      family.clone()
    } else {
      format!("\"{family}\"")
    };
    decls.push(format!("font-family: {family};"));
  }
  push(&mut decls, "font-size", &s.font_size);
  push(&mut decls, "font-weight", &s.font_weight);
  push(&mut decls, "line-height", &s.line_height);
  push(&mut decls, "margin-top", &s.margin_top);
  push(&mut decls, "margin-bottom", &s.margin_bottom);
  push(&mut decls, "margin-left", &s.margin_left);
  push(&mut decls, "margin-right", &s.margin_right);
  push(&mut decls, "text-indent", &s.text_indent);
  if let Some(align) = s.text_align {
    decls.push(format!("text-align: {};", align.as_css()));
  }
  if let Some(transform) = s.text_transform {
    decls.push(format!("text-transform: {};", transform.as_css()));
  }

  // Page-break bumps override the regular margins above, so they come last.
  if s.break_before == Some(BreakMode::Page) {
    decls.push("break-before: page;".into());
    decls.push("margin-top: 3rem;".into());
    decls.push("position: relative;".into());
  }
  if s.break_after == Some(BreakMode::Page) {
    decls.push("break-after: page;".into());
    decls.push("margin-bottom: 3rem;".into());
    decls.push("position: relative;".into());
  }

  if decls.is_empty() {
    None
  } else {
    Some(rule(selector(&s.id), &decls))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerEdge {
  Before,
  After,
}

/// The non-interactive "Page Break" label painted next to a block whose
/// style breaks the page.
fn break_marker_rule(id: &str, edge: MarkerEdge) -> String {
  let (pseudo, spacing, anchor) = match edge {
    MarkerEdge::Before => ("::before", "margin-bottom: 2rem;", "top: -1.5rem;"),
    MarkerEdge::After => ("::after", "margin-top: 2rem;", "bottom: -1.5rem;"),
  };
  format!(
    "{selector}{pseudo} {{\n  \
       content: 'Page Break';\n  \
       display: block;\n  \
       width: 100%;\n  \
       border-top: 1px dashed #ccc;\n  \
       {spacing}\n  \
       position: absolute;\n  \
       {anchor}\n  \
       left: 0;\n  \
       color: #ccc;\n  \
       font-size: 0.8rem;\n  \
       text-transform: uppercase;\n  \
       text-align: center;\n  \
       pointer-events: none;\n}}",
    selector = selector(id),
  )
}

/// Mobile-only margin overrides; styles without any contribute nothing.
fn mobile_rule(s: &StyleDefinition) -> Option<String> {
  let mut decls = Vec::new();
  push(&mut decls, "margin-left", &s.mobile_margin_left);
  push(&mut decls, "margin-right", &s.mobile_margin_right);
  if decls.is_empty() {
    None
  } else {
    Some(rule(selector(&s.id), &decls))
  }
}

// Visual marker for explicit horizontal-rule page breaks, present whatever
// the registry holds.
const STATIC_RULES: &str = "\
hr.page-break {
  border: none;
  border-top: 1px dashed #ccc;
  margin: 2rem 0;
  position: relative;
}

hr.page-break::after {
  content: 'Page Break';
  position: absolute;
  top: -0.7em;
  left: 50%;
  transform: translateX(-50%);
  background: var(--bg-color);
  padding: 0 0.5rem;
  color: #ccc;
  font-size: 0.8rem;
  text-transform: uppercase;
}";
