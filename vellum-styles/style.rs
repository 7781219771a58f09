//! Named block style definitions.
//!
//! A [`StyleDefinition`] is one row in the style registry: identity metadata,
//! an optional inheritance edge (`based_on`), the style a following block
//! should take (`next`), and a set of optional visual properties. Absence of
//! a visual property means "not specified at this level", which matters for
//! inheritance: the resolver only overlays properties that are present.
//!
//! Field names serialize in camelCase so definitions round-trip against the
//! host's JSON document format.

use once_cell::sync::Lazy;
use serde::{
  Deserialize,
  Serialize,
};

/// Id of the built-in body style. Blocks without a style attribute and
/// dangling style references both land here.
pub const FALLBACK_STYLE_ID: &str = "Normal Text";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
  Left,
  Center,
  Right,
  Justify,
}

impl TextAlign {
  pub const fn as_css(self) -> &'static str {
    match self {
      Self::Left => "left",
      Self::Center => "center",
      Self::Right => "right",
      Self::Justify => "justify",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
  Uppercase,
  Lowercase,
  Capitalize,
  None,
}

impl TextTransform {
  pub const fn as_css(self) -> &'static str {
    match self {
      Self::Uppercase => "uppercase",
      Self::Lowercase => "lowercase",
      Self::Capitalize => "capitalize",
      Self::None => "none",
    }
  }
}

/// Break behavior before or after a block. Only `Page` has any visual
/// effect; `Auto` is stored so round-tripped documents keep their value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakMode {
  Auto,
  Page,
}

/// A named block style.
///
/// The metadata fields (`id`, `name`, `display_name`, `description`,
/// `based_on`, `next`) identify the style and are never inherited; everything
/// else participates in inheritance resolution. The hyphenation/orphan/widow/
/// outline fields are document-format metadata carried through save and load
/// but not rendered by the editor surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleDefinition {
  pub id:           String,
  pub name:         String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  pub description:  String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub based_on: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub next:     Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub font_family: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub font_size:   Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub font_weight: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub line_height: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub margin_top:    Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub margin_bottom: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub margin_left:   Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub margin_right:  Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text_indent:   Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub text_align:     Option<TextAlign>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text_transform: Option<TextTransform>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub break_before: Option<BreakMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub break_after:  Option<BreakMode>,

  // Mobile-only overrides, applied inside the responsive media block.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mobile_margin_left:  Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mobile_margin_right: Option<String>,

  // Document-format metadata, not visible in the editor.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hyphenate:     Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub orphans:       Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub widows:        Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub outline_level: Option<u8>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub autocomplete: Option<bool>,
}

impl StyleDefinition {
  /// A bare definition with `name` mirroring `id` and everything else unset.
  pub fn new(id: impl Into<String>) -> Self {
    let id = id.into();
    Self {
      name: id.clone(),
      id,
      ..Self::default()
    }
  }

  /// Whether text authored under this style feeds the autocomplete index.
  #[must_use]
  pub fn autocomplete_eligible(&self) -> bool {
    self.autocomplete == Some(true)
  }
}

/// The style used when a referenced id cannot be found. Presentation must
/// never fail on a dangling reference.
pub fn fallback_style() -> StyleDefinition {
  StyleDefinition {
    description: "Standard body text".into(),
    font_family: Some("Arial, sans-serif".into()),
    font_size: Some("11pt".into()),
    line_height: Some("1.15".into()),
    margin_top: Some("0pt".into()),
    margin_bottom: Some("8pt".into()),
    text_align: Some(TextAlign::Left),
    ..StyleDefinition::new(FALLBACK_STYLE_ID)
  }
}

// (id, outline level, font size, weight, margin top, margin bottom)
const HEADINGS: [(&str, u8, &str, &str, &str, &str); 6] = [
  ("Heading 1", 1, "20pt", "normal", "20pt", "6pt"),
  ("Heading 2", 2, "16pt", "bold", "18pt", "6pt"),
  ("Heading 3", 3, "14pt", "bold", "16pt", "4pt"),
  ("Heading 4", 4, "12pt", "bold", "14pt", "4pt"),
  ("Heading 5", 5, "11pt", "bold", "12pt", "4pt"),
  ("Heading 6", 6, "11pt", "bold", "10pt", "4pt"),
];

static DEFAULT_STYLES: Lazy<Vec<StyleDefinition>> = Lazy::new(|| {
  let mut styles = vec![
    fallback_style(),
    StyleDefinition {
      description: "Document title".into(),
      next: Some(FALLBACK_STYLE_ID.into()),
      font_family: Some("Arial, sans-serif".into()),
      font_size: Some("26pt".into()),
      font_weight: Some("normal".into()),
      line_height: Some("1.15".into()),
      margin_top: Some("0pt".into()),
      margin_bottom: Some("3pt".into()),
      text_align: Some(TextAlign::Left),
      ..StyleDefinition::new("Title")
    },
    StyleDefinition {
      description: "Document subtitle".into(),
      next: Some(FALLBACK_STYLE_ID.into()),
      font_family: Some("Arial, sans-serif".into()),
      font_size: Some("15pt".into()),
      font_weight: Some("normal".into()),
      line_height: Some("1.15".into()),
      margin_top: Some("0pt".into()),
      margin_bottom: Some("10pt".into()),
      text_align: Some(TextAlign::Left),
      ..StyleDefinition::new("Subtitle")
    },
  ];

  for (id, level, size, weight, top, bottom) in HEADINGS {
    styles.push(StyleDefinition {
      description: format!("Level {level} heading"),
      next: Some(FALLBACK_STYLE_ID.into()),
      outline_level: Some(level),
      font_family: Some("Arial, sans-serif".into()),
      font_size: Some(size.into()),
      font_weight: Some(weight.into()),
      line_height: Some("1.15".into()),
      margin_top: Some(top.into()),
      margin_bottom: Some(bottom.into()),
      text_align: Some(TextAlign::Left),
      ..StyleDefinition::new(id)
    });
  }

  styles
});

/// The built-in style set every new document starts from.
pub fn default_styles() -> &'static [StyleDefinition] {
  &DEFAULT_STYLES
}
