//! Built-in document templates.
//!
//! A template is a named bundle of style definitions the editor seeds a new
//! document with. `basic` carries no styles of its own (the registry
//! defaults apply); `screenplay` is the Hollywood-standard format, with
//! autocomplete enabled on the entity-name styles (scene headings and
//! character names).

use once_cell::sync::Lazy;
use serde::{
  Deserialize,
  Serialize,
};

use crate::style::{
  StyleDefinition,
  TextAlign,
  TextTransform,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
  pub id:          String,
  pub name:        String,
  pub description: String,
  pub styles:      Vec<StyleDefinition>,
}

const COURIER: &str = "\"Courier Prime\", \"Courier New\", Courier, monospace";

fn courier(id: &str, description: &str, next: &str) -> StyleDefinition {
  StyleDefinition {
    description: description.into(),
    next: Some(next.into()),
    font_family: Some(COURIER.into()),
    font_size: Some("12pt".into()),
    font_weight: Some("normal".into()),
    text_align: Some(TextAlign::Left),
    ..StyleDefinition::new(id)
  }
}

fn screenplay_styles() -> Vec<StyleDefinition> {
  vec![
    StyleDefinition {
      outline_level: Some(1),
      font_weight: Some("bold".into()),
      text_align: Some(TextAlign::Center),
      margin_top: Some("1.5in".into()),
      margin_bottom: Some("0.5in".into()),
      text_transform: Some(TextTransform::Uppercase),
      ..courier("Script Title", "Title of the script", "Scene Heading")
    },
    StyleDefinition {
      display_name: Some("Slugline".into()),
      outline_level: Some(2),
      font_weight: Some("bold".into()),
      margin_top: Some("12pt".into()),
      margin_bottom: Some("12pt".into()),
      margin_left: Some("0in".into()),
      margin_right: Some("0in".into()),
      text_indent: Some("0in".into()),
      text_transform: Some(TextTransform::Uppercase),
      autocomplete: Some(true),
      ..courier(
        "Scene Heading",
        "Scene Location and Time (INT./EXT.)",
        "Action",
      )
    },
    StyleDefinition {
      margin_top: Some("12pt".into()),
      margin_bottom: Some("12pt".into()),
      margin_left: Some("0in".into()),
      margin_right: Some("0in".into()),
      ..courier("Action", "Scene description", "Action")
    },
    StyleDefinition {
      outline_level: Some(3),
      margin_top: Some("12pt".into()),
      margin_bottom: Some("0pt".into()),
      margin_left: Some("2.0in".into()),
      margin_right: Some("0in".into()),
      text_transform: Some(TextTransform::Uppercase),
      mobile_margin_left: Some("1.5in".into()),
      autocomplete: Some(true),
      ..courier("Character", "Character Name", "Dialogue")
    },
    StyleDefinition {
      margin_top: Some("0pt".into()),
      margin_bottom: Some("12pt".into()),
      margin_left: Some("1.0in".into()),
      margin_right: Some("1.5in".into()),
      mobile_margin_left: Some("0.5in".into()),
      mobile_margin_right: Some("0.5in".into()),
      ..courier("Dialogue", "Character Dialogue", "Character")
    },
    StyleDefinition {
      margin_top: Some("0pt".into()),
      margin_bottom: Some("0pt".into()),
      margin_left: Some("1.5in".into()),
      margin_right: Some("2.0in".into()),
      mobile_margin_left: Some("1.0in".into()),
      mobile_margin_right: Some("1.0in".into()),
      ..courier("Parenthetical", "Action within dialogue", "Dialogue")
    },
    StyleDefinition {
      text_align: Some(TextAlign::Right),
      margin_top: Some("12pt".into()),
      margin_bottom: Some("12pt".into()),
      margin_right: Some("0in".into()),
      text_transform: Some(TextTransform::Uppercase),
      ..courier("Transition", "Cut to, Fade in, etc.", "Scene Heading")
    },
  ]
}

static TEMPLATES: Lazy<Vec<Template>> = Lazy::new(|| {
  vec![
    Template {
      id: "basic".into(),
      name: "Basic Document".into(),
      description: "Standard document with headings and paragraphs.".into(),
      // Empty: the registry's built-in defaults already cover it.
      styles: Vec::new(),
    },
    Template {
      id: "screenplay".into(),
      name: "Screenplay".into(),
      description: "Hollywood standard screenplay format.".into(),
      styles: screenplay_styles(),
    },
  ]
});

pub fn templates() -> &'static [Template] {
  &TEMPLATES
}

#[must_use]
pub fn template(id: &str) -> Option<&'static Template> {
  TEMPLATES.iter().find(|t| t.id == id)
}
