//! Named block styles for the editor: definitions, registry, inheritance
//! resolution, stylesheet generation, and the built-in templates.

pub mod registry;
pub mod resolve;
pub mod style;
pub mod stylesheet;
pub mod template;

pub use registry::{
  Result,
  StyleError,
  StyleRegistry,
};
pub use resolve::resolve;
pub use style::{
  BreakMode,
  FALLBACK_STYLE_ID,
  StyleDefinition,
  TextAlign,
  TextTransform,
  default_styles,
  fallback_style,
};
pub use stylesheet::{
  EDITOR_SCOPE,
  generate,
};
pub use template::{
  Template,
  template,
  templates,
};
