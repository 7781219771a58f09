//! Editing-session front-end pieces that sit between the host document
//! surface and the style system: the host-document boundary traits, input
//! event types, and block autocomplete.

pub mod autocomplete;
pub mod document;
pub mod input;

pub use autocomplete::{
  AnchorPosition,
  AutocompleteIndex,
  AutocompleteSession,
  MAX_SUGGESTIONS,
  SessionObserver,
  SessionSnapshot,
};
pub use document::{
  BlockKind,
  BlockNode,
  CursorContext,
  DocumentEditor,
  DocumentView,
  ScreenCoords,
};
pub use input::{
  Key,
  KeyEvent,
  KeyOutcome,
  Modifiers,
};
