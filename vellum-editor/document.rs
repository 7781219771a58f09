//! Boundary to the host document surface.
//!
//! The rich-text tree, cursor and mutation commands live in the host; this
//! crate only sees them through the traits here. Positions are absolute
//! offsets in whatever unit the host uses, opaque to this crate except that
//! a block's content spans `start .. start + content_size`.

/// Block-level node kinds the autocomplete core cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
  Paragraph,
  Heading,
}

/// Snapshot of one block-level node.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockNode {
  pub kind:         BlockKind,
  /// The style attribute as authored; `None` means the default style.
  pub style_name:   Option<String>,
  /// Plain text content of the block.
  pub text:         String,
  /// Size of the block's content span, in host position units.
  pub content_size: usize,
  /// Absolute position where the block's content starts.
  pub start:        usize,
  /// Absolute position where the block's content ends.
  pub end:          usize,
}

/// Where the cursor sits: the enclosing block, the byte offset of the cursor
/// within that block's text, and the absolute host position.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorContext {
  pub block:         BlockNode,
  pub parent_offset: usize,
  pub pos:           usize,
}

/// On-screen coordinates for a document position, used to anchor the
/// suggestion popup.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenCoords {
  pub top:    f64,
  pub left:   f64,
  pub bottom: f64,
}

/// Read access to the host document.
pub trait DocumentView {
  /// Depth-first walk over every block-level node.
  fn for_each_block(&self, f: &mut dyn FnMut(&BlockNode));

  /// The block enclosing the cursor, or `None` when the host cannot produce
  /// one (no focus, selection outside any block). Callers treat `None` as
  /// "nothing to do", never as an error.
  fn cursor(&self) -> Option<CursorContext>;

  /// Screen coordinates for an absolute position.
  fn coords_at(&self, pos: usize) -> Option<ScreenCoords>;
}

/// Mutation access to the host document.
pub trait DocumentEditor: DocumentView {
  /// Replaces `from..to` with `text`.
  fn replace_range(&mut self, from: usize, to: usize, text: &str);

  /// Returns keyboard focus to the editing surface.
  fn focus(&mut self);
}
