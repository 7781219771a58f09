//! Block autocomplete: a per-style index of previously authored text and the
//! interactive session that offers completions while typing.
//!
//! Styles opt in via their `autocomplete` flag (resolved through the
//! inheritance chain). The index buckets every eligible block's trimmed text
//! under its style id and is rebuilt wholesale after structural edits; the
//! session filters the bucket for the cursor's block on every keystroke and
//! applies an accepted suggestion by replacing the block's full content.
//!
//! Everything here runs on the UI thread inside one event-handler turn. The
//! caller sequences rebuild-before-check; the session never triggers a
//! rebuild itself, and the interactive paths never panic.

use std::collections::{
  BTreeSet,
  HashMap,
};

use smallvec::SmallVec;
use vellum_styles::{
  FALLBACK_STYLE_ID,
  StyleRegistry,
  resolve,
};

use crate::{
  document::{
    DocumentEditor,
    DocumentView,
  },
  input::{
    Key,
    KeyEvent,
    KeyOutcome,
  },
};

/// Upper bound on offered suggestions.
pub const MAX_SUGGESTIONS: usize = 5;

/// Vertical gap between the cursor and the suggestion popup.
const ANCHOR_GAP: f64 = 5.0;

/// Distinct previously authored strings, bucketed by style id.
///
/// Built fresh from a full document scan; there is no incremental update.
/// Styles that are not autocomplete-eligible never get a bucket, not even an
/// empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteIndex {
  buckets: HashMap<String, BTreeSet<String>>,
}

impl AutocompleteIndex {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Scans every block of `doc` and buckets trimmed non-empty text under the
  /// block's style id when the resolved style is autocomplete-eligible.
  /// Blocks without a style attribute count as the default style.
  #[must_use]
  pub fn build(doc: &dyn DocumentView, registry: &StyleRegistry) -> Self {
    let mut buckets: HashMap<String, BTreeSet<String>> = HashMap::new();

    doc.for_each_block(&mut |block| {
      let style_name = block.style_name.as_deref().unwrap_or(FALLBACK_STYLE_ID);
      if !resolve(style_name, registry).autocomplete_eligible() {
        return;
      }
      let text = block.text.trim();
      if !text.is_empty() {
        buckets
          .entry(style_name.to_string())
          .or_default()
          .insert(text.to_string());
      }
    });

    tracing::debug!(buckets = buckets.len(), "rebuilt autocomplete index");
    Self { buckets }
  }

  #[must_use]
  pub fn bucket(&self, style_id: &str) -> Option<&BTreeSet<String>> {
    self.buckets.get(style_id)
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.buckets.is_empty()
  }
}

/// Where to place the suggestion popup: just below the cursor, left-aligned
/// to it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorPosition {
  pub top:  f64,
  pub left: f64,
}

/// Immutable view of the session state, handed to observers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
  pub visible:     bool,
  pub suggestions: Vec<String>,
  pub selected:    usize,
  pub query:       String,
  pub anchor:      Option<AnchorPosition>,
}

/// Notification seam for UI re-render. The session assumes no reactivity
/// runtime; hosts subscribe and redraw when told.
pub trait SessionObserver {
  fn session_changed(&mut self, snapshot: &SessionSnapshot);
}

/// Interactive autocomplete controller.
///
/// Two states: hidden and suggesting. `check` moves between them on every
/// keystroke, `handle_key` navigates and accepts while suggesting, `accept`
/// replaces the active block's content with the selected suggestion.
#[derive(Default)]
pub struct AutocompleteSession {
  suggestions: SmallVec<[String; MAX_SUGGESTIONS]>,
  selected:    usize,
  query:       String,
  visible:     bool,
  anchor:      Option<AnchorPosition>,
  observers:   Vec<Box<dyn SessionObserver>>,
}

impl AutocompleteSession {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
    self.observers.push(observer);
  }

  #[must_use]
  pub fn visible(&self) -> bool {
    self.visible
  }

  #[must_use]
  pub fn suggestions(&self) -> &[String] {
    &self.suggestions
  }

  #[must_use]
  pub fn selected(&self) -> usize {
    self.selected
  }

  #[must_use]
  pub fn selected_suggestion(&self) -> Option<&str> {
    self.suggestions.get(self.selected).map(String::as_str)
  }

  #[must_use]
  pub fn query(&self) -> &str {
    &self.query
  }

  #[must_use]
  pub fn anchor(&self) -> Option<AnchorPosition> {
    self.anchor
  }

  #[must_use]
  pub fn snapshot(&self) -> SessionSnapshot {
    SessionSnapshot {
      visible: self.visible,
      suggestions: self.suggestions.to_vec(),
      selected: self.selected,
      query: self.query.clone(),
      anchor: self.anchor,
    }
  }

  fn emit(&mut self) {
    let snapshot = SessionSnapshot {
      visible: self.visible,
      suggestions: self.suggestions.to_vec(),
      selected: self.selected,
      query: self.query.clone(),
      anchor: self.anchor,
    };
    for observer in &mut self.observers {
      observer.session_changed(&snapshot);
    }
  }

  fn hide(&mut self) {
    if !self.visible && self.suggestions.is_empty() && self.query.is_empty() {
      return;
    }
    self.visible = false;
    self.suggestions.clear();
    self.selected = 0;
    self.query.clear();
    self.anchor = None;
    self.emit();
  }

  /// Recomputes suggestions for the current cursor position. Called on every
  /// keystroke; any malformed input from the host fails closed to hidden.
  pub fn check(
    &mut self,
    doc: &dyn DocumentView,
    index: &AutocompleteIndex,
    registry: &StyleRegistry,
  ) {
    let Some(ctx) = doc.cursor() else {
      self.hide();
      return;
    };

    let style_name = ctx
      .block
      .style_name
      .clone()
      .unwrap_or_else(|| FALLBACK_STYLE_ID.to_string());
    if !resolve(&style_name, registry).autocomplete_eligible() {
      self.hide();
      return;
    }

    // The cursor offset must land on a char boundary of the block text; a
    // host handing us anything else fails closed.
    let Some(text_before) = ctx.block.text.get(..ctx.parent_offset) else {
      self.hide();
      return;
    };
    let query = text_before.trim();
    if query.is_empty() {
      self.hide();
      return;
    }

    let query_lower = query.to_lowercase();
    let matches: SmallVec<[String; MAX_SUGGESTIONS]> = index
      .bucket(&style_name)
      .map(|bucket| {
        bucket
          .iter()
          .filter(|candidate| {
            let lower = candidate.to_lowercase();
            // An exact match is already fully typed, nothing to suggest.
            lower.starts_with(&query_lower) && lower != query_lower
          })
          .take(MAX_SUGGESTIONS)
          .cloned()
          .collect()
      })
      .unwrap_or_default();

    if matches.is_empty() {
      self.hide();
      return;
    }

    self.suggestions = matches;
    self.selected = 0;
    self.query = query.to_string();
    self.anchor = doc.coords_at(ctx.pos).map(|coords| {
      AnchorPosition {
        top:  coords.bottom + ANCHOR_GAP,
        left: coords.left,
      }
    });
    self.visible = true;
    self.emit();
  }

  /// Pre-intercept for keypresses while the editing surface has focus.
  /// Returns [`KeyOutcome::Handled`] when the key drove the suggestion
  /// popup; the host then suppresses its default behavior.
  pub fn handle_key(&mut self, event: KeyEvent, doc: &mut dyn DocumentEditor) -> KeyOutcome {
    if !self.visible {
      return KeyOutcome::Continue;
    }

    // Visible implies a non-empty suggestion list, so the wrap-around
    // arithmetic below cannot divide by zero.
    let n = self.suggestions.len();
    match event.key {
      Key::Down => {
        self.selected = (self.selected + 1) % n;
        self.emit();
        KeyOutcome::Handled
      },
      Key::Up => {
        self.selected = (self.selected + n - 1) % n;
        self.emit();
        KeyOutcome::Handled
      },
      Key::Enter | Key::Tab => {
        self.accept(doc);
        KeyOutcome::Handled
      },
      Key::Escape => {
        self.hide();
        KeyOutcome::Handled
      },
      _ => KeyOutcome::Continue,
    }
  }

  /// Applies the selected suggestion by replacing the active block's entire
  /// content, then hides.
  ///
  /// Full-block replace is deliberate: in the screenplay use case one block
  /// is one entity name, and the query is a prefix of the whole block. A
  /// no-op when hidden or when nothing is selected.
  pub fn accept(&mut self, doc: &mut dyn DocumentEditor) {
    if !self.visible {
      return;
    }
    let Some(suggestion) = self.suggestions.get(self.selected).cloned() else {
      return;
    };
    let Some(ctx) = doc.cursor() else {
      self.hide();
      return;
    };

    let start = ctx.block.start;
    doc.replace_range(start, start + ctx.block.content_size, &suggestion);
    doc.focus();
    self.hide();
  }
}

#[cfg(test)]
mod test {
  use std::{
    cell::RefCell,
    rc::Rc,
  };

  use vellum_styles::StyleDefinition;

  use super::*;
  use crate::document::{
    BlockKind,
    BlockNode,
    CursorContext,
    ScreenCoords,
  };

  struct MockDoc {
    blocks:       Vec<BlockNode>,
    cursor:       Option<CursorContext>,
    coords:       Option<ScreenCoords>,
    replacements: Vec<(usize, usize, String)>,
    focused:      bool,
  }

  impl MockDoc {
    fn new(blocks: Vec<BlockNode>) -> Self {
      Self {
        blocks,
        cursor: None,
        coords: Some(ScreenCoords {
          top: 180.0,
          left: 100.0,
          bottom: 200.0,
        }),
        replacements: Vec::new(),
        focused: false,
      }
    }

    fn with_cursor_in(mut self, block: BlockNode, parent_offset: usize) -> Self {
      self.cursor = Some(CursorContext {
        block,
        parent_offset,
        pos: 100,
      });
      self
    }
  }

  impl DocumentView for MockDoc {
    fn for_each_block(&self, f: &mut dyn FnMut(&BlockNode)) {
      for block in &self.blocks {
        f(block);
      }
    }

    fn cursor(&self) -> Option<CursorContext> {
      self.cursor.clone()
    }

    fn coords_at(&self, _pos: usize) -> Option<ScreenCoords> {
      self.coords
    }
  }

  impl DocumentEditor for MockDoc {
    fn replace_range(&mut self, from: usize, to: usize, text: &str) {
      self.replacements.push((from, to, text.to_string()));
    }

    fn focus(&mut self) {
      self.focused = true;
    }
  }

  fn block(style: &str, text: &str) -> BlockNode {
    BlockNode {
      kind: BlockKind::Paragraph,
      style_name: Some(style.to_string()),
      text: text.to_string(),
      content_size: text.len(),
      start: 90,
      end: 90 + text.len(),
    }
  }

  fn registry() -> StyleRegistry {
    StyleRegistry::from_styles(vec![
      StyleDefinition {
        autocomplete: Some(true),
        ..StyleDefinition::new("Character")
      },
      StyleDefinition {
        autocomplete: Some(true),
        ..StyleDefinition::new("Scene Heading")
      },
      StyleDefinition {
        autocomplete: Some(false),
        ..StyleDefinition::new("Action")
      },
    ])
  }

  fn character_index(entries: &[&str]) -> AutocompleteIndex {
    let blocks = entries.iter().map(|text| block("Character", text)).collect();
    AutocompleteIndex::build(&MockDoc::new(blocks), &registry())
  }

  #[test]
  fn build_buckets_by_style_and_skips_ineligible() {
    let doc = MockDoc::new(vec![
      block("Character", "JOHN DOI"),
      block("Character", "JANE SMITH"),
      block("Action", "Walking"),
    ]);
    let index = AutocompleteIndex::build(&doc, &registry());

    let characters = index.bucket("Character").unwrap();
    assert!(characters.contains("JOHN DOI"));
    assert!(characters.contains("JANE SMITH"));
    // Ineligible styles never get a bucket, even an empty one.
    assert!(index.bucket("Action").is_none());
  }

  #[test]
  fn build_trims_and_deduplicates() {
    let doc = MockDoc::new(vec![
      block("Character", "  JOHN DOI  "),
      block("Character", "JOHN DOI"),
      block("Character", "   "),
    ]);
    let index = AutocompleteIndex::build(&doc, &registry());
    assert_eq!(index.bucket("Character").unwrap().len(), 1);
  }

  #[test]
  fn build_uses_default_style_for_unstyled_blocks() {
    let mut unstyled = block("x", "remembered text");
    unstyled.style_name = None;

    let registry = StyleRegistry::from_styles(vec![StyleDefinition {
      autocomplete: Some(true),
      ..StyleDefinition::new(FALLBACK_STYLE_ID)
    }]);

    let index = AutocompleteIndex::build(&MockDoc::new(vec![unstyled]), &registry);
    assert!(
      index
        .bucket(FALLBACK_STYLE_ID)
        .unwrap()
        .contains("remembered text")
    );
  }

  #[test]
  fn build_eligibility_flows_through_inheritance() {
    let registry = StyleRegistry::from_styles(vec![
      StyleDefinition {
        autocomplete: Some(true),
        ..StyleDefinition::new("Entity")
      },
      StyleDefinition {
        based_on: Some("Entity".into()),
        ..StyleDefinition::new("Character")
      },
    ]);

    let doc = MockDoc::new(vec![block("Character", "JOHN DOI")]);
    let index = AutocompleteIndex::build(&doc, &registry);
    // The bucket is keyed by the authored style, eligibility by the
    // resolved one.
    assert!(index.bucket("Character").unwrap().contains("JOHN DOI"));
  }

  #[test]
  fn build_is_idempotent_and_full_replace() {
    let doc = MockDoc::new(vec![block("Character", "JOHN DOI")]);
    let first = AutocompleteIndex::build(&doc, &registry());
    let second = AutocompleteIndex::build(&doc, &registry());
    assert_eq!(first, second);

    // A rebuild over a changed document drops stale entries.
    let changed = MockDoc::new(vec![block("Character", "JANE SMITH")]);
    let third = AutocompleteIndex::build(&changed, &registry());
    assert!(!third.bucket("Character").unwrap().contains("JOHN DOI"));
  }

  #[test]
  fn check_offers_sorted_prefix_matches() {
    let index = character_index(&["JOHN DOI", "JANE SMITH", "JIMMY"]);
    let doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "J"), 1);

    let mut session = AutocompleteSession::new();
    session.check(&doc, &index, &registry());

    assert!(session.visible());
    assert_eq!(session.suggestions(), ["JANE SMITH", "JIMMY", "JOHN DOI"]);
    assert_eq!(session.selected(), 0);
    assert_eq!(session.query(), "J");
    let anchor = session.anchor().unwrap();
    assert_eq!(anchor.top, 205.0);
    assert_eq!(anchor.left, 100.0);
  }

  #[test]
  fn check_matches_case_insensitively() {
    let index = character_index(&["JOHN DOI"]);
    let doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "jo"), 2);

    let mut session = AutocompleteSession::new();
    session.check(&doc, &index, &registry());
    assert_eq!(session.suggestions(), ["JOHN DOI"]);
  }

  #[test]
  fn check_hides_on_exact_match() {
    let index = character_index(&["JOHN DOI"]);
    let doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "John Doi"), 8);

    let mut session = AutocompleteSession::new();
    session.check(&doc, &index, &registry());
    assert!(!session.visible());
    assert!(session.suggestions().is_empty());
  }

  #[test]
  fn check_hides_for_ineligible_style() {
    let index = character_index(&["JOHN DOI"]);
    let doc = MockDoc::new(vec![]).with_cursor_in(block("Action", "J"), 1);

    let mut session = AutocompleteSession::new();
    session.check(&doc, &index, &registry());
    assert!(!session.visible());
  }

  #[test]
  fn check_hides_on_empty_query() {
    let index = character_index(&["JOHN DOI"]);
    let doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "   "), 3);

    let mut session = AutocompleteSession::new();
    session.check(&doc, &index, &registry());
    assert!(!session.visible());
  }

  #[test]
  fn check_fails_closed_without_cursor() {
    let index = character_index(&["JOHN DOI"]);
    let doc = MockDoc::new(vec![]);

    let mut session = AutocompleteSession::new();
    session.check(&doc, &index, &registry());
    assert!(!session.visible());
  }

  #[test]
  fn check_fails_closed_on_bad_cursor_offset() {
    let index = character_index(&["JOHN DOI"]);
    // Offset beyond the block text.
    let doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "J"), 99);

    let mut session = AutocompleteSession::new();
    session.check(&doc, &index, &registry());
    assert!(!session.visible());

    // Offset inside a multi-byte char.
    let doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "Jérôme"), 2);
    session.check(&doc, &index, &registry());
    assert!(!session.visible());
  }

  #[test]
  fn check_caps_suggestions_at_five() {
    let index = character_index(&[
      "JOHN A", "JOHN B", "JOHN C", "JOHN D", "JOHN E", "JOHN F", "JOHN G",
    ]);
    let doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "JOHN"), 4);

    let mut session = AutocompleteSession::new();
    session.check(&doc, &index, &registry());
    assert_eq!(session.suggestions().len(), MAX_SUGGESTIONS);
    assert_eq!(session.suggestions()[0], "JOHN A");
  }

  #[test]
  fn check_hides_again_after_suggesting() {
    let index = character_index(&["JOHN DOI"]);
    let doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "J"), 1);

    let mut session = AutocompleteSession::new();
    session.check(&doc, &index, &registry());
    assert!(session.visible());

    let doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "Z"), 1);
    session.check(&doc, &index, &registry());
    assert!(!session.visible());
    assert!(session.suggestions().is_empty());
    assert_eq!(session.query(), "");
  }

  fn suggesting_session(doc: &MockDoc) -> AutocompleteSession {
    let index = character_index(&["JA 1", "JB 2", "JC 3"]);
    let mut session = AutocompleteSession::new();
    session.check(doc, &index, &registry());
    assert_eq!(session.suggestions().len(), 3);
    session
  }

  #[test]
  fn selection_wraps_both_directions() {
    let mut doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "J"), 1);
    let mut session = suggesting_session(&doc);

    session.handle_key(KeyEvent::plain(Key::Down), &mut doc);
    session.handle_key(KeyEvent::plain(Key::Down), &mut doc);
    assert_eq!(session.selected(), 2);
    // Forward wrap.
    assert_eq!(
      session.handle_key(KeyEvent::plain(Key::Down), &mut doc),
      KeyOutcome::Handled
    );
    assert_eq!(session.selected(), 0);
    // Backward wrap.
    session.handle_key(KeyEvent::plain(Key::Up), &mut doc);
    assert_eq!(session.selected(), 2);
  }

  #[test]
  fn escape_hides_and_other_keys_pass_through() {
    let mut doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "J"), 1);
    let mut session = suggesting_session(&doc);

    assert_eq!(
      session.handle_key(KeyEvent::plain(Key::Char('x')), &mut doc),
      KeyOutcome::Continue
    );
    assert!(session.visible());

    assert_eq!(
      session.handle_key(KeyEvent::plain(Key::Escape), &mut doc),
      KeyOutcome::Handled
    );
    assert!(!session.visible());
  }

  #[test]
  fn keys_are_not_handled_while_hidden() {
    let mut doc = MockDoc::new(vec![]);
    let mut session = AutocompleteSession::new();
    for key in [Key::Down, Key::Up, Key::Enter, Key::Tab, Key::Escape] {
      assert_eq!(
        session.handle_key(KeyEvent::plain(key), &mut doc),
        KeyOutcome::Continue
      );
    }
  }

  #[test]
  fn enter_accepts_selected_suggestion() {
    let index = character_index(&["JOHN DOE"]);
    let mut doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "J"), 1);

    let mut session = AutocompleteSession::new();
    session.check(&doc, &index, &registry());
    assert_eq!(session.suggestions(), ["JOHN DOE"]);

    let outcome = session.handle_key(KeyEvent::plain(Key::Enter), &mut doc);
    assert_eq!(outcome, KeyOutcome::Handled);

    // Full-block replace: start .. start + content_size.
    assert_eq!(doc.replacements, [(90, 91, "JOHN DOE".to_string())]);
    assert!(doc.focused);
    assert!(!session.visible());
  }

  #[test]
  fn tab_accepts_like_enter() {
    let index = character_index(&["JOHN DOE"]);
    let mut doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "J"), 1);

    let mut session = AutocompleteSession::new();
    session.check(&doc, &index, &registry());
    session.handle_key(KeyEvent::plain(Key::Tab), &mut doc);
    assert_eq!(doc.replacements.len(), 1);
  }

  #[test]
  fn accept_is_a_noop_while_hidden() {
    let mut doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "J"), 1);
    let mut session = AutocompleteSession::new();
    session.accept(&mut doc);
    assert!(doc.replacements.is_empty());
    assert!(!doc.focused);
  }

  #[test]
  fn accept_fails_closed_when_cursor_vanishes() {
    let index = character_index(&["JOHN DOE"]);
    let mut doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "J"), 1);

    let mut session = AutocompleteSession::new();
    session.check(&doc, &index, &registry());

    doc.cursor = None;
    session.accept(&mut doc);
    assert!(doc.replacements.is_empty());
    assert!(!session.visible());
  }

  struct CountingObserver {
    changes: Rc<RefCell<Vec<SessionSnapshot>>>,
  }

  impl SessionObserver for CountingObserver {
    fn session_changed(&mut self, snapshot: &SessionSnapshot) {
      self.changes.borrow_mut().push(snapshot.clone());
    }
  }

  #[test]
  fn observers_see_visible_state_changes_only() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let index = character_index(&["JOHN DOE"]);
    let mut doc = MockDoc::new(vec![]).with_cursor_in(block("Character", "J"), 1);

    let mut session = AutocompleteSession::new();
    session.subscribe(Box::new(CountingObserver {
      changes: Rc::clone(&changes),
    }));

    // Hidden -> hidden is not a change.
    let empty = AutocompleteIndex::new();
    session.check(&doc, &empty, &registry());
    assert!(changes.borrow().is_empty());

    session.check(&doc, &index, &registry());
    assert_eq!(changes.borrow().len(), 1);
    assert!(changes.borrow()[0].visible);

    session.handle_key(KeyEvent::plain(Key::Escape), &mut doc);
    assert_eq!(changes.borrow().len(), 2);
    assert!(!changes.borrow()[1].visible);
  }
}
