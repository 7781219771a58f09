//! Input event types for the editing surface.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifiers {
  bits: u8,
}

impl Modifiers {
  pub const CTRL: u8 = 0b0000_0001;
  pub const ALT: u8 = 0b0000_0010;
  pub const SHIFT: u8 = 0b0000_0100;

  #[must_use]
  pub const fn empty() -> Self {
    Self { bits: 0 }
  }

  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.bits == 0
  }

  #[must_use]
  pub const fn ctrl(self) -> bool {
    (self.bits & Self::CTRL) != 0
  }

  #[must_use]
  pub const fn alt(self) -> bool {
    (self.bits & Self::ALT) != 0
  }

  #[must_use]
  pub const fn shift(self) -> bool {
    (self.bits & Self::SHIFT) != 0
  }

  pub fn insert(&mut self, bits: u8) {
    self.bits |= bits;
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
  Char(char),
  Enter,
  Escape,
  Backspace,
  Tab,
  Delete,
  Home,
  End,
  PageUp,
  PageDown,
  Left,
  Right,
  Up,
  Down,
  Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
  pub key:       Key,
  pub modifiers: Modifiers,
}

impl KeyEvent {
  #[must_use]
  pub const fn plain(key: Key) -> Self {
    Self {
      key,
      modifiers: Modifiers::empty(),
    }
  }
}

/// Result of offering a key to a pre-intercept handler. `Handled` tells the
/// host to suppress its default behavior for the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOutcome {
  #[default]
  Continue,
  Handled,
}
