/// Key codes representing individual keys on the keyboard.
///
/// This enum provides a platform-agnostic representation of keys.
/// Hosts should map their platform-specific key events to these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key, including space and numpad characters.
    /// Hosts should normalize letters to lowercase; SHIFT is carried in the modifiers.
    Char(char),
    /// The Backspace key, deleting before the cursor.
    Backspace,
    /// The forward Delete key, deleting after the cursor.
    Delete,
    Enter,
    Tab,
    Insert,
    Esc,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    /// A function key, F1 through F24.
    F(u8),
    /// A modifier, lock or system key pressed on its own (Shift, Ctrl, CapsLock, Meta, ...).
    Modifier,
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// A key press event with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: Modifiers) -> Self {
        Self { code, mods }
    }

    /// A key press with no modifiers held.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, Modifiers::empty())
    }
}

/// A named editor command dispatched by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Cut,
    Delete,
    Paste,
    InsertContent,
    SetContent,
    Focus,
    /// Any command the engine has no rule for.
    Other(String),
}

impl EditCommand {
    /// Resolve a host command name. Matching ignores case and accepts the
    /// `mce`-prefixed aliases some editors use.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "cut" => EditCommand::Cut,
            "delete" => EditCommand::Delete,
            "paste" => EditCommand::Paste,
            "insert-content" | "insertcontent" | "mceinsertcontent" => EditCommand::InsertContent,
            "set-content" | "setcontent" | "mcesetcontent" => EditCommand::SetContent,
            "focus" => EditCommand::Focus,
            _ => EditCommand::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EditCommand::Cut => "cut",
            EditCommand::Delete => "delete",
            EditCommand::Paste => "paste",
            EditCommand::InsertContent => "insert-content",
            EditCommand::SetContent => "set-content",
            EditCommand::Focus => "focus",
            EditCommand::Other(name) => name.as_str(),
        }
    }
}

impl From<&str> for EditCommand {
    fn from(name: &str) -> Self {
        EditCommand::from_name(name)
    }
}

/// Events the host forwards to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key-down event.
    Key(KeyEvent),
    /// A command about to be executed.
    Command(EditCommand),
    /// A pointer click that has placed the cursor.
    Click,
}
