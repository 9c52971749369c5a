use crate::key::{EditCommand, KeyCode, KeyEvent, Modifiers};

/// Which side of the cursor a mutation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Removes content before the cursor (Backspace).
    Backward,
    /// Removes content after the cursor (Delete).
    Forward,
    /// Replaces the selection (typing, paste, cut).
    Replace,
    /// Does not mutate.
    None,
}

/// How far a deletion reaches past the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    Char,
    Word,
    Line,
}

/// Verdict of the intent classifier. A pure function of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub destructive: bool,
    pub direction: Direction,
    pub reach: Reach,
}

impl Classification {
    pub const HARMLESS: Classification = Classification {
        destructive: false,
        direction: Direction::None,
        reach: Reach::Char,
    };

    fn destructive(direction: Direction, reach: Reach) -> Self {
        Self {
            destructive: true,
            direction,
            reach,
        }
    }

    fn replace() -> Self {
        Self::destructive(Direction::Replace, Reach::Char)
    }
}

/// One input attempt: a key press or a named command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Key(KeyEvent),
    Command(EditCommand),
}

impl Intent {
    pub fn classify(&self) -> Classification {
        match self {
            Intent::Key(ke) => classify_key(ke.code, ke.mods),
            Intent::Command(cmd) => classify_command(cmd),
        }
    }

    pub fn mods(&self) -> Modifiers {
        match self {
            Intent::Key(ke) => ke.mods,
            Intent::Command(_) => Modifiers::empty(),
        }
    }
}

impl From<KeyEvent> for Intent {
    fn from(ke: KeyEvent) -> Self {
        Intent::Key(ke)
    }
}

impl From<EditCommand> for Intent {
    fn from(cmd: EditCommand) -> Self {
        Intent::Command(cmd)
    }
}

fn reach_for(mods: Modifiers) -> Reach {
    if mods.intersects(Modifiers::SHIFT | Modifiers::META) {
        Reach::Line
    } else if mods.intersects(Modifiers::CTRL | Modifiers::ALT) {
        Reach::Word
    } else {
        Reach::Char
    }
}

/// Classify a key press.
///
/// Backspace and Delete are always destructive. Shift or Ctrl (Meta counts as
/// Ctrl) combined with Insert, `v` or `x` are paste/cut affordances and are
/// destructive. Enter, Tab and any printable character replace a selection
/// when typed over it. Ctrl/Meta shortcuts on other characters and all
/// navigation keys are harmless.
pub fn classify_key(code: KeyCode, mods: Modifiers) -> Classification {
    let shortcut = mods.intersects(Modifiers::CTRL | Modifiers::META);
    let clipboard_mod = shortcut || mods.contains(Modifiers::SHIFT);

    match code {
        KeyCode::Backspace => Classification::destructive(Direction::Backward, reach_for(mods)),
        KeyCode::Delete => Classification::destructive(Direction::Forward, reach_for(mods)),
        KeyCode::Insert if clipboard_mod => Classification::replace(),
        KeyCode::Char(c) if shortcut => {
            if matches!(c.to_ascii_lowercase(), 'v' | 'x') {
                Classification::replace()
            } else {
                Classification::HARMLESS
            }
        }
        KeyCode::Char(c) if !c.is_control() => Classification::replace(),
        KeyCode::Enter | KeyCode::Tab => Classification::replace(),
        _ => Classification::HARMLESS,
    }
}

/// Classify a named command. `cut`, `delete`, `paste`, `insert-content` and
/// `set-content` are destructive; everything else, `focus` included, is not.
pub fn classify_command(command: &EditCommand) -> Classification {
    match command {
        EditCommand::Delete => Classification::destructive(Direction::Backward, Reach::Char),
        EditCommand::Cut
        | EditCommand::Paste
        | EditCommand::InsertContent
        | EditCommand::SetContent => Classification::replace(),
        EditCommand::Focus | EditCommand::Other(_) => Classification::HARMLESS,
    }
}
