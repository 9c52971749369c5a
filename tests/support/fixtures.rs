use edit_guard::{Intent, KeyCode, KeyEvent, Modifiers};

use super::mock_tree::{MockTree, NodeId};

/// `root: "AB" <span class=mceNonEditable>"X"</span> "CD"`
pub struct AbProtectedCd {
    pub tree: MockTree,
    pub ab: NodeId,
    pub protected: NodeId,
    pub inner: NodeId,
    pub cd: NodeId,
}

pub fn ab_protected_cd() -> AbProtectedCd {
    let mut tree = MockTree::new();
    let root = tree.root();
    let ab = tree.text(root, "AB");
    let protected = tree.protected(root);
    let inner = tree.text(protected, "X");
    let cd = tree.text(root, "CD");
    AbProtectedCd {
        tree,
        ab,
        protected,
        inner,
        cd,
    }
}

pub fn key(code: KeyCode) -> Intent {
    Intent::Key(KeyEvent::plain(code))
}

pub fn key_with(code: KeyCode, mods: Modifiers) -> Intent {
    Intent::Key(KeyEvent::new(code, mods))
}

pub fn backspace() -> Intent {
    key(KeyCode::Backspace)
}

pub fn delete() -> Intent {
    key(KeyCode::Delete)
}
