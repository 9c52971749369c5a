use crate::config::GuardConfig;
use crate::error::Result;
use crate::guards;
use crate::intent::Intent;
use crate::key::{EditCommand, InputEvent};
use crate::traits::{DocumentTree, EditorHost};
use crate::types::{Boundary, Range, Verdict};
use crate::view::TreeView;

/// Decides whether a mutation attempt may touch the document.
///
/// The engine holds only its configuration. Every call reads the tree it is
/// given and keeps nothing afterwards, so repeated calls on the same input
/// give the same verdict.
#[derive(Debug, Clone)]
pub struct Engine {
    config: GuardConfig,
}

#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: GuardConfig,
}

impl EngineBuilder {
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.config.marker = marker.into();
        self
    }

    pub fn root_id(mut self, root_id: impl Into<String>) -> Self {
        self.config.root_id = root_id.into();
        self
    }

    pub fn zero_width(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.config.zero_width = chars.into_iter().collect();
        self
    }

    pub fn config(mut self, config: GuardConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Engine> {
        self.config.validate()?;
        Ok(Engine {
            config: self.config,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine {
            config: GuardConfig::default(),
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn view<'a, T: DocumentTree>(&'a self, tree: &'a T) -> TreeView<'a, T> {
        TreeView::new(tree, &self.config)
    }

    /// Decide one mutation attempt.
    ///
    /// Harmless intents are allowed without touching the tree. A missing range
    /// gives nothing to evaluate and is allowed too.
    pub fn decide<T: DocumentTree>(
        &self,
        tree: &T,
        range: Option<&Range<T::Node>>,
        intent: &Intent,
        selected: Option<T::Node>,
    ) -> Verdict {
        let class = intent.classify();
        if !class.destructive {
            tracing::trace!(?intent, "harmless intent");
            return Verdict::Allow;
        }
        let Some(range) = range else {
            tracing::trace!(?intent, "no selection range; allowing");
            return Verdict::Allow;
        };

        let verdict = guards::evaluate(&self.view(tree), range, &class, selected);
        match verdict {
            Verdict::Block(reason) => {
                tracing::debug!(guard = reason.as_str(), ?intent, "blocking destructive intent");
            }
            Verdict::Allow => tracing::trace!(?intent, "allowing destructive intent"),
        }
        verdict
    }

    /// Where to move a cursor that landed on `landing`, if anywhere.
    pub fn repair_cursor<T: DocumentTree>(
        &self,
        tree: &T,
        landing: T::Node,
    ) -> Option<Boundary<T::Node>> {
        self.view(tree).repair_cursor(landing)
    }

    /// Route one host event.
    ///
    /// Key and command events are decided and, when blocked, suppressed on
    /// the host. Clicks and focus run cursor repair and are never blocked.
    pub fn handle_event<H: EditorHost>(&self, host: &mut H, event: &InputEvent) -> Verdict {
        match event {
            InputEvent::Click | InputEvent::Command(EditCommand::Focus) => {
                self.repair_selection(host);
                Verdict::Allow
            }
            InputEvent::Key(ke) => self.guard(host, &Intent::Key(*ke)),
            InputEvent::Command(cmd) => self.guard(host, &Intent::Command(cmd.clone())),
        }
    }

    fn guard<H: EditorHost>(&self, host: &mut H, intent: &Intent) -> Verdict {
        // classification is pure and cheap; only read the host when it matters
        if !intent.classify().destructive {
            return Verdict::Allow;
        }

        let range = host.selection_range();
        let selected = host.selected_node();
        let verdict = self.decide(&*host, range.as_ref(), intent, selected);
        if verdict.is_block() {
            host.suppress();
        }
        verdict
    }

    /// Run cursor repair against the host's current collapsed cursor and
    /// apply the result. Returns the new position when the cursor moved.
    pub fn repair_selection<H: EditorHost>(&self, host: &mut H) -> Option<Boundary<H::Node>> {
        let range = host.selection_range()?;
        if !range.is_collapsed() {
            return None;
        }

        let view = self.view(&*host);
        let landing = view.landing_node(&range.start)?;
        let target = view.repair_cursor(landing)?;
        tracing::trace!(?landing, ?target, "relocating cursor off protected content");
        host.move_cursor(target);
        Some(target)
    }
}
