use crate::style::RenderStyle;

/// Traversal-local state, created when a render starts and dropped when it
/// finishes.
#[derive(Debug)]
pub struct RenderContext<'a> {
    pub source: &'a [u8],
    pub style: &'a RenderStyle,
    /// Number of list indents currently applied.
    pub indent_level: usize,
    /// Next ordinal of each open ordered list, innermost last.
    ordinals: Vec<u64>,
    pub visited: usize,
    pub skipped: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(source: &'a [u8], style: &'a RenderStyle) -> Self {
        Self {
            source,
            style,
            indent_level: 0,
            ordinals: Vec::new(),
            visited: 0,
            skipped: 0,
        }
    }

    pub fn push_ordinal(&mut self, start: u64) {
        self.ordinals.push(start);
    }

    pub fn pop_ordinal(&mut self) {
        self.ordinals.pop();
    }

    /// Returns the innermost list's next ordinal and advances it.
    pub fn next_ordinal(&mut self) -> Option<u64> {
        let slot = self.ordinals.last_mut()?;
        let current = *slot;
        *slot = slot.saturating_add(1);
        Some(current)
    }
}
