use crate::context::RenderContext;
use crate::error::RenderError;
use crate::nodes::render_node;
use crate::style::RenderStyle;
use mdpdf_canvas::Canvas;
use mdpdf_tree::Node;

/// What the engine does with a node's children after its handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Descend,
    /// The handler drew the children itself.
    SkipChildren,
}

/// Counters from one completed render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Nodes whose handler ran.
    pub visited: usize,
    /// Nodes inside subtrees whose parent returned [`Traversal::SkipChildren`].
    pub skipped: usize,
}

/// Walks a document tree once, pre-order, issuing canvas operations for
/// each node.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: RenderStyle,
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Renders `root` onto `canvas`, which must already have a page.
    ///
    /// `source` must be the buffer the tree was parsed from. The first error
    /// aborts the traversal and is returned as is.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        root: &Node,
        source: &[u8],
        canvas: &mut C,
    ) -> Result<RenderStats, RenderError> {
        let mut ctx = RenderContext::new(source, &self.style);
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            ctx.visited += 1;
            log::trace!("Rendering {} at depth {}", node.kind.name(), node.depth);

            match render_node(node, canvas, &mut ctx)? {
                Traversal::Descend => stack.extend(node.children.iter().rev()),
                Traversal::SkipChildren => ctx.skipped += node.subtree_len() - 1,
            }
        }

        let stats = RenderStats {
            visited: ctx.visited,
            skipped: ctx.skipped,
        };
        log::debug!(
            "Rendered {} node(s), {} drawn by their parent",
            stats.visited,
            stats.skipped
        );
        Ok(stats)
    }
}

/// Renders with the default [`RenderStyle`].
pub fn render<C: Canvas + ?Sized>(root: &Node, source: &[u8], canvas: &mut C) -> Result<(), RenderError> {
    Renderer::default().render(root, source, canvas).map(|_| ())
}
