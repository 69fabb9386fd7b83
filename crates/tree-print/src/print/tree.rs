//! Recursive pre-order tree renderer.

use super::error::PrintError;
use super::glyphs::Glyphs;
use crate::TreeValue;

/// Render `value` as an indented text tree.
///
/// One line per visited node, trailing newline after the last line. A
/// composite node emits a line naming its kind, then its children, each
/// prefixed with a branch connector; descendants of every non-final sibling
/// carry a continuation marker at that sibling's indent column. `unicode`
/// selects box-drawing connectors instead of plain ASCII.
///
/// A mapping entry renders its key as the node line; when the entry's value
/// is itself a container, the inner kind line is absorbed by the key line and
/// the key adopts the container's children directly.
pub fn print_tree(value: &TreeValue, unicode: bool) -> String {
    let printer = Printer::with_options(PrinterOptions {
        unicode,
        max_depth: None,
    });
    // Without a depth limit the printer is total.
    printer.print(value).unwrap_or_default()
}

/// Options for [`Printer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PrinterOptions {
    /// Use Unicode box-drawing connectors.
    pub unicode: bool,
    /// Refuse to recurse past this node depth (the root is at depth 0).
    pub max_depth: Option<usize>,
}

/// Configurable tree printer.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    options: PrinterOptions,
}

impl Printer {
    pub fn new() -> Self {
        Printer::default()
    }

    pub fn with_options(options: PrinterOptions) -> Self {
        Printer { options }
    }

    /// Render `value` with this printer's options.
    ///
    /// Errors only when `max_depth` is set and the tree is deeper than the
    /// limit; nothing is returned in that case, not even a truncated tree.
    pub fn print(&self, value: &TreeValue) -> Result<String, PrintError> {
        let glyphs = Glyphs::select(self.options.unicode);
        let mut out = String::new();
        self.render(&Node::Value(value), "", 0, glyphs, &mut out)?;
        Ok(out)
    }

    fn render(
        &self,
        node: &Node,
        tab: &str,
        depth: usize,
        glyphs: &Glyphs,
        out: &mut String,
    ) -> Result<(), PrintError> {
        if let Some(limit) = self.options.max_depth {
            if depth > limit {
                return Err(PrintError::DepthLimitExceeded { limit });
            }
        }
        out.push_str(&node.label());
        out.push('\n');
        let children = node.children();
        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            let is_last = i + 1 == count;
            out.push_str(tab);
            out.push_str(if is_last {
                glyphs.last_branch
            } else {
                glyphs.branch
            });
            let child_tab = format!(
                "{tab}{}",
                if is_last { glyphs.blank } else { glyphs.cont }
            );
            self.render(child, &child_tab, depth + 1, glyphs, out)?;
        }
        Ok(())
    }
}

/// A node as the renderer sees it: either a value, or a mapping entry whose
/// line is the key.
enum Node<'a> {
    Value(&'a TreeValue),
    Entry(&'a str, &'a TreeValue),
}

impl<'a> Node<'a> {
    fn label(&self) -> String {
        match self {
            Node::Value(v) => v.label(),
            Node::Entry(key, _) => (*key).to_owned(),
        }
    }

    fn children(&self) -> Vec<Node<'a>> {
        match self {
            Node::Value(v) => value_children(v),
            // A container value merges into its key line; a scalar value
            // becomes the entry's single child.
            Node::Entry(_, v) if v.is_container() => value_children(v),
            Node::Entry(_, v) => vec![Node::Value(v)],
        }
    }
}

fn value_children(v: &TreeValue) -> Vec<Node<'_>> {
    match v {
        TreeValue::Map(entries) => entries
            .iter()
            .map(|(k, v)| Node::Entry(k.as_str(), v))
            .collect(),
        TreeValue::List(items) | TreeValue::Tuple(items) => {
            items.iter().map(Node::Value).collect()
        }
        _ => Vec::new(),
    }
}
