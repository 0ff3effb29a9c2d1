//! Shape-to-path replacement over a document tree
//!
//! The walk is pre-order: a node is visited before its children, children
//! in document order. A shape node is swapped for the factory's path node
//! and its subtree is not entered; the replacement is never revisited.

use crate::dom::DocumentNode;
use crate::errors::ConvertError;
use crate::options::Options;
use crate::shapes::{ShapeDescriptor, ShapeKind, ToPath};

/// Replace every shape in the tree rooted at `root` with a path.
///
/// `create_path` receives the original node and returns the node that takes
/// its place, typically a `path` element carrying the original attributes.
/// The path data goes into its `d` attribute and the shape's geometry
/// attributes are removed from it.
///
/// Returns the number of nodes converted. In strict mode the first invalid
/// shape stops the walk; nodes converted before it stay converted.
pub fn shape2path<N, F>(root: &mut N, mut create_path: F, options: &Options) -> Result<usize, ConvertError>
where
    N: DocumentNode,
    F: FnMut(&N) -> N,
{
    let mut converted = 0;
    let mut pending: Vec<std::slice::IterMut<'_, N>> = Vec::new();

    let mut next = Some(root);
    while let Some(node) = next.take() {
        if convert_node(node, &mut create_path, options)?.is_some() {
            converted += 1;
        } else {
            pending.push(node.children_mut().iter_mut());
        }

        while let Some(siblings) = pending.last_mut() {
            if let Some(child) = siblings.next() {
                next = Some(child);
                break;
            }
            pending.pop();
        }
    }

    crate::log::debug!(converted, algorithm = %options.circle_algorithm, "shape2path finished");
    Ok(converted)
}

/// Convert a single node if it is a shape.
///
/// Returns the kind that was converted, or `None` when the node was left
/// alone (not an element, or not one of the shape kinds).
pub fn convert_node<N, F>(
    node: &mut N,
    create_path: &mut F,
    options: &Options,
) -> Result<Option<ShapeKind>, ConvertError>
where
    N: DocumentNode,
    F: FnMut(&N) -> N,
{
    let Some(shape) = ShapeDescriptor::from_node(node, options)? else {
        return Ok(None);
    };

    let kind = shape.kind();
    let d = shape.to_path(options).to_string();
    crate::log::debug!(kind = kind.as_str(), d = %d, "converted shape");

    let mut path = create_path(node);
    path.set_attribute("d", &d);
    for name in kind.stripped_attributes(options.attribute_cleanup) {
        path.remove_attribute(name);
    }
    *node = path;

    Ok(Some(kind))
}
