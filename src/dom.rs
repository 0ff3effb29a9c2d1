//! Document tree contract
//!
//! The converter never builds or parses documents. It walks any tree that
//! implements [`DocumentNode`] and asks a caller-supplied factory for the
//! replacement `path` nodes. [`SvgNode`] is a small owned tree that
//! implements the trait; it is what the tests and simple callers use.

/// A node of a document tree that shapes can be read from and replaced in
pub trait DocumentNode: Sized {
    /// Element name, or `None` for text, comments and other non-elements
    fn tag_name(&self) -> Option<&str>;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Set an attribute, keeping its position if it already exists
    fn set_attribute(&mut self, name: &str, value: &str);

    fn remove_attribute(&mut self, name: &str);

    /// Child nodes in document order
    fn children_mut(&mut self) -> &mut [Self];
}

/// An element with ordered attributes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<SvgNode>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// Builder-style child append
    pub fn child(mut self, node: impl Into<SvgNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.attributes.retain(|(key, _)| key != name);
    }
}

/// A node of the reference tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgNode {
    Element(Element),
    Text(String),
}

impl SvgNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            SvgNode::Element(element) => Some(element),
            SvgNode::Text(_) => None,
        }
    }

    /// Child elements, skipping text
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        let children: &[SvgNode] = match self {
            SvgNode::Element(element) => element.children.as_slice(),
            SvgNode::Text(_) => &[],
        };
        children.iter().filter_map(SvgNode::as_element)
    }
}

impl From<Element> for SvgNode {
    fn from(element: Element) -> Self {
        SvgNode::Element(element)
    }
}

impl DocumentNode for SvgNode {
    fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.name.as_str())
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.as_element().and_then(|e| e.get(name))
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        if let SvgNode::Element(element) = self {
            element.set(name, value);
        }
    }

    fn remove_attribute(&mut self, name: &str) {
        if let SvgNode::Element(element) = self {
            element.remove(name);
        }
    }

    fn children_mut(&mut self) -> &mut [Self] {
        match self {
            SvgNode::Element(element) => &mut element.children,
            SvgNode::Text(_) => &mut [],
        }
    }
}

/// Node factory producing a `path` element that carries a copy of the
/// original's attributes and none of its children
pub fn path_from(node: &SvgNode) -> SvgNode {
    let attributes = node
        .as_element()
        .map(|e| e.attributes.clone())
        .unwrap_or_default();
    SvgNode::Element(Element {
        name: "path".to_string(),
        attributes,
        children: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_position() {
        let mut e = Element::new("rect").attr("x", "1").attr("y", "2");
        e.set("x", "5");
        e.set("width", "10");
        assert_eq!(
            e.attributes,
            vec![
                ("x".to_string(), "5".to_string()),
                ("y".to_string(), "2".to_string()),
                ("width".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_remove_missing_attribute_is_noop() {
        let mut e = Element::new("circle").attr("r", "3");
        e.remove("cx");
        e.remove("r");
        assert!(e.attributes.is_empty());
    }

    #[test]
    fn test_text_nodes_have_no_tag() {
        let mut text = SvgNode::Text("hello".to_string());
        assert_eq!(text.tag_name(), None);
        text.set_attribute("d", "M0 0");
        assert_eq!(text.attribute("d"), None);
        assert!(text.children_mut().is_empty());
    }

    #[test]
    fn test_path_from_copies_attributes_only() {
        let circle = SvgNode::from(
            Element::new("circle")
                .attr("r", "5")
                .attr("fill", "red")
                .child(Element::new("title")),
        );
        let path = path_from(&circle);
        let path = path.as_element().unwrap();
        assert_eq!(path.name, "path");
        assert_eq!(path.get("fill"), Some("red"));
        assert_eq!(path.get("r"), Some("5"));
        assert!(path.children.is_empty());
    }

    #[test]
    fn test_elements_skip_text() {
        let svg = SvgNode::from(
            Element::new("svg")
                .child(SvgNode::Text("\n".to_string()))
                .child(Element::new("g")),
        );
        let names: Vec<_> = svg.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["g"]);
    }
}
