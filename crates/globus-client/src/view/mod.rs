//! A small element tree describing what the UI shows.
//!
//! [`render`] turns [`AppState`](crate::state::AppState) into a
//! [`ViewTree`] without side effects. Front ends materialise the tree
//! however they like; the terminal one lives in [`crate::terminal`].

mod regions;

pub use regions::{render, render_country, render_favorites, render_status};

use crate::events::Action;

pub const GET_COUNTRY_ID: &str = "getCountryBtn";
pub const COUNTRY_BLOCK_ID: &str = "countryBlock";
pub const FAVORITES_LIST_ID: &str = "favoritesList";
pub const MESSAGE_ID: &str = "message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.clone(),
            Node::Element(el) => el.text_content(),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<&'static str>,
    pub class: Option<&'static str>,
    pub attrs: Vec<(&'static str, String)>,
    pub on_click: Option<Action>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            class: None,
            attrs: Vec::new(),
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Depth-first search for an element with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find_by_id(id))
    }

    /// All descendants (and self) carrying `class`, in document order.
    pub fn find_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.class == Some(class) {
            out.push(self);
        }
        for el in self.child_elements() {
            el.find_by_class(class, out);
        }
    }

    /// Clickable actions in document order.
    pub fn actions(&self) -> Vec<&Action> {
        let mut out = Vec::new();
        self.collect_actions(&mut out);
        out
    }

    fn collect_actions<'a>(&'a self, out: &mut Vec<&'a Action>) {
        if let Some(action) = &self.on_click {
            out.push(action);
        }
        for el in self.child_elements() {
            el.collect_actions(out);
        }
    }
}

/// The whole rendered UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTree {
    pub root: Element,
}

impl ViewTree {
    pub fn region(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    pub fn actions(&self) -> Vec<&Action> {
        self.root.actions()
    }
}
