//! Scene description returned to the host renderer.
//!
//! [`Scene::root`] is the carousel's root node: its transform carries the
//! animated offset and its children are the positioned items, one per item
//! in input order. Triggers are passed through untouched so the host can
//! render them next to the root and route activations back through a
//! [`crate::context::Scope`].

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::context::Trigger;
use crate::geometry::Transform;

/// One child handed to a carousel for layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Child<T> {
    /// An item placed on the ring or strip.
    Item(T),
    /// A navigation trigger rendered outside the item layout.
    Trigger(Trigger),
}

/// A positioned node. Items carry their content; the root carries none.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode<T> {
    pub transform: Transform,
    pub content: Option<T>,
    pub children: Vec<SceneNode<T>>,
}

impl<T> SceneNode<T> {
    #[must_use]
    pub fn group(transform: Transform, children: Vec<SceneNode<T>>) -> Self {
        Self { transform, content: None, children }
    }

    #[must_use]
    pub fn leaf(transform: Transform, content: T) -> Self {
        Self { transform, content: Some(content), children: Vec::new() }
    }
}

/// Layout result for one render of a carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<T> {
    pub root: SceneNode<T>,
    pub triggers: Vec<Trigger>,
}

impl<T> Scene<T> {
    /// Number of positioned items under the root.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.root.children.len()
    }
}

/// Split children into items and triggers, keeping their relative order.
#[must_use]
pub fn partition<T>(children: Vec<Child<T>>) -> (Vec<T>, Vec<Trigger>) {
    let mut items = Vec::new();
    let mut triggers = Vec::new();
    for child in children {
        match child {
            Child::Item(item) => items.push(item),
            Child::Trigger(trigger) => triggers.push(trigger),
        }
    }
    (items, triggers)
}
