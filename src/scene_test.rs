use super::*;
use crate::context::CarouselKind;
use crate::geometry::Vec3;

#[test]
fn partition_separates_items_from_triggers() {
    let children = vec![
        Child::Item("a"),
        Child::Trigger(Trigger::next(CarouselKind::Linear)),
        Child::Item("b"),
        Child::Trigger(Trigger::prev(CarouselKind::Linear)),
        Child::Item("c"),
    ];
    let (items, triggers) = partition(children);
    assert_eq!(items, vec!["a", "b", "c"]);
    assert_eq!(triggers, vec![Trigger::next(CarouselKind::Linear), Trigger::prev(CarouselKind::Linear)]);
}

#[test]
fn partition_empty() {
    let (items, triggers) = partition::<u8>(Vec::new());
    assert!(items.is_empty());
    assert!(triggers.is_empty());
}

#[test]
fn group_node_has_no_content() {
    let node: SceneNode<u8> = SceneNode::group(Transform::IDENTITY, vec![]);
    assert!(node.content.is_none());
}

#[test]
fn leaf_node_holds_content() {
    let t = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));
    let node = SceneNode::leaf(t, 42);
    assert_eq!(node.content, Some(42));
    assert_eq!(node.transform, t);
    assert!(node.children.is_empty());
}

#[test]
fn item_count_counts_root_children() {
    let scene = Scene {
        root: SceneNode::group(
            Transform::IDENTITY,
            vec![SceneNode::leaf(Transform::IDENTITY, 1), SceneNode::leaf(Transform::IDENTITY, 2)],
        ),
        triggers: vec![],
    };
    assert_eq!(scene.item_count(), 2);
}
