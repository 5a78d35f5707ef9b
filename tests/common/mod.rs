//! proptest strategies shared by the integration tests.

#![allow(dead_code)]

use proptest::prelude::*;

use treekit::{BinaryTree, NodeId};

/// Owned shape description, turned into a `BinaryTree` by [`build`].
#[derive(Debug, Clone)]
pub struct Shape {
    pub value: i64,
    pub left: Option<Box<Shape>>,
    pub right: Option<Box<Shape>>,
}

impl Shape {
    fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Arbitrary bushy shapes plus degenerate left and right chains.
pub fn shape(values: impl Strategy<Value = i64> + Clone + 'static) -> impl Strategy<Value = Shape> {
    prop_oneof![
        3 => bushy(values.clone()),
        1 => chain(values.clone(), true),
        1 => chain(values, false),
    ]
}

fn bushy(values: impl Strategy<Value = i64> + Clone + 'static) -> impl Strategy<Value = Shape> {
    let leaf = values.clone().prop_map(Shape::leaf);
    leaf.prop_recursive(8, 96, 2, move |inner| {
        (
            values.clone(),
            proptest::option::of(inner.clone()),
            proptest::option::of(inner),
        )
            .prop_map(|(value, left, right)| Shape {
                value,
                left: left.map(Box::new),
                right: right.map(Box::new),
            })
    })
}

/// Every node has a single child on the same side, the worst case for depth.
fn chain(values: impl Strategy<Value = i64> + 'static, leftwards: bool) -> impl Strategy<Value = Shape> {
    prop::collection::vec(values, 1..48).prop_map(move |values| {
        let mut iter = values.into_iter().rev();
        let mut shape = Shape::leaf(iter.next().unwrap_or_default());
        for value in iter {
            let below = Some(Box::new(shape));
            shape = if leftwards {
                Shape { value, left: below, right: None }
            } else {
                Shape { value, left: None, right: below }
            };
        }
        shape
    })
}

/// Builds the tree and returns the handles of all nodes in creation order.
pub fn build(shape: &Shape) -> (BinaryTree, Vec<NodeId>) {
    let mut tree = BinaryTree::with_root(shape.value);
    let root = tree.root().expect("tree built with a root");
    let mut nodes = vec![root];
    let mut stack = vec![(root, shape)];
    while let Some((id, current)) = stack.pop() {
        if let Some(left) = &current.left {
            let child = tree.insert_left(id, left.value).expect("fresh left slot");
            nodes.push(child);
            stack.push((child, left));
        }
        if let Some(right) = &current.right {
            let child = tree.insert_right(id, right.value).expect("fresh right slot");
            nodes.push(child);
            stack.push((child, right));
        }
    }
    (tree, nodes)
}

/// Strategy yielding a built tree with its node handles.
pub fn tree(values: impl Strategy<Value = i64> + Clone + 'static) -> impl Strategy<Value = (BinaryTree, Vec<NodeId>)> {
    shape(values).prop_map(|shape| build(&shape))
}
