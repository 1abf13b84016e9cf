use std::iter;

use super::ListNode;

/// 1-indexed position of `node` within the run of directly adjacent lists of
/// the same family that ends at it.
pub fn run_position(node: &ListNode<'_>) -> usize {
    let kind = node.kind();
    iter::successors(Some(*node), ListNode::previous)
        .take_while(|n| n.kind().same_family(&kind))
        .count()
}

/// Pick `primary` for odd positions in a run of adjacent same-family lists and
/// `secondary` for even ones.
///
/// Two such lists can only be adjacent in the tree because their source
/// markers differed; were both rendered with one marker, the output would
/// parse back as a single list.
pub fn resolve_marker<T>(node: &ListNode<'_>, primary: T, secondary: T) -> T {
    if run_position(node) % 2 == 1 {
        primary
    } else {
        secondary
    }
}
