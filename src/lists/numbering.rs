use crate::ast::{List, ListKind};
use crate::config::OrderedMarker;

fn digits(n: u64) -> usize {
    n.to_string().len()
}

/// Marker text for every item of an ordered list, in item order.
///
/// With `consecutive` set, items count up from the list's start and every
/// number is zero-padded to the width of the largest one. Otherwise the first
/// item keeps the start number and each later item is `1`, zero-padded to the
/// width of the start number, which keeps the list's start intact on re-parse
/// without committing to a sequence.
///
/// # Panics
///
/// If `list` is a bullet list.
pub fn compute_markers(list: &List, suffix: OrderedMarker, consecutive: bool) -> Vec<String> {
    let ListKind::Ordered { start } = list.kind else {
        panic!("ordered markers requested for a bullet list");
    };
    let start = start.unwrap_or(1);
    let count = list.items.len();

    if consecutive {
        let last = start.saturating_add(count.saturating_sub(1) as u64);
        let width = digits(last);
        (0..count as u64)
            .map(|i| format!("{:0width$}{suffix}", start.saturating_add(i)))
            .collect()
    } else {
        let width = digits(start);
        let rest = format!("{:0width$}{suffix}", 1);
        (0..count)
            .map(|i| {
                if i == 0 {
                    format!("{start}{suffix}")
                } else {
                    rest.clone()
                }
            })
            .collect()
    }
}
