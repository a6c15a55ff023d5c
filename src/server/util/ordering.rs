use std::collections::HashMap;

use uuid::Uuid;

use crate::server::model::list::List;

/// Sorts the lists of a board by the board's stored order.
///
/// Walks `order` front to back and emits the list whose public id matches each entry.
/// Entries without a matching list are skipped, and lists whose id never appears in
/// `order` are left out. An id listed twice yields the list twice.
///
/// # Arguments
/// - `lists` - Lists of the board in any order
/// - `order` - Stored sequence of list public ids
///
/// # Returns
/// - `Vec<List>` - Lists present in both inputs, in `order`'s order
pub fn sort_lists_by_position(lists: Vec<List>, order: &[Uuid]) -> Vec<List> {
    let list_map: HashMap<Uuid, List> = lists.into_iter().map(|l| (l.public_id, l)).collect();

    order
        .iter()
        .filter_map(|id| list_map.get(id).cloned())
        .collect()
}
