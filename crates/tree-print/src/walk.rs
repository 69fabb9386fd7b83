//! Recursive visitor over [`TreeValue`] trees.

use crate::TreeValue;

/// Walk every value in a tree, calling `callback` on each.
///
/// The callback is called on the root value first, then on every nested value
/// (map values and list/tuple elements are descended into).
pub fn walk<F>(value: &TreeValue, callback: &mut F)
where
    F: FnMut(&TreeValue),
{
    callback(value);
    match value {
        TreeValue::Map(entries) => {
            for (_key, val) in entries {
                walk(val, callback);
            }
        }
        TreeValue::List(items) | TreeValue::Tuple(items) => {
            for item in items {
                walk(item, callback);
            }
        }
        _ => {}
    }
}
