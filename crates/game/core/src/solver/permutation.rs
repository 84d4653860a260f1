//! Lexicographic permutation stepping.

/// Rearranges `items` into the next lexicographically greater permutation.
///
/// Returns `false` (leaving `items` untouched) once the last permutation has
/// been reached. Starting from a sorted slice this visits every ordering in
/// lexicographic order, so a search that keeps the first best candidate
/// breaks ties deterministically.
pub(crate) fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    let mut pivot = items.len() - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot - 1] {
        successor -= 1;
    }
    items.swap(pivot - 1, successor);
    items[pivot..].reverse();
    true
}
