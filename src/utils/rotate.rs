//! Cyclic rotation of small sequences (day symbols, column orders).

/// Return a copy of `items` rotated left so that `items[shift % len]` comes
/// first. Shifting by the length is a no-op; an empty slice stays empty.
pub fn rotated<T: Clone>(items: &[T], shift: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut out = items.to_vec();
    out.rotate_left(shift % items.len());
    out
}
