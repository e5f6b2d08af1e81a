//! Auto-link resolution.
//!
//! When a gesture jumps from one node straight to another that is two cells
//! away in a row, column or main diagonal, the node it passes over is
//! connected as well. [`node_between`] finds that node.

/// Return the node lying on the straight segment between `a` and `b`, if any.
///
/// The pair is ordered by number first, so `node_between(9, 1)` and
/// `node_between(1, 9)` agree. Only these pairs have a middle node:
///
/// | pair          | middle |
/// |---------------|--------|
/// | (1,3) (4,6) (7,9) | a + 1 |
/// | (1,7) (2,8) (3,9) | a + 3 |
/// | (1,9) (3,7)   | 5      |
///
/// # Panics
/// If either number is outside 1..=9 or the two are equal.
pub fn node_between(a: u8, b: u8) -> Option<u8> {
    assert!(
        (1..=9).contains(&a) && (1..=9).contains(&b),
        "node numbers must be in 1..=9, got {} and {}",
        a,
        b
    );
    assert_ne!(a, b, "cannot resolve a link from a node to itself");

    let (low, high) = if a < b { (a, b) } else { (b, a) };

    if low % 3 == 1 && high - low == 2 {
        // Horizontal: first and last column of one row
        Some(low + 1)
    } else if low <= 3 && high - low == 6 {
        // Vertical: top and bottom row of one column
        Some(low + 3)
    } else if (low, high) == (1, 9) || (low, high) == (3, 7) {
        Some(5)
    } else {
        None
    }
}
