/// Deterministic seed window: `0, 1, …, size-1`. Pure function of `size`,
/// so fixtures built from it are repeatable across runs.
pub fn initial_window(size: usize) -> Vec<i64> {
    (0..size as i64).collect()
}
