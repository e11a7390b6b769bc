/// Map a screen position to the (column, row) of a cell-sized grid anchored at `origin`.
///
/// Positions left of or above the origin never hit. The caller applies its own
/// upper bound on columns and rows.
pub fn cell_at(mouse: (i32, i32), origin: (i32, i32), cell_size: i32) -> Option<(usize, usize)> {
    if cell_size <= 0 {
        return None;
    }

    let rel_x = mouse.0 - origin.0;
    let rel_y = mouse.1 - origin.1;
    if rel_x < 0 || rel_y < 0 {
        return None;
    }

    Some(((rel_x / cell_size) as usize, (rel_y / cell_size) as usize))
}
