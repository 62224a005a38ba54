use crate::models::stats::PlayerTotals;

/// Flag the session user's row and move it to the front. Everyone else keeps
/// the order they came in.
pub fn order_current_user_first(
    mut rows: Vec<PlayerTotals>,
    current_user_id: Option<i32>,
) -> Vec<PlayerTotals> {
    for row in rows.iter_mut() {
        row.is_current_user = Some(row.user_id) == current_user_id;
    }
    // sort_by_key is stable
    rows.sort_by_key(|row| !row.is_current_user);
    rows
}
