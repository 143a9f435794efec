/// Rounded attendance percentage, `0` when no classes were held.
///
/// Halves round toward positive infinity (`12.5 -> 13`, `-12.5 -> -12`). The
/// arithmetic is exact: `round(100a / t) = floor((200a + t) / 2t)`. Ratios
/// that land exactly on a half round up even where a float quotient would
/// fall just short (`23/40` is `58`, not `57`).
pub fn attendance_percentage(attended: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }

    let attended = i128::from(attended);
    let total = i128::from(total);
    let (numerator, denominator) = if total > 0 {
        (200 * attended + total, 2 * total)
    } else {
        (-(200 * attended + total), -2 * total)
    };

    numerator
        .div_euclid(denominator)
        .clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Sum of the three mark components.
pub fn marks_total(ce: i64, faculty: i64, ese: i64) -> i64 {
    ce.saturating_add(faculty).saturating_add(ese)
}
