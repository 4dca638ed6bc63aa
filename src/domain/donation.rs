/// Currency marker donors sometimes type next to the amount ("100 JOD").
/// Stripped before parsing.
pub const CURRENCY_MARKER: &str = "JOD";

const THOUSANDS_SEPARATOR: char = ',';

/// Cleans one raw sheet cell and parses it into a donation amount.
///
/// Cleaning removes the currency marker, thousands separators and
/// surrounding whitespace. Cells that still fail to parse, or that parse
/// to something that is not a non-negative finite number, yield `None`
/// and are excluded from every aggregate.
///
/// # Examples
/// ```
/// use donation_tracker::domain::donation::parse_donation;
/// assert_eq!(parse_donation(" 100 JOD "), Some(100.0));
/// assert_eq!(parse_donation("1,250.75"), Some(1250.75));
/// assert_eq!(parse_donation("pending"), None);
/// ```
pub fn parse_donation(raw: &str) -> Option<f64> {
    let cleaned = raw
        .replace(CURRENCY_MARKER, "")
        .replace(THOUSANDS_SEPARATOR, "");
    let amount = cleaned.trim().parse::<f64>().ok()?;
    (amount.is_finite() && amount >= 0.0).then_some(amount)
}

/// Parses a whole column of raw cells, silently dropping the malformed
/// ones. Order of the surviving amounts follows sheet order.
pub fn parse_donations<'a>(cells: impl IntoIterator<Item = &'a str>) -> Vec<f64> {
    cells.into_iter().filter_map(parse_donation).collect()
}

/// The `count` largest amounts, descending. Shorter than `count` when
/// there are not enough donations.
pub fn top_donations(amounts: &[f64], count: usize) -> Vec<f64> {
    let mut sorted = amounts.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    sorted.truncate(count);
    sorted
}
