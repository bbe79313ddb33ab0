// Main-line selection among candidate sportsbook quotes.

use crate::error::EngineError;
use crate::model::CandidateLine;

/// Select the single "main" line from a set of candidates.
///
/// Rules, first match wins:
/// 1. Restrict to non-alternate lines when any exist.
/// 2. Return the first line whose bookmaker matches the priority list
///    (in priority order; substring match on the bookmaker name).
/// 3. Otherwise take the value(s) quoted most often across the set.
/// 4. Break frequency ties by distance to the median of all values in
///    the set; equidistant values fall back to first-encountered input
///    order.
/// 5. Return the first line (by position) carrying the selected value.
///
/// The selected line value is deterministic under input reordering,
/// except in the exact equidistant-tie case of rule 4, which is
/// resolved by encounter order. An empty input is a caller contract
/// violation.
pub fn select_main_line<'a>(
    lines: &'a [CandidateLine],
    priority_books: &[String],
) -> Result<&'a CandidateLine, EngineError> {
    match lines {
        [] => return Err(EngineError::EmptyLineList),
        [only] => return Ok(only),
        _ => {}
    }

    // Rule 1: prefer standard-market lines.
    let standard: Vec<&CandidateLine> = lines.iter().filter(|l| !l.is_alternate).collect();
    let pool: Vec<&CandidateLine> = if standard.is_empty() {
        lines.iter().collect()
    } else {
        standard
    };

    if let [only] = pool.as_slice() {
        return Ok(*only);
    }

    // Rule 2: priority bookmakers carry the market's main line.
    for book in priority_books {
        if let Some(line) = pool.iter().find(|l| l.bookmaker.contains(book.as_str())) {
            return Ok(line);
        }
    }

    // Rule 3: frequency count, preserving first-encounter order of values.
    let mut frequency: Vec<(f64, usize)> = Vec::new();
    for line in &pool {
        match frequency.iter_mut().find(|(v, _)| *v == line.line) {
            Some((_, count)) => *count += 1,
            None => frequency.push((line.line, 1)),
        }
    }
    let max_frequency = frequency.iter().map(|&(_, c)| c).max().unwrap_or(0);
    let candidates: Vec<f64> = frequency
        .iter()
        .filter(|&&(_, c)| c == max_frequency)
        .map(|&(v, _)| v)
        .collect();

    // Rule 4: closest to the median of all values (upper median element).
    let selected = if candidates.len() > 1 {
        let mut sorted: Vec<f64> = pool.iter().map(|l| l.line).collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let median = sorted[sorted.len() / 2];

        // Strict `<` keeps the first-encountered value on distance ties.
        candidates
            .iter()
            .copied()
            .reduce(|closest, current| {
                if (current - median).abs() < (closest - median).abs() {
                    current
                } else {
                    closest
                }
            })
            .unwrap_or(candidates[0])
    } else {
        candidates[0]
    };

    // Rule 5: first line by position with the selected value.
    pool.into_iter()
        .find(|l| l.line == selected)
        .ok_or(EngineError::EmptyLineList)
}
