// src/api.rs
use char_counter_domain::{CharCounter, CountOptions};
use char_counter_shared_kernel::{CharCountError, IndexRange, Limit, MatchCount, Result};

/// Counts every char of `text` that equals any of `targets`.
///
/// No range validation happens here, so an empty text yields zero.
///
/// # Errors
///
/// [`CharCountError::InvalidArgument`] when `text` or `targets` is `None`.
pub fn count(text: Option<&str>, targets: Option<&[char]>) -> Result<MatchCount> {
    let (text, targets) = require_inputs(text, targets)?;
    Ok(CharCounter::default().count(text, targets))
}

/// Counts matches within the inclusive char range `[start_index, end_index]`.
///
/// # Errors
///
/// [`CharCountError::InvalidArgument`] when `text` or `targets` is `None`.
/// [`CharCountError::OutOfRange`] when either index is negative, when
/// `end_index < start_index`, or when `end_index` is not a valid position.
pub fn count_in_range(
    text: Option<&str>,
    targets: Option<&[char]>,
    start_index: i64,
    end_index: i64,
) -> Result<MatchCount> {
    let (text, targets) = require_inputs(text, targets)?;
    let range = resolve_range(text, start_index, end_index)?;
    let options = CountOptions { range: Some(range), ..CountOptions::default() };
    Ok(CharCounter::new(options).count(text, targets))
}

/// Like [`count_in_range`], but returns `limit` when the true total exceeds it.
///
/// # Errors
///
/// Everything [`count_in_range`] rejects, plus
/// [`CharCountError::OutOfRange`] when `limit <= 0`.
pub fn count_in_range_with_limit(
    text: Option<&str>,
    targets: Option<&[char]>,
    start_index: i64,
    end_index: i64,
    limit: i64,
) -> Result<MatchCount> {
    let (text, targets) = require_inputs(text, targets)?;
    let range = resolve_range(text, start_index, end_index)?;
    let limit = Limit::try_new(limit).inspect_err(log_rejection)?;
    let options = CountOptions { range: Some(range), limit: Some(limit), ..CountOptions::default() };
    Ok(CharCounter::new(options).count(text, targets))
}

fn require_inputs<'a>(
    text: Option<&'a str>,
    targets: Option<&'a [char]>,
) -> Result<(&'a str, &'a [char])> {
    let text = text.ok_or(CharCountError::invalid_argument("text")).inspect_err(log_rejection)?;
    let targets = targets
        .ok_or(CharCountError::invalid_argument("targets"))
        .inspect_err(log_rejection)?;
    Ok((text, targets))
}

fn resolve_range(text: &str, start_index: i64, end_index: i64) -> Result<IndexRange> {
    IndexRange::try_new(start_index, end_index, text.chars().count()).inspect_err(log_rejection)
}

fn log_rejection(err: &CharCountError) {
    log::debug!("rejected input ({}): {err}", err.category());
}
