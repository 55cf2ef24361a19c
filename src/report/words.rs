//! report::words
//!
//! Number-to-English-words conversion for release numbers.
//!
//! # Design
//!
//! Two static tables (ones digits and tens decades) plus a dedicated teens
//! table cover the supported domain of 0 through 99. Zero spells to the
//! empty string, matching the "no digit word for 0" convention used when
//! composing decade words ("Forty", not "Forty Zero").

use super::errors::ReportError;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

// Teens never compose as "Ten One"; they are looked up whole.
const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell `number` in English words.
///
/// Only values in `[0, 99]` are supported; anything larger is a
/// [`ReportError::Range`]. Tens and ones are joined with a single space and
/// the result carries no leading or trailing whitespace (e.g., 35 ->
/// "Thirty Five", 40 -> "Forty", 12 -> "Twelve", 0 -> "").
pub fn spell(number: u32) -> Result<String, ReportError> {
    if number > 99 {
        return Err(ReportError::Range(number.to_string()));
    }

    let tens = (number / 10) as usize;
    let ones = (number % 10) as usize;

    let spelled = if tens == 1 {
        TEENS[ones].to_string()
    } else {
        format!("{} {}", TENS[tens], ONES[ones]).trim().to_string()
    };
    Ok(spelled)
}
