//! Team record and recent-form helpers.
//!
//! Both functions are total: malformed input degrades to a zero value
//! instead of an error.

use crate::models::Record;

/// Parse a `"<wins>-<losses>"` record.
///
/// Anything other than exactly two hyphen-separated integer segments gives
/// `Record { wins: 0, losses: 0 }`. Three-part records such as `"10-5-5"`
/// therefore read as zero wins.
pub fn parse_record(record: &str) -> Record {
    let parts: Vec<&str> = record.split('-').collect();
    if let [wins, losses] = parts.as_slice() {
        if let (Some(wins), Some(losses)) = (parse_leading_int(wins), parse_leading_int(losses)) {
            return Record { wins, losses };
        }
    }
    Record::default()
}

/// Number of `"W"` entries in a form sequence. Case-sensitive; draws count
/// for nothing.
pub fn count_recent_wins<S: AsRef<str>>(form: &[S]) -> usize {
    form.iter().filter(|f| f.as_ref() == "W").count()
}

/// Lenient integer parse: skips leading whitespace, accepts one sign, then
/// takes the longest run of ASCII digits. Trailing junk is ignored. Digit
/// runs too long for `i64` saturate so win counts keep their ordering.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    let signed = if negative { format!("-{}", digits) } else { digits.to_string() };
    // only overflow can fail once the run is all digits
    Some(signed.parse().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}
