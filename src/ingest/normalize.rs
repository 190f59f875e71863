//! Free-text normalisation for names, cities and grounds.


/// Title-case `text`: lower-case everything, split on whitespace runs,
/// upper-case the first character of each word, join with single spaces.
///
/// Hyphenated or apostrophised names only get their first letter raised
/// (`"o'brien"` -> `"O'brien"`). A first letter whose upper-case form is
/// more than one character (`ß`, `ﬂ`) is left as is, so the result is
/// stable under a second pass.
pub fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut upper = first.to_uppercase();
                    let head = match (upper.next(), upper.next()) {
                        (Some(single), None) => single,
                        _ => first,
                    };
                    std::iter::once(head).chain(chars).collect::<String>()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ground name from a venue string shaped `"<ground>, <city/region>"`.
///
/// Only the part before the first comma is kept, then title-cased.
pub fn ground_name(venue: &str) -> String {
    let ground = venue.split(',').next().unwrap_or_default();
    title_case(ground)
}
