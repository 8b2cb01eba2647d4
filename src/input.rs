//! Entry Parsing
//!
//! Turns the free-text add box into wheel slots: comma-separated entries,
//! each optionally `Name*N` to enter N duplicate slots at once.

/// Split a free-text entry into slots.
///
/// Entries are comma-separated and trimmed; blanks are dropped. With
/// `expand_multipliers` on, `Vodka*3` becomes three `Vodka` slots. Anything
/// that doesn't parse as `<name>*<positive count>` stays a single literal
/// entry.
pub fn parse_entries(input: &str, expand_multipliers: bool) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .flat_map(|entry| {
            if expand_multipliers {
                if let Some((name, count)) = split_multiplier(entry) {
                    return vec![name.to_string(); count];
                }
            }
            vec![entry.to_string()]
        })
        .collect()
}

/// `Name * 3` -> ("Name", 3). Splits on the last `*` so names may themselves
/// contain asterisks. None for empty names or counts that aren't positive
/// integers.
fn split_multiplier(entry: &str) -> Option<(&str, usize)> {
    let (name, count) = entry.rsplit_once('*')?;
    let name = name.trim_end();
    let count = count.trim_start();
    if name.is_empty() || count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let count: usize = count.parse().ok()?;
    if count == 0 {
        return None;
    }
    Some((name, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_split_and_trim() {
        assert_eq!(parse_entries("  Beer ,  Rum ", true), vec!["Beer", "Rum"]);
    }

    #[test]
    fn test_blank_entries_dropped() {
        assert_eq!(parse_entries("a,,   ,b", true), vec!["a", "b"]);
        assert!(parse_entries("", true).is_empty());
        assert!(parse_entries("  , ,", true).is_empty());
    }

    #[test]
    fn test_multiplier_expands_to_duplicate_slots() {
        assert_eq!(
            parse_entries("Beer, Vodka*3, Rum", true),
            vec!["Beer", "Vodka", "Vodka", "Vodka", "Rum"]
        );
    }

    #[test]
    fn test_multiplier_tolerates_whitespace() {
        assert_eq!(parse_entries("Gin * 2", true), vec!["Gin", "Gin"]);
    }

    #[test]
    fn test_malformed_multipliers_pass_through() {
        assert_eq!(parse_entries("Whiskey*0", true), vec!["Whiskey*0"]);
        assert_eq!(parse_entries("Whiskey*x", true), vec!["Whiskey*x"]);
        assert_eq!(parse_entries("Whiskey*-2", true), vec!["Whiskey*-2"]);
        assert_eq!(parse_entries("*3", true), vec!["*3"]);
    }

    #[test]
    fn test_last_star_splits_the_count() {
        assert_eq!(parse_entries("2*Cola*2", true), vec!["2*Cola", "2*Cola"]);
    }

    #[test]
    fn test_expansion_disabled_keeps_literals() {
        assert_eq!(parse_entries("Vodka*3", false), vec!["Vodka*3"]);
        assert_eq!(
            parse_entries("Beer, Vodka*3", false),
            vec!["Beer", "Vodka*3"]
        );
    }
}
