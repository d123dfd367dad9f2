//! Display indexing: the CLI addresses recipes by their 1-based position
//! in the stored order. Indexes are resolved to stable ids once, up
//! front, so mutations stay correct even as positions shift (deleting
//! `1 3` must not remove the wrong third recipe after the first delete).

use std::fmt;

use crate::model::Recipe;

/// A 1-based position in the listed collection, as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recipe paired with its display index and favorite state, ready for
/// rendering.
#[derive(Debug, Clone)]
pub struct DisplayRecipe {
    pub recipe: Recipe,
    pub index: DisplayIndex,
    pub favorite: bool,
}

/// Parse `"3"` or a range `"1-4"` into display indexes.
pub fn parse_index_or_range(input: &str) -> std::result::Result<Vec<DisplayIndex>, String> {
    let input = input.trim();

    if let Some((start, end)) = input.split_once('-') {
        let start = parse_single(start)?;
        let end = parse_single(end)?;
        if start.0 > end.0 {
            return Err(format!("Invalid range: {}", input));
        }
        return Ok((start.0..=end.0).map(DisplayIndex).collect());
    }

    Ok(vec![parse_single(input)?])
}

fn parse_single(s: &str) -> std::result::Result<DisplayIndex, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid index: {}", s.trim()))?;
    if n == 0 {
        return Err("Indexes are 1-based".to_string());
    }
    Ok(DisplayIndex(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_index() {
        assert_eq!(parse_index_or_range("3").unwrap(), vec![DisplayIndex(3)]);
        assert_eq!(parse_index_or_range(" 12 ").unwrap(), vec![DisplayIndex(12)]);
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_index_or_range("1-3").unwrap(),
            vec![DisplayIndex(1), DisplayIndex(2), DisplayIndex(3)]
        );
        assert_eq!(parse_index_or_range("2-2").unwrap(), vec![DisplayIndex(2)]);
    }

    #[test]
    fn test_parse_rejects_backwards_range() {
        assert!(parse_index_or_range("5-3").is_err());
    }

    #[test]
    fn test_parse_rejects_zero_and_junk() {
        assert!(parse_index_or_range("0").is_err());
        assert!(parse_index_or_range("0-2").is_err());
        assert!(parse_index_or_range("abc").is_err());
        assert!(parse_index_or_range("").is_err());
    }
}
