//! Delimiter pair table

/// Each closing delimiter with the opening delimiter it requires
pub const DELIMITER_PAIRS: [(char, char); 3] = [(')', '('), (']', '['), ('}', '{')];

/// Check if `c` opens a delimiter pair
pub fn is_opener(c: char) -> bool {
    DELIMITER_PAIRS.iter().any(|&(_, open)| open == c)
}

/// Check if `c` closes a delimiter pair
pub fn is_closer(c: char) -> bool {
    DELIMITER_PAIRS.iter().any(|&(close, _)| close == c)
}

/// The opening delimiter that `close` must match, if `close` is a closer
pub fn opener_for(close: char) -> Option<char> {
    DELIMITER_PAIRS
        .iter()
        .find(|&&(c, _)| c == close)
        .map(|&(_, open)| open)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openers() {
        assert!(is_opener('('));
        assert!(is_opener('['));
        assert!(is_opener('{'));
        assert!(!is_opener(')'));
        assert!(!is_opener('<'));
    }

    #[test]
    fn test_closers() {
        assert!(is_closer(')'));
        assert!(is_closer(']'));
        assert!(is_closer('}'));
        assert!(!is_closer('('));
        assert!(!is_closer('>'));
    }

    #[test]
    fn test_opener_for() {
        assert_eq!(opener_for(')'), Some('('));
        assert_eq!(opener_for(']'), Some('['));
        assert_eq!(opener_for('}'), Some('{'));
        assert_eq!(opener_for('('), None);
        assert_eq!(opener_for('a'), None);
    }
}
