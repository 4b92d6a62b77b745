/// Whether two adjacent characters cancel each other out.
///
/// A pair is bad when the characters differ but map to the same uppercase
/// form, i.e. one is the lowercase and the other the uppercase of the same
/// letter. Non-letters map to themselves, so they never form a bad pair.
pub fn is_bad_pair(a: char, b: char) -> bool {
    a != b && a.to_uppercase().eq(b.to_uppercase())
}

/// Character index of the first adjacent bad pair, or `None` if the
/// string is already fully reduced.
pub fn first_bad_pair(input: &str) -> Option<usize> {
    let mut chars = input.chars().peekable();
    let mut idx = 0;
    while let Some(a) = chars.next() {
        if let Some(&b) = chars.peek() {
            if is_bad_pair(a, b) {
                return Some(idx);
            }
        }
        idx += 1;
    }
    None
}

/// True when no adjacent bad pair remains.
pub fn is_reduced(input: &str) -> bool {
    first_bad_pair(input).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_case_same_letter_is_bad() {
        assert!(is_bad_pair('a', 'A'));
        assert!(is_bad_pair('Z', 'z'));
    }

    #[test]
    fn identical_chars_are_not_bad() {
        assert!(!is_bad_pair('a', 'a'));
        assert!(!is_bad_pair('A', 'A'));
    }

    #[test]
    fn different_letters_are_not_bad() {
        assert!(!is_bad_pair('a', 'b'));
        assert!(!is_bad_pair('a', 'B'));
    }

    #[test]
    fn non_letters_never_bad() {
        assert!(!is_bad_pair('1', '1'));
        assert!(!is_bad_pair('1', '2'));
        assert!(!is_bad_pair(' ', '-'));
    }

    #[test]
    fn non_ascii_letters_use_standard_case_mapping() {
        assert!(is_bad_pair('é', 'É'));
        assert!(is_bad_pair('ω', 'Ω'));
        assert!(!is_bad_pair('é', 'E'));
    }

    #[test]
    fn multi_char_uppercase_compared_as_sequence() {
        // 'ß' uppercases to "SS", which no single char matches
        assert!(!is_bad_pair('ß', 'S'));
        assert!(!is_bad_pair('ß', 'ß'));
    }

    #[test]
    fn first_bad_pair_positions() {
        assert_eq!(first_bad_pair(""), None);
        assert_eq!(first_bad_pair("a"), None);
        assert_eq!(first_bad_pair("hello"), None);
        assert_eq!(first_bad_pair("aA"), Some(0));
        assert_eq!(first_bad_pair("xyzZ"), Some(2));
    }

    #[test]
    fn first_bad_pair_counts_chars_not_bytes() {
        assert_eq!(first_bad_pair("éé xX"), Some(3));
    }

    #[test]
    fn is_reduced_matches_first_bad_pair() {
        assert!(is_reduced("Fixed"));
        assert!(!is_reduced("efFE"));
    }
}
