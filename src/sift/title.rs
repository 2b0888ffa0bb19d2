/// Title-case a trick name.
///
/// Words are split on whitespace and re-joined with single spaces. Each word
/// gets an uppercase first letter and lowercase remainder, except two-character
/// alphanumeric tokens whose second character is a digit or already uppercase
/// (`T1`, `t2`, `CT`), which are kept as written.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    if is_short_token(word) {
        return word.to_string();
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn is_short_token(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    chars.len() == 2
        && chars.iter().all(char::is_ascii_alphanumeric)
        && (chars[1].is_ascii_digit() || chars[1].is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_words_are_capitalized() {
        assert_eq!(title_case("ramp"), "Ramp");
        assert_eq!(title_case("long ramp drop"), "Long Ramp Drop");
    }

    #[test]
    fn test_short_tokens_are_preserved() {
        assert_eq!(title_case("T1"), "T1");
        assert_eq!(title_case("T2 to CT spawn"), "T2 To CT Spawn");
        assert_eq!(title_case("t2 drop"), "t2 Drop");
        assert_eq!(title_case("a b"), "A B");
    }

    #[test]
    fn test_longer_words_are_normalized() {
        assert_eq!(title_case("AWP ramp"), "Awp Ramp");
        assert_eq!(title_case("Ct"), "Ct");
        assert_eq!(title_case("tOWER"), "Tower");
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        assert_eq!(title_case("  jail   box\tdrop "), "Jail Box Drop");
        assert_eq!(title_case(""), "");
    }
}
