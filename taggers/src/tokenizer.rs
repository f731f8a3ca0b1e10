#![deny(warnings)]

/// Split free text into lowercase word tokens, dropping punctuation.
pub fn words(text: &str) -> Vec<String> {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            cleaned.extend(c.to_lowercase());
        } else {
            cleaned.push(' ');
        }
    }
    cleaned.split_whitespace().map(str::to_string).collect()
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::words;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(words("The student reads a book."), ["the", "student", "reads", "a", "book"]);
        assert_eq!(words("  Hello,   World!  "), ["hello", "world"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(words("").is_empty());
        assert!(words("?!").is_empty());
    }
}
