//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("reporter", 0), "reporters");
        assert_eq!(pluralize("reporter", 1), "reporter");
        assert_eq!(pluralize("file type", 6), "file types");
    }
}
