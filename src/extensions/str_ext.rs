pub trait WithoutWhitespace {
    fn without_whitespace(&self) -> String;
}

impl WithoutWhitespace for str {
    fn without_whitespace(&self) -> String {
        self.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

pub trait RemoveAll {
    /// Removes every occurrence of each pattern, in the order given.
    fn remove_all(&self, patterns: &[&str]) -> String;
}

impl RemoveAll for str {
    fn remove_all(&self, patterns: &[&str]) -> String {
        patterns.iter().fold(self.to_string(), |acc, pattern| acc.replace(pattern, ""))
    }
}
