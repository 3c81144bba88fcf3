/// Split text into lower-cased terms on whitespace and punctuation.
///
/// `"1.2.sql-injection"` becomes `["1", "2", "sql", "injection"]`.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
}
