/// Effective result limit: the `--limit` flag, else the configured default.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> usize {
    let limit = global.unwrap_or(fallback);
    usize::try_from(limit).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn global_takes_precedence() {
        assert_eq!(effective_limit(Some(10), 50), 10);
    }

    #[test]
    fn fallback_used_when_none_set() {
        assert_eq!(effective_limit(None, 50), 50);
    }

    #[test]
    fn zero_is_respected() {
        assert_eq!(effective_limit(Some(0), 50), 0);
    }
}
