/// Thematic breaks.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const CHARS: [char; 3] = ['*', '-', '_'];
    pub const MIN_LEN: usize = 3;

    /// Three or more of the same rule character, optionally separated by
    /// spaces or tabs, and nothing else.
    pub fn matches(rest: &str) -> bool {
        let mut marks = rest.chars().filter(|c| !matches!(c, ' ' | '\t'));
        let Some(first) = marks.next() else {
            return false;
        };
        if !Self::CHARS.contains(&first) {
            return false;
        }
        let mut count = 1;
        for c in marks {
            if c != first {
                return false;
            }
            count += 1;
        }
        count >= Self::MIN_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("---", true)]
    #[case("* * *", true)]
    #[case("___ ", true)]
    #[case("--", false)]
    #[case("-*-", false)]
    #[case("--- a", false)]
    #[case("", false)]
    fn rules(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(HorizontalRule::matches(input), expected);
    }
}
