/// `---` delimited front matter of `key: value` lines.
pub struct YamlHeader;

impl YamlHeader {
    pub const DELIMITER: &'static str = "---";
    pub const TERMINATORS: [&'static str; 2] = ["---", "..."];
    pub const SEPARATOR: char = ':';

    pub fn opens(text: &str) -> bool {
        text.trim_end() == Self::DELIMITER
    }

    pub fn closes(text: &str) -> bool {
        Self::TERMINATORS.contains(&text.trim_end())
    }

    /// Splits a `key: value` line. The key may not be empty or indented.
    pub fn entry(text: &str) -> Option<(String, String)> {
        if text.starts_with([' ', '\t']) {
            return None;
        }
        let (key, value) = text.split_once(Self::SEPARATOR)?;
        let key = key.trim_end();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), value.trim().to_string()))
    }
}
