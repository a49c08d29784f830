/// Indented code blocks.
pub struct IndentedCode;

impl IndentedCode {
    /// Columns of indentation that turn a line into code.
    pub const INDENT: usize = 4;
}
