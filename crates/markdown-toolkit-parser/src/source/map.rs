use super::span::Span;

/// One line's worth of text payload: `len` bytes at `raw` in the payload
/// are the bytes at `source` in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    raw: usize,
    source: usize,
    len: usize,
}

/// Maps offsets in a block's joined text payload back to document offsets.
///
/// A payload is built from per-line slices joined with `\n`. Between two
/// segments the source holds the line ending and the next line's container
/// prefix, so a payload offset at a join maps to the end of the earlier
/// line and the following offset maps to the start of the next one. The
/// mapping is monotonic, which keeps contiguous payload spans contiguous in
/// the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMap {
    segments: Vec<Segment>,
}

impl SourceMap {
    /// A payload copied from one place in the source.
    pub fn contiguous(source: usize, len: usize) -> Self {
        let mut map = Self::default();
        map.push(0, source, len);
        map
    }

    /// Records that `len` payload bytes at `raw` come from `source`.
    ///
    /// Segments must be pushed in payload order.
    pub fn push(&mut self, raw: usize, source: usize, len: usize) {
        self.segments.push(Segment { raw, source, len });
    }

    /// Cuts every segment off at payload length `len`.
    pub fn truncate(&mut self, len: usize) {
        self.segments.retain(|s| s.raw <= len);
        for s in &mut self.segments {
            s.len = s.len.min(len - s.raw);
        }
    }

    /// Document offset of payload offset `raw`.
    pub fn to_source(&self, raw: usize) -> usize {
        let idx = self.segments.partition_point(|s| s.raw <= raw);
        match idx.checked_sub(1).map(|i| self.segments[i]) {
            Some(s) => s.source + (raw - s.raw).min(s.len),
            None => self.segments.first().map_or(0, |s| s.source),
        }
    }

    /// Document span of payload span `span`.
    pub fn span_to_source(&self, span: Span) -> Span {
        Span::new(self.to_source(span.start), self.to_source(span.end))
    }
}
