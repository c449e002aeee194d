/// Zero-based position inside a text document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Zero-based source range. `end.line` is the last line the range touches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Range covering `start_line..=end_line` with the given columns.
    pub fn lines(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// 1-based inclusive `[start, end]` line pair.
    pub fn one_based_lines(&self) -> [u32; 2] {
        [
            self.start.line.saturating_add(1),
            self.end.line.saturating_add(1),
        ]
    }

    pub fn one_based_column(&self) -> u32 {
        self.start.character.saturating_add(1)
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_conversions() {
        let r = Range::lines(9, 2, 11, 0);
        assert_eq!(r.one_based_lines(), [10, 12]);
        assert_eq!(r.one_based_column(), 3);
        assert!(!r.is_single_line());
        assert!(Range::lines(4, 0, 4, 8).is_single_line());
    }
}
