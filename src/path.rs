//! Parsing of DataSet lookup paths.
//!
//! A path is a `/`-separated list of segments, each a child name optionally
//! followed by a zero-based bracketed index: `/DimmList/Dimm[1]/Sensor[0]`.
//! The leading `/` is optional and a segment without an index selects the
//! first child of that name. An index written as `{}` is filled from the
//! caller-supplied index list, left to right.
//!
//! Parsing never panics: malformed input, missing indices, and unused indices
//! all yield `None`.

/// One resolved step of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
    pub name: &'a str,
    pub index: usize,
}

struct PathParser<'p, 'i> {
    input: &'p str,
    position: usize,
    indices: std::slice::Iter<'i, usize>,
}

impl<'p, 'i> PathParser<'p, 'i> {
    fn new(input: &'p str, indices: &'i [usize]) -> Self {
        PathParser {
            input,
            position: 0,
            indices: indices.iter(),
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn parse_segment(&mut self) -> Option<Segment<'p>> {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            match ch {
                '/' | '[' => break,
                ']' => return None,
                _ => {
                    self.next_char();
                }
            }
        }
        let name = &self.input[start..self.position];
        if name.is_empty() {
            return None;
        }

        let index = if self.peek_char() == Some('[') {
            self.next_char();
            self.parse_index()?
        } else {
            0
        };

        match self.peek_char() {
            None => Some(Segment { name, index }),
            Some('/') => {
                self.next_char();
                // A trailing slash leaves an empty final segment
                if self.at_end() {
                    None
                } else {
                    Some(Segment { name, index })
                }
            }
            Some(_) => None,
        }
    }

    fn parse_index(&mut self) -> Option<usize> {
        let start = self.position;
        while let Some(ch) = self.next_char() {
            if ch == ']' {
                let body = &self.input[start..self.position - 1];
                return if body == "{}" {
                    self.indices.next().copied()
                } else if !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit()) {
                    body.parse().ok()
                } else {
                    None
                };
            }
        }
        None
    }
}

/// Parses `path`, substituting `{}` indices from `indices`.
pub(crate) fn parse<'p>(path: &'p str, indices: &[usize]) -> Option<Vec<Segment<'p>>> {
    let mut parser = PathParser::new(path.strip_prefix('/').unwrap_or(path), indices);
    if parser.at_end() {
        return None;
    }

    let mut segments = Vec::new();
    while !parser.at_end() {
        segments.push(parser.parse_segment()?);
    }
    // Every supplied index must be consumed
    if parser.indices.next().is_some() {
        return None;
    }
    Some(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(name: &str, index: usize) -> Segment<'_> {
        Segment { name, index }
    }

    #[test]
    fn test_parse_plain_and_indexed() {
        assert_eq!(
            parse("/DimmList/Dimm[1]/Sensor", &[]).unwrap(),
            vec![seg("DimmList", 0), seg("Dimm", 1), seg("Sensor", 0)]
        );
        assert_eq!(parse("dimm[0]", &[]).unwrap(), vec![seg("dimm", 0)]);
    }

    #[test]
    fn test_parse_placeholders() {
        assert_eq!(
            parse("dimm[{}]/sensor[{}]", &[2, 5]).unwrap(),
            vec![seg("dimm", 2), seg("sensor", 5)]
        );
        assert!(parse("dimm[{}]/sensor[{}]", &[2]).is_none());
        assert!(parse("dimm[{}]", &[2, 5]).is_none());
        assert!(parse("dimm", &[1]).is_none());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "", "/", "a//b", "a/", "[1]", "a[", "a[x]", "a[-1]", "a[]", "a]", "a[1]b",
        ] {
            assert!(parse(bad, &[]).is_none(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_names_keep_unicode_and_spaces() {
        assert_eq!(
            parse("Ünit 1/x", &[]).unwrap(),
            vec![seg("Ünit 1", 0), seg("x", 0)]
        );
    }
}
