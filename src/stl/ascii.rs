//! Line tokenizer and header grammar for ASCII STL.
use crate::error::{StlError, StlResult};
use crate::nalgebra_types::Vector3;
use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;

static SOLID_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"solid\s+([^\r\n]+)?").expect("valid solid header regex"));

/// Match the first line against `solid [name]` and return the name.
/// A header without a name yields the empty string.
pub fn parse_header(header: &str) -> StlResult<String> {
    match SOLID_HEADER.captures(header) {
        Some(captures) => Ok(captures
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()),
        None => Err(StlError::MalformedHeader {
            header: header.to_string(),
        }),
    }
}

/// Reads a text stream line by line, splitting lines into whitespace tokens.
/// Bytes outside ASCII/UTF-8 are replaced rather than rejected.
pub struct TextLines<R> {
    reader: R,
    line: usize,
    buffer: Vec<u8>,
}

impl<R: BufRead> TextLines<R> {
    pub fn new(reader: R) -> TextLines<R> {
        TextLines {
            reader,
            line: 0,
            buffer: Vec::new(),
        }
    }

    /// 1-based number of the last line returned.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Next line with its terminator stripped, `None` at end of input.
    pub fn next_line(&mut self) -> StlResult<Option<String>> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        let mut end = self.buffer.len();
        while end > 0 && matches!(self.buffer[end - 1], b'\n' | b'\r') {
            end -= 1;
        }
        Ok(Some(String::from_utf8_lossy(&self.buffer[..end]).into_owned()))
    }

    /// Tokens of the next non-blank line, `None` at end of input.
    pub fn next_tokens(&mut self) -> StlResult<Option<Vec<String>>> {
        while let Some(line) = self.next_line()? {
            let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
            if !tokens.is_empty() {
                return Ok(Some(tokens));
            }
        }
        Ok(None)
    }

    /// Like `next_tokens`, but running out of input is an error.
    pub fn require_tokens(&mut self, expected: &'static str) -> StlResult<Vec<String>> {
        match self.next_tokens()? {
            Some(tokens) => Ok(tokens),
            None => Err(StlError::UnexpectedEof {
                line: self.line,
                expected,
            }),
        }
    }

    /// Consume a keyword line such as `outer loop`.
    /// `endloop` and `end loop` are both accepted.
    pub fn expect_keyword(&mut self, keyword: &'static str) -> StlResult<()> {
        let tokens = self.require_tokens(keyword)?;
        if is_keyword(&tokens, keyword) {
            Ok(())
        } else {
            Err(self.malformed(keyword, &tokens))
        }
    }

    pub fn parse_vec3(&self, tokens: &[String]) -> StlResult<Vector3> {
        let mut result = Vector3::zeros();
        for (c, token) in result.iter_mut().zip(tokens) {
            *c = token.parse::<f64>().map_err(|source| StlError::InvalidNumber {
                line: self.line,
                token: token.clone(),
                source,
            })?;
        }
        Ok(result)
    }

    pub fn malformed(&self, expected: &'static str, tokens: &[String]) -> StlError {
        StlError::MalformedFacet {
            line: self.line,
            expected,
            found: tokens.join(" "),
        }
    }
}

pub fn is_keyword(tokens: &[String], keyword: &str) -> bool {
    tokens.concat() == keyword.replace(' ', "")
}
