use std::io::{self, BufRead};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::str::FromStr;

/// Lazy iterator over whitespace separated tokens parsed as `T`.
///
/// - Tokens are runs of non-whitespace bytes separated by runs of ASCII
///   whitespace; leading and trailing whitespace is skipped.
/// - The first token that fails to parse ends the iteration. Values already
///   yielded stay valid.
/// - A read error from the underlying source also ends the iteration.
pub struct Tokens<R, T> {
    reader: R,
    done: bool,
    _elem: PhantomData<fn() -> T>,
}

/// Streams `T` values out of `reader` on demand; nothing is read until the
/// iterator is advanced.
pub fn tokens<T, R>(reader: R) -> Tokens<R, T>
where
    T: FromStr,
    R: BufRead,
{
    Tokens {
        reader,
        done: false,
        _elem: PhantomData,
    }
}

impl<R: BufRead, T> Tokens<R, T> {
    /// Raw bytes of the next token, or `None` at end of input.
    fn next_token_bytes(&mut self) -> io::Result<Option<Vec<u8>>> {
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(None);
            }
            match buf.iter().position(|b| !b.is_ascii_whitespace()) {
                Some(start) => {
                    self.reader.consume(start);
                    break;
                }
                None => {
                    let n = buf.len();
                    self.reader.consume(n);
                }
            }
        }

        let mut token = Vec::new();
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            match buf.iter().position(|b| b.is_ascii_whitespace()) {
                Some(end) => {
                    token.extend_from_slice(&buf[..end]);
                    self.reader.consume(end);
                    break;
                }
                None => {
                    token.extend_from_slice(buf);
                    let n = buf.len();
                    self.reader.consume(n);
                }
            }
        }
        Ok(Some(token))
    }
}

impl<R: BufRead, T: FromStr> Iterator for Tokens<R, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let bytes = match self.next_token_bytes() {
            Ok(Some(bytes)) => bytes,
            Ok(None) | Err(_) => {
                self.done = true;
                return None;
            }
        };
        let parsed = std::str::from_utf8(&bytes)
            .ok()
            .and_then(|token| token.parse::<T>().ok());
        match parsed {
            Some(value) => Some(value),
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<R: BufRead, T: FromStr> FusedIterator for Tokens<R, T> {}
