// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input parsing.
//!
//! The grammar is three items of whitespace-separated integers:
//!
//! ```text
//! N  e_0 e_1 ... e_{N-1}  target
//! ```
//!
//! Line breaks carry no meaning; `5\n1 3 5 7 9\n5` and `5 1 3 5 7 9 5` are the
//! same query. Anything after the target is ignored.

use std::io::Read;
use std::str::SplitAsciiWhitespace;

use crate::error::{InputParseError, Item, Result};
use crate::types::Query;

/// Whitespace tokenizer that remembers the 1-based position of each token.
struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_ascii_whitespace(),
            position: 0,
        }
    }

    fn next_integer(&mut self, item: Item) -> std::result::Result<i64, InputParseError> {
        let token = self
            .inner
            .next()
            .ok_or(InputParseError::MissingToken { item })?;
        self.position += 1;

        token
            .parse::<i64>()
            .map_err(|_| InputParseError::InvalidInteger {
                item,
                position: self.position,
                token: token.to_string(),
            })
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

/// Parse a complete query from text.
///
/// ```
/// use locator::input::parse_query;
///
/// let query = parse_query("5\n1 3 5 7 9\n5\n").unwrap();
/// assert_eq!(query.sequence, vec![1, 3, 5, 7, 9]);
/// assert_eq!(query.target, 5);
/// ```
pub fn parse_query(text: &str) -> std::result::Result<Query, InputParseError> {
    let mut tokens = Tokens::new(text);

    let count = tokens.next_integer(Item::Count)?;
    if count < 0 {
        return Err(InputParseError::NegativeCount { count });
    }
    // Counts that don't fit in usize can't be satisfied by the input anyway;
    // the element loop reports the shortfall.
    let count = usize::try_from(count).unwrap_or(usize::MAX);

    // Every token takes at least two bytes with its separator, so this caps
    // the allocation by what the input can actually hold.
    let mut sequence = Vec::with_capacity(count.min(text.len() / 2 + 1));
    for index in 0..count {
        sequence.push(tokens.next_integer(Item::Element(index))?);
    }

    let target = tokens.next_integer(Item::Target)?;

    let trailing = tokens.remaining();
    if trailing > 0 {
        log::debug!("ignoring {} token(s) after the target", trailing);
    }

    Ok(Query::new(sequence, target))
}

/// Read all of `reader` and parse it as a query.
pub fn read_query<R: Read>(mut reader: R) -> Result<Query> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_query(&text)?)
}
