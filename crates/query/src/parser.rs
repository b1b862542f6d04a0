//! A `nom`-based splitter for `key=value&key=value` strings.

use crate::error::QueryError;
use nom::{
    IResult, Parser,
    bytes::complete::take_till,
    character::complete::char,
    combinator::{map, opt},
    multi::separated_list0,
    sequence::{pair, preceded},
};

/// One `&`-separated segment, not yet decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawSegment<'a> {
    pub key: &'a str,
    /// `None` when the segment has no `=` at all.
    pub value: Option<&'a str>,
}

impl RawSegment<'_> {
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.value.is_none()
    }
}

fn segment(input: &str) -> IResult<&str, RawSegment<'_>> {
    map(
        pair(
            take_till(|c: char| c == '=' || c == '&'),
            opt(preceded(char('='), take_till(|c: char| c == '&'))),
        ),
        |(key, value)| RawSegment { key, value },
    )
    .parse(input)
}

pub(crate) fn segments(input: &str) -> Result<Vec<RawSegment<'_>>, QueryError> {
    match separated_list0(char('&'), segment).parse(input) {
        Ok(("", segments)) => Ok(segments),
        Ok((rest, _)) => Err(QueryError::malformed(
            rest,
            "parser did not consume all input",
        )),
        Err(e) => Err(QueryError::malformed(input, e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg<'a>(key: &'a str, value: Option<&'a str>) -> RawSegment<'a> {
        RawSegment { key, value }
    }

    #[test]
    fn test_splits_pairs() {
        assert_eq!(
            segments("nav=guide&lang=en").unwrap(),
            vec![seg("nav", Some("guide")), seg("lang", Some("en"))]
        );
    }

    #[test]
    fn test_value_keeps_later_equals_signs() {
        assert_eq!(segments("expr=a=b").unwrap(), vec![seg("expr", Some("a=b"))]);
    }

    #[test]
    fn test_segment_without_equals() {
        assert_eq!(
            segments("flag&nav=home").unwrap(),
            vec![seg("flag", None), seg("nav", Some("home"))]
        );
    }

    #[test]
    fn test_empty_segments_are_kept_for_the_caller() {
        let parsed = segments("a=1&&b=2&").unwrap();
        assert_eq!(parsed.len(), 4);
        assert!(parsed[1].is_empty());
        assert!(parsed[3].is_empty());
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(segments("nav=").unwrap(), vec![seg("nav", Some(""))]);
    }
}
