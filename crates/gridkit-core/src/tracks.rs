//! Parser for textual track lists such as `1fr 200px auto`.
//!
//! Track editors accept the same syntax the generated code emits inside an
//! arbitrary-value class (with spaces instead of underscores).

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{all_consuming, map, value},
    number::complete::double,
    sequence::pair,
    IResult,
};

use crate::errors::TrackParseError;
use crate::types::{Track, TrackUnit};

fn keyword(input: &str) -> IResult<&str, TrackUnit> {
    alt((
        value(TrackUnit::MinContent, tag("min-content")),
        value(TrackUnit::MaxContent, tag("max-content")),
        value(TrackUnit::Auto, tag("auto")),
    ))(input)
}

fn unit(input: &str) -> IResult<&str, TrackUnit> {
    alt((
        value(TrackUnit::Fr, tag("fr")),
        value(TrackUnit::Px, tag("px")),
        value(TrackUnit::Rem, tag("rem")),
        value(TrackUnit::Percent, tag("%")),
    ))(input)
}

fn track(input: &str) -> IResult<&str, (f64, TrackUnit)> {
    alt((map(keyword, |unit| (1.0, unit)), pair(double, unit)))(input)
}

/// Parse a whitespace (or underscore) separated track list.
///
/// Every parsed track receives a fresh id.
pub fn parse_track_list(input: &str) -> Result<Vec<Track>, TrackParseError> {
    let tokens: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(TrackParseError::Empty);
    }

    tokens
        .into_iter()
        .enumerate()
        .map(|(position, token)| {
            let (_, (value, unit)) = all_consuming(track)(token).map_err(|_| {
                TrackParseError::InvalidTrack {
                    position,
                    found: token.to_string(),
                }
            })?;
            if !unit.is_keyword() && !(value.is_finite() && value > 0.0) {
                return Err(TrackParseError::NonPositive { position, value });
            }
            Ok(Track::new(value, unit))
        })
        .collect()
}
