//! Line-level outline scanner built on winnow.
//!
//! Each line is matched against `marker+ whitespace? label`. Lines that do not
//! start with the marker backtrack and are dropped by the caller.

use log::trace;
use winnow::{
    Parser,
    combinator::opt,
    error::{ContextError, ErrMode},
    token::{one_of, take_while},
};

use ramify_core::outline::OutlineNode;

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A matched outline line, borrowed from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OutlineLine<'src> {
    pub depth: usize,
    pub label: &'src str,
}

/// The leading run of marker characters. Its length in characters is the depth.
fn marker_run<'src>(input: &mut Input<'src>, marker: char) -> IResult<usize> {
    take_while(1.., marker)
        .map(|run: &str| run.chars().count())
        .parse_next(input)
}

/// At most one whitespace character separating the markers from the label.
fn separator(input: &mut Input<'_>) -> IResult<()> {
    opt(one_of(|c: char| c.is_whitespace()))
        .void()
        .parse_next(input)
}

/// Everything up to the end of the line.
fn label<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(0.., |c: char| c != '\n').parse_next(input)
}

pub(crate) fn outline_line<'src>(
    input: &mut Input<'src>,
    marker: char,
) -> IResult<OutlineLine<'src>> {
    let depth = marker_run(input, marker)?;
    separator(input)?;
    let label = label(input)?;
    Ok(OutlineLine { depth, label })
}

/// Turns one source line into a node, or `None` if the line is not part of
/// the outline.
///
/// `line_no` is one-based and only used for logging.
pub(crate) fn parse_line(line_no: usize, line: &str, marker: char) -> Option<OutlineNode> {
    let line = line.trim_end_matches('\r');
    if line.trim().is_empty() {
        trace!(line = line_no; "Skipping blank line");
        return None;
    }

    let mut input = line;
    match outline_line(&mut input, marker) {
        Ok(OutlineLine { depth, label }) => {
            trace!(line = line_no, depth, label; "Outline node");
            Some(OutlineNode::new(label, depth))
        }
        Err(_) => {
            trace!(line = line_no; "Skipping line without marker");
            None
        }
    }
}
