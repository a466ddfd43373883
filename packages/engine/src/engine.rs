//! The engine facade: tokenize, normalize to postfix, render, evaluate.
//!
//! Every call is a pure function of its inputs. Nothing is cached or shared
//! between calls, so the functions here can run on any number of threads at once.

use crate::error::{EngineError, EngineResult};
use crate::result::{Conversion, ProcessResult};
use pda_evaluator::evaluate_postfix;
use pda_parser::{render, to_postfix, tokenize, Notation, UnknownNotation};
use tracing::{debug, instrument};

/// Convert `input` from one notation to another and evaluate it.
///
/// Stops at the first failure. Rendering happens before evaluation, so when
/// both would fail the rendering error is the one reported.
#[instrument(level = "debug", skip(input), fields(len = input.len()))]
pub fn try_process(input: &str, from: Notation, to: Notation) -> EngineResult<Conversion> {
    let tokens = tokenize(input);
    debug!(tokens = tokens.len(), "Tokenized input");

    let postfix = to_postfix(&tokens, from)?;
    let converted = render(&postfix, to)?;
    let value = evaluate_postfix(&postfix)?;

    debug!(%converted, value, "Processed expression");
    Ok(Conversion { converted, value })
}

/// Convert and evaluate, packaging any failure as [`ProcessResult::Error`]
pub fn process(input: &str, from: Notation, to: Notation) -> ProcessResult {
    let result = try_process(input, from, to);
    if let Err(err) = &result {
        debug!(error = %err, "Processing failed");
    }
    result.into()
}

/// [`process`] with notations given by name, for callers that only have strings.
///
/// An unknown notation name is reported like any other failure.
pub fn process_named(input: &str, from: &str, to: &str) -> ProcessResult {
    match parse_notations(from, to) {
        Ok((from, to)) => process(input, from, to),
        Err(err) => ProcessResult::from(Err(EngineError::from(err))),
    }
}

fn parse_notations(from: &str, to: &str) -> Result<(Notation, Notation), UnknownNotation> {
    Ok((from.parse()?, to.parse()?))
}

/// Convert `input` between notations without evaluating it
#[instrument(level = "debug", skip(input), fields(len = input.len()))]
pub fn convert(input: &str, from: Notation, to: Notation) -> EngineResult<String> {
    let tokens = tokenize(input);
    let postfix = to_postfix(&tokens, from)?;
    Ok(render(&postfix, to)?)
}

/// Check that `input` can be normalized from `notation` to postfix.
///
/// Only normalization is checked. Postfix input is normalized as-is, so its
/// structure is not examined until it is rendered or evaluated.
pub fn validate(input: &str, notation: Notation) -> bool {
    let tokens = tokenize(input);
    to_postfix(&tokens, notation).is_ok()
}
