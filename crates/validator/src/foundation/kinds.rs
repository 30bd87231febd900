//! Step-kind constructors
//!
//! Each constructor takes a body closure (closed over whatever keys or limits
//! it needs) and wraps it with the merge rules of its kind.

use std::borrow::Cow;

use sift_value::{Data, Errors};

use super::step::{Step, StepKind};

/// Builds a step that only reports problems.
///
/// `body` inspects the record and returns the messages it found, possibly
/// none. The record passes through unchanged, and messages already recorded
/// for a field take precedence over the new ones.
pub fn validator<F>(name: impl Into<Cow<'static, str>>, body: F) -> Step
where
    F: Fn(&Data) -> Errors + Send + Sync + 'static,
{
    Step::with_kind(name, StepKind::Validator, move |data, errors| {
        let found = body(&data);
        (data, errors.merge_under(found))
    })
}

/// Builds a step that rewrites the record and never touches errors.
///
/// Transforms run on invalid records too, so cleanup like trimming still
/// happens when the caller re-displays the form.
pub fn transform<F>(name: impl Into<Cow<'static, str>>, body: F) -> Step
where
    F: Fn(Data) -> Data + Send + Sync + 'static,
{
    Step::with_kind(name, StepKind::Transform, move |data, errors| {
        (body(data), errors)
    })
}

/// Builds a transform that only fires on a record with no errors so far.
///
/// When errors exist the record is returned as is, so the caller still has
/// the input as submitted to show back to the user.
pub fn post_process<F>(name: impl Into<Cow<'static, str>>, body: F) -> Step
where
    F: Fn(Data) -> Data + Send + Sync + 'static,
{
    let name = name.into();
    let label = name.clone();
    Step::with_kind(name, StepKind::PostProcess, move |data, errors| {
        if errors.is_empty() {
            (body(data), errors)
        } else {
            tracing::trace!(step = %label, errors = errors.len(), "post-process skipped");
            (data, errors)
        }
    })
}

/// Builds a transform that can also report failures.
///
/// Used by the numeric and date-time parsers: `body` returns the rewritten
/// record together with the messages for values it could not convert.
/// Those messages are merged under existing ones like a validator's.
pub fn parser<F>(name: impl Into<Cow<'static, str>>, body: F) -> Step
where
    F: Fn(Data) -> (Data, Errors) + Send + Sync + 'static,
{
    Step::with_kind(name, StepKind::Parser, move |data, errors| {
        let (data, found) = body(data);
        (data, errors.merge_under(found))
    })
}
