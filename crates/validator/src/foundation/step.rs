//! The unit of pipeline composition.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use sift_value::{Data, Errors};

type StepFn = dyn Fn(Data, Errors) -> (Data, Errors) + Send + Sync;

/// Which constructor produced a step.
///
/// Only used for diagnostics; the behaviour lives in the step body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Validator,
    Transform,
    PostProcess,
    Parser,
    Custom,
}

/// A pure `(Data, Errors) -> (Data, Errors)` function.
///
/// A step is closed over the arguments it was built with and holds no
/// mutable state, so running it twice on the same input gives the same
/// output. Cloning is cheap and steps can be shared between threads.
///
/// # Examples
///
/// ```rust
/// use sift_validator::foundation::Step;
/// use sift_value::{Errors, data};
///
/// let flag_all = Step::new("flag_all", |data, errors| {
///     let errors = data.keys().fold(errors, |errors, key| errors.with(key, "Flagged."));
///     (data, errors)
/// });
///
/// let (_, errors) = flag_all.apply(data! { "a" => 1 }, Errors::new());
/// assert_eq!(errors.get("a"), Some("Flagged."));
/// ```
#[derive(Clone)]
pub struct Step {
    name: Cow<'static, str>,
    kind: StepKind,
    body: Arc<StepFn>,
}

impl Step {
    /// Creates a custom step from a raw body.
    ///
    /// Prefer [`validator`](super::validator), [`transform`](super::transform),
    /// [`post_process`](super::post_process) or [`parser`](super::parser),
    /// which encode the merge rules for you.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, body: F) -> Self
    where
        F: Fn(Data, Errors) -> (Data, Errors) + Send + Sync + 'static,
    {
        Self::with_kind(name, StepKind::Custom, body)
    }

    pub(crate) fn with_kind<F>(name: impl Into<Cow<'static, str>>, kind: StepKind, body: F) -> Self
    where
        F: Fn(Data, Errors) -> (Data, Errors) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind,
            body: Arc::new(body),
        }
    }

    /// Runs the step on one `(data, errors)` pair.
    #[must_use]
    pub fn apply(&self, data: Data, errors: Errors) -> (Data, Errors) {
        (self.body)(data, errors)
    }

    /// Diagnostic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> StepKind {
        self.kind
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}
