//! Pipeline runner
//!
//! A pipeline is a left-to-right fold of steps over `(data, {})`. Step N
//! always sees exactly what step N-1 produced.

use sift_value::{Data, Errors};

use super::step::Step;

/// Runs `steps` in order over `data`, starting from an empty error map.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let steps = [trim(), required(["name"])];
/// let (data, errors) = run(&steps, data! { "name" => "  Ada " });
/// assert_eq!(data.get("name"), Some(&Value::text("Ada")));
/// assert!(errors.is_empty());
/// ```
#[must_use]
pub fn run(steps: &[Step], data: Data) -> (Data, Errors) {
    let span = tracing::debug_span!("pipeline", steps = steps.len());
    let _enter = span.enter();

    let (data, errors) = steps
        .iter()
        .fold((data, Errors::new()), |(data, errors), step| {
            let (data, errors) = step.apply(data, errors);
            tracing::trace!(
                step = step.name(),
                kind = ?step.kind(),
                errors = errors.len(),
                "step applied"
            );
            (data, errors)
        });

    tracing::debug!(errors = errors.len(), valid = errors.is_empty(), "pipeline finished");
    (data, errors)
}

// ============================================================================
// PIPELINE
// ============================================================================

/// An ordered, reusable sequence of steps.
///
/// Cloning is cheap and a pipeline can be shared between threads; each
/// [`run`](Pipeline::run) works on its own record.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    #[must_use = "builder methods must be chained or built"]
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Appends every step of another pipeline.
    #[must_use = "builder methods must be chained or built"]
    pub fn then(mut self, other: Pipeline) -> Self {
        self.steps.extend(other.steps);
        self
    }

    /// Appends a step in place.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs the pipeline over one record.
    #[must_use]
    pub fn run(&self, data: Data) -> Outcome {
        let (data, errors) = run(&self.steps, data);
        Outcome { data, errors }
    }
}

impl FromIterator<Step> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl Extend<Step> for Pipeline {
    fn extend<I: IntoIterator<Item = Step>>(&mut self, iter: I) {
        self.steps.extend(iter);
    }
}

impl From<Vec<Step>> for Pipeline {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// The final `(data, errors)` pair of a run.
///
/// The error map is the complete list of problems; an empty map means the
/// record is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub data: Data,
    pub errors: Errors,
}

impl Outcome {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (Data, Errors) {
        (self.data, self.errors)
    }

    /// Returns the cleaned record, or the errors if there are any.
    pub fn into_result(self) -> Result<Data, Errors> {
        if self.errors.is_empty() {
            Ok(self.data)
        } else {
            Err(self.errors)
        }
    }
}
