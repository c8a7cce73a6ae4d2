//! Sorting engine for features, tags and steps.
//!
//! Sorting never touches the elements themselves: every operation returns a
//! reordered list of references into the caller's collection. All orderings
//! are stable, so elements with equal keys keep their input order.

use crate::error::{AppError, AppResult};
use crate::models::{Feature, SortingMethod, StepObject, TagObject};

/// Applies one [`SortingMethod`] to every collection of a report run.
#[derive(Debug, Clone)]
pub struct SortingFactory {
    method: SortingMethod,
}

impl SortingFactory {
    pub fn new(method: SortingMethod) -> Self {
        SortingFactory { method }
    }

    pub fn method(&self) -> &SortingMethod {
        &self.method
    }

    /// Order features.
    ///
    /// Alphabetical ordering compares feature names.
    pub fn sort_features<'a, I>(&self, features: I) -> AppResult<Vec<&'a Feature>>
    where
        I: IntoIterator<Item = &'a Feature>,
    {
        let mut sorted: Vec<&Feature> = features.into_iter().collect();
        match &self.method {
            SortingMethod::Natural => {}
            SortingMethod::Alphabetical => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
            SortingMethod::Unsupported(_) => return Err(unsupported_method_error(&self.method)),
        }
        Ok(sorted)
    }

    /// Order tags.
    ///
    /// Tags come from a name-keyed sorted map, so natural and alphabetical
    /// order are the same for them.
    pub fn sort_tags<'a, I>(&self, tags: I) -> AppResult<Vec<&'a TagObject>>
    where
        I: IntoIterator<Item = &'a TagObject>,
    {
        let mut sorted: Vec<&TagObject> = tags.into_iter().collect();
        match &self.method {
            SortingMethod::Natural => {}
            SortingMethod::Alphabetical => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
            SortingMethod::Unsupported(_) => return Err(unsupported_method_error(&self.method)),
        }
        Ok(sorted)
    }

    /// Order steps.
    ///
    /// Steps come from a location-keyed sorted map, so natural and
    /// alphabetical order are the same for them.
    pub fn sort_steps<'a, I>(&self, steps: I) -> AppResult<Vec<&'a StepObject>>
    where
        I: IntoIterator<Item = &'a StepObject>,
    {
        let mut sorted: Vec<&StepObject> = steps.into_iter().collect();
        match &self.method {
            SortingMethod::Natural => {}
            SortingMethod::Alphabetical => sorted.sort_by(|a, b| a.location.cmp(&b.location)),
            SortingMethod::Unsupported(_) => return Err(unsupported_method_error(&self.method)),
        }
        Ok(sorted)
    }
}

/// Error for a method the engine cannot apply; shared by every sort operation.
fn unsupported_method_error(method: &SortingMethod) -> AppError {
    AppError::UnsupportedSortingMethod(method.to_string())
}
