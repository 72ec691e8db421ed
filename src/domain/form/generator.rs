//! Step-by-step form orchestration.
//!
//! A wizard is a [`FormGenerator`]: it yields a [`FormPage`], is resumed with
//! the validated answer to that page, and eventually finishes with a result.
//! [`post_form`] replays the answers a client has collected so far against a
//! fresh generator. The client learns about the next page through
//! [`FormError::NotComplete`], and the wizard's result comes back once every
//! page has been answered.

use serde_json::Value;
use tracing::{debug, info, warn};

use super::error::FormError;
use super::model::FormPage;
use super::State;

/// What a generator produces when resumed
#[derive(Debug, Clone)]
pub enum Step {
    /// Ask the user to fill in this page next
    Page(FormPage),
    /// The wizard is finished
    Done(State),
}

/// A suspendable sequence of form pages.
///
/// The first call to [`resume`](FormGenerator::resume) receives `None`; every
/// later call receives the validated data for the page yielded just before.
pub trait FormGenerator: Send {
    fn resume(&mut self, answer: Option<State>) -> Step;
}

impl<F> FormGenerator for F
where
    F: FnMut(Option<State>) -> Step + Send,
{
    fn resume(&mut self, answer: Option<State>) -> Step {
        self(answer)
    }
}

/// Yields a fixed list of pages in order and finishes with every answer
/// merged into one object, later pages overriding earlier keys.
#[derive(Debug, Clone)]
pub struct PageSequence {
    pages: std::vec::IntoIter<FormPage>,
    merged: State,
}

impl PageSequence {
    pub fn new(pages: Vec<FormPage>) -> Self {
        Self {
            pages: pages.into_iter(),
            merged: State::new(),
        }
    }
}

impl FormGenerator for PageSequence {
    fn resume(&mut self, answer: Option<State>) -> Step {
        if let Some(answer) = answer {
            self.merged.extend(answer);
        }
        match self.pages.next() {
            Some(page) => Step::Page(page),
            None => Step::Done(std::mem::take(&mut self.merged)),
        }
    }
}

/// Drive `generator` with the answers collected so far.
///
/// Each yielded page consumes the next user input. If the inputs run out
/// before the generator finishes, the pending page is reported through
/// [`FormError::NotComplete`]. Inputs left over after the generator finishes
/// are rejected with [`FormError::Overflow`]. On success the generator result
/// is merged over `state`.
pub fn post_form<G>(generator: &mut G, state: State, user_inputs: Vec<Value>) -> Result<State, FormError>
where
    G: FormGenerator + ?Sized,
{
    let mut inputs = user_inputs.into_iter();
    let mut step = generator.resume(None);
    let mut index = 0usize;

    loop {
        let page = match step {
            Step::Page(page) => page,
            Step::Done(result) => {
                let remaining = inputs.len();
                if remaining > 0 {
                    warn!("Form finished with {} unused user inputs", remaining);
                    return Err(FormError::Overflow(remaining));
                }
                info!("Form completed after {} steps", index);
                let mut merged = state;
                merged.extend(result);
                return Ok(merged);
            }
        };

        let Some(input) = inputs.next() else {
            debug!("Form {} awaiting input for step {}", page.name(), index);
            return Err(FormError::NotComplete {
                name: page.name().to_string(),
                form: Box::new(page.json_schema()),
                meta: page.meta.clone(),
            });
        };

        match page.validate(&input) {
            Ok(data) => {
                debug!("Step {} ({}) validated", index, page.name());
                index += 1;
                step = generator.resume(Some(data));
            }
            Err(errors) => {
                warn!(
                    "Step {} ({}) rejected with {} validation errors",
                    index,
                    page.name(),
                    errors.len()
                );
                return Err(FormError::Validation {
                    form: page.name().to_string(),
                    errors,
                });
            }
        }
    }
}
