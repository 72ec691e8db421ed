//! Demo wizards built on the form engine.
//!
//! Each variant is a fixed sequence of pages; [`Variant::generator`] builds a
//! fresh generator per request.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::form::{FormError, FormGenerator, PageSequence};

pub mod basic;
pub mod showcase;
pub mod widgets;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Name, age, person object and person list steps
    Basic,
    /// Choices, nested education records and list-heavy steps
    #[default]
    Showcase,
    /// One page with every choice set and presentation widget
    Widgets,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Basic, Variant::Showcase, Variant::Widgets];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Basic => "basic",
            Variant::Showcase => "showcase",
            Variant::Widgets => "widgets",
        }
    }

    /// Fresh generator for one form submission
    pub fn generator(&self) -> Box<dyn FormGenerator> {
        let pages = match self {
            Variant::Basic => basic::pages(),
            Variant::Showcase => showcase::pages(),
            Variant::Widgets => widgets::pages(),
        };
        Box::new(PageSequence::new(pages))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormError::UnknownVariant(s.to_string()))
    }
}
