//! Dateguess Core
//!
//! Infers the format template of a date/time string. Give it `2020-01-01`
//! and it answers `yyyy-MM-DD` (or `%Y-%m-%d`); give it `01/02/03` and it
//! answers with every template that could have produced it.
//!
//! # Quick Start
//!
//! ```
//! use dateguess_core::{FormatGuess, Guesser, Notation};
//!
//! let guesser = Guesser::new();
//!
//! let guess = guesser.guess("2013-02-08T09:30:26", Notation::Default).unwrap();
//! assert_eq!(guess, FormatGuess::Unique("yyyy-MM-DDTHH:mm:ss".into()));
//!
//! let guess = guesser.guess("2013-02-08T09:30:26", Notation::Strftime).unwrap();
//! assert_eq!(guess, FormatGuess::Unique("%Y-%m-%dT%H:%M:%S".into()));
//! ```
//!
//! # Ambiguous Inputs
//!
//! ```
//! use dateguess_core::{guess_format, Notation};
//!
//! let guess = guess_format("01/02/2020", Notation::Default).unwrap();
//! assert!(guess.is_ambiguous());
//! assert_eq!(guess.formats(), vec!["DD/MM/yyyy", "MM/DD/yyyy"]);
//! ```
//!
//! # Failures
//!
//! ```
//! use dateguess_core::{guess_format, GuessError, Notation};
//!
//! assert_eq!(guess_format("2020/13/01", Notation::Default), Err(GuessError::Unparseable));
//! assert!(matches!(
//!     guess_format("2020/1/1", Notation::Strftime),
//!     Err(GuessError::Unrepresentable { .. })
//! ));
//! ```

pub mod assigners;
pub mod error;
pub mod lexer;
pub mod notation;
pub mod resolve;
pub mod sequence;
pub mod types;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use error::GuessError;
pub use notation::Notation;
pub use resolve::{CalendarCheck, ResolveConfig};
pub use sequence::TokenSequence;
pub use types::*;

/// The rendered answer for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormatGuess {
    /// Exactly one template fits.
    Unique(String),
    /// Several templates fit; sorted, no duplicates.
    Ambiguous(Vec<String>),
}

impl FormatGuess {
    fn from_rendered(mut rendered: Vec<String>) -> Self {
        if rendered.len() == 1 {
            Self::Unique(rendered.remove(0))
        } else {
            Self::Ambiguous(rendered)
        }
    }

    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous(_))
    }

    /// All candidate formats, sorted.
    #[must_use]
    pub fn formats(&self) -> Vec<&str> {
        match self {
            Self::Unique(format) => vec![format.as_str()],
            Self::Ambiguous(formats) => formats.iter().map(String::as_str).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Unique(_) => 1,
            Self::Ambiguous(formats) => formats.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, format: &str) -> bool {
        self.formats().contains(&format)
    }
}

/// Main entry point - a configured guesser.
#[derive(Debug, Clone, Default)]
pub struct Guesser {
    config: ResolveConfig,
}

impl Guesser {
    /// Create a guesser with strict calendar checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use dateguess_core::{Guesser, Notation};
    ///
    /// let guesser = Guesser::new();
    /// assert!(guesser.guess("31/02/2020", Notation::Default).is_err());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a guesser with custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use dateguess_core::{Guesser, Notation, ResolveConfig};
    ///
    /// let guesser = Guesser::with_config(ResolveConfig::lenient());
    /// assert!(guesser.guess("31/02/2020", Notation::Default).is_ok());
    /// ```
    #[must_use]
    pub fn with_config(config: ResolveConfig) -> Self {
        Self { config }
    }

    /// Set the configuration.
    #[must_use]
    pub fn set_config(mut self, config: ResolveConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// Every template that fits `input`, before rendering.
    ///
    /// # Errors
    ///
    /// [`GuessError::Unparseable`] when no template fits.
    pub fn templates(&self, input: &str) -> Result<BTreeSet<Template>, GuessError> {
        let sequence = TokenSequence::build(input)?;
        resolve::resolve(&sequence, &self.config)
    }

    /// Guess the format of `input`, rendered in `notation`.
    ///
    /// Templates that render to the same string collapse into one.
    ///
    /// # Errors
    ///
    /// [`GuessError::Unparseable`] when no template fits, and
    /// [`GuessError::Unrepresentable`] when any fitting template has a code
    /// `notation` cannot express.
    pub fn guess(&self, input: &str, notation: Notation) -> Result<FormatGuess, GuessError> {
        let templates = self.templates(input)?;
        let rendered = templates
            .iter()
            .map(|t| t.render(notation))
            .collect::<Result<BTreeSet<String>, GuessError>>()?;

        tracing::debug!(input, %notation, formats = rendered.len(), "guessed");
        Ok(FormatGuess::from_rendered(rendered.into_iter().collect()))
    }
}

/// Guess with the default configuration.
///
/// # Errors
///
/// See [`Guesser::guess`].
pub fn guess_format(input: &str, notation: Notation) -> Result<FormatGuess, GuessError> {
    Guesser::new().guess(input, notation)
}
