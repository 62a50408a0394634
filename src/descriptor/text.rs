//! Text form of a descriptor: `v0 v1 ... v127`.
//!
//! This is the format vocabularies are persisted in. There is no length prefix,
//! the number of values is always [`L`].

use std::{fmt, str::FromStr};

use nalgebra::SVector;
use tracing::trace;

use super::r2d2::{Descriptor, L};
use crate::{DescriptorError, Result};

const SEPARATOR: char = ' ';

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
        }
        for value in values {
            write!(f, "{SEPARATOR}{value}")?;
        }
        Ok(())
    }
}

impl FromStr for Descriptor {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self> {
        from_string(s)
    }
}

/// Space separated values of `a` in index order.
///
/// Floats are written in their shortest form that parses back to the same value,
/// so [`from_string`] restores `a` exactly.
pub fn to_string(a: &Descriptor) -> String {
    a.to_string()
}

/// Reads a descriptor from the first [`L`] whitespace separated tokens of `s`.
/// Anything after them is ignored.
///
/// ### Errors
/// - [`DescriptorError::MissingTokens`] if `s` runs out of tokens early
/// - [`DescriptorError::InvalidToken`] if one of the tokens is not a float
/// - [`DescriptorError::NonFiniteValue`] for `nan`, `inf` and the like, which
///   [`distance`](super::r2d2::distance) cannot order
pub fn from_string(s: &str) -> Result<Descriptor> {
    let mut values = SVector::<f32, L>::zeros();
    let mut tokens = s.split_whitespace();

    for (index, value) in values.iter_mut().enumerate() {
        let token = tokens.next().ok_or(DescriptorError::MissingTokens {
            expected: L,
            found: index,
        })?;

        *value = token
            .parse()
            .map_err(|source| DescriptorError::InvalidToken {
                index,
                token: token.to_owned(),
                source,
            })?;

        if !value.is_finite() {
            return Err(DescriptorError::NonFiniteValue {
                index,
                token: token.to_owned(),
            });
        }
    }

    if tokens.next().is_some() {
        trace!("ignoring content after {L} descriptor values");
    }

    Ok(Descriptor::from(values))
}
