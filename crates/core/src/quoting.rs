//! Literal encoding for generated scripts and the shells they pass through.
//!
//! Data enters a generated script only through [`string_literal`], so the
//! interpreter reads it back unchanged. On the way to a remote host the whole
//! script goes through [`quote`] once per shell in between.

use crate::error::{Error, Result};

/// Encodes `value` as a double-quoted string literal the script interpreter reads back verbatim.
///
/// The JSON string grammar is a subset of Python's: quotes, backslashes and
/// control characters are escaped and everything else is kept as is.
///
/// # Errors
///
/// Returns [`Error::Encode`] if serialization fails.
///
/// # Examples
///
/// ```
/// use ttyd_launch_core::quoting::string_literal;
///
/// assert_eq!(string_literal("say \"hi\"\n").unwrap(), r#""say \"hi\"\n""#);
/// ```
pub fn string_literal(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encodes `value` as a single POSIX shell word.
///
/// # Errors
///
/// Returns [`Error::Quote`] if the value contains a NUL byte, which no shell
/// word can carry. `what` names the value in the error message.
pub fn quote(what: &str, value: &str) -> Result<String> {
    shlex::try_quote(value)
        .map(|quoted| quoted.into_owned())
        .map_err(|e| Error::quote_error(what, e))
}

/// Quoting applied to a script before it is handed to the SSH client.
///
/// SSH joins its command arguments with spaces and gives the result to the
/// remote login shell, which tokenizes it once more before the remote
/// interpreter sees the script. `layers` is the number of such shells; each
/// layer adds one round of [`quote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteQuoting {
    pub layers: usize,
}

impl Default for RemoteQuoting {
    fn default() -> Self {
        Self { layers: 1 }
    }
}

impl RemoteQuoting {
    pub fn new(layers: usize) -> Self {
        Self { layers }
    }

    /// Quotes `script` once per remote shell layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Quote`] if the script contains a NUL byte.
    pub fn apply(&self, script: &str) -> Result<String> {
        let mut quoted = script.to_string();
        for _ in 0..self.layers {
            quoted = quote("script", &quoted)?;
        }
        Ok(quoted)
    }
}
