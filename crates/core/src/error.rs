use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot quote {} for the generated script: {}", .what, .original)]
    Quote {
        what: String,
        original: shlex::QuoteError,
    },

    #[error("No command was given to run.")]
    EmptyCommand,

    #[error("Failed to start `{}`: {}", .program, .original)]
    Spawn {
        program: String,
        original: std::io::Error,
    },

    #[error("Error waiting for `{}` to finish: {}", .program, .original)]
    Wait {
        program: String,
        original: std::io::Error,
    },

    #[error("Error encoding invocation data for the generated script: {}", .0)]
    Encode(#[from] serde_json::Error),

    #[error("Error serializing launch plan: {}", .0)]
    Serialize(#[from] serde_yaml::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn quote_error(what: impl Into<String>, original: shlex::QuoteError) -> Self {
        Self::Quote {
            what: what.into(),
            original,
        }
    }

    pub fn spawn_error(program: impl Into<String>, original: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            original,
        }
    }

    pub fn wait_error(program: impl Into<String>, original: std::io::Error) -> Self {
        Self::Wait {
            program: program.into(),
            original,
        }
    }
}
