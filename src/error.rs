use std::collections::TryReserveError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, TransitionError>;

#[derive(thiserror::Error, Debug)]
pub enum TransitionError {
    #[error("could not allocate transition points: {0}")]
    OutOfMemory(#[from] TryReserveError),

    #[error("transition file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TransitionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_file() {
        let err = TransitionError::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let message = err.to_string();
        assert!(message.contains("missing.txt"));
        assert!(message.contains("gone"));
    }

    #[test]
    fn out_of_memory_converts_from_try_reserve() {
        let reserve = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err: TransitionError = reserve.into();
        assert!(err
            .to_string()
            .starts_with("could not allocate transition points"));
    }
}
