pub mod commands;
pub mod model;
pub mod printer;
pub mod transport;

pub mod prelude {
    use std::path::PathBuf;
    use thiserror::Error;

    pub type Result<T> = anyhow::Result<T>;
    pub type IoResult<T> = std::io::Result<T>;

    pub use anyhow::Context;
    pub use Error::*;

    pub use log::{debug, error, info, log, trace, warn};

    #[derive(Error, Debug)]
    pub enum Error {
        #[error("ESHOST environment must be set to the URL base")]
        MissingHost,

        #[error("Invalid Elasticsearch URL: {0}")]
        InvalidHost(String),

        #[error("Reading config file: {0}")]
        ReadingConfig(PathBuf),

        #[error("Invalid timeout: {0}")]
        InvalidTimeout(String),

        #[error("Request to {0} failed")]
        Request(String),

        #[error("{0} responded with HTTP {1}: {2}")]
        HttpStatus(String, u16, String),

        #[error("Unable to parse response from {0}")]
        Decode(String),

        #[error("Unable to create HTTP client")]
        ClientSetup,

        #[error("Writing results to output")]
        WritingOutput,
    }

    /// Категория отказа, определяет код выхода процесса
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ErrorKind {
        Configuration,
        Transport,
        Decode,
        Output,
    }

    impl Error {
        pub fn kind(&self) -> ErrorKind {
            match self {
                MissingHost | InvalidHost(_) | ReadingConfig(_) | InvalidTimeout(_) | ClientSetup => {
                    ErrorKind::Configuration
                }
                Request(_) | HttpStatus(..) => ErrorKind::Transport,
                Decode(_) => ErrorKind::Decode,
                WritingOutput => ErrorKind::Output,
            }
        }
    }

    impl ErrorKind {
        pub fn exit_code(self) -> i32 {
            match self {
                ErrorKind::Configuration => 1,
                ErrorKind::Transport => 2,
                ErrorKind::Decode => 3,
                ErrorKind::Output => 4,
            }
        }
    }

    /// Ищет [Error] в цепочке контекстов и возвращает его категорию
    pub fn classify(err: &anyhow::Error) -> Option<ErrorKind> {
        err.downcast_ref::<Error>().map(Error::kind)
    }

    /// Код выхода для отказа. Неклассифицированные ошибки считаются ошибками конфигурации.
    pub fn exit_code(err: &anyhow::Error) -> i32 {
        classify(err)
            .unwrap_or(ErrorKind::Configuration)
            .exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use anyhow::anyhow;

    #[test]
    fn check_exit_codes() {
        assert_eq!(exit_code(&MissingHost.into()), 1);
        assert_eq!(exit_code(&Request("http://es".to_string()).into()), 2);
        assert_eq!(
            exit_code(&HttpStatus("http://es".to_string(), 404, "missing".to_string()).into()),
            2
        );
        assert_eq!(exit_code(&Decode("http://es".to_string()).into()), 3);
        assert_eq!(exit_code(&ClientSetup.into()), 1);
        assert_eq!(exit_code(&WritingOutput.into()), 4);
        assert_eq!(exit_code(&anyhow!("something else")), 1);
    }

    #[test]
    fn check_classify_through_context() {
        let err: anyhow::Error = serde_json::from_str::<u64>("<html>").unwrap_err().into();
        let err = err.context(Decode("http://es".to_string()));
        let err = err.context("Listing indices");

        assert_eq!(classify(&err), Some(ErrorKind::Decode));
        assert_eq!(
            format!("{:#}", err),
            "Listing indices: Unable to parse response from http://es: expected value at line 1 column 1"
        );
    }
}
