use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("leptos configuration error: {0}")]
    Leptos(#[from] leptos::config::errors::LeptosConfigError),

    #[error("invalid listen address {0:?}: {1}")]
    Listen(String, std::net::AddrParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
