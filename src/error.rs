use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("Bad status code: {status}")]
    BadStatus { status: u16 },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("no scope sections found under `div.toc`; the documentation layout has changed")]
    NoScopeSections,

    #[error("scope section #{index} has no leading link")]
    MissingScopeLink { index: usize },

    #[error("endpoint link in scope `{scope}` has no href")]
    MissingHref { scope: String },

    #[error("invalid selector `{0}`")]
    Selector(String),
}
