pub mod descriptor;
pub mod fetcher;
pub mod oauth_docs;

pub use fetcher::DocsFetcher;
pub use oauth_docs::OAuthDocsExtractor;
