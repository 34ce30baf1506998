pub mod client;
pub mod directory;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod pagination;
pub mod user;

pub use client::{DirectoryClient, UserSource};
pub use directory::{DirectoryState, DirectoryView, FetchState, ResultsView};
pub use error::FetchError;
pub use fetcher::{FetchOutcome, FetchTask};
pub use filter::filter_users;
pub use pagination::{paginate, total_pages, Page, PAGE_SIZE};
pub use user::{decode_users, UserRecord};
