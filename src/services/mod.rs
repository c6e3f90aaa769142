pub mod extractor;
pub mod page_fetcher;

pub use extractor::extract_course;
pub use page_fetcher::*;
