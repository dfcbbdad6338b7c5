//! Content-processing core for the Émergences blog.
//!
//! Pure, synchronous transforms over an already-fetched article collection:
//!
//! - [`query`] — free-text search, category filter, stable sort and pagination
//!   over an in-memory article list, plus the derived category index.
//! - [`linking`] — automatic keyword-to-URL hyperlink injection into rendered
//!   article HTML, with per-rule and per-article caps.
//! - [`sitemap`] — sitemap XML assembly and post-hoc validation.
//! - [`seo`] — meta descriptions, JSON-LD structured data, robots.txt.
//! - [`repository`] — the narrow async seam to whatever actually stores the
//!   articles.
//!
//! Nothing in this crate performs I/O; callers hand in the data and get new
//! collections or strings back.

pub mod linking;
pub mod query;
pub mod repository;
pub mod seo;
pub mod sitemap;
