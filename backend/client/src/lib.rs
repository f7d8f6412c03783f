//! Terminal client for the planets proxy.
//!
//! Loads `/api/planets` page after page until the catalogue runs out, then
//! renders every planet loaded so far as one table with a selection column
//! and a population total in the footer.
pub mod api;
pub mod feed;
pub mod table;

pub use api::{ClientError, fetch_page};
pub use feed::{PlanetFeed, next_page_param};
pub use table::{Selection, population_total, render};
