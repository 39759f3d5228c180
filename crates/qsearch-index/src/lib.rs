//! Search index access for qsearch
//!
//! - **`client`**: the narrow backend contract (`IndexClient`)
//! - **`typesense`**: `IndexClient` over the Typesense REST API, with every
//!   call routed through the retrying transport
//! - **`bootstrap`**: one-shot startup provisioning of the `questions` collection

pub mod bootstrap;
pub mod client;
pub mod error;
pub mod typesense;

pub use bootstrap::{ensure_index_exists, BootstrapOutcome};
pub use client::IndexClient;
pub use error::{IndexError, Result};
pub use qsearch_http::HttpError;
pub use typesense::{TypesenseClient, API_KEY_HEADER};
