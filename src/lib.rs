//! Compressed prefix trie for pattern-based path routing.
//!
//! Patterns such as `/user/:id` or `/assets/*file` are compiled into token
//! runs ([`pattern::compile`]) and inserted into a [`RadixTree`]. Matching a
//! concrete path is a read-only walk that returns the registered payload and
//! the captured variables.
//!
//! ```
//! use prefix_router_rs::RadixTree;
//!
//! let mut tree = RadixTree::new();
//! tree.insert_pattern("/:user/op/:id", "handler").unwrap();
//!
//! let found = tree.match_full("/abc/op/123").unwrap();
//! assert_eq!(*found.payload, "handler");
//! assert_eq!(found.params.get("user"), Some("abc"));
//! assert_eq!(found.params.get("id"), Some("123"));
//! assert!(tree.match_full("/abc/op").is_none());
//! ```
//!
//! [`Router`] layers per-method tables, sealing and path normalization on
//! top of the trie.

pub mod enums;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod radix;
pub mod readonly;
pub mod registry;
pub mod router;
pub mod types;

pub use enums::HttpMethod;
pub use matcher::{Match, Params, Probe};
pub use pattern::{CompiledPattern, compile};
pub use radix::{RadixError, RadixTree};
pub use readonly::RouterReadOnly;
pub use router::{FilterSet, Router, RouterError, RouterOptions, RouterResult};
pub use types::{RouteMatch, RouteParams};
