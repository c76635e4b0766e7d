//! Remold
//!
//! Lossless Java trees you can parse, rewrite and print back byte for byte,
//! with a formatter that repairs the whitespace a rewrite disturbs.
//!
//! A [`Session`] ties the pieces together: it owns the type registry trees
//! are attributed against and the format styles, and runs visitors over
//! parsed trees.
//!
//! ```text
//! let session = Session::new();
//! let tree = session.parse(source)?;
//! let tree = session.apply(tree, &mut MyRewrite)?;
//! let tree = session.auto_format(tree, None)?;
//! println!("{}", tree.print());
//! ```
//!
//! The member crates are re-exported under short names for everything the
//! session does not wrap.

use std::sync::Once;

mod error;
mod session;

pub use error::{Error, Result};
pub use session::Session;

pub use remold_fmt as fmt;
pub use remold_match as matcher;
pub use remold_parse as parse;
pub use remold_tree as tree;
pub use remold_types as types;
pub use remold_visit as visit;

pub use remold_fmt::Styles;
pub use remold_tree::{TreeId, J};
pub use remold_types::{SharedTypeRegistry, TypeRegistry};
pub use remold_visit::{Cursor, JavaVisitor};

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber when `RUST_LOG` is set.
///
/// Filtering follows `RUST_LOG` (e.g. `RUST_LOG=remold_fmt=debug`). With
/// `REMOLD_LOG_TREE` set as well, spans print as an indented tree, which
/// reads better when following a visitor down a deep tree.
///
/// Safe to call more than once; an embedding application that installed its
/// own subscriber first keeps it.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        let installed = if std::env::var_os("REMOLD_LOG_TREE").is_some() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .try_init()
        };
        if installed.is_err() {
            tracing::debug!("a global subscriber is already installed");
        }
    });
}
