//! Parser tests.
//!
//! - `round_trip`: every supported construct prints back to its exact input
//! - `shapes`: where whitespace lands in the tree
//! - `errors`: positions and rendering of parse failures
