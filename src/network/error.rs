//! Error types for graph construction and measurement.

use thiserror::Error;

/// Result type for the network module.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors raised while building a graph or measuring it.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NetworkError {
	/// A generator parameter is out of its domain.
	#[error("invalid parameter: {0}")]
	InvalidParameter(String),

	/// A measure that needs at least one node was given none.
	#[error("cannot compute centrality for the null graph")]
	EmptyGraph,

	/// Power iteration ran out of iterations.
	#[error("power iteration failed to converge within {0} iterations")]
	NotConverged(usize),

	/// A randomized construction gave up.
	#[error("could not construct graph: {0}")]
	Construction(String),
}
