// Alias and field projection engine.
//
// Architecture:
// - model.rs: Paths, alias tokens, projected output and errors
// - tokenizer.rs: Parses the comma-separated alias specification
// - resolver.rs: Path descent and join aggregation over an event tree
// - projector.rs: Runs every token against an event and merges the results

pub mod model;
pub mod projector;
pub mod resolver;
pub mod tokenizer;

pub use model::{AliasError, AliasSet, AliasToken, KeywordPolicy, Path, ProjectedObject};
pub use projector::{project, Projector};
pub use tokenizer::{tokenize, tokenize_with};
