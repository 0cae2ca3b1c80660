// Projector - tokenizes an alias specification and resolves every token
// against one alert event.

use log::debug;

use super::model::{AliasError, AliasSet, KeywordPolicy, ProjectedObject};
use super::resolver::{resolve, resolve_join};
use super::tokenizer::tokenize_with;
use crate::core::model::Node;

/// Projection front end. Holds only the keyword policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Projector {
    policy: KeywordPolicy,
}

impl Projector {
    pub fn new(policy: KeywordPolicy) -> Self {
        Self { policy }
    }

    /// Tokenize `spec` and project `root` through it.
    pub fn project(&self, root: &Node, spec: &str) -> Result<ProjectedObject, AliasError> {
        let tokens = tokenize_with(spec, self.policy)?;
        self.project_tokens(root, &tokens)
    }

    /// Project through an already tokenized set. Later tokens overwrite
    /// earlier ones with the same alias.
    pub fn project_tokens(
        &self,
        root: &Node,
        tokens: &AliasSet,
    ) -> Result<ProjectedObject, AliasError> {
        let mut output = ProjectedObject::new();

        for token in tokens {
            let value = if token.is_join() {
                Node::string(resolve_join(root, &token.path)?)
            } else {
                resolve(root, &token.path)?.clone()
            };
            debug!("Resolved {} -> {} = {}", token.path, token.alias, value);
            output.insert(token.alias.clone(), value);
        }

        debug!("Projected {} aliases from {} tokens", output.len(), tokens.len());
        Ok(output)
    }
}

/// Project with the default policy.
pub fn project(root: &Node, spec: &str) -> Result<ProjectedObject, AliasError> {
    Projector::default().project(root, spec)
}
