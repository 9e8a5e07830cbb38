// transformers.rs - Enum transformer trait and registry

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Input handed to an enum transformer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformContext {
    /// Member names of the source enum
    pub source: Vec<String>,
    /// Member names of the target enum
    pub target: Vec<String>,
    /// Raw configuration string from the setting line that selected the transformer
    pub config: String,
}

/// Maps members of a source enum onto members of a target enum.
/// Implemented by the generation engine; this crate only carries them.
pub trait EnumTransformer: Send + Sync + Debug {
    /// Get a description of this transformer
    fn description(&self) -> &'static str;

    /// Compute source member → target member
    fn transform(&self, ctx: &TransformContext) -> Result<BTreeMap<String, String>, String>;
}

/// Named enum transformers available to the engine
#[derive(Debug, Clone, Default)]
pub struct TransformerRegistry {
    transformers: BTreeMap<String, Arc<dyn EnumTransformer>>,
}

impl TransformerRegistry {
    pub fn new() -> Self {
        Self {
            transformers: BTreeMap::new(),
        }
    }

    /// Register a transformer, replacing any previous one with the same name
    pub fn register(&mut self, name: &str, transformer: Arc<dyn EnumTransformer>) {
        self.transformers.insert(name.to_string(), transformer);
    }

    pub fn get(&self, name: &str) -> Option<&dyn EnumTransformer> {
        self.transformers.get(name).map(|t| t.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.transformers.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.transformers.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

// Transformers are opaque, so two registries are equal when they expose the same names
impl PartialEq for TransformerRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.transformers.keys().eq(other.transformers.keys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct SameName;

    impl EnumTransformer for SameName {
        fn description(&self) -> &'static str {
            "maps members with identical names"
        }

        fn transform(&self, ctx: &TransformContext) -> Result<BTreeMap<String, String>, String> {
            let mut mapping = BTreeMap::new();
            for member in &ctx.source {
                if !ctx.target.contains(member) {
                    return Err(format!("no target member for {}", member));
                }
                mapping.insert(member.clone(), member.clone());
            }
            Ok(mapping)
        }
    }

    #[test]
    fn test_registry() {
        let mut registry = TransformerRegistry::new();
        assert!(registry.is_empty());

        registry.register("same", Arc::new(SameName));
        assert!(registry.contains("same"));
        assert!(!registry.contains("regex"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), vec!["same"]);

        let transformer = registry.get("same").unwrap();
        assert_eq!(transformer.description(), "maps members with identical names");

        let ctx = TransformContext {
            source: vec!["A".to_string(), "B".to_string()],
            target: vec!["B".to_string(), "A".to_string()],
            config: String::new(),
        };
        let mapping = transformer.transform(&ctx).unwrap();
        assert_eq!(mapping.get("A").map(String::as_str), Some("A"));
        assert_eq!(mapping.len(), 2);

        let ctx = TransformContext {
            source: vec!["C".to_string()],
            ..ctx
        };
        assert!(transformer.transform(&ctx).is_err());
    }

    #[test]
    fn test_equality_by_names() {
        let mut a = TransformerRegistry::new();
        let mut b = TransformerRegistry::new();
        assert_eq!(a, b);

        a.register("same", Arc::new(SameName));
        assert_ne!(a, b);

        b.register("same", Arc::new(SameName));
        assert_eq!(a, b.clone());
    }
}
