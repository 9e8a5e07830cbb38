// mod.rs - Generate configuration module

pub mod generate;
pub mod transformers;

// Re-export main types for convenience
pub use generate::{
    GenerateConfig, RawLines, COMMAND_LINE_LOCATION, DEFAULT_BUILD_TAGS,
    DEFAULT_OUTPUT_CONSTRAINT, DEFAULT_WORKING_DIR,
};
pub use transformers::{EnumTransformer, TransformContext, TransformerRegistry};
