pub mod composer;
pub mod engine;
pub mod pipeline;
pub mod serializer;

pub use crate::domain::model::{AnimalRecord, Lookup, RenderedPage};
pub use crate::domain::ports::{
    AnimalLookup, AnimalSource, ConfigProvider, NamePrompt, Pipeline, Storage,
};
pub use crate::utils::error::Result;
