//! Reference dataset adapters.

mod yaml;

pub use yaml::{
    YamlReferenceSource, STANDARD_FACTOR_COUNT, STANDARD_ITEM_COUNT, STANDARD_QUESTION_COUNT,
};
