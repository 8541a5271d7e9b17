//! Custom request extractors that reject with `AppError`.

mod path_id;
mod validated_json;
mod validated_query;

pub use path_id::PathId;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
