pub mod ids;
pub mod json_body;

pub use ids::{PlayerIdPath, QuestionIdPath};
pub use json_body::JsonBody;
