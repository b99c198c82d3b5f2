pub mod gemini;
pub mod schema;

pub use gemini::{GeneratedImage, Gemini};
pub use schema::ResponseSchema;
