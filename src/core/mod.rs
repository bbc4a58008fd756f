pub mod query;

pub use query::{RecipeQuery, get_one};
