pub mod click;
pub mod exists;
pub mod screenshot;
pub mod search;
pub mod text;
pub mod r#type;
pub mod utils;
