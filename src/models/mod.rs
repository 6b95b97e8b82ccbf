pub mod note;
pub mod record;
pub mod settings;
