pub mod common;
pub mod declarations;

pub use common::{detect_language, is_supported_extension};
pub use declarations::{Declaration, DeclarationExtractor, RegexDeclarationExtractor};
