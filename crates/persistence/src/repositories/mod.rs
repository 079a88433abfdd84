//! Repository implementations for database operations.

pub mod category;
pub mod deity;
pub mod kalam;
pub mod language;
pub mod mantra;
pub mod recitation;
pub mod translation;

pub use category::CategoryRepository;
pub use deity::{DeityRepository, DeityUpdate};
pub use kalam::{KalamRepository, TimeRangeRepository};
pub use language::{LanguageInput, LanguageRepository, LanguageUpdate};
pub use mantra::{MantraInput, MantraRepository, MantraUpdate};
pub use recitation::{RecitationCountRepository, RecitationTimeRepository};
pub use translation::TranslationRepository;
