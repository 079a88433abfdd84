//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod category;
pub mod deity;
pub mod kalam;
pub mod language;
pub mod mantra;
pub mod recitation;
pub mod translation;

pub use category::CategoryEntity;
pub use deity::DeityEntity;
pub use kalam::{KalamEntity, TimeRangeEntity};
pub use language::LanguageEntity;
pub use mantra::{
    MantraEntity, MantraWithRelationsEntity, PopularMantraEntity, RelatedMantraEntity,
};
pub use recitation::{RecitationCountEntity, RecitationTimeEntity};
pub use translation::TranslationWithLanguageEntity;
