//! Domain models for the Dhivyuga catalog.

pub mod autocomplete;
pub mod category;
pub mod dashboard;
pub mod deity;
pub mod filters;
pub mod kalam;
pub mod language;
pub mod mantra;
pub mod recitation;
pub mod translation;

pub use autocomplete::{AutocompleteQuery, AutocompleteResponse, Suggestion, SuggestionType};
pub use category::{Category, CreateCategoryRequest, ListCategoriesResponse, UpdateCategoryRequest};
pub use dashboard::{DashboardStats, PopularMantra, SeedResponse};
pub use deity::{CreateDeityRequest, Deity, ListDeitiesResponse, UpdateDeityRequest};
pub use filters::FiltersResponse;
pub use kalam::{
    CreateKalamRequest, CreateTimeRangeRequest, Kalam, ListKalamsResponse, ListTimeRangesResponse,
    TimeRange, UpdateKalamRequest, UpdateTimeRangeRequest,
};
pub use language::{
    CreateLanguageRequest, Language, LanguageResponse, ListLanguagesResponse, TextDirection,
    UpdateLanguageRequest,
};
pub use mantra::{
    AdminMantraListResponse, CategorySummary, CreateMantraRequest, DeitySummary, KalamSummary,
    Mantra, MantraDetailResponse, MantraFilters, MantraWithRelations, RecitationCountSummary,
    RecitationTimeSummary, RelatedMantra, SearchQuery, SearchResponse, TimeRangeSummary,
    TrendingResponse, UpdateMantraRequest, ViewResponse,
};
pub use recitation::{
    CreateRecitationCountRequest, CreateRecitationTimeRequest, ListRecitationCountsResponse,
    ListRecitationTimesResponse, RecitationCount, RecitationTime, UpdateRecitationCountRequest,
    UpdateRecitationTimeRequest,
};
pub use translation::{
    CreateTranslationRequest, LanguageSummary, ListTranslationsResponse, Translation,
    TranslationAction, TranslationContent, TranslationDeletedResponse, TranslationDraft,
    SuccessResponse, TranslationResponse, TranslationWithLanguage, UpdateTranslationRequest,
};
