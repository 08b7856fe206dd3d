/// Urlify is a single-purpose library: it turns arbitrary human-entered text
/// into URL-safe slugs. It case-folds, strips, collapses, truncates and trims,
/// nothing else. There is no transliteration and no uniqueness bookkeeping;
/// callers append their own disambiguators when collisions matter.
pub mod slug;

pub use slug::urlify;
