use crate::domain::detection::matcher::TermMatcher;

/// Composition root of the detection engine.
///
/// Repositories hold the taxonomy and catalog loaded at startup and are
/// never mutated afterwards, so a `Service` can be cloned into every request
/// handler without locking.
#[derive(Clone)]
pub struct Service<A, P, T> {
    pub(crate) allergen_repository: A,
    pub(crate) product_repository: P,
    pub(crate) text_extractor: T,
    pub(crate) term_matcher: TermMatcher,
}

impl<A, P, T> Service<A, P, T> {
    pub fn new(
        allergen_repository: A,
        product_repository: P,
        text_extractor: T,
        term_matcher: TermMatcher,
    ) -> Self {
        Self {
            allergen_repository,
            product_repository,
            text_extractor,
            term_matcher,
        }
    }
}
