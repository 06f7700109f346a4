pub mod hangul;
pub mod lemma;
pub mod lexicon;
pub mod lookup;
pub mod tag;

pub use hangul::{compose, decompose, HangulError};
pub use lemma::{
    conjugate, lemma_candidates, lemma_candidates_chat, Lemma, Lemmatizer, PairPredefined,
    Predicator,
};
pub use lexicon::{Lexicon, LexiconError};
pub use lookup::{remove_sub, Eojeol, LookupError, LrLookup, Template, TemplateLookup};
pub use tag::Pos;
