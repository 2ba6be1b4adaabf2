// Spanish language constants shared by the syllable engine and the
// form catalog.

pub(crate) mod constants;
