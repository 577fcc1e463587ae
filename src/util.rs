//! Internal utilities, not part of the API

pub(crate) mod casting;
pub(crate) mod doc_macros;

// re-exported by crate root
#[doc(hidden)]
pub mod __testing;
