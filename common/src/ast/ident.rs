use std::rc::Rc;

/// A named variable, function, or scope reference.
///
/// `fname` is shared (via `Rc<str>`) by every identifier parsed out of the
/// same token stream rather than copied per-node — see the "global mutable
/// file-name pointer" design note.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub image: String,
    pub fname: Rc<str>,
    pub line: u32,
}

impl Ident {
    pub fn new(image: impl Into<String>, fname: Rc<str>, line: u32) -> Self {
        Ident {
            image: image.into(),
            fname,
            line,
        }
    }
}

/// An ordered, owned list of identifiers (function parameters, mostly).
pub type IdentList = Vec<Ident>;
