use super::interner::StrKey;

/// Term kinds in a triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    Iri,
    Blank,
    Literal,
}

/// An interned RDF term
///
/// Terms are only meaningful together with the store that interned them:
/// comparing terms from two different graphs compares unrelated keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term {
    pub kind: TermKind,
    pub value: StrKey,
    pub datatype: Option<StrKey>,
    pub lang: Option<StrKey>,
}

impl Term {
    pub fn iri(value: StrKey) -> Self {
        Self {
            kind: TermKind::Iri,
            value,
            datatype: None,
            lang: None,
        }
    }

    pub fn blank(value: StrKey) -> Self {
        Self {
            kind: TermKind::Blank,
            value,
            datatype: None,
            lang: None,
        }
    }

    pub fn literal(value: StrKey, datatype: Option<StrKey>, lang: Option<StrKey>) -> Self {
        Self {
            kind: TermKind::Literal,
            value,
            datatype,
            lang,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.kind == TermKind::Literal
    }
}

/// A literal value as written in a triple document, before interning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralValue {
    pub value: String,
    pub datatype: Option<String>,
    pub lang: Option<String>,
}

impl LiteralValue {
    pub fn plain(value: &str) -> Self {
        Self {
            value: value.to_string(),
            datatype: None,
            lang: None,
        }
    }

    pub fn typed(value: &str, datatype: &str) -> Self {
        Self {
            value: value.to_string(),
            datatype: Some(datatype.to_string()),
            lang: None,
        }
    }
}
