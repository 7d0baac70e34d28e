//! Element Model
//!
//! Every input record is classified into exactly one element kind before any
//! sorting or counting happens. The kind travels alongside the elements so the
//! reporter never has to guess it from the values.

use serde::Serialize;
use std::fmt;

/// The kind of elements being sorted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementKind {
    /// Signed 64-bit integers (`-dataType long`)
    Integer,
    /// Whole input lines (`-dataType line`)
    Line,
    /// Whitespace-separated words (`-dataType word`)
    #[default]
    Word,
}

impl ElementKind {
    /// Plural label used in report headers
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Integer => "numbers",
            ElementKind::Line => "lines",
            ElementKind::Word => "words",
        }
    }

    /// Name of the data type as given on the command line
    pub fn type_name(self) -> &'static str {
        match self {
            ElementKind::Integer => "long",
            ElementKind::Line => "line",
            ElementKind::Word => "word",
        }
    }
}

impl std::str::FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(ElementKind::Integer),
            "line" => Ok(ElementKind::Line),
            "word" => Ok(ElementKind::Word),
            _ => Err(format!("Unknown data type: {}", s)),
        }
    }
}

/// Report mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortingType {
    #[default]
    Natural,
    ByCount,
}

impl std::str::FromStr for SortingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural" => Ok(SortingType::Natural),
            "byCount" => Ok(SortingType::ByCount),
            _ => Err(format!("Unknown sorting type: {}", s)),
        }
    }
}

/// A single classified input value.
///
/// Ordering is only meaningful between elements of the same kind: integers
/// compare numerically, lines and words by code point.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum Element {
    Integer(i64),
    Line(String),
    Word(String),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Integer(_) => ElementKind::Integer,
            Element::Line(_) => ElementKind::Line,
            Element::Word(_) => ElementKind::Word,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Integer(n) => write!(f, "{}", n),
            Element::Line(s) | Element::Word(s) => f.write_str(s),
        }
    }
}

/// Classified input: the elements in arrival order plus their kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub kind: ElementKind,
    pub elements: Vec<Element>,
}

impl Collection {
    /// Create an empty collection of the given kind
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            elements: Vec::new(),
        }
    }

    /// Add an element, which must match the collection kind
    pub fn push(&mut self, element: Element) {
        debug_assert_eq!(element.kind(), self.kind);
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
