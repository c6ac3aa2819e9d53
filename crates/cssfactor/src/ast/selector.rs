//! Selector type definitions.

/// A complete selector (e.g. `ul.nav > li:first-child a`).
///
/// Each simple selector is paired with the combinator that links it to the
/// *next* one; the last pair always carries [`Combinator::None`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Selector {
    /// Chain of simple selectors, read left to right.
    pub parts: Vec<(SimpleSelector, Combinator)>,
}

impl Selector {
    /// Create a selector from a single simple selector.
    pub fn simple(part: SimpleSelector) -> Self {
        Self {
            parts: vec![(part, Combinator::None)],
        }
    }

    /// Create a type selector (e.g. `a`).
    pub fn element(name: impl Into<String>) -> Self {
        Self::simple(SimpleSelector::element(name))
    }

    /// Create a class selector (e.g. `.primary`).
    pub fn class(name: impl Into<String>) -> Self {
        Self::simple(SimpleSelector::new().with(Detail::Class(name.into())))
    }

    /// Create an ID selector (e.g. `#submit`).
    pub fn id(name: impl Into<String>) -> Self {
        Self::simple(SimpleSelector::new().with(Detail::Id(name.into())))
    }

    /// Append `part`, linked to the current last part by `combinator`.
    pub fn then(mut self, combinator: Combinator, part: SimpleSelector) -> Self {
        if let Some(last) = self.parts.last_mut() {
            last.1 = combinator;
        }
        self.parts.push((part, Combinator::None));
        self
    }

    /// Get the rightmost (subject) simple selector.
    pub fn subject(&self) -> Option<&SimpleSelector> {
        self.parts.last().map(|(part, _)| part)
    }
}

/// A simple selector: optional element name plus refinements
/// (e.g. `input[type="text"]:focus`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SimpleSelector {
    /// Element name, `*` for the universal selector.
    pub element_name: Option<String>,
    /// Refinements in source order.
    pub details: Vec<Detail>,
}

impl SimpleSelector {
    /// Create an empty simple selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element-only simple selector.
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            element_name: Some(name.into()),
            details: vec![],
        }
    }

    /// Create a universal simple selector.
    pub fn universal() -> Self {
        Self::element("*")
    }

    /// Add a detail.
    pub fn with(mut self, detail: Detail) -> Self {
        self.details.push(detail);
        self
    }

    /// Whether there is nothing in this simple selector.
    pub fn is_empty(&self) -> bool {
        self.element_name.is_none() && self.details.is_empty()
    }
}

/// Relationship between a simple selector and the next one in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Combinator {
    /// Whitespace: matches any descendant.
    Descendant,
    /// `>`: matches direct children only.
    Child,
    /// `+`: matches the immediately following sibling.
    Adjacent,
    /// `~`: matches any following sibling.
    Sibling,
    /// End of the chain.
    #[default]
    None,
}

impl Combinator {
    /// The literal text placed between two simple selectors.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => " > ",
            Self::Adjacent => " + ",
            Self::Sibling => " ~ ",
            Self::None => "",
        }
    }
}

/// A selector refinement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Detail {
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// `[attr]`
    Attrib(String),
    /// `[attr="value"]`
    AttribEq(String, String),
    /// `[attr~="value"]`
    AttribInc(String, String),
    /// `[attr|="value"]`
    AttribDM(String, String),
    /// `:name`
    Pseudo(String),
    /// `::name`
    PseudoElement(String),
    /// `:name(argument)`, the argument kept as normalized source text.
    PseudoFunc(String, String),
}
