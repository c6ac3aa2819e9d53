//! Declarations and property values.

/// A `property: values [!important]` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    /// The property name as written.
    pub property: String,
    /// The value tokens, whitespace removed.
    pub values: Vec<Value>,
    /// Whether the declaration carries `!important`.
    pub important: bool,
}

impl Declaration {
    /// Create a declaration.
    pub fn new(property: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            property: property.into(),
            values,
            important: false,
        }
    }

    /// Mark the declaration `!important`.
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }
}

/// A single component of a property value.
///
/// Literal variants keep the exact source text (including units, signs and
/// quotes) so rendering reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// `12`, `-.5`
    Number(String),
    /// `50%`
    Percentage(String),
    /// `10px`, `2rem`
    Length(String),
    /// `1.5em`
    Ems(String),
    /// `2ex`
    Exs(String),
    /// `90deg`
    Angle(String),
    /// `200ms`
    Time(String),
    /// `3khz`
    Freq(String),
    /// `"text"` with its quotes.
    StringV(String),
    /// `red`, `--token`
    Ident(String),
    /// `url(...)`
    Uri(String),
    /// `#fff`
    HexColour(String),
    /// `/` separator.
    Slash,
    /// `,` separator.
    Comma,
    /// `+`, `-` or `*` between the arguments of a function such as `calc()`.
    Operator(String),
    /// `name(values...)`
    Function { name: String, values: Vec<Value> },
}

impl Value {
    /// Create an identifier value.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Whether this value is a separator rather than a component.
    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Slash | Self::Comma)
    }
}
