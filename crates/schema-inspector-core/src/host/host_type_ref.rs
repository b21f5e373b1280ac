use crate::host::HostTypeRefParseError;
use crate::host::WrapperTypes;
use std::str::FromStr;

type Result<T> = std::result::Result<T, HostTypeRefParseError>;

static OPAQUE: HostTypeRef = HostTypeRef::Opaque;

/// A reference to a host type as it appears in a signature: a controller
/// method's return type, or the declared type of a host type member.
///
/// `HostTypeRef`s are written (and parsed) using Rust type syntax:
///
/// ```
/// use schema_inspector_core::host::HostTypeRef;
///
/// let type_ref: HostTypeRef = "Vec<Option<library::Book>>".parse().unwrap();
/// assert_eq!(
///     type_ref,
///     HostTypeRef::list(HostTypeRef::optional(HostTypeRef::named("library::Book"))),
/// );
/// assert_eq!(type_ref.to_string(), "Vec<Option<library::Book>>");
/// ```
///
/// `_` denotes an [`Opaque`](HostTypeRef::Opaque) type whose shape can't be
/// inspected (think `serde_json::Value` or a type-erased `Box<dyn Any>`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum HostTypeRef {
    List(Box<HostTypeRef>),
    Named {
        generics: Vec<HostTypeRef>,
        path: String,
    },
    Opaque,
    Optional(Box<HostTypeRef>),
}
impl HostTypeRef {
    /// Strips every layer of list, optional, and
    /// [wrapper type](WrapperTypes) from this reference and returns the
    /// element type underneath.
    ///
    /// A wrapper without type arguments can't be seen through and is
    /// treated as [`Opaque`](HostTypeRef::Opaque).
    pub fn element_type<'a>(&'a self, wrappers: &WrapperTypes) -> &'a HostTypeRef {
        match self {
            Self::List(inner) | Self::Optional(inner) =>
                inner.element_type(wrappers),
            Self::Named { generics, path } if wrappers.is_wrapper(path) =>
                match generics.first() {
                    Some(payload) => payload.element_type(wrappers),
                    None => &OPAQUE,
                },
            Self::Named { .. } | Self::Opaque => self,
        }
    }

    pub fn generic(
        path: impl Into<String>,
        generics: impl IntoIterator<Item = HostTypeRef>,
    ) -> Self {
        Self::Named {
            generics: generics.into_iter().collect(),
            path: path.into(),
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque)
    }

    pub fn list(inner: HostTypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn named(path: impl Into<String>) -> Self {
        Self::Named {
            generics: vec![],
            path: path.into(),
        }
    }

    pub fn optional(inner: HostTypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// The path of a [`Named`](HostTypeRef::Named) reference.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Named { path, .. } => Some(path.as_str()),
            Self::List(_) | Self::Opaque | Self::Optional(_) => None,
        }
    }
}

impl std::fmt::Display for HostTypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "Vec<{inner}>"),
            Self::Optional(inner) => write!(f, "Option<{inner}>"),
            Self::Opaque => write!(f, "_"),
            Self::Named { generics, path } => {
                write!(f, "{path}")?;
                if !generics.is_empty() {
                    write!(f, "<")?;
                    for (idx, generic) in generics.iter().enumerate() {
                        if idx > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{generic}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            },
        }
    }
}

impl From<HostTypeRef> for String {
    fn from(type_ref: HostTypeRef) -> Self {
        type_ref.to_string()
    }
}

impl FromStr for HostTypeRef {
    type Err = HostTypeRefParseError;

    fn from_str(input: &str) -> Result<Self> {
        let mut parser = HostTypeRefParser {
            chars: input.char_indices().peekable(),
            input,
        };
        let type_ref = parser.parse_type_ref()?;
        parser.skip_whitespace();
        match parser.chars.next() {
            None => Ok(type_ref),
            Some((offset, found)) => Err(HostTypeRefParseError::UnexpectedChar {
                found,
                input: input.to_string(),
                offset,
            }),
        }
    }
}

impl TryFrom<String> for HostTypeRef {
    type Error = HostTypeRefParseError;

    fn try_from(input: String) -> Result<Self> {
        input.parse()
    }
}

struct HostTypeRefParser<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    input: &'a str,
}
impl<'a> HostTypeRefParser<'a> {
    fn parse_path(&mut self) -> Result<String> {
        self.skip_whitespace();
        let mut path = String::new();
        while let Some((offset, ch)) = self.chars.peek().copied() {
            if ch.is_alphanumeric() || ch == '_' {
                path.push(ch);
                self.chars.next();
            } else if ch == ':' {
                self.chars.next();
                match self.chars.next() {
                    Some((_, ':')) => path.push_str("::"),
                    Some((offset, found)) => return Err(self.unexpected(found, offset)),
                    None => return Err(self.unexpected_end()),
                }
            } else if path.is_empty() {
                return Err(self.unexpected(ch, offset));
            } else {
                break;
            }
        }

        if path.is_empty() {
            return Err(self.unexpected_end());
        }
        if path.starts_with("::") || path.ends_with("::") {
            return Err(HostTypeRefParseError::EmptyPath {
                input: self.input.to_string(),
            });
        }
        Ok(path)
    }

    fn parse_type_ref(&mut self) -> Result<HostTypeRef> {
        let path = self.parse_path()?;
        if path == "_" {
            return Ok(HostTypeRef::Opaque);
        }

        self.skip_whitespace();
        let mut generics = vec![];
        if let Some((_, '<')) = self.chars.peek() {
            self.chars.next();
            loop {
                generics.push(self.parse_type_ref()?);
                self.skip_whitespace();
                match self.chars.next() {
                    Some((_, ',')) => continue,
                    Some((_, '>')) => break,
                    Some((offset, found)) => return Err(self.unexpected(found, offset)),
                    None => return Err(self.unexpected_end()),
                }
            }
        }

        match path.as_str() {
            "Vec" | "Option" => {
                if generics.len() != 1 {
                    return Err(HostTypeRefParseError::InvalidWrapperArity {
                        input: self.input.to_string(),
                        wrapper: path,
                    });
                }
                let inner = generics.remove(0);
                Ok(if path == "Vec" {
                    HostTypeRef::list(inner)
                } else {
                    HostTypeRef::optional(inner)
                })
            },
            _ => Ok(HostTypeRef::Named { generics, path }),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some((_, ch)) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.chars.next();
        }
    }

    fn unexpected(&self, found: char, offset: usize) -> HostTypeRefParseError {
        HostTypeRefParseError::UnexpectedChar {
            found,
            input: self.input.to_string(),
            offset,
        }
    }

    fn unexpected_end(&self) -> HostTypeRefParseError {
        HostTypeRefParseError::UnexpectedEnd {
            input: self.input.to_string(),
        }
    }
}
