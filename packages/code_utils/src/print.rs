//! Printing sequences of scalars and containers with fixed separator and terminator characters.

use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::fmt::{self, Display};
use std::io::{self, Write};

use itertools::{Itertools, Position};

use crate::{Container, Scalar};

/// A value that the formatter can render: a [`Scalar`] or a [`Container`] of scalars.
///
/// Every [`Scalar`] is printable. Custom containers become printable by implementing this
/// trait with [`Piece::sequence()`]:
///
/// ```
/// use code_utils::{Container, Piece, Printable};
///
/// struct Pair(u8, u8);
///
/// impl Container for Pair {
///     type Element = u8;
///
///     fn elements(&self) -> impl Iterator<Item = &u8> {
///         [&self.0, &self.1].into_iter()
///     }
/// }
///
/// impl Printable for Pair {
///     fn piece(&self) -> Piece<'_> {
///         Piece::sequence(self)
///     }
/// }
///
/// assert_eq!(code_utils::format_values(' ', '\n', &[&Pair(4, 5)]), "{ 4 , 5 }\n");
/// ```
pub trait Printable {
    /// Describes how this value is rendered.
    fn piece(&self) -> Piece<'_>;
}

impl<T: Scalar> Printable for T {
    fn piece(&self) -> Piece<'_> {
        Piece::Scalar(self)
    }
}

macro_rules! impl_printable_container {
    ($($container:ty => [$($generics:tt)*]),* $(,)?) => {
        $(
            impl<$($generics)*> Printable for $container {
                fn piece(&self) -> Piece<'_> {
                    Piece::sequence(self)
                }
            }
        )*
    };
}

impl_printable_container!(
    Vec<T> => [T: Scalar],
    VecDeque<T> => [T: Scalar],
    LinkedList<T> => [T: Scalar],
    BTreeSet<T> => [T: Scalar],
    [T; N] => [T: Scalar, const N: usize],
);

/// How a [`Printable`] value is rendered.
#[non_exhaustive]
pub enum Piece<'a> {
    /// A single value, written with its [`Display`] implementation.
    Scalar(&'a dyn Display),

    /// The elements of a container, written between braces.
    Sequence(Vec<SequenceElement<'a>>),
}

impl<'a> Piece<'a> {
    /// Describes a container whose elements are scalars.
    pub fn sequence<C>(container: &'a C) -> Self
    where
        C: Container + ?Sized,
        C::Element: Scalar,
    {
        let last = container.elements().last();

        Self::Sequence(
            container
                .elements()
                .map(|element| SequenceElement {
                    value: element,
                    equals_last: last == Some(element),
                })
                .collect(),
        )
    }
}

impl fmt::Debug for Piece<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => f.debug_tuple("Scalar").field(&value.to_string()).finish(),
            Self::Sequence(elements) => f.debug_tuple("Sequence").field(elements).finish(),
        }
    }
}

/// One element of a [`Piece::Sequence`].
pub struct SequenceElement<'a> {
    value: &'a dyn Display,
    equals_last: bool,
}

impl fmt::Debug for SequenceElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceElement")
            .field("value", &self.value.to_string())
            .field("equals_last", &self.equals_last)
            .finish()
    }
}

/// Decides which container element is closed with `}` instead of `,`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum LastElement {
    /// Every element equal to the final element is followed by `}`.
    ///
    /// A container with duplicates of its final value therefore shows more than one closing
    /// brace: `[1, 3, 2, 3]` renders as `{ 1 , 3 } 2 , 3 }`.
    #[default]
    ByValue,

    /// Only the physically final element is followed by `}`.
    ByPosition,
}

/// Renders sequences of [`Printable`] values.
///
/// Each scalar is one token. A container contributes `{`, then each element followed by `,`
/// (or `}` for its last element, see [`LastElement`]). Every token is followed by the
/// separator, except the final token of the call, which is followed by the terminator. With no
/// values at all, only the terminator is written.
///
/// Containers of containers are not printable.
///
/// # Examples
///
/// ```
/// use code_utils::{Formatter, LastElement};
///
/// let formatter = Formatter::new();
/// assert_eq!(formatter.format(&[&1, &2, &3]), "1 2 3\n");
/// assert_eq!(formatter.format(&[&"sum", &vec![1, 2, 3]]), "sum { 1 , 2 , 3 }\n");
/// assert_eq!(formatter.format(&[]), "\n");
///
/// let csv = Formatter::new()
///     .with_separator(',')
///     .with_terminator(';')
///     .with_last_element(LastElement::ByPosition);
/// assert_eq!(csv.format(&[&vec![7, 7]]), "{,7,,,7,};");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Formatter {
    separator: char,
    terminator: char,
    last_element: LastElement,
}

impl Formatter {
    /// Creates a formatter that separates tokens with a space and ends with a newline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            separator: ' ',
            terminator: '\n',
            last_element: LastElement::ByValue,
        }
    }

    /// Sets the character written after every token except the last.
    #[must_use]
    pub const fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the character written after the last token.
    #[must_use]
    pub const fn with_terminator(mut self, terminator: char) -> Self {
        self.terminator = terminator;
        self
    }

    /// Sets how the last element of each container is detected.
    #[must_use]
    pub const fn with_last_element(mut self, last_element: LastElement) -> Self {
        self.last_element = last_element;
        self
    }

    /// Renders the values into a string.
    #[must_use]
    pub fn format(&self, values: &[&dyn Printable]) -> String {
        self.rendering(values).to_string()
    }

    /// Renders the values into `writer`.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `writer`.
    pub fn write_to<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        values: &[&dyn Printable],
    ) -> io::Result<()> {
        write!(writer, "{}", self.rendering(values))
    }

    /// Renders the values to standard output.
    ///
    /// # Panics
    ///
    /// Panics if writing to standard output fails.
    #[cfg_attr(test, mutants::skip)] // Writes to stdout, nothing to observe.
    pub fn print(&self, values: &[&dyn Printable]) {
        print!("{}", self.rendering(values));
    }

    fn rendering<'a>(&'a self, values: &'a [&'a dyn Printable]) -> Rendering<'a> {
        Rendering {
            formatter: self,
            values,
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the values into a string, see [`Formatter`].
#[must_use]
pub fn format_values(separator: char, terminator: char, values: &[&dyn Printable]) -> String {
    Formatter::new()
        .with_separator(separator)
        .with_terminator(terminator)
        .format(values)
}

/// Renders the values into `writer`, see [`Formatter`].
///
/// # Errors
///
/// Returns any error reported by `writer`.
pub fn write_values<W: Write + ?Sized>(
    writer: &mut W,
    separator: char,
    terminator: char,
    values: &[&dyn Printable],
) -> io::Result<()> {
    Formatter::new()
        .with_separator(separator)
        .with_terminator(terminator)
        .write_to(writer, values)
}

/// Renders the values to standard output, see [`Formatter`].
///
/// # Panics
///
/// Panics if writing to standard output fails.
pub fn print(separator: char, terminator: char, values: &[&dyn Printable]) {
    Formatter::new()
        .with_separator(separator)
        .with_terminator(terminator)
        .print(values);
}

/// Used by the printing macros to coerce each argument into a trait object.
#[doc(hidden)]
pub fn as_printable<T: Printable>(value: &T) -> &dyn Printable {
    value
}

enum Token<'a> {
    Value(&'a dyn Display),
    Open,
    Comma,
    Close,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => value.fmt(f),
            Self::Open => f.write_str("{"),
            Self::Comma => f.write_str(","),
            Self::Close => f.write_str("}"),
        }
    }
}

struct Rendering<'a> {
    formatter: &'a Formatter,
    values: &'a [&'a dyn Printable],
}

impl Rendering<'_> {
    fn tokens(&self) -> Vec<Token<'_>> {
        let mut tokens = Vec::new();

        for value in self.values {
            match value.piece() {
                Piece::Scalar(scalar) => tokens.push(Token::Value(scalar)),
                Piece::Sequence(elements) => {
                    tokens.push(Token::Open);

                    if elements.is_empty() {
                        tokens.push(Token::Close);
                    }

                    for (position, element) in elements.into_iter().with_position() {
                        let closes = match self.formatter.last_element {
                            LastElement::ByValue => element.equals_last,
                            LastElement::ByPosition => {
                                matches!(position, Position::Last | Position::Only)
                            }
                        };

                        tokens.push(Token::Value(element.value));
                        tokens.push(if closes { Token::Close } else { Token::Comma });
                    }
                }
            }
        }

        tokens
    }
}

impl Display for Rendering<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self.tokens();

        if tokens.is_empty() {
            return write!(f, "{}", self.formatter.terminator);
        }

        for (position, token) in tokens.into_iter().with_position() {
            let delimiter = match position {
                Position::Last | Position::Only => self.formatter.terminator,
                Position::First | Position::Middle => self.formatter.separator,
            };

            write!(f, "{token}{delimiter}")?;
        }

        Ok(())
    }
}
