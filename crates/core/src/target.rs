//! Binding targets: the closed set of destination shapes a keyword can fill.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

/// A mutable view of one destination, tagged with its shape.
///
/// | variant          | on keyword                  | on plain token          |
/// |------------------|-----------------------------|-------------------------|
/// | `Flag`           | set `true`, close receiver  | not consumed            |
/// | `Scalar`         | await exactly one value     | store, close receiver   |
/// | `OptionalScalar` | await one value, optional   | store, close receiver   |
/// | `List`           | collect, none required       | append                  |
/// | `NonEmptyList`   | collect, one required       | append                  |
/// | `Groups`         | start a new inner list      | append to newest group  |
pub enum Target<'a> {
    Flag(&'a mut bool),
    Scalar(&'a mut String),
    OptionalScalar(&'a mut String),
    List(&'a mut Vec<String>),
    NonEmptyList(&'a mut Vec<String>),
    Groups(&'a mut Vec<Vec<String>>),
}

impl Target<'_> {
    /// Shape name used in logs and schema files.
    pub fn shape(&self) -> &'static str {
        match self {
            Target::Flag(_) => "flag",
            Target::Scalar(_) => "value",
            Target::OptionalScalar(_) => "optional-value",
            Target::List(_) => "list",
            Target::NonEmptyList(_) => "non-empty-list",
            Target::Groups(_) => "groups",
        }
    }
}

/// A field a keyword can be bound to.
///
/// Resolving a target may have a side effect that records presence (see the
/// `Option` impls), so it is only done when the field is actually touched by
/// the keyword or its values.
pub trait Bindable {
    fn target(&mut self) -> Target<'_>;
}

impl Bindable for bool {
    fn target(&mut self) -> Target<'_> {
        Target::Flag(self)
    }
}

impl Bindable for String {
    fn target(&mut self) -> Target<'_> {
        Target::Scalar(self)
    }
}

impl Bindable for Maybe<String> {
    fn target(&mut self) -> Target<'_> {
        Target::OptionalScalar(&mut self.0)
    }
}

impl Bindable for Vec<String> {
    fn target(&mut self) -> Target<'_> {
        Target::List(self)
    }
}

impl Bindable for NonEmpty<Vec<String>> {
    fn target(&mut self) -> Target<'_> {
        Target::NonEmptyList(&mut self.0)
    }
}

impl Bindable for Vec<Vec<String>> {
    fn target(&mut self) -> Target<'_> {
        Target::Groups(self)
    }
}

// Presence wrappers: `Some(default)` on first sight, then the inner shape.
macro_rules! bind_presence {
    ($($inner:ty),* $(,)?) => {
        $(
            impl Bindable for Option<$inner> {
                fn target(&mut self) -> Target<'_> {
                    self.get_or_insert_with(Default::default).target()
                }
            }
        )*
    };
}

bind_presence!(
    bool,
    String,
    Maybe<String>,
    Vec<String>,
    NonEmpty<Vec<String>>,
    Vec<Vec<String>>,
);

/// A value that may be left empty after its keyword without a report.
///
/// Wrap it in `Option` to also record whether the keyword appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Maybe<T>(pub T);

impl<T> Maybe<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Maybe<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Maybe<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Maybe(value)
    }
}

/// A list that needs at least one value after its keyword.
///
/// Dereferences to the wrapped collection; the requirement is only checked
/// while parsing and reported as a missing value, never enforced on the type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NonEmpty<T>(pub T);

impl<T> NonEmpty<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for NonEmpty<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for NonEmpty<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for NonEmpty<T> {
    fn from(value: T) -> Self {
        NonEmpty(value)
    }
}
