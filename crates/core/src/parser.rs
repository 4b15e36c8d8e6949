//! Front-ends that wire keyword declarations to destinations.
//!
//! [`ArgumentParser`] binds keywords to fields of a result record and is
//! built once, then reused for any number of parses. [`BorrowedParser`]
//! binds keywords to caller-owned variables for a single parse.

use std::borrow::Cow;
use std::fmt;

use crate::error::BindError;
use crate::outcome::ParseOutcome;
use crate::registry::ActionMap;
use crate::session::{Destinations, Session};
use crate::target::{Bindable, Target};

/// Resolves one keyword's field on a concrete result.
trait Action<R>: Send + Sync {
    fn resolve<'r>(&self, result: &'r mut R) -> Target<'r>;
}

struct Field<R, T> {
    select: fn(&mut R) -> &mut T,
}

impl<R, T: Bindable + 'static> Action<R> for Field<R, T> {
    fn resolve<'r>(&self, result: &'r mut R) -> Target<'r> {
        (self.select)(result).target()
    }
}

/// A keyword parser producing values of type `R`.
///
/// ```ignore
/// #[derive(Default)]
/// struct Install {
///     targets: Vec<String>,
///     destination: String,
///     optional: bool,
/// }
///
/// let parser = ArgumentParser::<Install>::new()
///     .bind("TARGETS", |r| &mut r.targets)
///     .bind("DESTINATION", |r| &mut r.destination)
///     .bind("OPTIONAL", |r| &mut r.optional);
///
/// let (install, outcome) = parser.parse(["TARGETS", "app", "DESTINATION", "bin"]);
/// ```
pub struct ArgumentParser<R> {
    bindings: ActionMap<Box<dyn Action<R>>>,
}

impl<R: 'static> ArgumentParser<R> {
    pub fn new() -> Self {
        ArgumentParser {
            bindings: ActionMap::new(),
        }
    }

    /// Bind `name` to the field chosen by `field`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already bound. Declarations are static, so a
    /// duplicate is a defect in the declaring code.
    pub fn bind<T>(mut self, name: &'static str, field: fn(&mut R) -> &mut T) -> Self
    where
        T: Bindable + 'static,
    {
        if let Err(err) = self.try_bind(name, field) {
            panic!("{}", err);
        }
        self
    }

    /// Fallible form of [`bind`](Self::bind) for keyword names that are not
    /// known until runtime.
    pub fn try_bind<T>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        field: fn(&mut R) -> &mut T,
    ) -> Result<&mut Self, BindError>
    where
        T: Bindable + 'static,
    {
        let name = name.into();
        if !self
            .bindings
            .emplace(name.clone(), Box::new(Field { select: field }))
        {
            return Err(BindError::DuplicateKeyword { keyword: name });
        }
        Ok(self)
    }

    /// Parse `tokens` into an existing result. Fields whose keywords do not
    /// appear keep their current values.
    pub fn parse_into<I>(&self, result: &mut R, tokens: I) -> ParseOutcome
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut attached = Attached {
            bindings: &self.bindings,
            result,
        };
        Session::new().parse(&mut attached, tokens)
    }

    /// Parse `tokens` into a fresh default result.
    pub fn parse<I>(&self, tokens: I) -> (R, ParseOutcome)
    where
        R: Default,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut result = R::default();
        let outcome = self.parse_into(&mut result, tokens);
        (result, outcome)
    }
}

impl<R> ArgumentParser<R> {
    /// Bound keyword names in declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> + '_ {
        self.bindings.keywords()
    }
}

impl<R: 'static> Default for ArgumentParser<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for ArgumentParser<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentParser")
            .field("keywords", &self.keywords().collect::<Vec<_>>())
            .finish()
    }
}

/// A parser's bindings attached to one result for the length of a parse.
struct Attached<'p, 'r, R> {
    bindings: &'p ActionMap<Box<dyn Action<R>>>,
    result: &'r mut R,
}

impl<R> Destinations for Attached<'_, '_, R> {
    fn lookup(&self, token: &str) -> Option<usize> {
        self.bindings.find(token).map(|(position, _)| position)
    }

    fn keyword(&self, position: usize) -> &Cow<'static, str> {
        self.bindings.keyword(position)
    }

    fn target(&mut self, position: usize) -> Target<'_> {
        self.bindings.action(position).resolve(self.result)
    }
}

/// A keyword parser writing into variables it borrows.
///
/// The borrows are held until [`parse`](Self::parse) returns, so the bound
/// variables can be read right after the call.
#[derive(Default)]
pub struct BorrowedParser<'a> {
    bindings: ActionMap<&'a mut (dyn Bindable + 'a)>,
}

impl<'a> BorrowedParser<'a> {
    pub fn new() -> Self {
        BorrowedParser {
            bindings: ActionMap::new(),
        }
    }

    /// Bind `name` to `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already bound.
    pub fn bind<T>(mut self, name: &'static str, slot: &'a mut T) -> Self
    where
        T: Bindable + 'a,
    {
        if let Err(err) = self.try_bind(name, slot) {
            panic!("{}", err);
        }
        self
    }

    pub fn try_bind<T>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        slot: &'a mut T,
    ) -> Result<&mut Self, BindError>
    where
        T: Bindable + 'a,
    {
        let name = name.into();
        if !self.bindings.emplace(name.clone(), slot) {
            return Err(BindError::DuplicateKeyword { keyword: name });
        }
        Ok(self)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> + use<'_, 'a> {
        self.bindings.keywords()
    }

    /// Parse `tokens` into the bound variables, releasing them afterwards.
    pub fn parse<I>(mut self, tokens: I) -> ParseOutcome
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Session::new().parse(&mut self.bindings, tokens)
    }
}

impl<'a> Destinations for ActionMap<&'a mut (dyn Bindable + 'a)> {
    fn lookup(&self, token: &str) -> Option<usize> {
        self.find(token).map(|(position, _)| position)
    }

    fn keyword(&self, position: usize) -> &Cow<'static, str> {
        ActionMap::keyword(self, position)
    }

    fn target(&mut self, position: usize) -> Target<'_> {
        self.action_mut(position).target()
    }
}
