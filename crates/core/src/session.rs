//! Parse session: the per-call token consumer.
//!
//! A session walks the tokens once. Keywords switch the open receiver,
//! plain tokens are routed to whatever receiver is open. Cardinality checks
//! are deferred until the receiver closes (next keyword or end of input), so
//! lists take an unbounded run of values without a terminator.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::outcome::ParseOutcome;
use crate::target::Target;

/// The bound destinations a session routes tokens into.
///
/// Positions are stable for the lifetime of the session; resolving the same
/// position twice yields the same field.
pub trait Destinations {
    /// Position of the keyword named exactly `token`, if any.
    fn lookup(&self, token: &str) -> Option<usize>;

    fn keyword(&self, position: usize) -> &Cow<'static, str>;

    fn target(&mut self, position: usize) -> Target<'_>;
}

/// Which destination currently accepts plain tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Receiver {
    #[default]
    Idle,
    /// A scalar waiting for exactly one value.
    AwaitingValue { position: usize, required: bool },
    /// A list (or the newest group) taking zero or more values. `pending`
    /// is set while a non-empty list has received nothing yet.
    Collecting { position: usize, pending: bool },
}

/// Mutable state of one parse call. Created per call and consumed by
/// [`Session::finish`].
#[derive(Debug, Default)]
pub struct Session {
    outcome: ParseOutcome,
    receiver: Receiver,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn parse<D, I>(mut self, destinations: &mut D, tokens: I) -> ParseOutcome
    where
        D: Destinations + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            self.consume(destinations, token.as_ref());
        }
        self.finish(&*destinations)
    }

    pub fn consume<D>(&mut self, destinations: &mut D, token: &str)
    where
        D: Destinations + ?Sized,
    {
        if let Some(position) = destinations.lookup(token) {
            self.close(&*destinations);
            self.open(destinations, position);
            return;
        }

        match self.receiver {
            Receiver::Idle => self.outcome.unparsed_arguments.push(token.to_owned()),
            Receiver::AwaitingValue { position, .. } => {
                if let Target::Scalar(slot) | Target::OptionalScalar(slot) =
                    destinations.target(position)
                {
                    token.clone_into(slot);
                }
                self.receiver = Receiver::Idle;
            }
            Receiver::Collecting { position, .. } => {
                match destinations.target(position) {
                    Target::List(items) | Target::NonEmptyList(items) => {
                        items.push(token.to_owned())
                    }
                    Target::Groups(groups) => match groups.last_mut() {
                        Some(group) => group.push(token.to_owned()),
                        None => groups.push(vec![token.to_owned()]),
                    },
                    Target::Flag(_) | Target::Scalar(_) | Target::OptionalScalar(_) => {}
                }
                self.receiver = Receiver::Collecting {
                    position,
                    pending: false,
                };
            }
        }
    }

    /// Close the open receiver and hand back the observations.
    pub fn finish<D>(mut self, destinations: &D) -> ParseOutcome
    where
        D: Destinations + ?Sized,
    {
        self.close(destinations);
        debug!(
            unparsed = self.outcome.unparsed_arguments.len(),
            missing = self.outcome.keywords_missing_value.len(),
            keywords = self.outcome.parsed_keywords.len(),
            "argument parse finished"
        );
        self.outcome
    }

    /// Finalization: report the closing receiver if its value requirement
    /// was never met.
    fn close<D>(&mut self, destinations: &D)
    where
        D: Destinations + ?Sized,
    {
        let unmet = match self.receiver {
            Receiver::AwaitingValue {
                position,
                required: true,
            }
            | Receiver::Collecting {
                position,
                pending: true,
            } => Some(position),
            _ => None,
        };
        if let Some(position) = unmet {
            let keyword = destinations.keyword(position).clone();
            trace!(%keyword, "keyword closed without a value");
            self.outcome.keywords_missing_value.push(keyword);
        }
        self.receiver = Receiver::Idle;
    }

    fn open<D>(&mut self, destinations: &mut D, position: usize)
    where
        D: Destinations + ?Sized,
    {
        let target = destinations.target(position);
        let shape = target.shape();
        let (receiver, repeats) = match target {
            Target::Flag(flag) => {
                *flag = true;
                (Receiver::Idle, false)
            }
            Target::Scalar(_) => (
                Receiver::AwaitingValue {
                    position,
                    required: true,
                },
                false,
            ),
            Target::OptionalScalar(_) => (
                Receiver::AwaitingValue {
                    position,
                    required: false,
                },
                false,
            ),
            Target::List(_) => (
                Receiver::Collecting {
                    position,
                    pending: false,
                },
                false,
            ),
            Target::NonEmptyList(_) => (
                Receiver::Collecting {
                    position,
                    pending: true,
                },
                false,
            ),
            Target::Groups(groups) => {
                groups.push(Vec::new());
                (
                    Receiver::Collecting {
                        position,
                        pending: false,
                    },
                    true,
                )
            }
        };
        self.receiver = receiver;

        let keyword = destinations.keyword(position);
        trace!(%keyword, shape, "keyword opened");
        if repeats || !self.outcome.parsed_keywords.contains(keyword) {
            self.outcome.parsed_keywords.push(keyword.clone());
        }
    }
}
