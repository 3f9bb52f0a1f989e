use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::primitives::exact;
use crate::state::{Parsed, State};

/// A parser: given the state, either advance it and return a [`Node`]
/// (`crate::node::Node`), or record a miss and leave the position where it
/// was.
///
/// Cloning is cheap (an `Rc` bump), so one sub-grammar can appear in several
/// places of a larger one. Anything `Into<Parser>` — a bare `&str`, a
/// [`Rule`] handle, another `Parser` by reference — is accepted wherever a
/// parser is expected.
#[derive(Clone)]
pub struct Parser {
    f: Rc<dyn for<'s> Fn(&mut State<'s>) -> Parsed>,
}

impl Parser {
    /// Wrap a closure as a parser. This is the extension point for custom
    /// leaves; see the leaf contract on [`State::skip_ws`] and
    /// [`State::miss`].
    pub fn from_fn<F>(f: F) -> Parser
    where
        F: for<'s> Fn(&mut State<'s>) -> Parsed + 'static,
    {
        Parser { f: Rc::new(f) }
    }

    /// Invoke the parser against the state.
    pub fn parse(&self, st: &mut State) -> Parsed {
        (self.f)(st)
    }

    /// Method form of [`crate::combinators::map`].
    pub fn map(self, f: impl Fn(&mut crate::node::Node) + 'static) -> Parser {
        crate::combinators::map(self, f)
    }

    /// Method form of [`crate::combinators::bind`].
    pub fn bind<T: Clone + 'static>(self, value: T) -> Parser {
        crate::combinators::bind(self, value)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Parser")
    }
}

// Bare strings lift to exact-match leaves, uniformly in every combinator.
impl From<&str> for Parser {
    fn from(s: &str) -> Parser {
        exact(s)
    }
}

impl From<String> for Parser {
    fn from(s: String) -> Parser {
        exact(s)
    }
}

impl From<&Parser> for Parser {
    fn from(p: &Parser) -> Parser {
        p.clone()
    }
}

/// A forward-declared parser handle, for self-referential grammars.
///
/// Construct it empty, use `&rule` inside the grammar wherever the rule
/// recurses, then fill the slot with [`Rule::define`]. The slot is
/// dereferenced lazily at parse time, so cycles are fine. A rule defined in
/// terms of itself forms an `Rc` cycle and keeps the grammar alive for the
/// life of the program.
///
/// ```
/// use parsnip::prelude::*;
///
/// let bracer = Rule::named("bracer");
/// bracer.define(seq(("(", maybe(&bracer), ")")));
/// let (node, _) = run(merge(&bracer), "((()))");
/// assert_eq!(node.unwrap().token, "((()))");
/// ```
#[derive(Clone, Default)]
pub struct Rule {
    name: &'static str,
    slot: Rc<RefCell<Option<Parser>>>,
}

impl Rule {
    pub fn new() -> Rule {
        Rule::default()
    }

    /// A rule with a diagnostic name, surfaced if it is parsed undefined.
    pub fn named(name: &'static str) -> Rule {
        Rule {
            name,
            slot: Rc::default(),
        }
    }

    /// Fill the slot. Parsing through a rule that was never defined is a
    /// construction bug and panics.
    pub fn define(&self, p: impl Into<Parser>) {
        *self.slot.borrow_mut() = Some(p.into());
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rule({})", if self.name.is_empty() { "?" } else { self.name })
    }
}

impl From<&Rule> for Parser {
    fn from(r: &Rule) -> Parser {
        let name = r.name;
        let slot = Rc::clone(&r.slot);
        Parser::from_fn(move |st: &mut State| {
            let p = slot
                .borrow()
                .clone()
                .unwrap_or_else(|| panic!("rule '{name}' parsed before Rule::define"));
            p.parse(st)
        })
    }
}

impl From<Rule> for Parser {
    fn from(r: Rule) -> Parser {
        Parser::from(&r)
    }
}

/// Argument position of `seq`/`any`: a tuple of up to eight mixed
/// `Into<Parser>` values, or a prebuilt `Vec<Parser>`.
pub trait Parsers {
    fn into_parsers(self) -> Vec<Parser>;
}

impl Parsers for Vec<Parser> {
    fn into_parsers(self) -> Vec<Parser> {
        self
    }
}

macro_rules! impl_parsers_tuple {
    ($($p:ident),+) => {
        impl<$($p),+> Parsers for ($($p,)+)
        where
            $($p: Into<Parser>),+
        {
            #[allow(non_snake_case)]
            fn into_parsers(self) -> Vec<Parser> {
                let ($($p,)+) = self;
                vec![$($p.into()),+]
            }
        }
    };
}

impl_parsers_tuple!(P1);
impl_parsers_tuple!(P1, P2);
impl_parsers_tuple!(P1, P2, P3);
impl_parsers_tuple!(P1, P2, P3, P4);
impl_parsers_tuple!(P1, P2, P3, P4, P5);
impl_parsers_tuple!(P1, P2, P3, P4, P5, P6);
impl_parsers_tuple!(P1, P2, P3, P4, P5, P6, P7);
impl_parsers_tuple!(P1, P2, P3, P4, P5, P6, P7, P8);
