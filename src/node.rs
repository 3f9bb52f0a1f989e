use std::any::Any;
use std::fmt;

/// One node of the parse result tree.
///
/// Leaves carry the matched text in `token`; compound combinators collect
/// their sub-matches into `child`. `value` is whatever a `map`/`bind`
/// callback attached, its meaning is defined by the grammar author.
/// Tokens are copied out of the input, so the tree does not borrow it.
#[derive(Default)]
pub struct Node {
    /// The literal text this parser matched (may be empty).
    pub token: String,
    /// Sub-matches in declaration order.
    pub child: Vec<Node>,
    /// Semantic value attached by `map`/`bind`; `None` if unset.
    pub value: Option<Box<dyn Any>>,
    /// Byte offset where the match began.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
}

impl Node {
    pub(crate) fn empty(pos: usize) -> Self {
        Node {
            start: pos,
            end: pos,
            ..Node::default()
        }
    }

    /// A childless node for a leaf match spanning `start..end`.
    pub fn leaf(token: impl Into<String>, start: usize, end: usize) -> Self {
        Node {
            token: token.into(),
            start,
            end,
            ..Node::default()
        }
    }

    /// Downcast the attached semantic value.
    pub fn value_as<T: 'static>(&self) -> Option<&T> {
        self.value.as_deref().and_then(<dyn Any>::downcast_ref)
    }

    /// Move the semantic value out, downcast. Handy in `map` callbacks that
    /// fold children into a parent value.
    pub fn take_value<T: 'static>(&mut self) -> Option<T> {
        match self.value.take() {
            Some(b) => match b.downcast::<T>() {
                Ok(v) => Some(*v),
                Err(b) => {
                    self.value = Some(b);
                    None
                }
            },
            None => None,
        }
    }

    /// The child tokens in order. Mostly for tests and quick inspection.
    pub fn child_tokens(&self) -> Vec<&str> {
        self.child.iter().map(|c| c.token.as_str()).collect()
    }
}

// dyn Any has no Debug, so spell the tree out by hand.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Node({tok:?} @{s}..{e}", tok = self.token, s = self.start, e = self.end)?;
        if self.value.is_some() {
            write!(f, " value=<set>")?;
        }
        if !self.child.is_empty() {
            write!(f, " child={:?}", self.child)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn test_value_roundtrip() {
        let mut n = Node::leaf("42", 0, 2);
        assert!(n.value_as::<i64>().is_none());
        n.value = Some(Box::new(42_i64));
        assert_eq!(n.value_as::<i64>(), Some(&42));
        // wrong type leaves the value in place
        assert_eq!(n.take_value::<String>(), None);
        assert_eq!(n.take_value::<i64>(), Some(42));
        assert!(n.value.is_none());
    }

    #[test]
    fn test_child_tokens() {
        let mut n = Node::empty(0);
        n.child.push(Node::leaf("a", 0, 1));
        n.child.push(Node::leaf("b", 2, 3));
        assert_eq!(n.child_tokens(), vec!["a", "b"]);
    }
}
