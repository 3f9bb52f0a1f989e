use crate::contrib::{ident, number_lit};
use crate::prelude::*;

/// A parsed `key = value` line from a config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub key: String,
    pub number: f64,
}

/// `map` runs after a successful match and gets the node `&mut`; the usual
/// move is to build a domain value from the children and park it in
/// `node.value`. `bind` is the degenerate case: the same value on every
/// match, here turning keywords into booleans.
pub fn setting() -> Parser {
    map(seq((ident(), "=", number_lit())), |n| {
        let number = n.child[2].take_value::<f64>().unwrap_or(0.0);
        n.value = Some(Box::new(Setting {
            key: n.child[0].token.clone(),
            number,
        }));
    })
}

pub fn switch() -> Parser {
    any((bind("on", true), bind("off", false)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use test_log::test;

    #[test]
    fn test_setting() {
        let (node, _) = run(setting(), "retries = 3");
        let node = node.unwrap();
        assert_eq!(
            node.value_as::<Setting>(),
            Some(&Setting {
                key: "retries".into(),
                number: 3.0
            })
        );
    }

    #[test]
    fn test_switch() {
        let (node, _) = run(switch(), "off");
        assert_eq!(node.unwrap().value_as::<bool>(), Some(&false));

        // on a miss the value is simply never attached
        let (node, st) = run(switch(), "no");
        assert!(node.is_none());
        assert_eq!(st.error.unwrap().to_string(), "offset 0: expected off");
    }
}
