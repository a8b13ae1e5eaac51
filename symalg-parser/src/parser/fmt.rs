use std::fmt::{Display, Formatter, Result};
use super::ast::expr::Expr;

/// A wrapper type that implements [`Display`] for an [`Expr`] by rendering the shape of its
/// tree.
///
/// The node's operator is written on the first line. Each child follows on its own line, marked
/// with `├─ ` if another child comes after it, or `└─ ` if it is the last child. Lines belonging
/// to a child's own subtree are indented to stay under that child's marker.
///
/// ```text
/// +
/// ├─ *
/// │  ├─ 2
/// │  └─ x
/// └─ 1
/// ```
pub struct TreeFormatter<'a>(pub(crate) &'a Expr);

impl Display for TreeFormatter<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        fmt_node(f, self.0, &mut String::new())
    }
}

/// Writes the given node and its subtree, with `indent` written before every line but the first.
fn fmt_node(f: &mut Formatter, expr: &Expr, indent: &mut String) -> Result {
    write!(f, "{}", expr.op())?;

    let children = [expr.left(), expr.right()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (marker, continuation) = if last {
            ("└─ ", "   ")
        } else {
            ("├─ ", "│  ")
        };

        write!(f, "\n{}{}", indent, marker)?;
        let len = indent.len();
        indent.push_str(continuation);
        fmt_node(f, child, indent)?;
        indent.truncate(len);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::parser::ast::call::Func;
    use super::*;

    #[test]
    fn leaf() {
        assert_eq!(Expr::variable("x").render_tree(), "x");
    }

    #[test]
    fn nested_binary() {
        let expr = Expr::integer(2) * Expr::variable("x") + Expr::integer(1);
        assert_eq!(
            expr.render_tree(),
            "+\n├─ *\n│  ├─ 2\n│  └─ x\n└─ 1",
        );
    }

    #[test]
    fn unary_child_is_last() {
        let expr = Expr::call(Func::Sin, Expr::variable("x") + Expr::integer(1)) * Expr::integer(3);
        assert_eq!(
            expr.render_tree(),
            "*\n├─ sin\n│  └─ +\n│     ├─ x\n│     └─ 1\n└─ 3",
        );
    }
}
