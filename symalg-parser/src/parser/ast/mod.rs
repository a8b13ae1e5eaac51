pub mod binary;
pub mod call;
pub mod expr;
pub mod literal;
pub mod unary;

pub use binary::Binary;
pub use call::{Call, Func};
pub use expr::Expr;
pub use literal::{Constant, Literal};
pub use unary::Postfix;
