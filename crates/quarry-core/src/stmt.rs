mod eval;
pub use eval::{ConstInput, Input};

mod expr;
pub use expr::Expr;

mod expr_binary;
pub use expr_binary::ExprBinary;

mod expr_case;
pub use expr_case::{CaseWhen, ExprCase};

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_constant;
pub use expr_constant::ExprConstant;

mod expr_exists;
pub use expr_exists::ExprExists;

mod expr_fragment;
pub use expr_fragment::ExprFragment;

mod expr_func;
pub use expr_func::ExprFunc;

mod expr_in;
pub use expr_in::{ExprIn, InValues};

mod expr_like;
pub use expr_like::ExprLike;

mod expr_parameter;
pub use expr_parameter::ExprParameter;

mod expr_unary;
pub use expr_unary::ExprUnary;

mod frozen;
pub use frozen::FrozenSelect;

mod join;
pub use join::{Join, JoinOp};

mod node;
pub use node::Node;

mod nullable;

mod op_binary;
pub use op_binary::BinaryOp;

mod op_unary;
pub use op_unary::UnaryOp;

mod order_by_expr;
pub use order_by_expr::OrderByExpr;

mod projection;
pub use projection::ProjectionExpr;

mod select;
pub use select::{ProjectionMapping, Remap, Select};

mod table;
pub use table::Table;

mod table_expr;
pub use table_expr::TableExpr;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_cmp;

pub mod visit;
pub use visit::Visit;

pub mod visit_mut;
pub use visit_mut::VisitMut;
