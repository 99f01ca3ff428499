//! Translation of host members and method calls into SQL expressions.
//!
//! The scalar translator hands every member access and method call it does
//! not resolve itself to an ordered chain of [`MethodTranslator`]s. The
//! first translator returning `Some` wins. When none do, the call has no
//! SQL equivalent and translation fails.

mod contains;
pub use contains::ContainsTranslator;

mod math;
pub use math::MathTranslator;

mod nullable;
pub use nullable::NullableTranslator;

mod string;
pub use string::StringTranslator;

use crate::ExprFactory;
use quarry_core::{query::Method, stmt::Expr, Capability, Flavor, Result};

/// The member being translated.
#[derive(Debug, Clone, Copy)]
pub enum Member<'a> {
    /// Property access, e.g. `s.Length`.
    Property(&'a str),

    /// A method call, instance or static.
    Method(&'a Method),
}

impl Member<'_> {
    pub fn is_property(&self, name: &str) -> bool {
        matches!(self, Member::Property(property) if *property == name)
    }

    pub fn is_method(&self, declaring: &str, name: &str) -> bool {
        matches!(self, Member::Method(method) if method.is(declaring, name))
    }
}

/// What a translator may use while building its expression.
pub struct TranslationContext<'a> {
    factory: &'a ExprFactory,
}

impl<'a> TranslationContext<'a> {
    pub(crate) fn new(factory: &'a ExprFactory) -> TranslationContext<'a> {
        TranslationContext { factory }
    }

    pub fn factory(&self) -> &'a ExprFactory {
        self.factory
    }

    pub fn flavor(&self) -> Flavor {
        self.factory.flavor()
    }

    pub fn capability(&self) -> &'static Capability {
        self.factory.capability()
    }
}

/// Recognizes one family of host members and emits their SQL form.
///
/// `receiver` and `args` are already translated but may still lack type
/// mappings, and list constants or list parameters appear as-is. The
/// returned expression must be fully mapped; [`ExprFactory::apply`] does
/// that for trees built from the inputs.
pub trait MethodTranslator: Send + Sync {
    fn try_translate(
        &self,
        cx: &TranslationContext<'_>,
        receiver: Option<&Expr>,
        member: Member<'_>,
        args: &[Expr],
    ) -> Result<Option<Expr>>;
}

/// The built-in translators, in the order they are consulted.
pub(crate) fn builtins() -> Vec<Box<dyn MethodTranslator>> {
    vec![
        Box::new(NullableTranslator),
        Box::new(ContainsTranslator),
        Box::new(StringTranslator),
        Box::new(MathTranslator),
    ]
}
