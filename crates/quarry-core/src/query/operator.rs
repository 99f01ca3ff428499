use super::{Expr, Lambda};

/// One query operator applied to the running sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    Filter(Lambda),
    Project(Lambda),
    OrderBy(Lambda),
    OrderByDescending(Lambda),
    ThenBy(Lambda),
    ThenByDescending(Lambda),
    Skip(Expr),
    Take(Expr),
    Distinct,

    // Aggregates, with an optional predicate or selector
    Count(Option<Lambda>),
    LongCount(Option<Lambda>),
    Sum(Option<Lambda>),
    Average(Option<Lambda>),
    Min(Option<Lambda>),
    Max(Option<Lambda>),

    // Element operators, with an optional predicate
    First(Option<Lambda>),
    FirstOrDefault(Option<Lambda>),
    Single(Option<Lambda>),
    SingleOrDefault(Option<Lambda>),
    Last(Option<Lambda>),
    LastOrDefault(Option<Lambda>),

    Any(Option<Lambda>),
    All(Lambda),
    Contains(Expr),

    // Operators with no relational translation
    SelectMany(Lambda),
    Join,
    GroupBy(Lambda),
    Union,
    Intersect,
    Except,
    Reverse,
    OfType(String),
    Cast(String),
    SkipWhile(Lambda),
    TakeWhile(Lambda),
    ElementAt(Expr),
}

impl Operator {
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Filter(_) => "Filter",
            Operator::Project(_) => "Project",
            Operator::OrderBy(_) => "OrderBy",
            Operator::OrderByDescending(_) => "OrderByDescending",
            Operator::ThenBy(_) => "ThenBy",
            Operator::ThenByDescending(_) => "ThenByDescending",
            Operator::Skip(_) => "Skip",
            Operator::Take(_) => "Take",
            Operator::Distinct => "Distinct",
            Operator::Count(_) => "Count",
            Operator::LongCount(_) => "LongCount",
            Operator::Sum(_) => "Sum",
            Operator::Average(_) => "Average",
            Operator::Min(_) => "Min",
            Operator::Max(_) => "Max",
            Operator::First(_) => "First",
            Operator::FirstOrDefault(_) => "FirstOrDefault",
            Operator::Single(_) => "Single",
            Operator::SingleOrDefault(_) => "SingleOrDefault",
            Operator::Last(_) => "Last",
            Operator::LastOrDefault(_) => "LastOrDefault",
            Operator::Any(_) => "Any",
            Operator::All(_) => "All",
            Operator::Contains(_) => "Contains",
            Operator::SelectMany(_) => "SelectMany",
            Operator::Join => "Join",
            Operator::GroupBy(_) => "GroupBy",
            Operator::Union => "Union",
            Operator::Intersect => "Intersect",
            Operator::Except => "Except",
            Operator::Reverse => "Reverse",
            Operator::OfType(_) => "OfType",
            Operator::Cast(_) => "Cast",
            Operator::SkipWhile(_) => "SkipWhile",
            Operator::TakeWhile(_) => "TakeWhile",
            Operator::ElementAt(_) => "ElementAt",
        }
    }

    /// Returns `true` for operators that end the sequence with a single
    /// value: aggregates, element operators and quantifiers.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Operator::Count(_)
                | Operator::LongCount(_)
                | Operator::Sum(_)
                | Operator::Average(_)
                | Operator::Min(_)
                | Operator::Max(_)
                | Operator::First(_)
                | Operator::FirstOrDefault(_)
                | Operator::Single(_)
                | Operator::SingleOrDefault(_)
                | Operator::Last(_)
                | Operator::LastOrDefault(_)
                | Operator::Any(_)
                | Operator::All(_)
                | Operator::Contains(_)
        )
    }
}
