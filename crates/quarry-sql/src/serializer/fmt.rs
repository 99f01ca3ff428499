use super::{Formatter, Params};

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_sql($f);
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>);
}

impl ToSql for &str {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(self);
    }
}

impl ToSql for &String {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(self);
    }
}
