use super::{Flavor, Formatter, Params, ToSql};

/// A quoted identifier.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = self.0.as_ref();

        match f.serializer.flavor {
            Flavor::SqlServer => {
                f.dst.push('[');
                f.dst.push_str(&name.replace(']', "]]"));
                f.dst.push(']');
            }
            Flavor::Sqlite | Flavor::Postgresql => {
                f.dst.push('"');
                f.dst.push_str(&name.replace('"', "\"\""));
                f.dst.push('"');
            }
        }
    }
}
