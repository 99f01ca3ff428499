use super::{MappingKind, TypeMapping};
use crate::{bail, capability::Flavor, stmt::Value, Result};
use std::fmt::Write;

impl TypeMapping {
    /// Renders `value` as a SQL literal of this mapping's type.
    ///
    /// A converter, when present, is applied first. String quotes are
    /// escaped by doubling them.
    pub fn literal(&self, value: &Value) -> Result<String> {
        if let Some(converter) = &self.converter {
            let converted = converter.to_provider(value)?;
            return self.provider_literal(&converted);
        }

        self.provider_literal(value)
    }

    fn provider_literal(&self, value: &Value) -> Result<String> {
        if value.is_null() {
            return Ok("NULL".to_string());
        }

        match self.kind {
            MappingKind::Bool => match (value, value.to_i64()) {
                (Value::Bool(b), _) => Ok(bool_literal(self.flavor, *b).to_string()),
                (_, Some(v)) => Ok(v.to_string()),
                _ => bail!("cannot render {value:?} as a bool literal"),
            },
            MappingKind::Integer => match (value, value.to_i64()) {
                (_, Some(v)) => Ok(v.to_string()),
                (Value::Bool(b), None) => Ok(if *b { "1" } else { "0" }.to_string()),
                _ => bail!("cannot render {value:?} as an integer literal"),
            },
            MappingKind::Float => match value.to_f64() {
                Some(v) if v.is_finite() => Ok(float_literal(v)),
                _ => bail!("cannot render {value:?} as a floating point literal"),
            },
            MappingKind::String { unicode } => {
                let text = match value {
                    Value::String(s) => s.replace('\'', "''"),
                    Value::Uuid(uuid) => uuid.to_string(),
                    value => bail!("cannot render {value:?} as a string literal"),
                };

                Ok(match (self.flavor, unicode) {
                    (Flavor::SqlServer, true) => format!("N'{text}'"),
                    _ => format!("'{text}'"),
                })
            }
            MappingKind::Bytes => {
                let Value::Bytes(bytes) = value else {
                    bail!("cannot render {value:?} as a binary literal");
                };

                let mut hex = String::with_capacity(bytes.len() * 2);
                for byte in bytes {
                    let _ = write!(hex, "{byte:02X}");
                }

                Ok(match self.flavor {
                    Flavor::SqlServer => format!("0x{hex}"),
                    Flavor::Sqlite => format!("X'{hex}'"),
                    Flavor::Postgresql => format!("'\\x{hex}'::bytea"),
                })
            }
            MappingKind::Uuid => {
                let Value::Uuid(uuid) = value else {
                    bail!("cannot render {value:?} as a uuid literal");
                };

                Ok(match self.flavor {
                    Flavor::Postgresql => format!("'{uuid}'::uuid"),
                    _ => format!("'{uuid}'"),
                })
            }
        }
    }
}

fn bool_literal(flavor: Flavor, value: bool) -> &'static str {
    match (flavor, value) {
        (Flavor::SqlServer, true) => "CAST(1 AS bit)",
        (Flavor::SqlServer, false) => "CAST(0 AS bit)",
        (Flavor::Sqlite, true) => "1",
        (Flavor::Sqlite, false) => "0",
        (Flavor::Postgresql, true) => "TRUE",
        (Flavor::Postgresql, false) => "FALSE",
    }
}

/// Floats always carry a decimal point or exponent so the database does not
/// read them as integers.
fn float_literal(value: f64) -> String {
    let rendered = value.to_string();
    if rendered.contains(['.', 'e', 'E']) {
        rendered
    } else {
        format!("{rendered}.0")
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        capability::Flavor,
        mapping::TypeMappingSource,
        schema::ValueConverter,
        stmt::{Type, Value},
        Result,
    };

    fn literal(flavor: Flavor, value: Value) -> String {
        let source = TypeMappingSource::new(flavor);
        let mapping = source.find_for_value(&value).unwrap();
        mapping.literal(&value).unwrap()
    }

    #[test]
    fn bool_literals_per_flavor() {
        assert_eq!(literal(Flavor::SqlServer, Value::Bool(true)), "CAST(1 AS bit)");
        assert_eq!(literal(Flavor::Sqlite, Value::Bool(false)), "0");
        assert_eq!(literal(Flavor::Postgresql, Value::Bool(true)), "TRUE");
    }

    #[test]
    fn string_quotes_are_doubled() {
        assert_eq!(literal(Flavor::SqlServer, Value::from("O'Brien")), "N'O''Brien'");
        assert_eq!(literal(Flavor::Sqlite, Value::from("O'Brien")), "'O''Brien'");
    }

    #[test]
    fn byte_literals_per_flavor() {
        let bytes = Value::Bytes(vec![0x01, 0xAB]);
        assert_eq!(literal(Flavor::SqlServer, bytes.clone()), "0x01AB");
        assert_eq!(literal(Flavor::Sqlite, bytes.clone()), "X'01AB'");
        assert_eq!(literal(Flavor::Postgresql, bytes), "'\\x01AB'::bytea");
    }

    #[test]
    fn floats_keep_a_decimal_point() {
        assert_eq!(literal(Flavor::Sqlite, Value::F64(2.0)), "2.0");
        assert_eq!(literal(Flavor::Sqlite, Value::F64(2.5)), "2.5");
    }

    #[test]
    fn null_renders_as_keyword() {
        let source = TypeMappingSource::new(Flavor::SqlServer);
        let mapping = source.find(&Type::I32).unwrap();
        assert_eq!(mapping.literal(&Value::Null).unwrap(), "NULL");
    }

    fn bool_to_yes_no(value: &Value) -> Result<Value> {
        Ok(Value::from(if value.is_true() { "Y" } else { "N" }))
    }

    fn yes_no_to_bool(value: &Value) -> Result<Value> {
        Ok(Value::Bool(value.as_str() == Some("Y")))
    }

    #[test]
    fn converted_literals_render_provider_value() {
        let source = TypeMappingSource::new(Flavor::SqlServer);
        let converter = ValueConverter::new("yes_no", Type::String, bool_to_yes_no, yes_no_to_bool);
        let mapping = source.find_converted(&Type::Bool, converter).unwrap();

        assert_eq!(mapping.store_type, "nvarchar(max)");
        assert_eq!(mapping.literal(&Value::Bool(true)).unwrap(), "N'Y'");
    }
}
