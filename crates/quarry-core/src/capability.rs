/// The SQL dialect a query is compiled for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    #[default]
    SqlServer,
    Sqlite,
    Postgresql,
}

impl Flavor {
    pub fn capability(self) -> &'static Capability {
        match self {
            Flavor::SqlServer => &Capability::SQL_SERVER,
            Flavor::Sqlite => &Capability::SQLITE,
            Flavor::Postgresql => &Capability::POSTGRESQL,
        }
    }
}

/// What a target database supports, and how it spells a few things the
/// translator has to pick between.
#[derive(Debug)]
pub struct Capability {
    /// When false, a boolean is not a value: predicates in value position
    /// must be wrapped in `CASE`, and boolean values in predicate position
    /// must be compared against true.
    pub native_bool: bool,

    /// Column storage types used by the default type mappings.
    pub storage_types: StorageTypes,

    /// Counting function whose result is 64 bits wide.
    pub count_big: &'static str,

    /// Function returning the length of a string.
    pub string_length: &'static str,

    /// String comparisons ignore case under the default collation.
    pub case_insensitive_strings: bool,
}

#[derive(Debug)]
pub struct StorageTypes {
    pub bool: &'static str,
    pub i16: &'static str,
    pub i32: &'static str,
    pub i64: &'static str,
    pub f32: &'static str,
    pub f64: &'static str,

    /// The default storage type for a string.
    pub default_string_type: &'static str,

    /// When `Some`, strings up to the given length use the bounded type.
    pub bounded_string: Option<(&'static str, usize)>,

    pub bytes: &'static str,
    pub uuid: &'static str,
}

impl Capability {
    pub const SQL_SERVER: Self = Self {
        native_bool: false,
        storage_types: StorageTypes::SQL_SERVER,
        count_big: "COUNT_BIG",
        string_length: "LEN",
        case_insensitive_strings: true,
    };

    pub const SQLITE: Self = Self {
        native_bool: true,
        storage_types: StorageTypes::SQLITE,
        count_big: "COUNT",
        string_length: "LENGTH",
        case_insensitive_strings: false,
    };

    pub const POSTGRESQL: Self = Self {
        storage_types: StorageTypes::POSTGRESQL,
        ..Self::SQLITE
    };
}

impl StorageTypes {
    pub const SQL_SERVER: StorageTypes = StorageTypes {
        bool: "bit",
        i16: "smallint",
        i32: "int",
        i64: "bigint",
        f32: "real",
        f64: "float",
        default_string_type: "nvarchar(max)",
        bounded_string: Some(("nvarchar(4000)", 4000)),
        bytes: "varbinary(max)",
        uuid: "uniqueidentifier",
    };

    /// SQLite has only storage classes; declared lengths are ignored.
    pub const SQLITE: StorageTypes = StorageTypes {
        bool: "INTEGER",
        i16: "INTEGER",
        i32: "INTEGER",
        i64: "INTEGER",
        f32: "REAL",
        f64: "REAL",
        default_string_type: "TEXT",
        bounded_string: None,
        bytes: "BLOB",
        uuid: "TEXT",
    };

    pub const POSTGRESQL: StorageTypes = StorageTypes {
        bool: "boolean",
        i16: "smallint",
        i32: "integer",
        i64: "bigint",
        f32: "real",
        f64: "double precision",
        default_string_type: "text",
        bounded_string: None,
        bytes: "bytea",
        uuid: "uuid",
    };
}
