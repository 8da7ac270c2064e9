//! Column schema of the user table.

/// A `DisplayUser` field a column reads. Being an enum, every key exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnKey {
    Picture,
    Name,
    Email,
    Phone,
    Country,
}

impl ColumnKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Picture => "picture",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Country => "country",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// The field's string, untouched.
    Text,
    /// An image loaded from the field's URL.
    Avatar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: ColumnKey,
    pub header: &'static str,
    pub cell: CellKind,
}

impl ColumnDef {
    pub const fn text(key: ColumnKey, header: &'static str) -> Self {
        Self {
            key,
            header,
            cell: CellKind::Text,
        }
    }

    pub const fn avatar(key: ColumnKey, header: &'static str) -> Self {
        Self {
            key,
            header,
            cell: CellKind::Avatar,
        }
    }
}

/// Ordered, immutable list of columns.
#[derive(Debug, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: &'static [ColumnDef],
}

impl ColumnSchema {
    pub const fn new(columns: &'static [ColumnDef]) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &'static [ColumnDef] {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|column| column.header)
    }
}

/// Alt text of avatar images.
pub const AVATAR_ALT: &str = "User";

const USER_COLUMN_DEFS: [ColumnDef; 5] = [
    ColumnDef::avatar(ColumnKey::Picture, "Avatar"),
    ColumnDef::text(ColumnKey::Name, "Name"),
    ColumnDef::text(ColumnKey::Email, "Email"),
    ColumnDef::text(ColumnKey::Phone, "Phone"),
    ColumnDef::text(ColumnKey::Country, "Country"),
];

pub static USER_COLUMNS: ColumnSchema = ColumnSchema::new(&USER_COLUMN_DEFS);
