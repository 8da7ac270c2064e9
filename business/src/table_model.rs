//! Header/row/cell view derived from users and a column schema.
//!
//! The model borrows from its inputs and is rebuilt every frame. Row ids are the
//! user ids and cell ids are `"{row}_{column}"`, so a re-published batch with the
//! same users yields the same ids.

use crate::{AVATAR_ALT, CellKind, ColumnKey, ColumnSchema, DisplayUser};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub id: &'static str,
    pub label: &'static str,
}

/// The schema is single level, so there is exactly one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderGroup {
    pub id: usize,
    pub headers: Vec<HeaderView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent<'a> {
    Avatar { src: &'a str, alt: &'static str },
    Text(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView<'a> {
    pub id: String,
    pub column: ColumnKey,
    pub content: CellContent<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    pub id: &'a str,
    pub index: usize,
    pub cells: Vec<CellView<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel<'a> {
    pub header_groups: Vec<HeaderGroup>,
    pub rows: Vec<RowView<'a>>,
}

impl<'a> TableViewModel<'a> {
    pub fn build(users: &'a [DisplayUser], schema: &ColumnSchema) -> Self {
        let headers = schema
            .columns()
            .iter()
            .map(|column| HeaderView {
                id: column.key.as_str(),
                label: column.header,
            })
            .collect();

        let rows = users
            .iter()
            .enumerate()
            .map(|(index, user)| RowView {
                id: &user.id,
                index,
                cells: schema
                    .columns()
                    .iter()
                    .map(|column| {
                        let value = user.field(column.key);
                        CellView {
                            id: format!("{}_{}", user.id, column.key.as_str()),
                            column: column.key,
                            content: match column.cell {
                                CellKind::Avatar => CellContent::Avatar {
                                    src: value,
                                    alt: AVATAR_ALT,
                                },
                                CellKind::Text => CellContent::Text(value),
                            },
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            header_groups: vec![HeaderGroup { id: 0, headers }],
            rows,
        }
    }

    pub fn headers(&self) -> impl Iterator<Item = &HeaderView> {
        self.header_groups.iter().flat_map(|group| group.headers.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
