use serde::{Deserialize, Serialize};

use super::fields::Fields;
use crate::types::identifiers::RecordId;

/// Maps a record to its stable unique id.
///
/// Selection is keyed on this id alone, so the same record keeps its
/// selection status wherever it shows up.
pub trait Identify {
    fn id(&self) -> RecordId;
}

impl<T: Identify + ?Sized> Identify for &T {
    fn id(&self) -> RecordId {
        (**self).id()
    }
}

/// One row of the remote listing.
///
/// `id` is the only field the engine reads; everything else is flattened
/// into `fields` for whoever renders the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, fields: Fields) -> Self {
        Record {
            id: id.into(),
            fields,
        }
    }

    pub fn bare(id: impl Into<RecordId>) -> Self {
        Record::new(id, Fields::default())
    }
}

impl Identify for Record {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Identify for RecordId {
    fn id(&self) -> RecordId {
        *self
    }
}
