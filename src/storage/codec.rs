//! Byte codec for persisted lists.
//!
//! JSON keeps the shard files inspectable with ordinary tools while the
//! round-trip stays lossless for every state the domain model can produce.

use crate::model::TodoList;
use crate::storage::error::StorageError;

/// Serialize a list for its shard file.
pub fn encode(list: &TodoList) -> Result<Vec<u8>, StorageError> {
    Ok(serde_json::to_vec(list)?)
}

/// Deserialize a shard file back into a list.
pub fn decode(bytes: &[u8]) -> Result<TodoList, StorageError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TodoCreate, TodoUpdate};
    use chrono::NaiveDate;

    #[test]
    fn round_trip_is_lossless() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let lists = [
            TodoList::new(),
            TodoList::new().add(TodoCreate::new("Dentist", date)),
            TodoList::new()
                .add(TodoCreate::new("a", date))
                .add(TodoCreate::new("böse Umlaute \"quoted\"", date))
                .delete(1)
                .update(
                    2,
                    &TodoUpdate {
                        title: None,
                        date: NaiveDate::from_ymd_opt(2025, 1, 1),
                    },
                ),
        ];

        for list in lists {
            let decoded = decode(&encode(&list).unwrap()).unwrap();
            assert_eq!(decoded, list);
        }
    }

    #[test]
    fn garbage_bytes_are_a_codec_error() {
        assert!(matches!(
            decode(b"not json"),
            Err(StorageError::Codec(_))
        ));
    }
}
