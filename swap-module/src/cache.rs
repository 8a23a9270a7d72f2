use std::collections::BTreeMap;

use cosmwasm_std::{Order, Record, Storage};

/// Write buffer over another store.
///
/// Reads see buffered writes layered on top of the backing store. Nothing
/// reaches the backing store until [`CacheStorage::commit`]; dropping the
/// cache discards every buffered write.
pub struct CacheStorage<'a> {
    storage: &'a mut dyn Storage,
    // None marks a removal
    writes: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl<'a> CacheStorage<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        CacheStorage {
            storage,
            writes: BTreeMap::new(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        !self.writes.is_empty()
    }

    /// Flushes buffered writes to the backing store in key order.
    pub fn commit(self) {
        let CacheStorage { storage, writes } = self;
        for (key, value) in writes {
            match value {
                Some(value) => storage.set(&key, &value),
                None => storage.remove(&key),
            }
        }
    }
}

fn in_range(key: &[u8], start: Option<&[u8]>, end: Option<&[u8]>) -> bool {
    start.map_or(true, |start| key >= start) && end.map_or(true, |end| key < end)
}

impl Storage for CacheStorage<'_> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.writes.get(key) {
            Some(value) => value.clone(),
            None => self.storage.get(key),
        }
    }

    fn range<'b>(
        &'b self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'b> {
        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> = self
            .storage
            .range(start, end, Order::Ascending)
            .collect();

        for (key, value) in self
            .writes
            .iter()
            .filter(|(key, _)| in_range(key, start, end))
        {
            match value {
                Some(value) => {
                    merged.insert(key.clone(), value.clone());
                }
                None => {
                    merged.remove(key);
                }
            }
        }

        let records: Vec<Record> = merged.into_iter().collect();
        match order {
            Order::Ascending => Box::new(records.into_iter()),
            Order::Descending => Box::new(records.into_iter().rev()),
        }
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.writes.insert(key.to_vec(), Some(value.to_vec()));
    }

    fn remove(&mut self, key: &[u8]) {
        self.writes.insert(key.to_vec(), None);
    }
}
