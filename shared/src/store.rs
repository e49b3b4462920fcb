use std::{cell::RefCell, collections::HashSet, rc::Rc};

use crate::{
    filter::category_options,
    loan::{LoanId, LoanRecord},
};

/// Handle shared by the coordinator and the view layer.
///
/// Borrows are short and synchronous; never hold one across an `.await`.
pub type SharedStore = Rc<RefCell<RecordStore>>;

/// Session-local copy of every loan record, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<LoanRecord>,
}

/// Dashboard counters derived from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoanStats {
    pub total: usize,
    pub on_home: usize,
    pub categories: usize,
    pub hidden: usize,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an empty store in a [`SharedStore`] handle.
    pub fn shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Replace the whole contents with a bulk-fetched snapshot.
    ///
    /// A repeated id replaces the earlier entry in place, keeping ids unique.
    pub fn load(&mut self, records: Vec<LoanRecord>) {
        self.records.clear();
        self.records.reserve(records.len());
        for record in records {
            self.upsert(record);
        }
    }

    /// Insert at the end, or replace in place when the id already exists.
    pub fn upsert(&mut self, record: LoanRecord) {
        match self.position(&record.id) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    /// Remove a record; absent ids are ignored.
    pub fn remove(&mut self, id: &LoanId) -> Option<LoanRecord> {
        let idx = self.position(id)?;
        Some(self.records.remove(idx))
    }

    pub fn all(&self) -> &[LoanRecord] {
        &self.records
    }

    pub fn get(&self, id: &LoanId) -> Option<&LoanRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &LoanId) -> Option<&mut LoanRecord> {
        self.records.iter_mut().find(|record| &record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `"All"` followed by the distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        category_options(&self.records)
    }

    pub fn stats(&self) -> LoanStats {
        let on_home = self
            .records
            .iter()
            .filter(|record| record.visible_on_home())
            .count();
        let categories = self
            .records
            .iter()
            .map(LoanRecord::category)
            .collect::<HashSet<_>>()
            .len();
        LoanStats {
            total: self.records.len(),
            on_home,
            categories,
            hidden: self.records.len() - on_home,
        }
    }

    fn position(&self, id: &LoanId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }
}
