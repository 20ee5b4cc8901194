use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-primitive call counters, incremented before the call is served.
#[derive(Debug, Default)]
pub struct OpCounters {
    insert_one: AtomicUsize,
    insert_many: AtomicUsize,
    find: AtomicUsize,
    update_one: AtomicUsize,
    delete_one: AtomicUsize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpSnapshot {
    pub insert_one: usize,
    pub insert_many: usize,
    pub find: usize,
    pub update_one: usize,
    pub delete_one: usize,
}

impl OpSnapshot {
    pub fn total(&self) -> usize { self.insert_one + self.insert_many + self.find + self.update_one + self.delete_one }
}

impl OpCounters {
    pub(crate) fn record_insert_one(&self) { self.insert_one.fetch_add(1, Ordering::SeqCst); }
    pub(crate) fn record_insert_many(&self) { self.insert_many.fetch_add(1, Ordering::SeqCst); }
    pub(crate) fn record_find(&self) { self.find.fetch_add(1, Ordering::SeqCst); }
    pub(crate) fn record_update_one(&self) { self.update_one.fetch_add(1, Ordering::SeqCst); }
    pub(crate) fn record_delete_one(&self) { self.delete_one.fetch_add(1, Ordering::SeqCst); }

    pub fn snapshot(&self) -> OpSnapshot {
        OpSnapshot {
            insert_one: self.insert_one.load(Ordering::SeqCst),
            insert_many: self.insert_many.load(Ordering::SeqCst),
            find: self.find.load(Ordering::SeqCst),
            update_one: self.update_one.load(Ordering::SeqCst),
            delete_one: self.delete_one.load(Ordering::SeqCst),
        }
    }

    pub fn reset(&self) {
        self.insert_one.store(0, Ordering::SeqCst);
        self.insert_many.store(0, Ordering::SeqCst);
        self.find.store(0, Ordering::SeqCst);
        self.update_one.store(0, Ordering::SeqCst);
        self.delete_one.store(0, Ordering::SeqCst);
    }
}
