//! Async task bookkeeping.
//!
//! Every spawned request gets a `TaskId`. The reducer records the id when it
//! emits the effect and only accepts a completion whose id is still active,
//! so late or duplicate results are dropped.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Task lifecycle state (stored in `AppState`, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn start(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub lecture_list: TaskState,
    pub draw: TaskState,
}

impl Tasks {
    pub fn is_any_running(&self) -> bool {
        self.lecture_list.is_running() || self.draw.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut seq = TaskSeq::default();
        let mut tasks = Tasks::default();

        let first = seq.next_id();
        let second = seq.next_id();
        tasks.draw.start(second);

        assert!(!tasks.draw.finish_if_active(first));
        assert!(tasks.draw.is_running());
        assert!(tasks.draw.finish_if_active(second));
        assert!(!tasks.is_any_running());
    }
}
