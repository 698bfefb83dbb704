use std::rc::Rc;
use web_time::Instant;

/// One-shot reset deadline. At most one pends per widget; arming a new one
/// replaces the old (last call wins). The generation stamp lets a stale
/// fire be detected and ignored if the session it targeted is gone.
pub(crate) struct PendingReset {
    pub deadline: Instant,
    pub generation: u64,
    pub end_block: Option<Rc<dyn Fn()>>,
}
