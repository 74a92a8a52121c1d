use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::instrument;

use crate::command::RawEvent;

use super::{EventResult, LedgerError, LedgerProcessor};

/// Cloneable handle that serializes all access to one processor.
///
/// Each call holds the lock for the whole operation, so the reads and writes of
/// an event never interleave with another event or with a reset.
pub struct SharedLedger<P> {
    inner: Arc<Mutex<P>>,
}

impl<P> Clone for SharedLedger<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> SharedLedger<P>
where
    P: LedgerProcessor,
{
    pub fn new(processor: P) -> Self {
        Self {
            inner: Arc::new(Mutex::new(processor)),
        }
    }

    #[instrument(skip_all, fields(kind = %event.kind))]
    pub fn process(&self, event: RawEvent) -> Result<EventResult, LedgerError> {
        self.inner.lock().process(event)
    }

    pub fn balance(&self, id: &str) -> Option<Decimal> {
        self.inner.lock().balance(id)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }
}
