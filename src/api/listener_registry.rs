use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::interaction::{ChartEventKind, ChartEventListener};

use super::LineChart;

impl LineChart {
    /// Registers a listener with a unique identifier and returns that id.
    pub fn register_listener(
        &mut self,
        listener: Box<dyn ChartEventListener>,
    ) -> ChartResult<String> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(ChartError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.has_listener(&listener_id) {
            return Err(ChartError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        debug!(listener_id = %listener_id, "registered chart listener");
        self.listeners.push(listener);
        Ok(listener_id)
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        if let Some(position) = self
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        {
            self.listeners.remove(position);
            debug!(listener_id, "unregistered chart listener");
            return true;
        }
        false
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Ids of the listeners notified about `kind`, in registration order.
    #[must_use]
    pub fn listeners_for(&self, kind: ChartEventKind) -> Vec<&str> {
        self.listeners
            .iter()
            .filter(|listener| listener.accepts(kind))
            .map(|listener| listener.id())
            .collect()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners
            .iter()
            .any(|listener| listener.id() == listener_id)
    }
}
