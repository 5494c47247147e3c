//! Record-stream plumbing between a driver (upstream), a handler and a
//! sink (downstream).
//!
//! Everything here is synchronous: the driver hands one row at a time to
//! the handler, which finishes with it before the next one arrives.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::PluginError;
use crate::schema::Schema;
use crate::value::Row;

/// Downstream consumer of output rows.
pub trait RecordSink: Send {
    /// Receives the output schema, once, before any row.
    fn init(&mut self, schema: &Schema) -> Result<(), PluginError>;

    /// Takes ownership of one output row.
    fn push(&mut self, row: Row) -> Result<(), PluginError>;

    /// Progress of the upstream, in `[0, 1]`.
    fn update_progress(&mut self, _fraction: f64) {}

    /// End of stream. Called at most once by [`OutputStream`].
    fn close(&mut self) -> Result<(), PluginError>;
}

/// Upstream-facing side of a transformation.
pub trait RecordHandler {
    /// Stream is opening with `schema`. An error aborts the stream: no row
    /// will be delivered.
    fn on_open(&mut self, schema: &Schema) -> Result<(), PluginError>;

    fn on_row(&mut self, row: &Row) -> Result<(), PluginError>;

    fn on_progress(&mut self, fraction: f64);

    /// Upstream finished. Must reach downstream exactly once.
    fn on_close(&mut self) -> Result<(), PluginError>;
}

/// Upstream producer of rows.
pub trait RecordSource {
    fn schema(&self) -> &Schema;

    fn next_row(&mut self) -> Option<Result<Row, PluginError>>;

    /// Fraction of the input consumed so far, when known.
    fn progress(&self) -> Option<f64> {
        None
    }
}

/// Wraps a [`RecordSink`] with the lifecycle rules handlers rely on:
/// schema announced once, fresh row buffers, close exactly once.
pub struct OutputStream {
    sink: Box<dyn RecordSink>,
    schema: Option<Schema>,
    closed: bool,
}

impl OutputStream {
    pub fn new(sink: Box<dyn RecordSink>) -> Self {
        Self { sink, schema: None, closed: false }
    }

    pub fn init(&mut self, schema: Schema) -> Result<(), PluginError> {
        if self.schema.is_some() {
            return Err(PluginError::logic("output schema already announced"));
        }
        self.sink.init(&schema)?;
        self.schema = Some(schema);
        Ok(())
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// A fresh all-null row shaped like the output schema.
    pub fn record(&self) -> Result<Row, PluginError> {
        self.schema
            .as_ref()
            .map(|s| Row::nulls(s.len()))
            .ok_or_else(|| PluginError::logic("output not initialized"))
    }

    pub fn push(&mut self, row: Row) -> Result<(), PluginError> {
        if self.closed {
            return Err(PluginError::logic("push after close"));
        }
        self.sink.push(row)
    }

    pub fn update_progress(&mut self, fraction: f64) {
        self.sink.update_progress(fraction);
    }

    /// Close downstream. Later calls are no-ops.
    pub fn close(&mut self) -> Result<(), PluginError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.sink.close()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Run a whole stream: open, every row in order, close.
///
/// Progress is forwarded whenever the source's fraction advances by at
/// least one percent. Returns the number of rows delivered.
pub fn drive(
    source: &mut dyn RecordSource,
    handler: &mut dyn RecordHandler,
) -> Result<u64, PluginError> {
    handler.on_open(source.schema())?;

    let mut rows = 0u64;
    let mut reported = 0.0f64;
    while let Some(row) = source.next_row() {
        let row = row.map_err(|e| e.with_context(format!("row {}", rows + 1)))?;
        handler
            .on_row(&row)
            .map_err(|e| e.with_context(format!("row {}", rows + 1)))?;
        rows += 1;

        if let Some(fraction) = source.progress() {
            if fraction - reported >= 0.01 {
                reported = fraction;
                handler.on_progress(fraction);
            }
        }
    }

    handler.on_close()?;
    Ok(rows)
}

/// In-memory source over prepared rows.
pub struct VecSource {
    schema: Schema,
    rows: std::vec::IntoIter<Row>,
    total: usize,
}

impl VecSource {
    pub fn new(schema: Schema, rows: Vec<Row>) -> Self {
        let total = rows.len();
        Self { schema, rows: rows.into_iter(), total }
    }
}

impl RecordSource for VecSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn next_row(&mut self) -> Option<Result<Row, PluginError>> {
        self.rows.next().map(Ok)
    }

    fn progress(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some((self.total - self.rows.len()) as f64 / self.total as f64)
    }
}

/// What a [`MemorySink`] has seen.
#[derive(Debug, Default)]
pub struct MemoryState {
    pub schema: Option<Schema>,
    pub rows: Vec<Row>,
    pub progress: Vec<f64>,
    pub closes: u32,
}

/// Sink collecting everything in memory; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    state: Arc<Mutex<MemoryState>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the collected state.
    pub fn inspect<T>(&self, f: impl FnOnce(&MemoryState) -> T) -> T {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn with<T>(&self, f: impl FnOnce(&mut MemoryState) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

impl RecordSink for MemorySink {
    fn init(&mut self, schema: &Schema) -> Result<(), PluginError> {
        self.with(|s| s.schema = Some(schema.clone()));
        Ok(())
    }

    fn push(&mut self, row: Row) -> Result<(), PluginError> {
        self.with(|s| s.rows.push(row));
        Ok(())
    }

    fn update_progress(&mut self, fraction: f64) {
        self.with(|s| s.progress.push(fraction));
    }

    fn close(&mut self) -> Result<(), PluginError> {
        self.with(|s| s.closes += 1);
        Ok(())
    }
}
