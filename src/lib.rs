pub mod config;
pub mod detection;
pub mod events;
pub mod models;
pub mod output;

pub use config::{AspectRatioBand, ColorRange, PipelineConfig};
pub use detection::{NoteDetector, OutputMode, SegmenterKind};
pub use events::{ConsoleSink, Event, EventSink, NullSink};
pub use models::{BoundingBox, DetectedNote, Point2f, Quad, RotatedRect};
