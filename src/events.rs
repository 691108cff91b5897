use std::path::PathBuf;

/// Progress notifications emitted by the pipeline. The library never prints;
/// callers attach a sink and render events however they like.
#[derive(Debug, Clone)]
pub enum Event {
    Loaded { width: u32, height: u32 },
    Segmented { strategy: &'static str, foreground: u64 },
    Cleaned,
    ContoursFound { count: usize },
    RegionsFiltered { kept: usize, total: usize },
    Deduplicated { kept: usize, total: usize },
    NoteSaved { index: usize, path: PathBuf },
}

pub trait EventSink {
    fn emit(&self, event: &Event);
}

/// Sink that discards everything.
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &Event) {}
}

/// Sink that writes one line per event to stdout.
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&self, event: &Event) {
        match event {
            Event::Loaded { width, height } => {
                println!("Image loaded: {}x{}", width, height);
            }
            Event::Segmented { strategy, foreground } => {
                println!("Segmented ({}): {} foreground pixels", strategy, foreground);
            }
            Event::Cleaned => println!("Mask cleaned"),
            Event::ContoursFound { count } => println!("Found {} contours", count),
            Event::RegionsFiltered { kept, total } => {
                println!("Kept {} of {} regions after shape filtering", kept, total);
            }
            Event::Deduplicated { kept, total } => {
                println!("Kept {} of {} boxes after overlap suppression", kept, total);
            }
            Event::NoteSaved { index, path } => {
                println!("Saved note {}: {}", index, path.display());
            }
        }
    }
}
