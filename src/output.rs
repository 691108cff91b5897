use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::events::{Event, EventSink};
use crate::models::DetectedNote;

/// Writes each note as `note_<n>.<ext>` (1-based, in the order given) into
/// `dir`. The directory is created if missing; an existing directory is
/// reused as-is.
pub fn save_notes(
    dir: &Path,
    notes: &[DetectedNote],
    extension: &str,
    sink: &dyn EventSink,
) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut paths = Vec::with_capacity(notes.len());
    for (i, note) in notes.iter().enumerate() {
        let path = dir.join(format!("note_{}.{}", i + 1, extension));
        note.image
            .save(&path)
            .with_context(|| format!("failed to save {}", path.display()))?;
        sink.emit(&Event::NoteSaved {
            index: i + 1,
            path: path.clone(),
        });
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NullSink;
    use image::{Rgb, RgbImage};

    fn note(side: u32) -> DetectedNote {
        DetectedNote {
            image: RgbImage::from_pixel(side, side, Rgb([255, 200, 0])),
            anchor: (0, 0),
        }
    }

    #[test]
    fn filenames_are_sequential_and_one_based() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("notes");
        let paths = save_notes(&out, &[note(10), note(12)], "png", &NullSink).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("note_1.png"));
        assert!(paths[1].ends_with("note_2.png"));
        assert!(paths.iter().all(|p| p.exists()));
    }

    #[test]
    fn existing_directory_is_reused() {
        let dir = tempfile::TempDir::new().unwrap();
        save_notes(dir.path(), &[note(8)], "png", &NullSink).unwrap();
        // Second run into the same directory must not fail.
        save_notes(dir.path(), &[note(8)], "png", &NullSink).unwrap();
    }

    #[test]
    fn zero_notes_is_success() {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = save_notes(dir.path(), &[], "png", &NullSink).unwrap();
        assert!(paths.is_empty());
    }
}
