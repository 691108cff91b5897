use crate::models::BoundingBox;

/// Greedy non-maximum suppression over axis-aligned boxes.
///
/// Indices are sorted by `y2` ascending; the largest-`y2` remaining box is
/// kept, and every other remaining box whose intersection with it exceeds
/// `overlap_threshold` as a fraction of that box's OWN area is dropped.
/// The measure is deliberately asymmetric: a small box swallowed by a kept
/// box scores near 1.0 even when the kept box is much larger. Equal `y2`
/// values fall back to the stable sort order.
pub fn suppress(boxes: &[BoundingBox], overlap_threshold: f32) -> Vec<BoundingBox> {
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by_key(|&i| boxes[i].y2);

    let mut kept = Vec::new();
    while let Some(idx) = order.pop() {
        kept.push(idx);
        order.retain(|&other| {
            let own = boxes[other].area();
            if own <= 0.0 {
                return false;
            }
            boxes[idx].intersection_area(&boxes[other]) / own <= overlap_threshold
        });
    }

    // Back to discovery order so downstream numbering stays deterministic.
    kept.sort_unstable();
    kept.into_iter().map(|i| boxes[i]).collect()
}
