use crate::catalog::AnimationKind;
use crate::error::FramecutError;

use super::FrameBox;

/// Column count assumed for sheets whose kind has no registered layout.
/// The original tooling hardcoded this; callers that know the real frame
/// count should pass it instead.
pub const DEFAULT_FALLBACK_FRAMES: u32 = 6;

/// Resolve the crop region for one frame of a single-row sheet.
///
/// Resolution order:
/// 1. a recognized kind with an explicit box list, when `index` is within
///    the list, returns the authored box verbatim;
/// 2. a recognized kind otherwise computes the box from its strip
///    parameters, clamping `right` to the sheet width;
/// 3. an unrecognized kind divides the sheet into `fallback_frames` equal
///    columns.
///
/// A frame that would start at or past the right edge of the sheet (or
/// contain no pixels at all) is a contract violation and returns
/// [`FramecutError::FrameOutOfRange`] rather than a degenerate box.
pub fn locate(
    kind: &str,
    index: u32,
    sheet_width: u32,
    sheet_height: u32,
    fallback_frames: u32,
) -> Result<FrameBox, FramecutError> {
    match AnimationKind::parse(kind) {
        Some(known) => {
            let layout = known.layout();
            if let Some(frames) = layout.explicit_frames()
                && let Some(frame) = frames.get(index as usize)
            {
                return Ok(*frame);
            }

            let strip = layout.strip();
            let left = (strip.frame_width + strip.spacing) * index + strip.offset_x;
            let right = (left + strip.frame_width).min(sheet_width);
            bounded(kind, index, left, right, sheet_width, sheet_height)
        }
        None => {
            let column_width = sheet_width / fallback_frames.max(1);
            let left = column_width * index;
            let right = (left + column_width).min(sheet_width);
            bounded(kind, index, left, right, sheet_width, sheet_height)
        }
    }
}

fn bounded(
    kind: &str,
    index: u32,
    left: u32,
    right: u32,
    sheet_width: u32,
    sheet_height: u32,
) -> Result<FrameBox, FramecutError> {
    if left >= sheet_width || right == left {
        return Err(FramecutError::FrameOutOfRange {
            kind: kind.to_string(),
            index,
            left,
            sheet_width,
        });
    }
    Ok(FrameBox::new(left, 0, right, sheet_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_entry_returned_verbatim() {
        let b = locate("idle", 2, 252, 42, DEFAULT_FALLBACK_FRAMES).unwrap();
        assert_eq!(b, FrameBox::new(84, 0, 126, 42));
    }

    #[test]
    fn test_explicit_first_frame() {
        let b = locate("hurt", 0, 126, 42, DEFAULT_FALLBACK_FRAMES).unwrap();
        assert_eq!(b, FrameBox::new(0, 0, 42, 42));
    }

    #[test]
    fn test_explicit_overflow_falls_back_to_strip() {
        // hurt's list has 3 entries; index 5 uses the 42px strip formula
        let b = locate("hurt", 5, 252, 42, DEFAULT_FALLBACK_FRAMES).unwrap();
        assert_eq!(b, FrameBox::new(210, 0, 252, 42));
    }

    #[test]
    fn test_explicit_overflow_past_sheet_is_an_error() {
        let err = locate("hurt", 5, 126, 42, DEFAULT_FALLBACK_FRAMES).unwrap_err();
        match err {
            FramecutError::FrameOutOfRange {
                index,
                left,
                sheet_width,
                ..
            } => {
                assert_eq!(index, 5);
                assert_eq!(left, 210);
                assert_eq!(sheet_width, 126);
            }
            other => panic!("expected FrameOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_uniform_frames_are_contiguous() {
        for i in 0..5 {
            let a = locate("walk", i, 600, 42, DEFAULT_FALLBACK_FRAMES).unwrap();
            let b = locate("walk", i + 1, 600, 42, DEFAULT_FALLBACK_FRAMES).unwrap();
            assert_eq!(a.right, b.left);
        }
    }

    #[test]
    fn test_uniform_last_frame_clamped_to_sheet_width() {
        let b = locate("walk", 14, 600, 42, DEFAULT_FALLBACK_FRAMES).unwrap();
        assert_eq!(b, FrameBox::new(588, 0, 600, 42));
        assert!(b.width() < 42);
    }

    #[test]
    fn test_uniform_index_past_sheet_is_an_error() {
        assert!(locate("walk", 15, 600, 42, DEFAULT_FALLBACK_FRAMES).is_err());
    }

    #[test]
    fn test_unrecognized_kind_uses_fallback_columns() {
        let b = locate("idle2", 1, 300, 42, DEFAULT_FALLBACK_FRAMES).unwrap();
        assert_eq!(b, FrameBox::new(50, 0, 100, 42));
    }

    #[test]
    fn test_fallback_column_count_is_caller_controlled() {
        let b = locate("idle2", 1, 300, 42, 3).unwrap();
        assert_eq!(b, FrameBox::new(100, 0, 200, 42));
    }

    #[test]
    fn test_boxes_never_exceed_sheet_bounds() {
        for kind in ["idle", "walk", "run", "attack", "hurt", "death", "jump", "idle2"] {
            for i in 0..6 {
                if let Ok(b) = locate(kind, i, 252, 42, DEFAULT_FALLBACK_FRAMES) {
                    assert!(b.fits_within(252, 42), "{kind}[{i}] = {b:?}");
                }
            }
        }
    }
}
