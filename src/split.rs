use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::catalog::{ANIMATIONS, AnimationSpec, ENEMY_IDS};
use crate::cli::CompressionLevel;
use crate::frame::{locate, remove_background};
use crate::output::save_frame_image;
use crate::sheet::SpriteSheet;

#[derive(Debug, Clone, Copy, Default)]
pub struct SplitOptions {
    pub compress: Option<CompressionLevel>,
}

/// Split every cataloged animation sheet of every cataloged entity.
///
/// Missing input sheets are warnings, not failures; anything else
/// (undecodable sheet, unwritable output directory, save error) aborts
/// the whole run.
pub fn run_batch(root: &Path, opts: SplitOptions) -> Result<()> {
    for enemy_id in ENEMY_IDS {
        info!("Processing sprites for enemy type {enemy_id}...");
        process_enemy(root, enemy_id, opts)?;
    }
    Ok(())
}

fn process_enemy(root: &Path, enemy_id: &str, opts: SplitOptions) -> Result<()> {
    for anim in ANIMATIONS {
        let input = root.join(enemy_id).join(format!("{}.png", anim.sheet_name));
        if !input.exists() {
            warn!("Missing sheet {}, skipping", input.display());
            continue;
        }

        let out_dir = root
            .join(format!("enemy{enemy_id}"))
            .join(anim.output_name);
        fs::create_dir_all(&out_dir).with_context(|| {
            format!("failed to create output directory {}", out_dir.display())
        })?;

        let sheet = SpriteSheet::load(&input)?;
        info!(
            "Processing {}: {} ({}x{})",
            anim.kind.as_str(),
            input.display(),
            sheet.width(),
            sheet.height()
        );
        split_sheet(&sheet, anim, &out_dir, opts)?;
    }
    Ok(())
}

/// Crop, key out the background, and save every frame of one sheet
pub fn split_sheet(
    sheet: &SpriteSheet,
    anim: &AnimationSpec,
    out_dir: &Path,
    opts: SplitOptions,
) -> Result<()> {
    for index in 0..anim.frames {
        // the animation's own frame count doubles as the fallback column
        // count, so an unregistered layout never assumes a different one
        let frame_box = locate(
            anim.kind.as_str(),
            index,
            sheet.width(),
            sheet.height(),
            anim.frames,
        )?;
        let frame = remove_background(&sheet.crop(frame_box));

        let path = out_dir.join(frame_file_name(index));
        save_frame_image(&frame, &path, opts.compress)?;
        info!(
            "Frame {} saved: {} ({}, {}, {}, {})",
            index + 1,
            path.display(),
            frame_box.left,
            frame_box.top,
            frame_box.right,
            frame_box.bottom
        );
    }
    Ok(())
}

/// Output file name for a zero-based frame index; files are numbered from 1
pub fn frame_file_name(index: u32) -> String {
    format!("frame{}.png", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_files_numbered_from_one() {
        assert_eq!(frame_file_name(0), "frame1.png");
        assert_eq!(frame_file_name(5), "frame6.png");
    }

    #[test]
    fn test_input_paths_follow_sheet_names() {
        let input = Path::new("sprites")
            .join("2")
            .join(format!("{}.png", ANIMATIONS[2].sheet_name));
        assert_eq!(input, Path::new("sprites/2/Attack1.png"));
    }
}
