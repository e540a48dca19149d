use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FramecutError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error(
        "Frame {index} of '{kind}' starts at x={left}, beyond the sheet width of {sheet_width}px"
    )]
    FrameOutOfRange {
        kind: String,
        index: u32,
        left: u32,
        sheet_width: u32,
    },
}
