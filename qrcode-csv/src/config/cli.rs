//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use label_render::render::{
    DEFAULT_BOTTOM_PADDING, DEFAULT_BOX_SIZE, DEFAULT_SIDE_PADDING, DEFAULT_TEXT_SIZE,
    DEFAULT_TOP_PADDING,
};

pub const DEFAULT_TEXT_FONT: &str = "Arial";
pub const DEFAULT_FRONT_COLOR: &str = "black";
pub const DEFAULT_BACKGROUND_COLOR: &str = "transparent";
pub const DEFAULT_MIN_VERSION: i16 = 1;
pub const DEFAULT_ERROR_CORRECTION: &str = "H";

/// Generate QR code images from a list of labels.
#[derive(Parser, Debug, Clone)]
#[command(name = "qrcode-csv", version)]
pub struct Cli {
    /// Path to a file with one label per line
    pub input: PathBuf,

    /// Directory to save QR codes (defaults to a directory named after the input file)
    pub output_dir: Option<PathBuf>,

    /// Same as the positional output directory
    #[arg(long = "output", value_name = "DIR", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Size of the QR code boxes in pixels
    #[arg(long, default_value_t = DEFAULT_BOX_SIZE)]
    pub box_size: u32,

    /// Padding on top of the QR code in pixels
    #[arg(long, default_value_t = DEFAULT_TOP_PADDING)]
    pub top_padding: u32,

    /// Padding on the sides of the QR code in pixels
    #[arg(long, default_value_t = DEFAULT_SIDE_PADDING)]
    pub side_padding: u32,

    /// Padding under the QR code in pixels
    #[arg(long, default_value_t = DEFAULT_BOTTOM_PADDING)]
    pub bottom_padding: u32,

    /// Size of the font used to write the text under the QR code
    #[arg(long, default_value_t = DEFAULT_TEXT_SIZE)]
    pub text_size: u32,

    /// Name or path of the font used to write the text under the QR code
    #[arg(long, default_value = DEFAULT_TEXT_FONT)]
    pub text_font: String,

    /// Front color of the image
    #[arg(long, default_value = DEFAULT_FRONT_COLOR)]
    pub front_color: String,

    /// Background color of the image, or "transparent"
    #[arg(long, default_value = DEFAULT_BACKGROUND_COLOR)]
    pub background_color: String,

    /// Minimum version of the QR code, 1-40, can be greater if the text is too long
    #[arg(long, default_value_t = DEFAULT_MIN_VERSION, allow_negative_numbers = true)]
    pub min_version: i16,

    /// Error correction level (L, M, Q or H)
    #[arg(long, default_value = DEFAULT_ERROR_CORRECTION)]
    pub error_correction: String,

    /// Read labels from the first field of each CSV row
    #[arg(long)]
    pub csv: bool,

    /// Do not print the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}
