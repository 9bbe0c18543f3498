//! Label generation services: input reading, the render pipeline and
//! progress reporting.

pub mod generate;
pub mod input;
pub mod progress;

pub use generate::{GenerateError, Label, generate, prepare_labels, run};
pub use input::{InputFormat, RawLabel, read_labels};
pub use progress::{ConsoleProgress, NoProgress, ProgressObserver};
