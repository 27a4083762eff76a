//! Console progress reporting for dataset passes.

use indicatif::{ProgressBar, ProgressStyle};

/// Styled bar over a dataset pass of known length.
pub fn dataset_bar(len: u64, message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("progress template is valid")
            .progress_chars("=>-"),
    );
    pb.set_message(message);
    pb
}
