use std::path::PathBuf;

pub struct Config {
    pub input:             PathBuf,
    pub output:            Option<PathBuf>,
    pub print_tree:        bool,
    pub progress_interval: usize,
    pub verbose:           bool,
}
