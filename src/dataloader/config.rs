/// Options controlling how a generator slices a dataset.
///
/// `shuffle_seed` fixes the permutation when set; otherwise a fresh seed
/// is drawn at construction and recorded on the generator.
#[derive(Clone, Copy, Debug)]
pub struct BatchConfig {
    pub batch_size: usize,
    pub shuffle: bool,
    pub shuffle_seed: Option<u64>,
    pub drop_last: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 32,
            shuffle: true,
            shuffle_seed: None,
            drop_last: false,
        }
    }
}
