use super::generator::BatchGenerator;

pub fn print_batch_info<B>(generator: &BatchGenerator<B>) {
    println!("Batch Information:");
    println!("------------------");
    println!("Dataset size: {}", generator.dataset_size());
    println!("Batch size: {}", generator.batch_size());
    println!("Batches: {}", generator.len());
    if let Some(last) = generator.batches().last() {
        println!("Last batch size: {}", last.len());
    }
    println!("Shuffle seed: {:?}", generator.shuffle_seed());
}
