use std::error::Error;

use gpu_graph::cli::run_gpu_graph;

fn main() -> Result<(), Box<dyn Error>> {
    run_gpu_graph(std::env::args().skip(1))
}
