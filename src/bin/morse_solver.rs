use cipher_solvers::app::runner;
use cipher_solvers::MorseDecoder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    runner::run_solver(MorseDecoder, std::env::args_os()).await
}
