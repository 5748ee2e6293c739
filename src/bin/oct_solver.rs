use cipher_solvers::app::runner;
use cipher_solvers::{CaesarSolver, Chain, OctalDecoder};

// 八進位解碼後直接交給凱撒解題器
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let decoder = Chain::new(OctalDecoder, CaesarSolver::new());
    runner::run_solver(decoder, std::env::args_os()).await
}
