use cipher_solvers::app::runner;
use cipher_solvers::CaesarSolver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    runner::run_solver(CaesarSolver::new(), std::env::args_os()).await
}
