use cipher_solvers::core::key_shift;
use cipher_solvers::utils::logger;
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "key-shift")]
#[command(about = "Undo a repeating-key additive shift")]
struct Args {
    /// Encrypted text
    #[arg(allow_hyphen_values = true)]
    encrypted: String,

    /// Key whose letters give the per-character shift
    #[arg(allow_hyphen_values = true)]
    key: String,
}

fn print_usage() {
    println!("This program requires two strings as input:");
    println!("key-shift \"encrypted string\" \"keystring\"");
}

fn main() -> ExitCode {
    logger::init_cli_logger(None);

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            tracing::debug!("Argument error: {}", e.kind());
            print_usage();
            return ExitCode::SUCCESS;
        }
    };

    println!(
        "Solving cyphertext '{}' with key '{}'.",
        args.encrypted, args.key
    );

    match key_shift::decrypt(&args.encrypted, &args.key) {
        Ok(decrypted) => {
            println!("{}", decrypted);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            ExitCode::FAILURE
        }
    }
}
