use optcheck::core::demo;
use optcheck::utils::logger;

fn main() {
    logger::init_cli_logger(false);

    match demo::run() {
        Ok(verdict) => print!("{}", verdict),
        Err(e) => {
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
