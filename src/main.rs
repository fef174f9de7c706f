fn main() -> anyhow::Result<()> {
    env_logger::init();

    match phi_plot::cli::run(std::env::args_os().skip(1)) {
        Ok(_) => Ok(()),
        Err(err) => match err.downcast::<clap::Error>() {
            Ok(usage) => usage.exit(),
            Err(err) => Err(err),
        },
    }
}
