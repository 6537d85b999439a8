fn main() -> anyhow::Result<()> {
    engtext::cli::run_cli()
}
