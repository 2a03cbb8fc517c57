fn main() -> anyhow::Result<()> {
    amiga_catalog::cli::run_cli()
}
