use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = fskit::cli::parse();
    app::run(args)
}
