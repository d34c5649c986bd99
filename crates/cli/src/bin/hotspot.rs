use anyhow::Result;

fn main() -> Result<()> {
    hotspot_cli::main_entry()
}
