pub fn run() -> anyhow::Result<()> {
    println!("guestsense {}", env!("CARGO_PKG_VERSION"));
    println!("Guest feedback synthesis: insights, action tickets and draft replies");
    Ok(())
}
