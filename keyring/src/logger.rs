use env_logger::Env;

/// Installs the process-wide logger. Binaries embedding the keyring call this once at startup
/// so the codec's and keyring's `log` records reach stderr. `RUST_LOG` overrides the `info` default.
/// Calling it again is a no-op.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
}
