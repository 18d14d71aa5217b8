mod content;
mod random;

#[allow(unused)]
pub use content::*;
#[allow(unused)]
pub use random::*;

#[allow(unused)]
pub static SEED: u64 = 0x3a3f7af8085da7a2;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
