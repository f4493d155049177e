use trine_engine::device::GpuInit;
use trine_engine::logging::{LoggingConfig, init_logging};
use trine_engine::window::{Runtime, RuntimeConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("trine {}", env!("CARGO_PKG_VERSION"));

    Runtime::run(RuntimeConfig::default(), GpuInit::default())
}
