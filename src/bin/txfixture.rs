use tracing_subscriber::EnvFilter;

fn init_logger() {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        // 未设置 RUST_LOG 时只输出本 crate 的警告
        None => EnvFilter::new(format!("{}=warn", env!("CARGO_CRATE_NAME"))),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logger();
    if let Err(err) = txfixture::builder::run(std::env::args_os()) {
        eprintln!("生成示例文件时出错: {err:#}");
        std::process::exit(1);
    }
}
