use fruit_ripeness::library::logger::impl_console::LoggerConsole;
use fruit_ripeness::library::logger::interface::Logger;
use fruit_ripeness::{Config, FruitPipeline};
use std::sync::Arc;
use tokio::task::JoinSet;

const USAGE: &str =
    "usage: fruit-ripeness [--model <path>] [--catalog <path>] [--history <n>] [--synthetic] <image>...";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, images) = Config::default()
        .with_args(std::env::args().skip(1))
        .map_err(|e| format!("{}\n{}", e, USAGE))?;

    if images.is_empty() {
        return Err(USAGE.into());
    }

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let pipeline = Arc::new(FruitPipeline::load(config, logger.clone()));

    let results = pipeline.subscribe();
    let printer = std::thread::spawn(move || {
        for result in results {
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Could not render result: {}", e),
            }
        }
    });

    // Each image is its own task; results arrive in completion order.
    let mut tasks = JoinSet::new();
    for path in images {
        let pipeline = Arc::clone(&pipeline);
        tasks.spawn(async move {
            let outcome = match tokio::fs::read(&path).await {
                Ok(bytes) => pipeline
                    .classify_bytes(&bytes, Some(path.as_str()))
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            (path, outcome)
        });
    }

    let (mut classified, mut failures) = (0, 0);
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(_))) => classified += 1,
            Ok((path, Err(e))) => {
                failures += 1;
                let _ = logger.error(&format!("{}: {}", path, e));
            }
            Err(e) => {
                failures += 1;
                let _ = logger.error(&format!("Task failed: {}", e));
            }
        }
    }

    let history = pipeline.history().snapshot();
    let _ = logger.info(&format!(
        "{} classified, {} failed, {} kept in history",
        classified,
        failures,
        history.len()
    ));
    for result in &history {
        let _ = logger.info(&result.summary());
    }

    drop(pipeline);
    let _ = printer.join();

    Ok(())
}
