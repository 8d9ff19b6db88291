use chrono::Offset;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub catalog_path: PathBuf,
    pub input_size: u32,
    pub history_capacity: usize,
    pub force_synthetic: bool,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/fruit_ripeness.onnx"),
            catalog_path: PathBuf::from("data/fruit_catalog.json"),
            input_size: 224,
            history_capacity: 20,
            force_synthetic: false,
            logger_timezone: utc(),
        }
    }
}

impl Config {
    /// Applies command-line overrides and returns the remaining positional arguments.
    pub fn with_args<I>(mut self, args: I) -> Result<(Self, Vec<String>), String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut positional = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--model" => self.model_path = PathBuf::from(required(&mut args, &arg)?),
                "--catalog" => self.catalog_path = PathBuf::from(required(&mut args, &arg)?),
                "--history" => {
                    let value = required(&mut args, &arg)?;
                    self.history_capacity = match value.parse::<usize>() {
                        Ok(capacity) if capacity > 0 => capacity,
                        _ => return Err(format!("--history expects a positive number, got '{}'", value)),
                    };
                }
                "--synthetic" => self.force_synthetic = true,
                flag if flag.starts_with("--") => return Err(format!("unknown flag '{}'", flag)),
                _ => positional.push(arg),
            }
        }

        Ok((self, positional))
    }
}

fn required(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{} expects a value", flag))
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
