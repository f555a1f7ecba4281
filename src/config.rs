//! Command-line options

use crate::dataset::InitOrder;
use crate::engine::{ConfigError, Variant};

/// Options for one run of the visualizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub variant: Variant,
    /// Start with the large preset instead of the small one
    pub large: bool,
    pub order: InitOrder,
    /// Fixed RNG seed for reproducible datasets
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            variant: Variant::Bubble,
            large: false,
            order: InitOrder::Random,
            seed: None,
        }
    }
}

impl Config {
    /// Parse the arguments that follow the program name
    pub fn from_args(args: &[String]) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        let mut variant_seen = false;
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--large" => config.large = true,
                "--reverse" => config.order = InitOrder::ReverseSorted,
                "--seed" => {
                    let value = iter.next().ok_or_else(|| ConfigError::InvalidArgument {
                        arg: arg.clone(),
                        reason: "expected a number after --seed".to_string(),
                    })?;
                    let seed = value.parse().map_err(|_| ConfigError::InvalidArgument {
                        arg: value.clone(),
                        reason: "seed must be a non-negative integer".to_string(),
                    })?;
                    config.seed = Some(seed);
                }
                flag if flag.starts_with('-') => {
                    return Err(ConfigError::InvalidArgument {
                        arg: flag.to_string(),
                        reason: "unknown option".to_string(),
                    });
                }
                name => {
                    if variant_seen {
                        return Err(ConfigError::InvalidArgument {
                            arg: name.to_string(),
                            reason: "only one algorithm may be given".to_string(),
                        });
                    }
                    config.variant =
                        Variant::from_name(name).ok_or_else(|| ConfigError::UnknownAlgorithm {
                            name: name.to_string(),
                        })?;
                    variant_seen = true;
                }
            }
        }

        Ok(config)
    }

    /// Element count for the chosen preset
    pub fn size(&self) -> usize {
        if self.large {
            self.variant.large_size()
        } else {
            self.variant.small_size()
        }
    }
}

/// Help text printed on a bad command line
pub fn usage(program: &str) -> String {
    let names: Vec<&str> = Variant::ALL.iter().map(|v| v.name()).collect();
    let mut text = format!("Usage: {} [ALGORITHM] [--large] [--reverse] [--seed N]\n\n", program);
    text.push_str(&format!("Algorithms: {}\n\n", names.join(", ")));
    text.push_str("Keys: n new, z size, d draw, r/space run, s/right step, enter finish,\n");
    text.push_str("      i insert/push, x remove/pop, p peek, v next algorithm, q quit");
    text
}
