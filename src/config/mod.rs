use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub username: String,
    pub password: String,
    pub input_dir: String,
    pub mapping_file: String,
    pub sql_output: String,
    #[serde(default = "default_entry_delay_ms")]
    pub entry_delay_ms: u64,
}

fn default_entry_delay_ms() -> u64 {
    50
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            username: "admin".to_string(),
            password: String::new(),
            input_dir: dir.join("schedules").to_string_lossy().to_string(),
            mapping_file: dir.join("staff-mapping.json").to_string_lossy().to_string(),
            sql_output: dir.join("schedule-import.sql").to_string_lossy().to_string(),
            entry_delay_ms: default_entry_delay_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("dienstplan-import")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".dienstplan-import")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dienstplan-import.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration file and input directory
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&config.input_dir)?;
        println!("✅ Input dir:   {:?}", config.input_dir);

        Ok(())
    }
}
