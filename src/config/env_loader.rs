use crate::config::model::Config;
use crate::page::PageConfig;
use std::env;
use std::path::PathBuf;

pub fn load_config() -> Config {
    let page_path = load_path_config("TEACHING_PAGE", "teaching.html");

    Config {
        page: PageConfig::new(page_path),
    }
}

fn load_path_config(name: &str, default: &str) -> PathBuf {
    env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
